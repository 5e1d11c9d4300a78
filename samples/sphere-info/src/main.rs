use std::process::ExitCode;

use clap::Parser;

mod cli;
mod report;

use cli::Cli;

pub fn main() -> ExitCode {
    let cli = Cli::parse();
    cli::initialize_tracing(&cli.log_filter, cli.log_format);

    let config = cli.sphere_config();
    tracing::debug!(?config, "building sphere");
    match octasphere::create(&config) {
        Ok(sphere) => {
            let report = report::Report::of(&sphere);
            tracing::info!(
                vertices = report.vertices,
                polygons = report.polygons,
                "built sphere"
            );
            if report.inward_polygons > 0 {
                tracing::warn!(count = report.inward_polygons, "found inward-facing triangles");
            }
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(%e, "couldn't build sphere");
            ExitCode::FAILURE
        }
    }
}
