use octasphere::{MidpointStrategy, SphereConfig};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum LogFormat {
    Compact,
    Full,
    Pretty,
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Compact => f.write_str("compact"),
            LogFormat::Full => f.write_str("full"),
            LogFormat::Pretty => f.write_str("pretty"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

/// Build a sphere and print statistics about it
#[derive(Debug, clap::Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Logging output filters; comma-separated
    #[arg(
        short,
        long,
        default_value = "warn,octasphere=info,sphere_info=info",
        env = "SPHERE_INFO_LOG_FILTER"
    )]
    pub log_filter: String,
    /// Logging output format
    #[arg(long, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
    /// Radius of the finished sphere
    #[arg(short, long, default_value_t = octasphere::DEFAULT_SCALE)]
    pub scale: f64,
    /// Number of times the octahedron is subdivided
    #[arg(short, long, default_value_t = octasphere::DEFAULT_RECURSION_DEPTH, allow_negative_numbers = true)]
    pub depth: i64,
    /// Palette index for every triangle, or -1 for a different color per triangle
    #[arg(short, long, default_value_t = octasphere::DEFAULT_COLOR, allow_negative_numbers = true)]
    pub color: i64,
    /// Texture to associate with the sphere
    #[arg(short, long, default_value = "")]
    pub texture_url: String,
    /// Share edge midpoints between neighboring triangles instead of duplicating them
    #[arg(long)]
    pub shared_edges: bool,
}

impl Cli {
    pub fn sphere_config(&self) -> SphereConfig {
        SphereConfig {
            scale: self.scale,
            recursion_depth: self.depth,
            color: self.color,
            texture_url: self.texture_url.clone(),
            midpoints: if self.shared_edges {
                MidpointStrategy::SharedEdges
            } else {
                MidpointStrategy::PerFace
            },
        }
    }
}

/// Set up pretty log output
pub(crate) fn initialize_tracing(log_filter: &str, log_format: LogFormat) {
    let tsub = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::OffsetTime::new(
            time::UtcOffset::current_local_offset().unwrap_or_else(|e| {
                tracing::warn!("couldn't get local time offset: {:?}", e);
                time::UtcOffset::UTC
            }),
            time::macros::format_description!("[hour]:[minute]:[second]"),
        ))
        .with_env_filter(log_filter);

    match log_format {
        LogFormat::Compact => tsub.compact().init(),
        LogFormat::Full => tsub.init(),
        LogFormat::Pretty => tsub.pretty().init(),
        LogFormat::Json => tsub.json().init(),
    }
}
