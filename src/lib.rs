#![doc = include_str!("../README.md")]
#![cfg_attr(not(debug_assertions), warn(missing_docs))]

mod config;
pub use config::*;
pub mod error;
pub use error::Error;
pub mod geom;
mod octahedron;
pub use octahedron::*;
mod subdivide;
pub use subdivide::*;
pub mod texcoord;
pub use texcoord::generate_texcoords;

pub use octasphere_common::{ArrayIndex, Float};
pub use octasphere_mesh as mesh;
pub use octasphere_mesh::Mesh;

/// Build a textured, scaled, colored sphere with `f64` positions and `u32` indices.
///
/// See [create_with].
pub fn create(config: &SphereConfig) -> Result<Mesh, Error> {
    create_with(config)
}

/// Build a sphere: validate `config`, subdivide the [octahedron] to the requested depth, generate
/// texture coordinates, then scale, color, and attach the texture URL.
///
/// Nothing is returned unless every step succeeds.
///
/// # Errors
///
/// * Anything from [SphereConfig::validate]
/// * [`ResourceExhausted`](Error::ResourceExhausted) if `Idx` can't address every vertex of the
///   requested depth
#[cfg_attr(feature = "tracing", tracing::instrument(skip(config), fields(depth = config.recursion_depth)))]
pub fn create_with<Real: Float, Idx: ArrayIndex>(
    config: &SphereConfig,
) -> Result<Mesh<Real, Idx>, Error> {
    let config = config.validate()?;

    let mut mesh = octahedron::<Real, Idx>();
    subdivide(&mut mesh, config.depth, config.midpoints)?;
    generate_texcoords(&mut mesh)?;

    mesh.scale_all(Real::lossy_from_f64(config.scale));
    mesh.assign_color(config.color)?;
    mesh.set_texture_url(config.texture_url);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        vertices = mesh.vertices().len(),
        polygons = mesh.polygons().len(),
        "built sphere"
    );
    Ok(mesh)
}
