//! Longitude/latitude texture mapping for unit spheres.
//!
//! `u` follows longitude `atan2(z, x)` from `-π` (`u = 0`) through `+X` (`u = 0.5`) back round to
//! `+π` (`u = 1`); `v` follows latitude from the south pole (`v = 0`) to the north pole (`v = 1`),
//! so the texture's origin is its bottom-left corner.
//!
//! `u = 0` and `u = 1` are the same meridian, which a per-vertex mapping can't cope with: a
//! triangle touching the seam would get corners at both ends of the texture and stretch across
//! all of it. Coordinates are therefore computed per triangle corner and each triangle is pulled
//! onto one side of the seam.

use nalgebra::Point3;
use octasphere_common::{ArrayIndex, Float};
use octasphere_mesh::{CornerTexcoords, Mesh, Texcoord};

use crate::{geom, Error};

/// Give every corner of every triangle in `mesh` a texture coordinate.
///
/// Must run before the mesh is scaled: the mapping reads directions straight off the vertex
/// positions.
///
/// # Errors
///
/// * [`PreconditionViolated`](Error::PreconditionViolated) if some vertex isn't unit-length;
///   nothing is written in that case.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(mesh), fields(polygons = mesh.polygons().len())))]
pub fn generate_texcoords<Real: Float, Idx: ArrayIndex>(
    mesh: &mut Mesh<Real, Idx>,
) -> Result<(), Error> {
    if let Some((index, p)) = mesh
        .vertices()
        .iter()
        .enumerate()
        .find(|(_, p)| !geom::is_unit(p))
    {
        return Err(Error::PreconditionViolated {
            index,
            length: p.coords.norm().as_f64(),
        });
    }

    let texcoords = mesh
        .polygons()
        .iter()
        .map(|tri| triangle_texcoords(&mesh.corners(tri)))
        .collect();
    mesh.set_texcoords(texcoords)?;
    Ok(())
}

/// Texture coordinates for one triangle of unit vectors, in corner order, with seam and pole
/// corrections applied.
pub fn triangle_texcoords<Real: Float>(corners: &[Point3<Real>; 3]) -> CornerTexcoords<Real> {
    let poles = corners.map(|p| geom::is_pole(&p));
    let mut u = corners.map(|p| longitude_u(&p));

    pull_across_seam(&mut u, &poles);
    fill_poles(&mut u, &poles);

    [0, 1, 2].map(|n| Texcoord::new(u[n], latitude_v(&corners[n])))
}

/// `u` for the longitude of `p`, in `[0, 1]`.
#[inline]
pub fn longitude_u<Real: Float>(p: &Point3<Real>) -> Real {
    (p.z.atan2(p.x) + Real::pi()) / Real::two_pi()
}

/// `v` for the latitude of `p`, in `[0, 1]`; `1` at `+Y`.
#[inline]
pub fn latitude_v<Real: Float>(p: &Point3<Real>) -> Real {
    Real::ONE - p.y.clamp(-Real::ONE, Real::ONE).acos() / Real::pi()
}

#[inline]
fn on_seam<Real: Float>(u: Real) -> bool {
    u <= Real::UNIT_TOLERANCE || u >= Real::ONE - Real::UNIT_TOLERANCE
}

/// Move corners that landed on the far side of the seam over to the side the rest of the
/// triangle is on.
///
/// The side is decided by the mean `u` of the corners that are neither poles nor exactly on the
/// seam (a seam vertex could equally be `0` or `1`). Any corner more than half a turn from that
/// mean is snapped to the seam edge on the mean's side.
fn pull_across_seam<Real: Float>(u: &mut [Real; 3], poles: &[bool; 3]) {
    let (sum, count) = u
        .iter()
        .zip(poles)
        .filter(|&(&u, &pole)| !pole && !on_seam(u))
        .fold((Real::ZERO, 0usize), |(sum, count), (&u, _)| (sum + u, count + 1));
    if count == 0 {
        return;
    }
    let mean = sum / Real::from_count(count);
    let high = mean > Real::HALF;

    for (u, _) in u.iter_mut().zip(poles).filter(|(_, &pole)| !pole) {
        if high && mean - *u > Real::HALF {
            #[cfg(feature = "tracing")]
            tracing::trace!(from = u.as_f64(), "moved corner to u = 1");
            *u = Real::ONE;
        } else if !high && *u - mean > Real::HALF {
            #[cfg(feature = "tracing")]
            tracing::trace!(from = u.as_f64(), "moved corner to u = 0");
            *u = Real::ZERO;
        }
    }
}

/// Give pole corners the mean `u` of the triangle's other corners.
fn fill_poles<Real: Float>(u: &mut [Real; 3], poles: &[bool; 3]) {
    let (sum, count) = u
        .iter()
        .zip(poles)
        .filter(|(_, &pole)| !pole)
        .fold((Real::ZERO, 0usize), |(sum, count), (&u, _)| (sum + u, count + 1));
    if count == 0 {
        return;
    }
    let mean = sum / Real::from_count(count);
    for (u, _) in u.iter_mut().zip(poles).filter(|(_, &pole)| pole) {
        *u = mean;
    }
}
