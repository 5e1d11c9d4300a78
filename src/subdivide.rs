//! Recursive 1-to-4 triangle subdivision on the unit sphere.
//!
//! ```text
//!          i
//!         /\
//!        /  \
//!      a/____\b
//!      /\    /\
//!     /  \  /  \
//!    /____\/____\
//!   j      c     k
//! ```

use std::collections::HashMap;

use octasphere_common::{ArrayIndex, Float};
use octasphere_mesh::{Mesh, Triangle};

use crate::{geom, Error};

/// Deepest subdivision [Depth] accepts; a sphere built from the octahedron at this depth has
/// `8·4⁸` = 524288 triangles.
pub const MAX_RECURSION_DEPTH: u32 = 8;

/// A number of subdivision passes, known to be within `0..=`[MAX_RECURSION_DEPTH].
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Depth(u32);

impl Depth {
    pub const ZERO: Self = Self(0);

    /// # Errors
    ///
    /// * [`ResourceExhausted`](Error::ResourceExhausted) if `depth` > [MAX_RECURSION_DEPTH]
    pub fn new(depth: u32) -> Result<Self, Error> {
        if depth > MAX_RECURSION_DEPTH {
            return Err(Error::ResourceExhausted {
                resource: "recursion depth",
                requested: depth as usize,
                limit: MAX_RECURSION_DEPTH as usize,
            });
        }
        Ok(Self(depth))
    }

    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for Depth {
    type Error = Error;

    /// # Errors
    ///
    /// * [`InvalidArgument`](Error::InvalidArgument) if `depth` < 0
    /// * [`ResourceExhausted`](Error::ResourceExhausted) if `depth` > [MAX_RECURSION_DEPTH]
    fn try_from(depth: i64) -> Result<Self, Self::Error> {
        if depth < 0 {
            return Err(Error::invalid(
                "recursion depth",
                format!("{depth} is negative"),
            ));
        }
        if depth > i64::from(MAX_RECURSION_DEPTH) {
            return Err(Error::ResourceExhausted {
                resource: "recursion depth",
                requested: usize::try_from(depth).unwrap_or(usize::MAX),
                limit: MAX_RECURSION_DEPTH as usize,
            });
        }
        Ok(Self(depth as u32))
    }
}

/// Where new edge midpoints come from.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MidpointStrategy {
    /// Every triangle appends its own three midpoints, so the two triangles sharing an edge get
    /// coincident but distinct vertices.
    #[default]
    PerFace,
    /// Triangles sharing an edge share its midpoint vertex.
    SharedEdges,
}

/// Subdivide every triangle of `mesh` `depth` times, projecting each new vertex onto the unit
/// sphere.
///
/// Each pass splits triangle `(i, j, k)` into `(i, a, b)`, `(a, j, c)`, `(b, c, k)`, and the
/// central `(a, c, b)`, where `a`, `b`, `c` are the spherified midpoints of `ij`, `ik`, and `jk`.
/// All four children keep their parent's winding. Parents are dropped; vertices are only ever
/// appended. Texture coordinates don't survive, since they describe the old triangles.
///
/// A depth of zero leaves `mesh` untouched, and so does any error.
///
/// # Errors
///
/// * [`ResourceExhausted`](Error::ResourceExhausted) if the vertices this would create can't all
///   be addressed by `Idx`; checked before any work is done.
/// * [`DegenerateEdge`](Error::DegenerateEdge) if some edge joins antipodal points.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(mesh), fields(vertices = mesh.vertices().len(), polygons = mesh.polygons().len())))]
pub fn subdivide<Real: Float, Idx: ArrayIndex>(
    mesh: &mut Mesh<Real, Idx>,
    depth: Depth,
    midpoints: MidpointStrategy,
) -> Result<(), Error> {
    if depth == Depth::ZERO {
        return Ok(());
    }
    check_index_budget(mesh, depth)?;

    // midpoints are appended as we go; only publish them once every pass has succeeded
    let mut work = mesh.clone();
    let _had_texcoords = work.clear_texcoords();
    for _level in 0..depth.get() {
        let children = match midpoints {
            MidpointStrategy::PerFace => split_per_face(&mut work)?,
            MidpointStrategy::SharedEdges => split_shared_edges(&mut work)?,
        };
        work.replace_polygons(children)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            level = _level + 1,
            vertices = work.vertices().len(),
            polygons = work.polygons().len(),
            "subdivided"
        );
    }

    #[cfg(feature = "tracing")]
    if _had_texcoords {
        tracing::warn!("discarded texture coordinates of the unsubdivided mesh");
    }
    *mesh = work;
    Ok(())
}

/// Vertices of `mesh` after `depth` passes of [`MidpointStrategy::PerFace`] subdivision, or
/// `None` if that overflows `usize`.
///
/// Each pass adds three vertices per triangle and quadruples the triangles, so
/// `V + F·(4ᵈ - 1)`. This also bounds the shared-edge strategy, which adds fewer.
pub fn vertex_count_after<Real: Float, Idx: ArrayIndex>(
    mesh: &Mesh<Real, Idx>,
    depth: Depth,
) -> Option<usize> {
    let growth = 4usize.checked_pow(depth.get())? - 1;
    mesh.polygons()
        .len()
        .checked_mul(growth)?
        .checked_add(mesh.vertices().len())
}

fn check_index_budget<Real: Float, Idx: ArrayIndex>(
    mesh: &Mesh<Real, Idx>,
    depth: Depth,
) -> Result<(), Error> {
    let limit = Idx::capacity();
    match vertex_count_after(mesh, depth) {
        Some(requested) if requested <= limit => Ok(()),
        requested => Err(Error::ResourceExhausted {
            resource: "vertex indices",
            requested: requested.unwrap_or(usize::MAX),
            limit,
        }),
    }
}

#[inline]
fn children<Idx: ArrayIndex>([i, j, k]: Triangle<Idx>, a: Idx, b: Idx, c: Idx) -> [Triangle<Idx>; 4] {
    [
        [i, a, b],
        [a, j, c],
        [b, c, k],
        // center; reversed relative to the corner order so it still faces outward
        [a, c, b],
    ]
}

fn push_midpoint<Real: Float, Idx: ArrayIndex>(
    mesh: &mut Mesh<Real, Idx>,
    from: Idx,
    to: Idx,
) -> Result<Idx, Error> {
    let mid = geom::midpoint(mesh.position(from), mesh.position(to));
    let p = geom::spherify(&mid).ok_or(Error::DegenerateEdge(from.index(), to.index()))?;
    Ok(mesh.push_vertex(p)?)
}

fn split_per_face<Real: Float, Idx: ArrayIndex>(
    mesh: &mut Mesh<Real, Idx>,
) -> Result<Vec<Triangle<Idx>>, Error> {
    let parents = mesh.polygons().len();
    mesh.reserve_vertices(parents * 3);
    let mut res = Vec::with_capacity(parents * 4);
    for n in 0..parents {
        let tri @ [i, j, k] = mesh.polygons()[n];
        let a = push_midpoint(mesh, i, j)?;
        let b = push_midpoint(mesh, i, k)?;
        let c = push_midpoint(mesh, j, k)?;
        res.extend(children(tri, a, b, c));
    }
    Ok(res)
}

fn split_shared_edges<Real: Float, Idx: ArrayIndex>(
    mesh: &mut Mesh<Real, Idx>,
) -> Result<Vec<Triangle<Idx>>, Error> {
    let parents = mesh.polygons().len();
    // closed surfaces have 3F/2 edges
    let mut cache: HashMap<(Idx, Idx), Idx> = HashMap::with_capacity(parents * 3 / 2);
    mesh.reserve_vertices(parents * 3 / 2);
    let mut res = Vec::with_capacity(parents * 4);

    let mut shared = |mesh: &mut Mesh<Real, Idx>, from: Idx, to: Idx| -> Result<Idx, Error> {
        let key = if from < to { (from, to) } else { (to, from) };
        if let Some(&idx) = cache.get(&key) {
            return Ok(idx);
        }
        let idx = push_midpoint(mesh, key.0, key.1)?;
        cache.insert(key, idx);
        Ok(idx)
    };

    for n in 0..parents {
        let tri @ [i, j, k] = mesh.polygons()[n];
        let a = shared(mesh, i, j)?;
        let b = shared(mesh, i, k)?;
        let c = shared(mesh, j, k)?;
        res.extend(children(tri, a, b, c));
    }
    Ok(res)
}
