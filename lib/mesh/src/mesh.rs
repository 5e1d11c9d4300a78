use octasphere_common::{ArrayIndex, Float};

use crate::{
    Color, ColorAttribute, ColorSpec, CornerTexcoords, MeshError, Position, Texcoord, Triangle,
};

/// An indexed triangle mesh.
///
/// # Characteristics
///
/// * Vertices are identified by their position in the vertex list; nothing is ever removed from
///   it, so indices stay valid for the life of the mesh.
/// * Every triangle refers only to vertices that exist.
/// * Texture coordinates are stored per triangle corner rather than per vertex, since a vertex
///   shared by several triangles may need a different `u` in each (e.g. along a texture seam).
///   When present there is exactly one [CornerTexcoords] per triangle.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh<Real: Float = f64, Idx: ArrayIndex = u32> {
    vertices: Vec<Position<Real>>,
    polygons: Vec<Triangle<Idx>>,
    texcoords: Vec<CornerTexcoords<Real>>,
    color: Option<ColorAttribute>,
    /// Product of every factor passed to [scale_all](Self::scale_all)
    scale: Real,
    texture_url: String,
}

impl<Real: Float, Idx: ArrayIndex> Default for Mesh<Real, Idx> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<Real: Float, Idx: ArrayIndex> Mesh<Real, Idx> {
    pub fn empty() -> Self {
        Self {
            vertices: Vec::new(),
            polygons: Vec::new(),
            texcoords: Vec::new(),
            color: None,
            scale: Real::ONE,
            texture_url: String::new(),
        }
    }

    /// Construct a mesh from a vertex list and triangles referring into it.
    ///
    /// # Errors
    ///
    /// * [`IndexOverflow`](MeshError::IndexOverflow) if `vertices` has more entries than `Idx`
    ///   can address
    /// * [`IndexOutOfBounds`](MeshError::IndexOutOfBounds) if a triangle refers to a vertex
    ///   past the end of `vertices`
    pub fn new(
        vertices: Vec<Position<Real>>,
        polygons: Vec<Triangle<Idx>>,
    ) -> Result<Self, MeshError> {
        if vertices.len() > Idx::capacity() {
            return Err(MeshError::IndexOverflow(vertices.len() - 1, Idx::capacity()));
        }
        validate_polygons(&polygons, vertices.len())?;
        Ok(Self::new_unchecked(vertices, polygons))
    }

    /// Construct a mesh without checking that `polygons` refers only to extant vertices.
    ///
    /// # Panics
    ///
    /// Later accessors will panic if any triangle refers to a vertex ∉ `vertices`.
    pub fn new_unchecked(vertices: Vec<Position<Real>>, polygons: Vec<Triangle<Idx>>) -> Self {
        Self {
            vertices,
            polygons,
            ..Self::empty()
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[Position<Real>] {
        &self.vertices
    }

    #[inline]
    pub fn polygons(&self) -> &[Triangle<Idx>] {
        &self.polygons
    }

    /// Per-corner texture coordinates, indexed like [polygons](Self::polygons). Empty until
    /// assigned.
    #[inline]
    pub fn texcoords(&self) -> &[CornerTexcoords<Real>] {
        &self.texcoords
    }

    /// The texture coordinate of corner `corner` of triangle `polygon`.
    pub fn texcoord(&self, polygon: usize, corner: usize) -> Option<&Texcoord<Real>> {
        self.texcoords.get(polygon).and_then(|c| c.get(corner))
    }

    #[inline]
    pub fn color(&self) -> Option<&ColorAttribute> {
        self.color.as_ref()
    }

    /// The total scale factor applied to this mesh's vertices so far.
    #[inline]
    pub fn scale(&self) -> Real {
        self.scale
    }

    #[inline]
    pub fn texture_url(&self) -> &str {
        &self.texture_url
    }

    pub fn set_texture_url(&mut self, url: impl Into<String>) {
        self.texture_url = url.into();
    }

    /// The position of a vertex.
    ///
    /// # Panics
    ///
    /// * `index` ∉ `self.vertices()`
    #[inline]
    pub fn position(&self, index: Idx) -> &Position<Real> {
        &self.vertices[index.index()]
    }

    /// The positions of a triangle's corners, in corner order.
    #[inline]
    pub fn corners(&self, tri: &Triangle<Idx>) -> [Position<Real>; 3] {
        tri.map(|i| *self.position(i))
    }

    /// Append a vertex and return its index.
    ///
    /// # Errors
    ///
    /// * [`IndexOverflow`](MeshError::IndexOverflow) if the new vertex's index does not fit in
    ///   `Idx`; the mesh is left unchanged.
    pub fn push_vertex(&mut self, p: Position<Real>) -> Result<Idx, MeshError> {
        let n = self.vertices.len();
        let idx = Idx::from_usize(n).ok_or(MeshError::IndexOverflow(n, Idx::capacity()))?;
        self.vertices.push(p);
        Ok(idx)
    }

    pub fn reserve_vertices(&mut self, additional: usize) {
        self.vertices.reserve(additional);
    }

    /// Replace every triangle of the mesh, returning the old triangles.
    ///
    /// Texture coordinates and per-polygon colors describe the old triangles, so they're
    /// dropped.
    ///
    /// # Errors
    ///
    /// * [`IndexOutOfBounds`](MeshError::IndexOutOfBounds) if a triangle refers to a vertex
    ///   that doesn't exist; the mesh is left unchanged.
    pub fn replace_polygons(
        &mut self,
        polygons: Vec<Triangle<Idx>>,
    ) -> Result<Vec<Triangle<Idx>>, MeshError> {
        validate_polygons(&polygons, self.vertices.len())?;
        self.clear_texcoords();
        if matches!(self.color, Some(ColorAttribute::PerPolygon(_))) {
            self.color = None;
        }
        Ok(std::mem::replace(&mut self.polygons, polygons))
    }

    /// Set per-corner texture coordinates, one entry per triangle.
    ///
    /// # Errors
    ///
    /// * [`TexcoordCount`](MeshError::TexcoordCount) if `texcoords.len()` ≠ the number of
    ///   triangles.
    pub fn set_texcoords(&mut self, texcoords: Vec<CornerTexcoords<Real>>) -> Result<(), MeshError> {
        if texcoords.len() != self.polygons.len() {
            return Err(MeshError::TexcoordCount {
                expected: self.polygons.len(),
                actual: texcoords.len(),
            });
        }
        self.texcoords = texcoords;
        Ok(())
    }

    /// Drop all texture coordinates, returning whether there were any.
    pub fn clear_texcoords(&mut self) -> bool {
        let had = !self.texcoords.is_empty();
        self.texcoords.clear();
        had
    }

    /// Multiply every vertex position by `factor`, in place.
    ///
    /// Texture coordinates are untouched.
    pub fn scale_all(&mut self, factor: Real) {
        for v in self.vertices.iter_mut() {
            v.coords *= factor;
        }
        self.scale *= factor;
        #[cfg(feature = "tracing")]
        tracing::trace!(
            factor = factor.as_f64(),
            total = self.scale.as_f64(),
            vertices = self.vertices.len(),
            "scaled mesh"
        );
    }

    /// Set the mesh's color attribute.
    ///
    /// # Errors
    ///
    /// * [`EmptyPalette`](MeshError::EmptyPalette) for [`ColorSpec::Palette`] with `len == 0`
    pub fn assign_color(&mut self, spec: ColorSpec) -> Result<(), MeshError> {
        let attr = match spec {
            ColorSpec::Uniform(c) => ColorAttribute::Uniform(c),
            ColorSpec::Palette { len: 0 } => return Err(MeshError::EmptyPalette),
            ColorSpec::Palette { len } => ColorAttribute::PerPolygon(
                (0..self.polygons.len())
                    .map(|n| Color::Indexed((n % len as usize) as u32))
                    .collect(),
            ),
        };
        self.color = Some(attr);
        Ok(())
    }
}

fn validate_polygons<Idx: ArrayIndex>(polygons: &[Triangle<Idx>], len: usize) -> Result<(), MeshError> {
    for (triangle, tri) in polygons.iter().enumerate() {
        if let Some(vertex) = tri.iter().map(|i| i.index()).find(|&v| v >= len) {
            return Err(MeshError::IndexOutOfBounds {
                triangle,
                vertex,
                len,
            });
        }
    }
    Ok(())
}
