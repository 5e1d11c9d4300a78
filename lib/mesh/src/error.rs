/// Errors related to [Meshes](crate::Mesh).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MeshError {
    /// The mesh is full for its index type.
    #[error("vertex {0} does not fit in the mesh's index type (at most {1} vertices)")]
    IndexOverflow(usize, usize),
    /// A triangle names a vertex that doesn't exist.
    #[error("triangle {triangle} refers to vertex {vertex}, but the mesh has only {len} vertices")]
    IndexOutOfBounds {
        triangle: usize,
        vertex: usize,
        len: usize,
    },
    /// Texture coordinates don't match the triangle count.
    #[error("expected texture coordinates for {expected} triangles, got {actual}")]
    TexcoordCount { expected: usize, actual: usize },
    /// A palette with no entries.
    #[error("cannot assign per-triangle colors from an empty palette")]
    EmptyPalette,
}
