use octasphere_mesh::MeshError;

/// Errors related to building [spheres](crate::create).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A caller-supplied value is out of its domain.
    #[error("invalid {name}: {reason}")]
    InvalidArgument { name: &'static str, reason: String },
    /// Texture coordinates were requested for a mesh that isn't on the unit sphere.
    #[error("vertex {index} has length {length}, but texture coordinates can only be generated for unit-length vertices")]
    PreconditionViolated { index: usize, length: f64 },
    /// The request would exceed a fixed limit.
    #[error("{resource} would need {requested}, but at most {limit} is supported")]
    ResourceExhausted {
        resource: &'static str,
        requested: usize,
        limit: usize,
    },
    /// An edge joins antipodal vertices, so its midpoint can't be projected.
    #[error("edge ({0}, {1}) has no midpoint on the sphere; its ends are antipodal")]
    DegenerateEdge(usize, usize),
    /// Error from the underlying [Mesh](octasphere_mesh::Mesh).
    #[error(transparent)]
    Mesh(#[from] MeshError),
}

impl Error {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}
