use crate::domain::Point;

/// Convenience result type used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while building or solving a
/// seamless clone. All variants stem from invalid input, none are
/// transient.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A domain point falls outside the image it indexes.
    #[error(
        "domain point {point} lies outside the {width}x{height} image"
    )]
    OutOfBoundsDomain { point: Point, width: u32, height: u32 },

    /// The index mask does not describe the domain handed to the solver.
    #[error("domain mask is inconsistent with the domain: {0}")]
    InconsistentMask(String),

    /// The Laplacian could not be factorized.
    #[error("poisson system is singular: {0}")]
    SingularSystem(String),

    /// A zero point domain has no unknowns to solve for.
    #[error("domain is empty")]
    EmptyDomain,

    /// `solve` was called before `compute`.
    #[error("poisson system has not been factorized, call compute() first")]
    NotComputed,

    /// Right hand side or image dimensions disagree with the domain.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    Dimension { expected: String, actual: String },

    #[error(transparent)]
    Image(#[from] image::ImageError),
}

impl Error {
    pub fn inconsistent_mask(msg: impl Into<String>) -> Self {
        Self::InconsistentMask(msg.into())
    }

    pub fn singular(msg: impl Into<String>) -> Self {
        Self::SingularSystem(msg.into())
    }

    pub fn dimension(
        expected: impl std::fmt::Display,
        actual: impl std::fmt::Display,
    ) -> Self {
        Self::Dimension {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}
