use thiserror::Error;

/// Result type used by all fallible operations of this crate.
pub type Result<T> = std::result::Result<T, KMeansError>;

/// Errors that can occur while constructing a [`crate::KMeans`] instance.
///
/// Once an instance was constructed successfully, clustering itself never fails. Numeric
/// degeneracies (such as empty clusters) are tolerated and handled as configured by
/// [`crate::EmptyClusterPolicy`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KMeansError {
    /// The sample matrix (or the requested cluster count) can not be clustered at all.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Not all feature rows of the sample matrix contain the same amount of samples.
    #[error("inconsistent shape: feature {feature} has {found} samples, expected {expected}")]
    InconsistentShape { feature: usize, expected: usize, found: usize },
}
