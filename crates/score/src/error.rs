//! Error types for the panoptes-score crate.

/// Error type for all fallible operations in the panoptes-score crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ScoreError {
    /// Returned when fewer than 2 residuals are provided; a Gaussian
    /// fit needs at least two points.
    #[error("too few residuals: got {len}, need at least {min}")]
    TooFewResiduals {
        /// Number of residuals provided.
        len: usize,
        /// Minimum required.
        min: usize,
    },

    /// Returned when the residuals contain non-finite values.
    #[error("residuals contain non-finite values")]
    NonFiniteData,

    /// Returned when the underlying distribution cannot be built.
    ///
    /// The `message` field is a `String` (not a statrs error type)
    /// because statrs errors do not implement `Clone`.
    #[error("distribution error: {message}")]
    Distribution {
        /// Description of the failure.
        message: String,
    },
}
