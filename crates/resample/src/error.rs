//! Error types for the panoptes-resample crate.

/// Error type for all fallible operations in the panoptes-resample crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ResampleError {
    /// Returned when the step size is not a positive integer.
    #[error("invalid step: {step} (must be positive)")]
    InvalidStep {
        /// The offending step value.
        step: i64,
    },

    /// Returned when an evaluation point lies outside the interpolant's
    /// domain. Extrapolation is undefined.
    #[error("timestamp {t} outside interpolation domain [{start}, {end}]")]
    OutOfBounds {
        /// The requested timestamp.
        t: i64,
        /// First timestamp of the fitted series.
        start: i64,
        /// Last timestamp of the fitted series.
        end: i64,
    },

    /// Series validation error.
    #[error(transparent)]
    Series(#[from] panoptes_series::SeriesError),
}
