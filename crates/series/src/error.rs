//! Error types for the panoptes-series crate.

/// Error type for all fallible operations in the panoptes-series crate.
///
/// Covers validation failures raised while constructing a
/// [`TimeSeries`](crate::TimeSeries). A constructed series is guaranteed
/// well-formed, so downstream analysis never re-validates.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SeriesError {
    /// Returned when the series has fewer points than required.
    #[error("series too short: got {len} points, need at least {min}")]
    TooShort {
        /// Number of points provided.
        len: usize,
        /// Minimum number of points required.
        min: usize,
    },

    /// Returned when timestamp and value arrays differ in length.
    #[error("timestamps/values length mismatch: {timestamps} vs {values}")]
    LengthMismatch {
        /// Number of timestamps provided.
        timestamps: usize,
        /// Number of values provided.
        values: usize,
    },

    /// Returned when timestamps are not strictly increasing.
    ///
    /// Duplicate timestamps trip this as well: the interpolant's domain
    /// requires unique, ordered sample points.
    #[error("timestamps not strictly increasing at index {index}")]
    NonMonotonic {
        /// Index of the first offending timestamp.
        index: usize,
    },

    /// Returned when a value is NaN or infinite.
    #[error("non-finite value at index {index}")]
    NonFiniteValue {
        /// Index of the offending value.
        index: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_too_short() {
        let err = SeriesError::TooShort { len: 1, min: 2 };
        assert_eq!(
            err.to_string(),
            "series too short: got 1 points, need at least 2"
        );
    }

    #[test]
    fn display_length_mismatch() {
        let err = SeriesError::LengthMismatch {
            timestamps: 3,
            values: 2,
        };
        assert_eq!(
            err.to_string(),
            "timestamps/values length mismatch: 3 vs 2"
        );
    }

    #[test]
    fn display_non_monotonic() {
        let err = SeriesError::NonMonotonic { index: 4 };
        assert_eq!(
            err.to_string(),
            "timestamps not strictly increasing at index 4"
        );
    }

    #[test]
    fn display_non_finite() {
        let err = SeriesError::NonFiniteValue { index: 7 };
        assert_eq!(err.to_string(), "non-finite value at index 7");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<SeriesError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<SeriesError>();
    }
}
