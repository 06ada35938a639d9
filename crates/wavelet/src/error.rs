//! Error types for the panoptes-wavelet crate.

/// Error type for all fallible operations in the panoptes-wavelet crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum WaveletError {
    /// Returned when the signal is shorter than the wavelet filter
    /// requires.
    #[error("signal too short: got {len} samples, filter needs at least {min}")]
    SignalTooShort {
        /// Number of samples provided.
        len: usize,
        /// Minimum number of samples required (the filter length).
        min: usize,
    },

    /// Returned when the input signal contains non-finite values
    /// (NaN or infinity).
    #[error("input signal contains non-finite values")]
    NonFiniteData,

    /// Returned when an unsupported wavelet filter name is provided.
    #[error("unsupported wavelet filter: {0}")]
    UnsupportedFilter(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_signal_too_short() {
        let err = WaveletError::SignalTooShort { len: 3, min: 4 };
        assert_eq!(
            err.to_string(),
            "signal too short: got 3 samples, filter needs at least 4"
        );
    }

    #[test]
    fn display_non_finite() {
        let err = WaveletError::NonFiniteData;
        assert_eq!(err.to_string(), "input signal contains non-finite values");
    }

    #[test]
    fn display_unsupported_filter() {
        let err = WaveletError::UnsupportedFilter("coif4".into());
        assert_eq!(err.to_string(), "unsupported wavelet filter: coif4");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<WaveletError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<WaveletError>();
    }
}
