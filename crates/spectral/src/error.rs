//! Error types for the panoptes-spectral crate.

/// Error type for all fallible operations in the panoptes-spectral
/// crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SpectralError {
    /// Returned when the input signal is empty.
    #[error("input signal is empty")]
    EmptySignal,

    /// Returned when the input signal contains non-finite values.
    #[error("input signal contains non-finite values")]
    NonFiniteData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_empty() {
        assert_eq!(SpectralError::EmptySignal.to_string(), "input signal is empty");
    }

    #[test]
    fn display_non_finite() {
        assert_eq!(
            SpectralError::NonFiniteData.to_string(),
            "input signal contains non-finite values"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<SpectralError>();
    }
}
