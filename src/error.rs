//! Umbrella error for the detection pipeline.

/// Error type for the end-to-end detection pipeline.
///
/// Stage errors pass through transparently; configuration problems get
/// their own variant. A failed stage aborts the whole invocation;
/// there is no recovery layer and no partial-success mode.
#[derive(Debug, thiserror::Error)]
pub enum DetectError {
    /// Returned when the detector configuration is invalid.
    #[error("invalid configuration: {reason}")]
    Config {
        /// Description of the problem.
        reason: String,
    },

    /// Series validation error.
    #[error(transparent)]
    Series(#[from] panoptes_series::SeriesError),

    /// Resampling error.
    #[error(transparent)]
    Resample(#[from] panoptes_resample::ResampleError),

    /// Wavelet decomposition error.
    #[error(transparent)]
    Wavelet(#[from] panoptes_wavelet::WaveletError),

    /// Residual scoring error.
    #[error(transparent)]
    Score(#[from] panoptes_score::ScoreError),

    /// Spectral helper error.
    #[error(transparent)]
    Spectral(#[from] panoptes_spectral::SpectralError),

    /// Upstream fetch error.
    #[error(transparent)]
    Fetch(#[from] panoptes_fetch::FetchError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_config() {
        let e = DetectError::Config {
            reason: "unknown score mode".into(),
        };
        assert_eq!(e.to_string(), "invalid configuration: unknown score mode");
    }

    #[test]
    fn from_series_error() {
        let se = panoptes_series::SeriesError::TooShort { len: 1, min: 2 };
        let de: DetectError = se.into();
        assert!(matches!(de, DetectError::Series(_)));
        assert_eq!(
            de.to_string(),
            "series too short: got 1 points, need at least 2"
        );
    }

    #[test]
    fn from_wavelet_error() {
        let we = panoptes_wavelet::WaveletError::SignalTooShort { len: 2, min: 4 };
        let de: DetectError = we.into();
        assert!(matches!(de, DetectError::Wavelet(_)));
    }

    #[test]
    fn from_score_error() {
        let se = panoptes_score::ScoreError::NonFiniteData;
        let de: DetectError = se.into();
        assert!(matches!(de, DetectError::Score(_)));
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<DetectError>();
    }
}
