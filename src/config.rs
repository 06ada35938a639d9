//! Detector configuration.

use serde::Deserialize;

use panoptes_score::{ScoreConfig, ScoreMode};
use panoptes_wavelet::WaveletFilter;

use crate::error::DetectError;

/// Top-level detector configuration.
///
/// Deserializable from TOML; every field has a default, so an empty
/// document is a valid configuration.
///
/// ```toml
/// wavelet = "d4"
/// score_mode = "inverted-normalized"
/// # step = 60
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DetectorConfig {
    /// Wavelet filter name (`haar`, `d4`, `d6`, `d8`, `la8`).
    #[serde(default = "default_wavelet")]
    pub wavelet: String,

    /// Scoring convention (`inverted-normalized` or `raw-density`).
    #[serde(default = "default_score_mode")]
    pub score_mode: String,

    /// Explicit resampling step. When absent, the dominant gap of the
    /// input series is used.
    #[serde(default)]
    pub step: Option<i64>,
}

fn default_wavelet() -> String {
    "d4".to_string()
}

fn default_score_mode() -> String {
    "inverted-normalized".to_string()
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            wavelet: default_wavelet(),
            score_mode: default_score_mode(),
            step: None,
        }
    }
}

impl DetectorConfig {
    /// Parses a configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`DetectError::Config`] on syntax errors or unknown
    /// fields.
    pub fn from_toml_str(document: &str) -> Result<Self, DetectError> {
        toml::from_str(document).map_err(|e| DetectError::Config {
            reason: e.to_string(),
        })
    }

    /// Resolves the wavelet filter.
    ///
    /// # Errors
    ///
    /// Returns [`DetectError::Config`] for an unsupported filter name.
    pub fn wavelet_filter(&self) -> Result<WaveletFilter, DetectError> {
        WaveletFilter::from_name(&self.wavelet).map_err(|e| DetectError::Config {
            reason: e.to_string(),
        })
    }

    /// Resolves the scoring configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DetectError::Config`] for an unknown score mode.
    pub fn score_config(&self) -> Result<ScoreConfig, DetectError> {
        let mode = match self.score_mode.to_lowercase().replace('_', "-").as_str() {
            "inverted-normalized" | "inverted" => ScoreMode::InvertedNormalized,
            "raw-density" | "raw" => ScoreMode::RawDensity,
            other => {
                return Err(DetectError::Config {
                    reason: format!("unknown score mode: {other}"),
                });
            }
        };
        Ok(ScoreConfig::new().with_mode(mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = DetectorConfig::default();
        assert_eq!(config.wavelet, "d4");
        assert_eq!(config.score_mode, "inverted-normalized");
        assert_eq!(config.step, None);
        assert_eq!(config.wavelet_filter().unwrap(), WaveletFilter::D4);
        assert_eq!(
            config.score_config().unwrap().mode(),
            ScoreMode::InvertedNormalized
        );
    }

    #[test]
    fn empty_toml_is_default() {
        let config = DetectorConfig::from_toml_str("").unwrap();
        assert_eq!(config.wavelet, "d4");
        assert_eq!(config.step, None);
    }

    #[test]
    fn full_toml() {
        let config = DetectorConfig::from_toml_str(
            r#"
            wavelet = "la8"
            score_mode = "raw-density"
            step = 60
            "#,
        )
        .unwrap();
        assert_eq!(config.wavelet_filter().unwrap(), WaveletFilter::La8);
        assert_eq!(config.score_config().unwrap().mode(), ScoreMode::RawDensity);
        assert_eq!(config.step, Some(60));
    }

    #[test]
    fn unknown_field_rejected() {
        let err = DetectorConfig::from_toml_str("wavlet = \"d4\"").unwrap_err();
        assert!(matches!(err, DetectError::Config { .. }));
    }

    #[test]
    fn unknown_wavelet_rejected() {
        let config = DetectorConfig::from_toml_str("wavelet = \"coif4\"").unwrap();
        let err = config.wavelet_filter().unwrap_err();
        assert!(matches!(err, DetectError::Config { .. }));
        assert!(err.to_string().contains("coif4"));
    }

    #[test]
    fn unknown_score_mode_rejected() {
        let config = DetectorConfig::from_toml_str("score_mode = \"zscore\"").unwrap();
        let err = config.score_config().unwrap_err();
        assert!(matches!(err, DetectError::Config { .. }));
        assert!(err.to_string().contains("zscore"));
    }

    #[test]
    fn score_mode_aliases() {
        for (name, mode) in [
            ("inverted", ScoreMode::InvertedNormalized),
            ("INVERTED-NORMALIZED", ScoreMode::InvertedNormalized),
            ("raw", ScoreMode::RawDensity),
            ("raw_density", ScoreMode::RawDensity),
        ] {
            let config = DetectorConfig {
                score_mode: name.to_string(),
                ..Default::default()
            };
            assert_eq!(config.score_config().unwrap().mode(), mode, "{name}");
        }
    }

    #[test]
    fn config_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<DetectorConfig>();
    }
}
