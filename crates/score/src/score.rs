//! Gaussian anomaly scoring.

use statrs::distribution::{Continuous, Normal};

use crate::error::ScoreError;

/// Scoring convention applied to the fitted Gaussian.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreMode {
    /// `score[i] = pdf(residual[i]; mu, sigma)`, the density itself.
    /// Higher means closer to the distribution's peak, not more
    /// anomalous.
    RawDensity,
    /// `score[i] = 1 - pdf(z_i; 0, 1) / pdf(0; 0, 1)` on the
    /// standardized residual: 0 at the mean, approaching 1 as the
    /// deviation grows. Bounded in `[0, 1)`.
    InvertedNormalized,
}

impl Default for ScoreMode {
    /// Returns `ScoreMode::InvertedNormalized` as the default.
    fn default() -> Self {
        Self::InvertedNormalized
    }
}

/// Configuration for residual scoring.
///
/// # Example
///
/// ```ignore
/// use panoptes_score::{ScoreConfig, ScoreMode};
///
/// let config = ScoreConfig::new().with_mode(ScoreMode::RawDensity);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScoreConfig {
    mode: ScoreMode,
}

impl ScoreConfig {
    /// Creates a new configuration with the default mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the scoring mode.
    pub fn with_mode(mut self, mode: ScoreMode) -> Self {
        self.mode = mode;
        self
    }

    /// Returns the scoring mode.
    pub fn mode(&self) -> ScoreMode {
        self.mode
    }
}

/// Per-point anomaly scores with the fitted Gaussian parameters.
#[derive(Clone, Debug)]
pub struct ScoreResult {
    scores: Vec<f64>,
    mean: f64,
    std_dev: f64,
}

impl ScoreResult {
    /// Returns the per-point scores.
    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    /// Returns the fitted residual mean.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Returns the fitted residual standard deviation.
    ///
    /// Population convention (N denominator), not the sample (N-1)
    /// convention.
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Returns the number of scores.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Returns `true` if there are no scores.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Consumes the result, returning the scores.
    pub fn into_scores(self) -> Vec<f64> {
        self.scores
    }
}

/// Arithmetic mean of a slice.
fn mean(data: &[f64]) -> f64 {
    data.iter().sum::<f64>() / data.len() as f64
}

/// Population standard deviation (N denominator).
fn population_std(data: &[f64], mean: f64) -> f64 {
    let var = data.iter().map(|&x| (x - mean) * (x - mean)).sum::<f64>() / data.len() as f64;
    var.sqrt()
}

/// Scores each residual against the Gaussian fitted to the whole
/// residual sequence.
///
/// A zero-variance residual has no anomalies: every score is 0.0, in
/// both modes. The density formulas are undefined at `sigma == 0`, so
/// the constant case short-circuits before any distribution is built.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`ScoreError::TooFewResiduals`] | fewer than 2 residuals |
/// | [`ScoreError::NonFiniteData`] | NaN or infinity in the residuals |
/// | [`ScoreError::Distribution`] | the Gaussian cannot be constructed |
pub fn score_residuals(residual: &[f64], config: &ScoreConfig) -> Result<ScoreResult, ScoreError> {
    if residual.len() < 2 {
        return Err(ScoreError::TooFewResiduals {
            len: residual.len(),
            min: 2,
        });
    }
    if !residual.iter().all(|v| v.is_finite()) {
        return Err(ScoreError::NonFiniteData);
    }

    let mu = mean(residual);
    let sigma = population_std(residual, mu);

    if sigma == 0.0 {
        return Ok(ScoreResult {
            scores: vec![0.0; residual.len()],
            mean: mu,
            std_dev: sigma,
        });
    }

    let scores = match config.mode() {
        ScoreMode::RawDensity => {
            let normal = Normal::new(mu, sigma).map_err(|e| ScoreError::Distribution {
                message: e.to_string(),
            })?;
            residual.iter().map(|&x| normal.pdf(x)).collect()
        }
        ScoreMode::InvertedNormalized => {
            let standard = Normal::new(0.0, 1.0).map_err(|e| ScoreError::Distribution {
                message: e.to_string(),
            })?;
            let peak = standard.pdf(0.0);
            residual
                .iter()
                .map(|&x| {
                    let z = (x - mu) / sigma;
                    1.0 - standard.pdf(z) / peak
                })
                .collect()
        }
    };

    Ok(ScoreResult {
        scores,
        mean: mu,
        std_dev: sigma,
    })
}
