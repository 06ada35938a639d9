//! End-to-end detection pipeline.

use tracing::{debug, info};

use panoptes_resample::{UniformSeries, resample};
use panoptes_score::{ScoreResult, score_residuals};
use panoptes_series::{DominantGap, TimeSeries, dominant_gap, gap_histogram};
use panoptes_wavelet::{Decomposition, decompose};

use crate::config::DetectorConfig;
use crate::error::DetectError;
use crate::render::Render;

/// Result of a full detection run.
///
/// Holds every intermediate product so an operator can inspect the
/// uniform series, the trend/residual split, and the per-point scores
/// side by side. All fields are aligned index-for-index with the
/// uniform grid.
#[derive(Clone, Debug)]
pub struct Detection {
    gap: DominantGap,
    uniform: UniformSeries,
    decomposition: Decomposition,
    scores: ScoreResult,
}

impl Detection {
    /// Returns the dominant gap inferred from the input series.
    pub fn gap(&self) -> DominantGap {
        self.gap
    }

    /// Returns the resampled uniform series.
    pub fn uniform(&self) -> &UniformSeries {
        &self.uniform
    }

    /// Returns the trend/residual decomposition.
    pub fn decomposition(&self) -> &Decomposition {
        &self.decomposition
    }

    /// Returns the per-point anomaly scores.
    pub fn scores(&self) -> &ScoreResult {
        &self.scores
    }

    /// Draws the residual and the scores into the given sink.
    pub fn render_into(&self, sink: &mut dyn Render) {
        let x: Vec<f64> = self.uniform.timestamps().iter().map(|&t| t as f64).collect();
        sink.render(&x, self.decomposition.residual(), "residual");
        sink.render(&x, self.scores.scores(), "anomaly score");
    }
}

/// Runs the full anomaly-scoring pipeline on a series.
///
/// Stages run strictly forward: dominant-gap inference, resampling
/// onto the half-open uniform grid, wavelet trend/residual
/// decomposition, Gaussian residual scoring. Each stage fully consumes
/// its input before the next begins; a failed stage aborts the whole
/// invocation.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`DetectError::Config`] | unresolvable filter or score mode |
/// | [`DetectError::Resample`] | non-positive step |
/// | [`DetectError::Series`] | resampled grid too short to re-validate |
/// | [`DetectError::Wavelet`] | uniform series shorter than the filter |
/// | [`DetectError::Score`] | degenerate residual input |
pub fn detect(series: &TimeSeries, config: &DetectorConfig) -> Result<Detection, DetectError> {
    let filter = config.wavelet_filter()?;
    let score_config = config.score_config()?;

    let gap = dominant_gap(series);
    debug!(gap = gap.gap, count = gap.count, "dominant sampling gap");

    let step = config.step.unwrap_or(gap.gap);
    let uniform = resample(series, step)?;
    info!(n_points = uniform.len(), step, "resampled onto uniform grid");

    // Re-validate the grid as a series; its gap histogram is the
    // diagnostic an operator eyeballs to confirm the spacing is clean.
    let resampled = TimeSeries::new(uniform.timestamps(), uniform.values().to_vec())?;
    debug!(histogram = ?gap_histogram(&resampled), "resampled gap histogram");

    let decomposition = decompose(resampled.values(), filter)?;
    let scores = score_residuals(decomposition.residual(), &score_config)?;
    info!(
        n_scores = scores.len(),
        mean = scores.mean(),
        std_dev = scores.std_dev(),
        "residuals scored"
    );

    Ok(Detection {
        gap,
        uniform,
        decomposition,
        scores,
    })
}
