//! Resampling onto a uniform grid.

use panoptes_series::{TimeSeries, dominant_gap};

use crate::error::ResampleError;
use crate::grid::uniform_grid;
use crate::interp::LinearInterpolant;
use crate::result::UniformSeries;

/// Resamples a series onto a uniform grid with the given step.
///
/// Builds the half-open index `[t_first, t_last)` and evaluates a
/// piecewise-linear interpolant at every grid point. Grid points are
/// within the interpolant's domain by construction, so no extrapolation
/// occurs.
///
/// # Errors
///
/// Returns [`ResampleError::InvalidStep`] if `step <= 0`.
///
/// # Example
///
/// ```ignore
/// use panoptes_resample::resample;
/// use panoptes_series::TimeSeries;
///
/// let ts = TimeSeries::new(vec![0, 60, 180], vec![0.0, 6.0, 18.0])?;
/// let uniform = resample(&ts, 60)?;
/// assert_eq!(uniform.values(), &[0.0, 6.0, 12.0]);
/// ```
pub fn resample(series: &TimeSeries, step: i64) -> Result<UniformSeries, ResampleError> {
    let grid = uniform_grid(series.first_timestamp(), series.last_timestamp(), step)?;
    let interp = LinearInterpolant::fit(series);
    let values = grid
        .iter()
        .map(|&t| interp.eval(t))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(UniformSeries::new(series.first_timestamp(), step, values))
}

/// Resamples a series using its dominant gap as the step.
///
/// This is the pipeline default: the step is the mode of adjacent
/// timestamp differences.
///
/// # Errors
///
/// Returns [`ResampleError::InvalidStep`] if the dominant gap is not
/// positive (cannot happen for a validated series, but kept as a
/// contract on the step).
pub fn resample_auto(series: &TimeSeries) -> Result<UniformSeries, ResampleError> {
    resample(series, dominant_gap(series).gap)
}
