//! Half-open uniform index construction.

use crate::error::ResampleError;

/// Builds a uniform timestamp grid over the half-open range
/// `[start, end)`, stepping by `step`.
///
/// The end timestamp is excluded even when it lands exactly on a step
/// boundary, so the grid length is `ceil((end - start) / step)`. This
/// range convention is load-bearing: downstream residuals are aligned
/// index-for-index with this grid.
///
/// # Errors
///
/// Returns [`ResampleError::InvalidStep`] if `step <= 0`.
///
/// # Example
///
/// ```ignore
/// use panoptes_resample::uniform_grid;
///
/// assert_eq!(uniform_grid(0, 180, 60)?, vec![0, 60, 120]);
/// assert_eq!(uniform_grid(0, 190, 60)?, vec![0, 60, 120, 180]);
/// ```
pub fn uniform_grid(start: i64, end: i64, step: i64) -> Result<Vec<i64>, ResampleError> {
    if step <= 0 {
        return Err(ResampleError::InvalidStep { step });
    }
    let mut grid = Vec::new();
    let mut t = start;
    while t < end {
        grid.push(t);
        t += step;
    }
    Ok(grid)
}
