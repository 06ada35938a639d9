//! Uniformly spaced series produced by resampling.

/// A time series whose timestamps form an arithmetic progression.
///
/// Spans from the original series' first timestamp up to (but not
/// including) its last, stepping by the inferred sampling interval.
/// Values are interpolated from the original series.
#[derive(Clone, Debug)]
pub struct UniformSeries {
    start: i64,
    step: i64,
    values: Vec<f64>,
}

impl UniformSeries {
    /// Creates a new `UniformSeries` (crate-internal constructor).
    pub(crate) fn new(start: i64, step: i64, values: Vec<f64>) -> Self {
        Self {
            start,
            step,
            values,
        }
    }

    /// Returns the first timestamp.
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Returns the step between consecutive timestamps.
    pub fn step(&self) -> i64 {
        self.step
    }

    /// Returns the interpolated values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the number of points.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the series has no points.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the timestamp at the given index.
    pub fn timestamp_at(&self, index: usize) -> i64 {
        self.start + self.step * index as i64
    }

    /// Materializes the full timestamp grid.
    pub fn timestamps(&self) -> Vec<i64> {
        (0..self.values.len())
            .map(|i| self.timestamp_at(i))
            .collect()
    }
}
