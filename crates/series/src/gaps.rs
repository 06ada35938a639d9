//! Sampling-gap analysis for irregularly spaced time indices.

use std::collections::BTreeMap;

use crate::series::TimeSeries;

/// The dominant sampling interval of a time series.
///
/// `gap` is the statistical mode of adjacent timestamp differences;
/// `count` is how often that difference occurs. The resampler consumes
/// `gap` as its step size, while gap-analysis reports `count` as the
/// mode frequency. Not guaranteed to be the true interval for
/// multi-modal gap distributions; an acknowledged approximation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DominantGap {
    /// The most frequent adjacent timestamp difference.
    pub gap: i64,
    /// Number of adjacent pairs separated by exactly `gap`.
    pub count: usize,
}

/// Counts the occurrences of each adjacent timestamp difference.
///
/// A diagnostic view of the sampling structure. The pipeline logs this
/// histogram rather than returning it from the scoring path.
///
/// # Example
///
/// ```ignore
/// use panoptes_series::{TimeSeries, gap_histogram};
///
/// let ts = TimeSeries::new(vec![0, 60, 120, 240], vec![0.0; 4])?;
/// let hist = gap_histogram(&ts);
/// assert_eq!(hist[&60], 2);
/// assert_eq!(hist[&120], 1);
/// ```
pub fn gap_histogram(series: &TimeSeries) -> BTreeMap<i64, usize> {
    let mut hist = BTreeMap::new();
    for pair in series.timestamps().windows(2) {
        *hist.entry(pair[1] - pair[0]).or_insert(0) += 1;
    }
    hist
}

/// Returns the mode of adjacent timestamp differences and its frequency.
///
/// Ties break toward the smaller gap, deterministically. A valid
/// [`TimeSeries`] always has at least one adjacent pair, so this never
/// fails; series with fewer than 2 points are rejected at construction.
///
/// # Example
///
/// ```ignore
/// use panoptes_series::{TimeSeries, dominant_gap};
///
/// let ts = TimeSeries::new(vec![0, 60, 120, 240], vec![0.0; 4])?;
/// let gap = dominant_gap(&ts);
/// assert_eq!((gap.gap, gap.count), (60, 2));
/// ```
pub fn dominant_gap(series: &TimeSeries) -> DominantGap {
    let hist = gap_histogram(series);
    // BTreeMap iterates in ascending gap order; strict > keeps the
    // smallest gap on ties.
    let mut best = DominantGap { gap: 0, count: 0 };
    for (&gap, &count) in &hist {
        if count > best.count {
            best = DominantGap { gap, count };
        }
    }
    best
}
