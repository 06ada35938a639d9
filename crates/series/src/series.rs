//! Validated time-series container.

use crate::error::SeriesError;

/// A validated time series of `(timestamp, value)` pairs.
///
/// Guarantees:
/// - at least 2 points
/// - timestamps strictly increasing (unique, sorted)
/// - all values finite (no NaN or infinity)
///
/// Consumers must not assume uniform spacing; see
/// [`dominant_gap`](crate::dominant_gap) for the inferred sampling
/// interval.
///
/// # Example
///
/// ```ignore
/// use panoptes_series::TimeSeries;
///
/// let ts = TimeSeries::new(vec![0, 60, 120], vec![1.0, 2.0, 3.0])?;
/// assert_eq!(ts.len(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct TimeSeries {
    timestamps: Vec<i64>,
    values: Vec<f64>,
}

impl TimeSeries {
    /// Creates a new `TimeSeries` after validating the data.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`SeriesError::LengthMismatch`] | `timestamps.len() != values.len()` |
    /// | [`SeriesError::TooShort`] | fewer than 2 points |
    /// | [`SeriesError::NonMonotonic`] | duplicate or unsorted timestamps |
    /// | [`SeriesError::NonFiniteValue`] | any value is NaN or infinite |
    pub fn new(timestamps: Vec<i64>, values: Vec<f64>) -> Result<Self, SeriesError> {
        if timestamps.len() != values.len() {
            return Err(SeriesError::LengthMismatch {
                timestamps: timestamps.len(),
                values: values.len(),
            });
        }
        if timestamps.len() < 2 {
            return Err(SeriesError::TooShort {
                len: timestamps.len(),
                min: 2,
            });
        }
        for i in 1..timestamps.len() {
            if timestamps[i] <= timestamps[i - 1] {
                return Err(SeriesError::NonMonotonic { index: i });
            }
        }
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(SeriesError::NonFiniteValue { index });
        }
        Ok(Self { timestamps, values })
    }

    /// Creates a `TimeSeries` from an ordered sequence of
    /// `(timestamp, value)` pairs.
    ///
    /// This is the constructor used for already-parsed metric payloads,
    /// which arrive as an ordered integer-to-float mapping.
    ///
    /// # Errors
    ///
    /// Same validation as [`TimeSeries::new`].
    pub fn from_pairs<I>(pairs: I) -> Result<Self, SeriesError>
    where
        I: IntoIterator<Item = (i64, f64)>,
    {
        let (timestamps, values) = pairs.into_iter().unzip();
        Self::new(timestamps, values)
    }

    /// Returns the timestamps as a slice.
    pub fn timestamps(&self) -> &[i64] {
        &self.timestamps
    }

    /// Returns the values as a slice.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the number of points.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Returns `true` if the series is empty.
    ///
    /// Note: a valid `TimeSeries` is never empty (minimum length is 2).
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Returns the first timestamp.
    pub fn first_timestamp(&self) -> i64 {
        self.timestamps[0]
    }

    /// Returns the last timestamp.
    pub fn last_timestamp(&self) -> i64 {
        self.timestamps[self.timestamps.len() - 1]
    }

    /// Returns an iterator over `(timestamp, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (i64, f64)> + '_ {
        self.timestamps
            .iter()
            .copied()
            .zip(self.values.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid_series() {
        let ts = TimeSeries::new(vec![0, 60, 120], vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(ts.len(), 3);
        assert!(!ts.is_empty());
        assert_eq!(ts.timestamps(), &[0, 60, 120]);
        assert_eq!(ts.values(), &[1.0, 2.0, 3.0]);
        assert_eq!(ts.first_timestamp(), 0);
        assert_eq!(ts.last_timestamp(), 120);
    }

    #[test]
    fn new_minimum_length() {
        let ts = TimeSeries::new(vec![5, 6], vec![1.0, 2.0]).unwrap();
        assert_eq!(ts.len(), 2);
    }

    #[test]
    fn new_length_mismatch() {
        let err = TimeSeries::new(vec![0, 1, 2], vec![1.0, 2.0]).unwrap_err();
        assert!(matches!(
            err,
            SeriesError::LengthMismatch {
                timestamps: 3,
                values: 2,
            }
        ));
    }

    #[test]
    fn new_too_short_empty() {
        let err = TimeSeries::new(vec![], vec![]).unwrap_err();
        assert!(matches!(err, SeriesError::TooShort { len: 0, min: 2 }));
    }

    #[test]
    fn new_too_short_one() {
        let err = TimeSeries::new(vec![0], vec![1.0]).unwrap_err();
        assert!(matches!(err, SeriesError::TooShort { len: 1, min: 2 }));
    }

    #[test]
    fn new_duplicate_timestamps_rejected() {
        let err = TimeSeries::new(vec![0, 60, 60], vec![1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, SeriesError::NonMonotonic { index: 2 }));
    }

    #[test]
    fn new_unsorted_timestamps_rejected() {
        let err = TimeSeries::new(vec![0, 120, 60], vec![1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, SeriesError::NonMonotonic { index: 2 }));
    }

    #[test]
    fn new_nan_rejected() {
        let err = TimeSeries::new(vec![0, 1, 2], vec![1.0, f64::NAN, 3.0]).unwrap_err();
        assert!(matches!(err, SeriesError::NonFiniteValue { index: 1 }));
    }

    #[test]
    fn new_infinity_rejected() {
        let err = TimeSeries::new(vec![0, 1], vec![1.0, f64::INFINITY]).unwrap_err();
        assert!(matches!(err, SeriesError::NonFiniteValue { index: 1 }));
    }

    #[test]
    fn new_negative_timestamps_allowed() {
        let ts = TimeSeries::new(vec![-120, -60, 0], vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(ts.first_timestamp(), -120);
    }

    #[test]
    fn from_pairs_round_trip() {
        let ts = TimeSeries::from_pairs([(0, 1.0), (60, 2.0), (120, 4.0)]).unwrap();
        assert_eq!(ts.timestamps(), &[0, 60, 120]);
        assert_eq!(ts.values(), &[1.0, 2.0, 4.0]);
    }

    #[test]
    fn from_pairs_unsorted_rejected() {
        let err = TimeSeries::from_pairs([(60, 1.0), (0, 2.0)]).unwrap_err();
        assert!(matches!(err, SeriesError::NonMonotonic { index: 1 }));
    }

    #[test]
    fn iter_pairs() {
        let ts = TimeSeries::new(vec![0, 60], vec![1.0, 2.0]).unwrap();
        let pairs: Vec<(i64, f64)> = ts.iter().collect();
        assert_eq!(pairs, vec![(0, 1.0), (60, 2.0)]);
    }

    #[test]
    fn series_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<TimeSeries>();
    }

    #[test]
    fn series_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<TimeSeries>();
    }
}
