//! Piecewise-linear interpolation over a validated time series.

use panoptes_series::TimeSeries;

use crate::error::ResampleError;

/// A 1-D piecewise-linear interpolant over `(timestamp, value)` pairs.
///
/// The interpolant's domain is the closed interval from the first to
/// the last fitted timestamp; evaluation outside it is an error, never
/// an extrapolation. A [`TimeSeries`] already guarantees unique, sorted
/// timestamps, which is exactly the domain requirement; duplicate or
/// unsorted inputs fail at series construction.
#[derive(Clone, Debug)]
pub struct LinearInterpolant {
    timestamps: Vec<i64>,
    values: Vec<f64>,
}

impl LinearInterpolant {
    /// Fits the interpolant to the given series.
    pub fn fit(series: &TimeSeries) -> Self {
        Self {
            timestamps: series.timestamps().to_vec(),
            values: series.values().to_vec(),
        }
    }

    /// Returns the first timestamp of the domain.
    pub fn domain_start(&self) -> i64 {
        self.timestamps[0]
    }

    /// Returns the last timestamp of the domain.
    pub fn domain_end(&self) -> i64 {
        self.timestamps[self.timestamps.len() - 1]
    }

    /// Evaluates the interpolant at `t`.
    ///
    /// Timestamps that coincide with a fitted point return the fitted
    /// value exactly; the interpolant passes through its data points.
    ///
    /// # Errors
    ///
    /// Returns [`ResampleError::OutOfBounds`] if `t` lies outside the
    /// fitted domain.
    pub fn eval(&self, t: i64) -> Result<f64, ResampleError> {
        if t < self.domain_start() || t > self.domain_end() {
            return Err(ResampleError::OutOfBounds {
                t,
                start: self.domain_start(),
                end: self.domain_end(),
            });
        }
        match self.timestamps.binary_search(&t) {
            Ok(i) => Ok(self.values[i]),
            Err(i) => {
                // t strictly between timestamps[i - 1] and timestamps[i].
                let (t0, t1) = (self.timestamps[i - 1], self.timestamps[i]);
                let (v0, v1) = (self.values[i - 1], self.values[i]);
                let frac = (t - t0) as f64 / (t1 - t0) as f64;
                Ok(v0 + frac * (v1 - v0))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn fit(timestamps: Vec<i64>, values: Vec<f64>) -> LinearInterpolant {
        LinearInterpolant::fit(&TimeSeries::new(timestamps, values).unwrap())
    }

    #[test]
    fn eval_at_data_points_is_exact() {
        let interp = fit(vec![0, 60, 120], vec![1.0, 2.5, -4.0]);
        assert_eq!(interp.eval(0).unwrap(), 1.0);
        assert_eq!(interp.eval(60).unwrap(), 2.5);
        assert_eq!(interp.eval(120).unwrap(), -4.0);
    }

    #[test]
    fn eval_midpoint() {
        let interp = fit(vec![0, 100], vec![0.0, 10.0]);
        assert_relative_eq!(interp.eval(50).unwrap(), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn eval_quarter_point() {
        let interp = fit(vec![0, 100], vec![8.0, 4.0]);
        assert_relative_eq!(interp.eval(25).unwrap(), 7.0, epsilon = 1e-12);
    }

    #[test]
    fn eval_across_segments() {
        let interp = fit(vec![0, 10, 30], vec![0.0, 10.0, 0.0]);
        assert_relative_eq!(interp.eval(5).unwrap(), 5.0, epsilon = 1e-12);
        assert_relative_eq!(interp.eval(20).unwrap(), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn eval_before_domain_errors() {
        let interp = fit(vec![0, 100], vec![0.0, 1.0]);
        let err = interp.eval(-1).unwrap_err();
        assert!(matches!(
            err,
            ResampleError::OutOfBounds {
                t: -1,
                start: 0,
                end: 100,
            }
        ));
    }

    #[test]
    fn eval_after_domain_errors() {
        let interp = fit(vec![0, 100], vec![0.0, 1.0]);
        let err = interp.eval(101).unwrap_err();
        assert!(matches!(err, ResampleError::OutOfBounds { t: 101, .. }));
    }

    #[test]
    fn domain_accessors() {
        let interp = fit(vec![-30, 0, 90], vec![0.0, 1.0, 2.0]);
        assert_eq!(interp.domain_start(), -30);
        assert_eq!(interp.domain_end(), 90);
    }

    #[test]
    fn interpolant_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<LinearInterpolant>();
    }
}
