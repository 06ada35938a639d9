//! # panoptes-series
//!
//! Validated time-series container and sampling-gap analysis.
//!
//! A [`TimeSeries`] couples strictly increasing integer timestamps with
//! finite values. The gap analyzer infers the dominant sampling interval
//! of an irregularly spaced index from the mode of adjacent timestamp
//! differences.
//!
//! ## Quick Start
//!
//! ```ignore
//! use panoptes_series::{TimeSeries, dominant_gap};
//!
//! let ts = TimeSeries::new(vec![0, 60, 120, 240], vec![1.0, 2.0, 4.0, 3.0])?;
//! let gap = dominant_gap(&ts);
//! assert_eq!(gap.gap, 60);
//! assert_eq!(gap.count, 2);
//! ```

mod error;
mod gaps;
mod series;

pub use error::SeriesError;
pub use gaps::{DominantGap, dominant_gap, gap_histogram};
pub use series::TimeSeries;
