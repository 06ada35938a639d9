//! # panoptes-resample
//!
//! Uniform-grid resampling for irregularly spaced time series.
//!
//! ## Pipeline
//!
//! ```mermaid
//! graph LR
//!     A["TimeSeries"] -->|"dominant_gap()"| B["step"]
//!     A -->|"LinearInterpolant::fit"| C["interpolant"]
//!     B -->|"uniform_grid()"| D["half-open index"]
//!     C -->|"eval at each index"| E["UniformSeries"]
//! ```
//!
//! The grid is half-open: it spans from the first to the last original
//! timestamp but excludes the final point, even when it lands exactly
//! on a step boundary. Output length is
//! therefore always `ceil((t_last - t_first) / step)`.
//!
//! ## Quick Start
//!
//! ```ignore
//! use panoptes_resample::resample_auto;
//! use panoptes_series::TimeSeries;
//!
//! let ts = TimeSeries::new(vec![0, 60, 120, 180], vec![1.0, 2.0, 4.0, 8.0])?;
//! let uniform = resample_auto(&ts)?;
//! assert_eq!(uniform.step(), 60);
//! assert_eq!(uniform.len(), 3);
//! ```

mod error;
mod grid;
mod interp;
mod resample;
mod result;

pub use error::ResampleError;
pub use grid::uniform_grid;
pub use interp::LinearInterpolant;
pub use resample::{resample, resample_auto};
pub use result::UniformSeries;
