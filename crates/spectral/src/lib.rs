//! # panoptes-spectral
//!
//! One-sided discrete Fourier transform of a real signal.
//!
//! An independent, optional branch of the anomaly pipeline: it consumes
//! the same raw or resampled values and produces the non-negative
//! frequency half of the spectrum for exploratory inspection. No
//! windowing, no detrending, just the raw transform.
//!
//! ## Quick Start
//!
//! ```ignore
//! use panoptes_spectral::{magnitudes, one_sided_spectrum};
//!
//! let spectrum = one_sided_spectrum(&values)?;
//! assert_eq!(spectrum.len(), values.len() / 2 + 1);
//! let mags = magnitudes(&spectrum);
//! ```

mod error;
mod spectrum;

pub use error::SpectralError;
pub use spectrum::{magnitudes, one_sided_spectrum};
