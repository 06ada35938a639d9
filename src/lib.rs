//! # panoptes
//!
//! Anomaly scoring for a single metric time series.
//!
//! Panoptes decomposes a series into a smooth trend and a residual,
//! then scores the residual against a Gaussian likelihood model. The
//! pipeline runs strictly forward, synchronously, on a complete,
//! already-collected sequence:
//!
//! ```mermaid
//! graph LR
//!     A["TimeSeries"] -->|"dominant_gap()"| B["step"]
//!     B -->|"resample()"| C["UniformSeries"]
//!     C -->|"decompose()"| D["residual"]
//!     D -->|"score_residuals()"| E["Detection"]
//!     C -.->|"one_sided_spectrum()"| F["Spectrum (optional)"]
//! ```
//!
//! Every stage fully consumes its input before the next begins, every
//! value is computed fresh per invocation, and any stage failure aborts
//! the whole run. There is no CLI: this crate is invoked as library
//! functions, typically from an interactive session.
//!
//! ## Quick Start
//!
//! ```ignore
//! use panoptes::{DetectorConfig, TimeSeries, detect};
//!
//! let ts = TimeSeries::new(timestamps, values)?;
//! let detection = detect(&ts, &DetectorConfig::default())?;
//! for (t, score) in detection.uniform().timestamps().iter().zip(detection.scores().scores()) {
//!     println!("{t}: {score:.3}");
//! }
//! ```
//!
//! Rendering is a separate, optional consumer: implement [`Render`]
//! and pass it to [`Detection::render_into`]. Computation never draws.

mod config;
mod error;
mod pipeline;
mod render;

pub use config::DetectorConfig;
pub use error::DetectError;
pub use pipeline::{Detection, detect};
pub use render::{NoopRender, Render};

pub use panoptes_fetch::{Credentials, FetchError, FileOptions, Session, load_delimited};
pub use panoptes_resample::{ResampleError, UniformSeries, resample, resample_auto, uniform_grid};
pub use panoptes_score::{ScoreConfig, ScoreError, ScoreMode, ScoreResult, score_residuals};
pub use panoptes_series::{
    DominantGap, SeriesError, TimeSeries, dominant_gap, gap_histogram,
};
pub use panoptes_spectral::{SpectralError, magnitudes, one_sided_spectrum};
pub use panoptes_wavelet::{Decomposition, WaveletError, WaveletFilter, decompose};
