//! # panoptes-wavelet
//!
//! Single-level discrete wavelet transform for trend/residual splitting.
//!
//! ## Analysis Pipeline
//!
//! ```mermaid
//! graph LR
//!     A["signal"] -->|"dwt(signal, filter)?"| B["DwtCoeffs"]
//!     B -->|"zero detail + idwt"| C["approximation"]
//!     C -->|"signal - approximation"| D["residual"]
//!     A -->|"decompose(signal, filter)?"| E["Decomposition"]
//!     E --> F[".approximation()"]
//!     E --> G[".residual()"]
//! ```
//!
//! ## Supported Filters
//!
//! | Filter | Length | Family |
//! |--------|--------|--------|
//! | [`WaveletFilter::Haar`] | 2 | Haar |
//! | [`WaveletFilter::D4`] | 4 | Daubechies |
//! | [`WaveletFilter::D6`] | 6 | Daubechies |
//! | [`WaveletFilter::D8`] | 8 | Daubechies |
//! | [`WaveletFilter::La8`] | 8 | Least Asymmetric |
//!
//! ## Quick Start
//!
//! ```ignore
//! use panoptes_wavelet::{WaveletFilter, decompose};
//!
//! let split = decompose(&values, WaveletFilter::D4)?;
//! for (a, r) in split.approximation().iter().zip(split.residual()) {
//!     println!("trend = {a}, residual = {r}");
//! }
//! ```

mod decompose;
mod dwt;
mod error;
mod filter;

pub use decompose::{Decomposition, decompose};
pub use dwt::{DwtCoeffs, dwt, idwt};
pub use error::WaveletError;
pub use filter::WaveletFilter;
