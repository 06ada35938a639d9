//! Trend/residual decomposition via approximation-only reconstruction.

use tracing::debug;

use crate::dwt::{dwt, idwt};
use crate::error::WaveletError;
use crate::filter::WaveletFilter;

/// Result of splitting a signal into trend and residual.
///
/// `approximation` is the signal reconstructed from the low-pass band
/// alone; `residual` is the pointwise difference from the original.
/// Both have exactly the input length, so
/// `approximation[i] + residual[i] == signal[i]` for every index.
#[derive(Clone, Debug)]
pub struct Decomposition {
    approximation: Vec<f64>,
    residual: Vec<f64>,
}

impl Decomposition {
    /// Returns the low-frequency approximation (trend).
    pub fn approximation(&self) -> &[f64] {
        &self.approximation
    }

    /// Returns the residual (original minus approximation).
    pub fn residual(&self) -> &[f64] {
        &self.residual
    }

    /// Returns the number of points.
    pub fn len(&self) -> usize {
        self.residual.len()
    }

    /// Returns `true` if the decomposition is empty.
    pub fn is_empty(&self) -> bool {
        self.residual.is_empty()
    }
}

/// Splits a uniform signal into a low-frequency approximation and a
/// residual.
///
/// Applies a single-level DWT, zeroes the detail band, reconstructs the
/// approximation-only signal, and truncates the trailing overhang
/// sample when boundary handling produces one. The residual is the
/// original signal minus the approximation, index for index.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`WaveletError::SignalTooShort`] | signal shorter than the filter |
/// | [`WaveletError::NonFiniteData`] | NaN or infinity in the signal |
///
/// # Example
///
/// ```ignore
/// use panoptes_wavelet::{WaveletFilter, decompose};
///
/// let split = decompose(&signal, WaveletFilter::D4)?;
/// assert_eq!(split.residual().len(), signal.len());
/// ```
pub fn decompose(signal: &[f64], filter: WaveletFilter) -> Result<Decomposition, WaveletError> {
    let coeffs = dwt(signal, filter)?;
    let mut approximation = idwt(&coeffs.without_detail());

    if approximation.len() > signal.len() {
        debug!(
            overhang = approximation.len() - signal.len(),
            filter = ?filter,
            "truncating reconstruction overhang"
        );
        approximation.truncate(signal.len());
    }

    let residual = signal
        .iter()
        .zip(&approximation)
        .map(|(s, a)| s - a)
        .collect();

    Ok(Decomposition {
        approximation,
        residual,
    })
}
