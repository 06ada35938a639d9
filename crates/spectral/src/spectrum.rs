//! Raw one-sided spectrum computation.

use num_complex::Complex;
use rustfft::FftPlanner;

use crate::error::SpectralError;

/// Computes the one-sided discrete Fourier transform of a real signal.
///
/// Returns the complex coefficients for the non-negative frequencies:
/// indices `0..=N/2`, i.e. `floor(N/2) + 1` values. The transform is
/// unnormalized (rustfft convention) and applies no windowing or
/// detrending.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`SpectralError::EmptySignal`] | empty input |
/// | [`SpectralError::NonFiniteData`] | NaN or infinity in the input |
///
/// # Example
///
/// ```ignore
/// use panoptes_spectral::one_sided_spectrum;
///
/// let spectrum = one_sided_spectrum(&signal)?;
/// assert_eq!(spectrum.len(), signal.len() / 2 + 1);
/// ```
pub fn one_sided_spectrum(signal: &[f64]) -> Result<Vec<Complex<f64>>, SpectralError> {
    if signal.is_empty() {
        return Err(SpectralError::EmptySignal);
    }
    if !signal.iter().all(|v| v.is_finite()) {
        return Err(SpectralError::NonFiniteData);
    }

    let n = signal.len();
    let mut buffer: Vec<Complex<f64>> = signal.iter().map(|&x| Complex::new(x, 0.0)).collect();

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(n);
    fft.process(&mut buffer);

    buffer.truncate(n / 2 + 1);
    Ok(buffer)
}

/// Returns the magnitude of each spectral coefficient.
pub fn magnitudes(spectrum: &[Complex<f64>]) -> Vec<f64> {
    spectrum.iter().map(|c| c.norm()).collect()
}
