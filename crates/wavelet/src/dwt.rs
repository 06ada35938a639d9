//! Single-level discrete wavelet transform (DWT).

use crate::error::WaveletError;
use crate::filter::WaveletFilter;

/// Single-level DWT coefficients.
///
/// Contains the approximation (low-pass) and detail (high-pass)
/// coefficients, each of length `floor((N + L - 1) / 2)` for a signal
/// of length `N` and a filter of length `L`.
#[derive(Clone, Debug)]
pub struct DwtCoeffs {
    approx: Vec<f64>,
    detail: Vec<f64>,
    filter: WaveletFilter,
}

impl DwtCoeffs {
    /// Creates a new `DwtCoeffs` (crate-internal constructor).
    ///
    /// Invariant: `approx` and `detail` have equal lengths.
    pub(crate) fn new(approx: Vec<f64>, detail: Vec<f64>, filter: WaveletFilter) -> Self {
        debug_assert_eq!(approx.len(), detail.len());
        Self {
            approx,
            detail,
            filter,
        }
    }

    /// Returns the approximation (low-pass) coefficients.
    pub fn approx(&self) -> &[f64] {
        &self.approx
    }

    /// Returns the detail (high-pass) coefficients.
    pub fn detail(&self) -> &[f64] {
        &self.detail
    }

    /// Returns the number of coefficients per band.
    pub fn len(&self) -> usize {
        self.approx.len()
    }

    /// Returns `true` if the coefficient vectors are empty.
    pub fn is_empty(&self) -> bool {
        self.approx.is_empty()
    }

    /// Returns the wavelet filter used.
    pub fn filter(&self) -> WaveletFilter {
        self.filter
    }

    /// Returns a copy with the detail band zeroed, keeping only the
    /// low-pass trend.
    pub fn without_detail(&self) -> Self {
        Self {
            approx: self.approx.clone(),
            detail: vec![0.0; self.detail.len()],
            filter: self.filter,
        }
    }
}

/// Reads the signal at a possibly out-of-range index using half-point
/// symmetric extension: `[... x1 x0 | x0 x1 ... xn-1 | xn-1 xn-2 ...]`.
///
/// Valid for excursions up to one full reflection, which `dwt`'s
/// minimum-length check guarantees.
fn ext(x: &[f64], i: isize) -> f64 {
    let n = x.len() as isize;
    let idx = if i < 0 {
        -i - 1
    } else if i >= n {
        2 * n - 1 - i
    } else {
        i
    };
    x[idx as usize]
}

/// Convolves the symmetric extension of `x` with `f` and keeps every
/// second sample (odd phase).
fn convolve_down(x: &[f64], f: &[f64]) -> Vec<f64> {
    let n = x.len() as isize;
    let l = f.len() as isize;
    let mut out = Vec::with_capacity(((n + l - 1) / 2) as usize);
    let mut i = 1;
    while i < n + l - 1 {
        let mut sum = 0.0;
        for (j, &fj) in f.iter().enumerate() {
            sum += fj * ext(x, i - j as isize);
        }
        out.push(sum);
        i += 2;
    }
    out
}

/// Computes the single-level DWT of a real signal.
///
/// The signal is extended by half-point symmetric replication at both
/// boundaries, convolved with the decomposition filters, and
/// downsampled by two. Each output band has
/// `floor((N + L - 1) / 2)` coefficients. Deterministic given
/// `(signal, filter)`.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`WaveletError::SignalTooShort`] | `signal.len()` < filter length |
/// | [`WaveletError::NonFiniteData`] | any sample is NaN or infinite |
pub fn dwt(signal: &[f64], filter: WaveletFilter) -> Result<DwtCoeffs, WaveletError> {
    let l = filter.length();
    if signal.len() < l {
        return Err(WaveletError::SignalTooShort {
            len: signal.len(),
            min: l,
        });
    }
    if !signal.iter().all(|v| v.is_finite()) {
        return Err(WaveletError::NonFiniteData);
    }

    let approx = convolve_down(signal, &filter.dec_lo());
    let detail = convolve_down(signal, &filter.dec_hi());
    Ok(DwtCoeffs::new(approx, detail, filter))
}

/// Reconstructs a signal from single-level DWT coefficients.
///
/// Upsamples both bands, convolves with the reconstruction filters, and
/// keeps the valid central part. Output length is `2*M - L + 2` for `M`
/// coefficients per band: the original signal length for even inputs,
/// one extra trailing sample for odd inputs.
pub fn idwt(coeffs: &DwtCoeffs) -> Vec<f64> {
    let rec_lo = coeffs.filter().scaling_coeffs();
    let rec_hi = coeffs.filter().wavelet_coeffs();
    let half = rec_lo.len() / 2;
    let m = coeffs.len();

    let mut out = Vec::with_capacity(2 * m + 2 - 2 * half);
    for i in (half - 1)..m {
        let mut even = 0.0;
        let mut odd = 0.0;
        for j in 0..half {
            let ca = coeffs.approx()[i - j];
            let cd = coeffs.detail()[i - j];
            even += ca * rec_lo[2 * j] + cd * rec_hi[2 * j];
            odd += ca * rec_lo[2 * j + 1] + cd * rec_hi[2 * j + 1];
        }
        out.push(even);
        out.push(odd);
    }
    out
}
