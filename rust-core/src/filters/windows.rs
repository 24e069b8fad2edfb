//! Hamming window shared by filter design and spectral analysis

use crate::error::{FingerprintError, Result};
use std::f64::consts::PI;

/// Hamming coefficient for tap `n` of a window spanning `m + 1` samples
///
/// w[n] = 0.54 - 0.46*cos(2πn/m)
#[inline]
pub(crate) fn hamming_coefficient(n: usize, m: f64) -> f64 {
    0.54 - 0.46 * (2.0 * PI * n as f64 / m).cos()
}

/// Generate a Hamming window
///
/// Mainlobe width: 8π/M, Sidelobe attenuation: ~53 dB
///
/// # Arguments
/// * `length` - Number of samples (M), at least 2
///
/// # Returns
/// Vector of window coefficients w[n] for n = 0..M-1
pub fn hamming_window(length: usize) -> Result<Vec<f64>> {
    if length < 2 {
        return Err(FingerprintError::InvalidWindowLength(length));
    }

    let m = (length - 1) as f64;
    Ok((0..length).map(|n| hamming_coefficient(n, m)).collect())
}
