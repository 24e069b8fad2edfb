//! Low-pass FIR filter design using the windowing method

use super::windows::hamming_coefficient;
use std::f64::consts::PI;

/// Design a normalized low-pass FIR filter
///
/// # Algorithm
/// 1. Calculate the ideal impulse response (sinc centred at (M-1)/2)
/// 2. Multiply by a Hamming window of the same length
/// 3. Scale so the coefficients sum to 1.0 (unity DC gain)
///
/// # Arguments
/// * `cutoff_hz` - Cutoff frequency in Hz
/// * `sample_rate` - Sample rate of the signal being filtered, in Hz
/// * `num_taps` - Filter length, should be odd
///
/// # Note
/// With an even `num_taps` there is no centre tap and the kernel is the
/// plain sampled sinc. That case is left as is.
///
/// # Returns
/// Vector of filter coefficients h[n] for n = 0..num_taps-1
pub fn design_lowpass(cutoff_hz: f64, sample_rate: u32, num_taps: usize) -> Vec<f64> {
    let fc = cutoff_hz / sample_rate as f64;
    let m = num_taps.saturating_sub(1) as f64;
    let center = m / 2.0;

    let mut h: Vec<f64> = (0..num_taps)
        .map(|n| {
            let n_shifted = n as f64 - center;

            let h_ideal = if n_shifted == 0.0 {
                // sinc(0) limit
                2.0 * fc
            } else {
                (2.0 * PI * fc * n_shifted).sin() / (PI * n_shifted)
            };

            h_ideal * hamming_coefficient(n, m)
        })
        .collect();

    let sum: f64 = h.iter().sum();
    for coeff in h.iter_mut() {
        *coeff /= sum;
    }

    h
}
