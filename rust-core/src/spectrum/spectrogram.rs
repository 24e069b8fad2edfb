//! Parallel spectrogram computation
//!
//! Every frame is windowed and transformed independently on the rayon pool.
//! Each task owns its frame and writes only its own output slot; the call
//! returns once all frames are done, in input order.

use super::fft::{RealFftAnalyzer, SpectralAnalyzer};
use super::windowing::apply_window_inplace;
use crate::error::{FingerprintError, Result};
use rayon::prelude::*;

/// Compute the magnitude spectrogram of `frames` with the default FFT
///
/// # Arguments
/// * `frames` - Equal-length frames (consumed; windowed in place)
/// * `window` - Window applied to every frame, same length as the frames
///
/// # Returns
/// One magnitude vector of length `window.len()/2 + 1` per frame
pub fn compute_spectrogram(frames: Vec<Vec<f64>>, window: &[f64]) -> Result<Vec<Vec<f64>>> {
    if frames.is_empty() {
        return Ok(Vec::new());
    }
    if window.is_empty() {
        return Err(FingerprintError::InvalidWindowLength(0));
    }

    let analyzer = RealFftAnalyzer::new(window.len());
    compute_spectrogram_with(frames, window, &analyzer)
}

/// Compute the magnitude spectrogram with a caller-supplied analyzer
pub fn compute_spectrogram_with<A>(
    frames: Vec<Vec<f64>>,
    window: &[f64],
    analyzer: &A,
) -> Result<Vec<Vec<f64>>>
where
    A: SpectralAnalyzer + ?Sized,
{
    frames
        .into_par_iter()
        .map(|mut frame| {
            if frame.len() != window.len() {
                return Err(FingerprintError::FrameLengthMismatch {
                    expected: window.len(),
                    actual: frame.len(),
                });
            }

            apply_window_inplace(&mut frame, window);
            analyzer.magnitude_spectrum(&mut frame)
        })
        .collect()
}
