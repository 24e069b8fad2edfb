//! Frame segmentation and windowing
//!
//! Splits a signal into overlapping frames and tapers them before the FFT

/// Split a signal into fixed-size overlapping frames
///
/// Frame k starts at k * hop_size. Only complete frames are emitted: a
/// trailing partial frame is dropped, never padded.
///
/// # Arguments
/// * `signal` - Input signal
/// * `frame_size` - Samples per frame
/// * `hop_size` - Samples between frame starts
///
/// # Returns
/// Frames as independent copies of the signal
pub fn frame_signal(signal: &[f64], frame_size: usize, hop_size: usize) -> Vec<Vec<f64>> {
    if frame_size == 0 || hop_size == 0 {
        return Vec::new();
    }

    signal
        .windows(frame_size)
        .step_by(hop_size)
        .map(<[f64]>::to_vec)
        .collect()
}

/// Apply window in-place
pub fn apply_window_inplace(signal: &mut [f64], window: &[f64]) {
    for (s, w) in signal.iter_mut().zip(window.iter()) {
        *s *= w;
    }
}
