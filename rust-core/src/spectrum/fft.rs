//! FFT engine using realfft for real-valued frames
//!
//! The spectrogram only needs magnitudes of the non-redundant half of a real
//! DFT, so the transform sits behind [`SpectralAnalyzer`] and any correct
//! real FFT can be swapped in.

use crate::error::{FingerprintError, Result};
use num_complex::Complex;
use realfft::{RealFftPlanner, RealToComplex};
use std::sync::Arc;

/// Magnitude spectrum of a real-valued frame
pub trait SpectralAnalyzer: Send + Sync {
    /// Compute |X[k]| for k = 0..len/2 (positive frequencies only)
    ///
    /// The frame may be used as scratch space and is left in an
    /// unspecified state.
    fn magnitude_spectrum(&self, frame: &mut [f64]) -> Result<Vec<f64>>;
}

/// Real FFT analyzer planned for one frame length
///
/// The plan is shared read-only, so one analyzer can serve every worker
/// thread of the spectrogram.
pub struct RealFftAnalyzer {
    /// FFT size (number of samples)
    fft_size: usize,

    /// Real FFT processor
    r2c: Arc<dyn RealToComplex<f64>>,
}

impl RealFftAnalyzer {
    /// Create new analyzer
    ///
    /// # Arguments
    /// * `fft_size` - Frame length the analyzer accepts
    pub fn new(fft_size: usize) -> Self {
        let mut planner = RealFftPlanner::<f64>::new();
        let r2c = planner.plan_fft_forward(fft_size);

        Self { fft_size, r2c }
    }

    /// Get FFT size
    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    /// Get number of frequency bins (fft_size/2 + 1 for real FFT)
    pub fn num_bins(&self) -> usize {
        self.fft_size / 2 + 1
    }
}

impl SpectralAnalyzer for RealFftAnalyzer {
    fn magnitude_spectrum(&self, frame: &mut [f64]) -> Result<Vec<f64>> {
        if frame.is_empty() {
            return Err(FingerprintError::InvalidWindowLength(0));
        }
        if frame.len() != self.fft_size {
            return Err(FingerprintError::FrameLengthMismatch {
                expected: self.fft_size,
                actual: frame.len(),
            });
        }

        let mut spectrum = self.r2c.make_output_vec();
        self.r2c
            .process(frame, &mut spectrum)
            .map_err(|e| FingerprintError::Fft(e.to_string()))?;

        Ok(magnitudes(&spectrum))
    }
}

/// Modulus of each complex coefficient
pub fn magnitudes(spectrum: &[Complex<f64>]) -> Vec<f64> {
    spectrum.iter().map(|c| c.norm()).collect()
}

/// Convenience wrapper: plan for the frame's length and analyze it once
///
/// An empty frame has no spectrum and is rejected with `InvalidWindowLength`.
pub fn magnitude_spectrum(frame: &[f64]) -> Result<Vec<f64>> {
    if frame.is_empty() {
        return Err(FingerprintError::InvalidWindowLength(0));
    }

    let mut buffer = frame.to_vec();
    let analyzer = RealFftAnalyzer::new(frame.len());
    analyzer.magnitude_spectrum(&mut buffer)
}
