//! Spectral analysis with FFT

pub mod fft;
pub mod spectrogram;
pub mod windowing;

pub use fft::{RealFftAnalyzer, SpectralAnalyzer};
pub use spectrogram::{compute_spectrogram, compute_spectrogram_with};
pub use windowing::{apply_window_inplace, frame_signal};
