//! Error types for the fingerprinting pipeline

use thiserror::Error;

/// Errors surfaced by the fingerprinting pipeline and its collaborators
#[derive(Error, Debug)]
pub enum FingerprintError {
    #[error("Sample rate {sample_rate} Hz is lower than the target sample rate {target} Hz")]
    InvalidSampleRate { sample_rate: u32, target: u32 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Hamming window needs at least 2 samples (requested {0})")]
    InvalidWindowLength(usize),

    #[error("Frame has {actual} samples, expected {expected}")]
    FrameLengthMismatch { expected: usize, actual: usize },

    #[error("FFT processing failed: {0}")]
    Fft(String),

    #[error("Failed to read WAV data: {0}")]
    Wav(#[from] hound::Error),

    #[error("Unsupported WAV format: {0}")]
    UnsupportedWav(String),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, FingerprintError>;
