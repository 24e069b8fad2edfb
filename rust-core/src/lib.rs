//! Audio Fingerprint - Content-Derived Hashes for Near-Duplicate Detection
//!
//! Low-pass filters and decimates a mono signal, computes a parallel
//! spectrogram, picks per-band spectral peaks and packs peak pairs into
//! 32-bit hashes.

pub mod config;
pub mod error;
pub mod filters;
pub mod fingerprint;
pub mod io;
pub mod spectrum;

pub use config::FingerprintConfig;
pub use error::{FingerprintError, Result};
pub use fingerprint::{fingerprint, Fingerprinter, HashFields, Peak};
