//! Peak extraction, hashing and the end-to-end fingerprinting pipeline

pub mod hash;
pub mod peaks;
pub mod pipeline;

pub use hash::{hash_peaks, HashFields};
pub use peaks::{detect_peaks, Peak};
pub use pipeline::{fingerprint, Fingerprinter};
