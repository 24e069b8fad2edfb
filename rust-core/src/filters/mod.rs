//! FIR filter design and offline filtering

pub mod design;
pub mod fir;
pub mod windows;

pub use design::design_lowpass;
pub use fir::FirFilter;
pub use windows::hamming_window;
