//! Audio file input

pub mod wav;

pub use wav::{decode_wav, read_wav_file};
