//! WAV decoding into mono 16-bit samples
//!
//! Hands the pipeline exactly what it consumes: a flat mono `i16` buffer and
//! the sample rate. Multi-channel files are down-mixed by averaging.

use crate::error::{FingerprintError, Result};
use hound::{SampleFormat, WavReader};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Decode 16-bit PCM WAV data
///
/// # Returns
/// Mono samples and the sample rate in Hz
pub fn decode_wav<R: Read>(reader: R) -> Result<(Vec<i16>, u32)> {
    let mut reader = WavReader::new(reader)?;
    let spec = reader.spec();

    if spec.sample_format != SampleFormat::Int || spec.bits_per_sample != 16 {
        return Err(FingerprintError::UnsupportedWav(format!(
            "only 16-bit PCM is supported (got {}-bit {:?})",
            spec.bits_per_sample, spec.sample_format
        )));
    }
    if spec.channels == 0 {
        return Err(FingerprintError::UnsupportedWav("zero channels".into()));
    }

    let interleaved = reader
        .samples::<i16>()
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let samples = downmix(&interleaved, spec.channels as usize);
    log::debug!(
        "Decoded {} frames ({} channels) at {} Hz",
        samples.len(),
        spec.channels,
        spec.sample_rate
    );

    Ok((samples, spec.sample_rate))
}

/// Read and decode a 16-bit PCM WAV file
pub fn read_wav_file<P: AsRef<Path>>(path: P) -> Result<(Vec<i16>, u32)> {
    let file = File::open(path).map_err(hound::Error::IoError)?;
    decode_wav(BufReader::new(file))
}

/// Average interleaved channels into one, truncating toward zero
///
/// A trailing incomplete frame is dropped.
pub fn downmix(interleaved: &[i16], channels: usize) -> Vec<i16> {
    if channels <= 1 {
        return interleaved.to_vec();
    }

    interleaved
        .chunks_exact(channels)
        .map(|frame| {
            let sum: i32 = frame.iter().map(|&s| s as i32).sum();
            (sum / channels as i32) as i16
        })
        .collect()
}
