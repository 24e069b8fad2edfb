//! Fingerprinting pipeline
//!
//! Runs the stages in fixed order:
//! normalize → low-pass → decimate → frame → window + FFT → peaks → hashes.
//! Everything is sequential except the spectrogram, which fans out per frame.

use super::hash::hash_peaks;
use super::peaks::{detect_peaks, Peak};
use crate::config::FingerprintConfig;
use crate::error::{FingerprintError, Result};
use crate::filters::{design_lowpass, hamming_window, FirFilter};
use crate::spectrum::{compute_spectrogram, frame_signal};

/// Full-scale value of a 16-bit sample
const I16_SCALE: f64 = 32768.0;

/// Fingerprint generator for one configuration
///
/// Holds no per-call state, so a single instance can be shared and several
/// configurations can coexist in one process.
#[derive(Debug, Clone, Default)]
pub struct Fingerprinter {
    config: FingerprintConfig,
}

impl Fingerprinter {
    /// Create a fingerprinter, rejecting unusable configurations
    pub fn new(config: FingerprintConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get current configuration
    pub fn config(&self) -> &FingerprintConfig {
        &self.config
    }

    /// Normalize, low-pass filter and decimate to the target rate
    ///
    /// The decimation factor is `sample_rate / target_sample_rate` rounded
    /// down, so a rate that is not an exact multiple of the target ends up
    /// slightly above it.
    ///
    /// # Errors
    /// `InvalidSampleRate` if `sample_rate` is below the target rate
    pub fn preprocess(&self, samples: &[i16], sample_rate: u32) -> Result<Vec<f64>> {
        let target = self.config.target_sample_rate;
        if sample_rate < target {
            return Err(FingerprintError::InvalidSampleRate {
                sample_rate,
                target,
            });
        }

        let factor = (sample_rate / target) as usize;
        if sample_rate % target != 0 {
            log::warn!(
                "Sample rate {} Hz is not a multiple of {} Hz; decimating by {} gives {} Hz",
                sample_rate,
                target,
                factor,
                sample_rate / factor as u32
            );
        }

        let cutoff = self.config.cutoff_hz();
        let taps = self.config.filter_taps;
        let filter = FirFilter::new(design_lowpass(cutoff, sample_rate, taps));
        let filtered = filter.apply(&normalize(samples));

        let decimated = decimate(&filtered, factor);
        log::debug!(
            "Preprocessed {} samples at {} Hz into {} samples ({}-tap filter, factor {})",
            samples.len(),
            sample_rate,
            decimated.len(),
            filter.length(),
            factor
        );

        Ok(decimated)
    }

    /// Run the pipeline up to the magnitude spectrogram
    pub fn spectrogram(&self, samples: &[i16], sample_rate: u32) -> Result<Vec<Vec<f64>>> {
        let signal = self.preprocess(samples, sample_rate)?;

        let frames = frame_signal(&signal, self.config.frame_size, self.config.hop_size);
        let window = hamming_window(self.config.frame_size)?;
        log::debug!(
            "Computing spectrogram: {} frames of {} samples",
            frames.len(),
            self.config.frame_size
        );

        compute_spectrogram(frames, &window)
    }

    /// Run the pipeline up to peak detection
    pub fn peaks(&self, samples: &[i16], sample_rate: u32) -> Result<Vec<Peak>> {
        let spectrogram = self.spectrogram(samples, sample_rate)?;
        let peaks = detect_peaks(&spectrogram, self.config.num_bands);
        log::debug!(
            "Detected {} peaks in {} frames",
            peaks.len(),
            spectrogram.len()
        );

        Ok(peaks)
    }

    /// Generate the fingerprint hashes of a mono 16-bit signal
    ///
    /// # Arguments
    /// * `samples` - Mono PCM samples
    /// * `sample_rate` - Sample rate in Hz, at least the target rate
    pub fn fingerprint(&self, samples: &[i16], sample_rate: u32) -> Result<Vec<u32>> {
        let peaks = self.peaks(samples, sample_rate)?;
        let hashes = hash_peaks(&peaks, self.config.target_zone_frames);
        log::debug!(
            "Generated {} hashes from {} peaks",
            hashes.len(),
            peaks.len()
        );

        Ok(hashes)
    }
}

/// Fingerprint with the default configuration
pub fn fingerprint(samples: &[i16], sample_rate: u32) -> Result<Vec<u32>> {
    Fingerprinter::default().fingerprint(samples, sample_rate)
}

/// Scale 16-bit samples into [-1, 1)
pub fn normalize(samples: &[i16]) -> Vec<f64> {
    samples.iter().map(|&s| s as f64 / I16_SCALE).collect()
}

/// Keep every `factor`-th sample, starting with the first
pub fn decimate(signal: &[f64], factor: usize) -> Vec<f64> {
    signal.iter().step_by(factor.max(1)).copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        let normalized = normalize(&[0, 16384, -32768, 32767]);
        assert_eq!(normalized[0], 0.0);
        assert_eq!(normalized[1], 0.5);
        assert_eq!(normalized[2], -1.0);
        assert!((normalized[3] - 32767.0 / 32768.0).abs() < 1e-15);
    }

    #[test]
    fn test_decimate() {
        let signal: Vec<f64> = (0..10).map(|i| i as f64).collect();
        assert_eq!(decimate(&signal, 4), vec![0.0, 4.0, 8.0]);
        assert_eq!(decimate(&signal, 1), signal);
        assert!(decimate(&[], 3).is_empty());
    }

    #[test]
    fn test_low_sample_rate_rejected() {
        let result = fingerprint(&[0; 4096], 8000);
        assert!(matches!(
            result,
            Err(FingerprintError::InvalidSampleRate {
                sample_rate: 8000,
                target: 11025,
            })
        ));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = FingerprintConfig {
            hop_size: 0,
            ..Default::default()
        };
        assert!(matches!(
            Fingerprinter::new(config),
            Err(FingerprintError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_preprocess_lengths() {
        let fingerprinter = Fingerprinter::default();
        let samples = vec![1000i16; 4410];
        let len = |rate| fingerprinter.preprocess(&samples, rate).unwrap().len();

        assert_eq!(len(11025), 4410);
        assert_eq!(len(22050), 2205);
        assert_eq!(len(44100), 1103);
        // 48000 / 11025 truncates to 4
        assert_eq!(len(48000), 1103);
    }

    #[test]
    fn test_native_rate_passes_through() {
        // Cutoff at the input Nyquist leaves only the centre tap
        let samples: Vec<i16> = (0..256).map(|i| ((i * 97) % 2000 - 1000) as i16).collect();
        let fingerprinter = Fingerprinter::default();
        let signal = fingerprinter.preprocess(&samples, 11025).unwrap();

        for (out, &s) in signal.iter().zip(samples.iter()) {
            assert!((out - s as f64 / 32768.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_default_uses_default_config() {
        let fingerprinter = Fingerprinter::default();
        assert_eq!(fingerprinter.config(), &FingerprintConfig::default());

        let custom = FingerprintConfig {
            num_bands: 4,
            ..Default::default()
        };
        let fingerprinter = Fingerprinter::new(custom.clone()).unwrap();
        assert_eq!(fingerprinter.config(), &custom);
    }

    #[test]
    fn test_short_input_has_no_hashes() {
        let hashes = fingerprint(&[100; 1000], 11025).unwrap();
        assert!(hashes.is_empty());
        assert!(fingerprint(&[], 44100).unwrap().is_empty());
    }
}
