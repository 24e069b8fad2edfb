//! Tunable constants for the fingerprinting pipeline

use crate::error::{FingerprintError, Result};

/// Fingerprinting configuration
///
/// Every field is a fixed design constant by default. Hashes are only
/// comparable between runs that share the same configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FingerprintConfig {
    /// Sample rate the signal is decimated to before analysis (default: 11025 Hz)
    pub target_sample_rate: u32,

    /// Number of taps in the anti-aliasing FIR filter, should be odd (default: 101)
    pub filter_taps: usize,

    /// Samples per analysis frame (default: 1024)
    pub frame_size: usize,

    /// Samples between consecutive frame starts (default: 512)
    pub hop_size: usize,

    /// Number of frequency bands searched for peaks in each frame (default: 6)
    pub num_bands: usize,

    /// Maximum frame distance between two paired peaks (default: 20)
    pub target_zone_frames: usize,
}

impl Default for FingerprintConfig {
    fn default() -> Self {
        Self {
            target_sample_rate: 11025,
            filter_taps: 101,
            frame_size: 1024,
            hop_size: 512,
            num_bands: 6,
            target_zone_frames: 20,
        }
    }
}

impl FingerprintConfig {
    /// Check that the configuration describes a runnable pipeline
    pub fn validate(&self) -> Result<()> {
        let failures = [
            (self.target_sample_rate == 0, "target_sample_rate is zero"),
            (self.filter_taps < 2, "filter_taps is below 2"),
            (self.frame_size < 2, "frame_size is below 2"),
            (self.hop_size == 0, "hop_size is zero"),
            (self.num_bands == 0, "num_bands is zero"),
        ];

        for (failed, message) in failures {
            if failed {
                return Err(FingerprintError::InvalidConfig(message.to_string()));
            }
        }
        Ok(())
    }

    /// Cutoff of the anti-aliasing filter: Nyquist of the target rate
    pub fn cutoff_hz(&self) -> f64 {
        self.target_sample_rate as f64 / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let config = FingerprintConfig::default();
        assert_eq!(config.target_sample_rate, 11025);
        assert_eq!(config.filter_taps, 101);
        assert_eq!(config.frame_size, 1024);
        assert_eq!(config.hop_size, 512);
        assert_eq!(config.num_bands, 6);
        assert_eq!(config.target_zone_frames, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cutoff_is_target_nyquist() {
        let config = FingerprintConfig::default();
        assert!((config.cutoff_hz() - 5512.5).abs() < 1e-10);
    }

    #[test]
    fn test_validate_rejects_degenerate_values() {
        let cases = [
            FingerprintConfig {
                target_sample_rate: 0,
                ..Default::default()
            },
            FingerprintConfig {
                filter_taps: 1,
                ..Default::default()
            },
            FingerprintConfig {
                frame_size: 1,
                ..Default::default()
            },
            FingerprintConfig {
                hop_size: 0,
                ..Default::default()
            },
            FingerprintConfig {
                num_bands: 0,
                ..Default::default()
            },
        ];

        for config in cases.iter() {
            assert!(
                matches!(config.validate(), Err(FingerprintError::InvalidConfig(_))),
                "expected rejection for {:?}",
                config
            );
        }
    }
}
