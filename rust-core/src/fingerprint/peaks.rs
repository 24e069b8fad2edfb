//! Per-band spectral peak picking

/// A spectral peak in one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
    /// Index of the frame
    pub frame_index: usize,

    /// Frequency bin index
    pub freq_bin: usize,

    /// Magnitude at the peak
    pub magnitude: f64,
}

/// Find the strongest bin in each frequency band of every frame
///
/// Band `b` covers bins `[b * band_size, (b + 1) * band_size)` with
/// `band_size = num_bins / num_bands`; the last band also takes the
/// remainder. Ties go to the lowest bin. A band with no bins contributes
/// nothing.
///
/// Peaks are emitted frame by frame, bands in increasing order. Hash
/// generation depends on this order.
///
/// # Arguments
/// * `spectrogram` - Magnitude vectors, one per frame
/// * `num_bands` - Bands per frame
pub fn detect_peaks(spectrogram: &[Vec<f64>], num_bands: usize) -> Vec<Peak> {
    let mut peaks = Vec::new();
    if num_bands == 0 {
        return peaks;
    }

    for (frame_index, frame) in spectrogram.iter().enumerate() {
        let num_bins = frame.len();
        let band_size = num_bins / num_bands;

        for band in 0..num_bands {
            let start = band * band_size;
            let end = if band == num_bands - 1 {
                num_bins
            } else {
                start + band_size
            };

            let mut best: Option<(usize, f64)> = None;
            let mut max_val = -1.0;
            for (bin, &magnitude) in frame.iter().enumerate().take(end).skip(start) {
                if magnitude > max_val {
                    max_val = magnitude;
                    best = Some((bin, magnitude));
                }
            }

            if let Some((freq_bin, magnitude)) = best {
                peaks.push(Peak {
                    frame_index,
                    freq_bin,
                    magnitude,
                });
            }
        }
    }

    peaks
}
