//! Combinatorial hashing of peak pairs
//!
//! Each hash packs an (anchor, target) peak pair into 32 bits:
//!
//! ```text
//!  31        23 22        14 13                0
//! +------------+------------+-------------------+
//! | anchor bin | target bin |   frame delta     |
//! |   9 bits   |   9 bits   |     14 bits       |
//! +------------+------------+-------------------+
//! ```
//!
//! Fields wider than their slot are clipped to the slot maximum.

use super::peaks::Peak;

/// Largest value of a frequency field (9 bits)
pub const MAX_FREQ_BIN: u32 = 0x1FF;

/// Largest value of the time-delta field (14 bits)
pub const MAX_DELTA_FRAMES: u32 = 0x3FFF;

const ANCHOR_SHIFT: u32 = 23;
const TARGET_SHIFT: u32 = 14;

/// Decoded fields of a fingerprint hash
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashFields {
    pub anchor_bin: u32,
    pub target_bin: u32,
    pub delta_frames: u32,
}

impl HashFields {
    /// Build fields from raw values, clipping each to its slot
    pub fn clipped(anchor_bin: usize, target_bin: usize, delta_frames: usize) -> Self {
        Self {
            anchor_bin: clip(anchor_bin, MAX_FREQ_BIN),
            target_bin: clip(target_bin, MAX_FREQ_BIN),
            delta_frames: clip(delta_frames, MAX_DELTA_FRAMES),
        }
    }

    /// Pack into a 32-bit hash
    pub fn pack(&self) -> u32 {
        (self.anchor_bin.min(MAX_FREQ_BIN) << ANCHOR_SHIFT)
            | (self.target_bin.min(MAX_FREQ_BIN) << TARGET_SHIFT)
            | self.delta_frames.min(MAX_DELTA_FRAMES)
    }

    /// Split a 32-bit hash into its fields
    pub fn unpack(hash: u32) -> Self {
        Self {
            anchor_bin: hash >> ANCHOR_SHIFT,
            target_bin: (hash >> TARGET_SHIFT) & MAX_FREQ_BIN,
            delta_frames: hash & MAX_DELTA_FRAMES,
        }
    }
}

#[inline]
fn clip(value: usize, max: u32) -> u32 {
    value.min(max as usize) as u32
}

/// Generate hashes from every peak pair within the target zone
///
/// For each anchor, later peaks are scanned in order. Targets in an earlier
/// frame are skipped; the scan for that anchor stops at the first target
/// more than `target_zone_frames` frames later. The stop is only correct
/// because `peaks` is in frame-major order.
///
/// # Arguments
/// * `peaks` - Peaks in the order produced by peak detection
/// * `target_zone_frames` - Maximum frame distance of a pair
///
/// # Returns
/// Hashes in (anchor, target) generation order
pub fn hash_peaks(peaks: &[Peak], target_zone_frames: usize) -> Vec<u32> {
    let mut hashes = Vec::new();

    for (i, anchor) in peaks.iter().enumerate() {
        for target in &peaks[i + 1..] {
            if target.frame_index < anchor.frame_index {
                continue;
            }
            let dt = target.frame_index - anchor.frame_index;
            if dt > target_zone_frames {
                break;
            }

            let fields = HashFields::clipped(anchor.freq_bin, target.freq_bin, dt);
            hashes.push(fields.pack());
        }
    }

    hashes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peak(frame_index: usize, freq_bin: usize) -> Peak {
        Peak {
            frame_index,
            freq_bin,
            magnitude: 1.0,
        }
    }

    #[test]
    fn test_single_pair() {
        let hashes = hash_peaks(&[peak(10, 100), peak(15, 200)], 10);
        assert_eq!(hashes, vec![(100 << 23) | (200 << 14) | 5]);
    }

    #[test]
    fn test_no_or_single_peak() {
        assert!(hash_peaks(&[], 20).is_empty());
        assert!(hash_peaks(&[peak(0, 10)], 20).is_empty());
    }

    #[test]
    fn test_delta_clipped() {
        let hashes = hash_peaks(&[peak(0, 1), peak(20000, 2)], 30000);
        assert_eq!(hashes.len(), 1);

        let fields = HashFields::unpack(hashes[0]);
        assert_eq!(fields.delta_frames, MAX_DELTA_FRAMES);
        assert_eq!(hashes[0], (1 << 23) | (2 << 14) | 0x3FFF);
    }

    #[test]
    fn test_frequency_clipped() {
        let hashes = hash_peaks(&[peak(0, 600), peak(1, 1000)], 5);
        assert_eq!(hashes, vec![(0x1FF << 23) | (0x1FF << 14) | 1]);
    }

    #[test]
    fn test_same_frame_pair() {
        let hashes = hash_peaks(&[peak(3, 7), peak(3, 9)], 0);
        assert_eq!(hashes, vec![(7 << 23) | (9 << 14)]);
    }

    #[test]
    fn test_earlier_target_skipped_not_stopped() {
        // Out-of-order target is skipped, the scan carries on
        let peaks = [peak(5, 1), peak(4, 2), peak(6, 3)];
        let hashes = hash_peaks(&peaks, 10);

        let expected: Vec<u32> = vec![(1 << 23) | (3 << 14) | 1, (2 << 23) | (3 << 14) | 2];
        assert_eq!(hashes, expected);
    }

    #[test]
    fn test_scan_stops_outside_zone() {
        // The peak at frame 2 is never reached from anchor 0
        let peaks = [peak(0, 1), peak(5, 2), peak(2, 3)];
        let hashes = hash_peaks(&peaks, 3);

        assert!(hashes.is_empty());
    }

    #[test]
    fn test_generation_order() {
        let peaks = [peak(0, 1), peak(0, 2), peak(1, 3)];
        let fields: Vec<_> = hash_peaks(&peaks, 1)
            .into_iter()
            .map(HashFields::unpack)
            .map(|f| (f.anchor_bin, f.target_bin, f.delta_frames))
            .collect();

        assert_eq!(fields, vec![(1, 2, 0), (1, 3, 1), (2, 3, 1)]);
    }

    #[test]
    fn test_unpack_inverts_pack() {
        let fields = HashFields::clipped(321, 45, 1234);
        assert_eq!(HashFields::unpack(fields.pack()), fields);
    }
}
