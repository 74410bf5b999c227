use crate::constants::{
    FRAMES_PER_ROTATION, FRAME_HEADER, FRAME_SIZE, SAMPLES_PER_FRAME, SENTINEL_VALUES,
    SEQUENCE_FIRST, SEQUENCE_LAST,
};
use crate::numeric::to_u16_le;
use lds006_data::{ScanSample, SCAN_SLOTS};

/// Decoded contents of one validated 22-byte frame.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct DecodedFrame {
    pub(crate) sequence_index: u8,
    /// Rotation speed in rpm (raw field divided by 100).
    pub(crate) rpm: f64,
    pub(crate) samples: [ScanSample; SAMPLES_PER_FRAME],
}

/// First of the four consecutive degree slots covered by a frame.
///
/// Each frame covers a fixed 4-degree slice; the mapping assumes nominal
/// constant rotation and never consults the rotation-speed field.
pub(crate) fn base_slot(sequence_index: u8) -> usize {
    ((sequence_index - SEQUENCE_FIRST) as usize % FRAMES_PER_ROTATION) * SAMPLES_PER_FRAME
}

pub(crate) fn sample_slot(sequence_index: u8, offset: usize) -> usize {
    (base_slot(sequence_index) + offset) % SCAN_SLOTS
}

fn normalize_sample(distance: u16, quality: u16) -> ScanSample {
    if SENTINEL_VALUES.contains(&distance) {
        ScanSample::absent()
    } else {
        ScanSample::new(distance, quality)
    }
}

/// Decodes a checksum-validated frame. Returns `None` when the header or
/// sequence-index range re-check fails, which a passing checksum does not
/// rule out.
pub(crate) fn decode_frame(frame: &[u8; FRAME_SIZE]) -> Option<DecodedFrame> {
    let sequence_index = frame[1];
    if frame[0] != FRAME_HEADER || !(SEQUENCE_FIRST..=SEQUENCE_LAST).contains(&sequence_index) {
        return None;
    }

    let rpm = to_u16_le(frame[2], frame[3]) as f64 / 100.;

    let mut samples = [ScanSample::absent(); SAMPLES_PER_FRAME];
    for (i, sample) in samples.iter_mut().enumerate() {
        let offset = 4 + i * 4;
        let distance = to_u16_le(frame[offset], frame[offset + 1]);
        let quality = to_u16_le(frame[offset + 2], frame[offset + 3]);
        *sample = normalize_sample(distance, quality);
    }

    Some(DecodedFrame {
        sequence_index,
        rpm,
        samples,
    })
}
