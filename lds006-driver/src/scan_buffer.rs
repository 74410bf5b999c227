use crate::decode::{sample_slot, DecodedFrame};
use lds006_data::AngularScan;
#[cfg(test)]
use lds006_data::ScanSample;
use std::sync::Mutex;

/// The shared per-degree scan state. The mutex is held only for the duration
/// of one write batch or one snapshot copy, never across I/O.
pub(crate) struct ScanBuffer {
    scan: Mutex<AngularScan>,
}

impl ScanBuffer {
    pub(crate) fn new() -> ScanBuffer {
        ScanBuffer {
            scan: Mutex::new(AngularScan::new()),
        }
    }

    #[cfg(test)]
    pub(crate) fn write(&self, slot: usize, sample: ScanSample) {
        self.scan.lock().unwrap().set(slot, sample);
    }

    /// Writes a decoded frame's four samples under a single lock hold.
    pub(crate) fn apply(&self, decoded: &DecodedFrame) {
        let mut scan = self.scan.lock().unwrap();
        for (offset, sample) in decoded.samples.iter().enumerate() {
            scan.set(sample_slot(decoded.sequence_index, offset), *sample);
        }
    }

    pub(crate) fn snapshot(&self) -> AngularScan {
        self.scan.lock().unwrap().clone()
    }
}
