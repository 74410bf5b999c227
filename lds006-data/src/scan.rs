use crate::sample::ScanSample;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of angular slots in a full scan, one per integer degree.
pub const SCAN_SLOTS: usize = 360;

/// One full rotation of scan data, indexed by integer degree \[0, 359\].
///
/// Each slot holds the most recently decoded sample for that degree, or the
/// absent sample before any frame covering it has arrived. Cloning yields an
/// independent snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AngularScan {
    #[cfg_attr(feature = "serde", serde(with = "serde_slots"))]
    slots: [ScanSample; SCAN_SLOTS],
}

impl Default for AngularScan {
    fn default() -> AngularScan {
        AngularScan {
            slots: [ScanSample::default(); SCAN_SLOTS],
        }
    }
}

impl AngularScan {
    pub fn new() -> AngularScan {
        AngularScan::default()
    }

    /// Overwrites the sample at `degree`. Panics if `degree >= 360`; callers
    /// compute slot indices from the frame sequence index, which is validated
    /// before decoding.
    pub fn set(&mut self, degree: usize, sample: ScanSample) {
        self.slots[degree] = sample;
    }

    pub fn get(&self, degree: usize) -> ScanSample {
        self.slots[degree]
    }

    /// Iterates samples in degree order, 0 through 359.
    pub fn iter(&self) -> impl Iterator<Item = &ScanSample> {
        self.slots.iter()
    }

    /// Number of slots holding a real return.
    pub fn present_count(&self) -> usize {
        self.slots.iter().filter(|s| !s.is_absent()).count()
    }
}

#[cfg(feature = "serde")]
mod serde_slots {
    use super::{ScanSample, SCAN_SLOTS};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        slots: &[ScanSample; SCAN_SLOTS],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(slots.iter())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<[ScanSample; SCAN_SLOTS], D::Error> {
        let v = Vec::<ScanSample>::deserialize(deserializer)?;
        v.try_into()
            .map_err(|v: Vec<ScanSample>| D::Error::invalid_length(v.len(), &"360 samples"))
    }
}
