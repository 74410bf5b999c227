#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One angular measurement decoded from a telemetry frame.
///
/// Both fields are `None` when the sensor reported a sentinel "no return"
/// value for this degree. They are always set or cleared together.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScanSample {
    /// Distance to an object in millimeters.
    pub distance: Option<u16>,
    /// Raw correlate reported alongside the distance. Meaning undocumented;
    /// passed through untouched.
    pub quality: Option<u16>,
}

impl ScanSample {
    pub fn new(distance: u16, quality: u16) -> ScanSample {
        ScanSample {
            distance: Some(distance),
            quality: Some(quality),
        }
    }

    /// The "no return" sample.
    pub fn absent() -> ScanSample {
        ScanSample::default()
    }

    pub fn is_absent(&self) -> bool {
        self.distance.is_none()
    }
}
