pub mod sample;
pub mod scan;

pub use sample::ScanSample;
pub use scan::{AngularScan, SCAN_SLOTS};
