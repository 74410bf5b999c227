pub(crate) const FRAME_SIZE: usize = 22;
pub(crate) const FRAME_HEADER: u8 = 0xFA;
pub(crate) const SEQUENCE_FIRST: u8 = 0xA0;
pub(crate) const SEQUENCE_LAST: u8 = 0xF9;
pub(crate) const FRAMES_PER_ROTATION: usize = 90;
pub(crate) const SAMPLES_PER_FRAME: usize = 4;
// Reported by the sensor when a point is too close, too far or otherwise lost.
pub(crate) const SENTINEL_VALUES: [u16; 4] = [0x7777, 0x8888, 0x9999, 0x0000];
pub(crate) const CMD_START: &str = "$startlds$";
pub(crate) const CMD_STOP: &str = "$stoplds$";
pub(crate) const BAUD_RATE: u32 = 115200;
pub(crate) const FRAME_QUEUE_CAPACITY: usize = 100;
pub(crate) const DECODE_POLL_TIMEOUT_MS: u64 = 10;
