//! Serial driver for the LDS-006 spinning rangefinder found in older
//! Ecovacs robot vacuums.
//!
//! The device streams 22-byte binary telemetry frames at 115200 baud; each
//! frame carries four one-degree samples of a 360-degree rotation. The
//! driver frames and validates the byte stream on a reader thread, decodes
//! accepted frames on a second thread and folds them into a shared
//! 360-slot angular scan that can be snapshotted at any time.

mod constants;
mod decode;
mod driver_threads;
mod error;
mod frame;
mod numeric;
mod scan_buffer;
mod serial;
#[cfg(test)]
mod testdata;
mod time;

use crate::constants::FRAME_QUEUE_CAPACITY;
use crate::driver_threads::{decode_frames, read_frames, DriverThreads};
use crate::scan_buffer::ScanBuffer;
use crate::serial::{flush_input, open_port, send_command, start_lds, stop_lds, SharedPort};
use crate::time::sleep_ms;
use crossbeam_channel::bounded;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

pub use crate::error::LdsError;
pub use lds006_data::{AngularScan, ScanSample, SCAN_SLOTS};

/// Handle to one LDS-006 unit.
///
/// `start` and `stop` are idempotent; dropping a running driver stops it.
pub struct LdsDriver {
    port: SharedPort,
    scan: Arc<ScanBuffer>,
    rpm: Arc<Mutex<Option<f64>>>,
    transport_fault: Arc<AtomicBool>,
    threads: Option<DriverThreads>,
}

impl LdsDriver {
    /// Opens the serial port without starting the sensor.
    ///
    /// # Arguments
    ///
    /// * `port_name` - Serial port name such as `/dev/ttyUSB0`.
    pub fn open(port_name: &str) -> Result<LdsDriver, LdsError> {
        let port = open_port(port_name)?;
        Ok(LdsDriver {
            port,
            scan: Arc::new(ScanBuffer::new()),
            rpm: Arc::new(Mutex::new(None)),
            transport_fault: Arc::new(AtomicBool::new(false)),
            threads: None,
        })
    }

    /// Commands the sensor to spin up and launches the reader and decoder
    /// threads. A no-op when already running.
    pub fn start(&mut self) -> Result<(), LdsError> {
        if self.threads.is_some() {
            return Ok(());
        }

        if !cfg!(test) {
            // In testing, disable the stop/flush cycle to keep dummy frames
            stop_lds(&self.port)?;
            sleep_ms(10);
            flush_input(&self.port)?;
        }
        self.transport_fault.store(false, Ordering::Release);
        start_lds(&self.port)?;

        let (reader_terminator_tx, reader_terminator_rx) = bounded(10);
        let (decoder_terminator_tx, decoder_terminator_rx) = bounded(10);
        let (frame_tx, frame_rx) = bounded(FRAME_QUEUE_CAPACITY);

        let port = Arc::clone(&self.port);
        let transport_fault = Arc::clone(&self.transport_fault);
        let reader_thread = Some(std::thread::spawn(move || {
            read_frames(port, frame_tx, reader_terminator_rx, transport_fault);
        }));

        let scan = Arc::clone(&self.scan);
        let rpm = Arc::clone(&self.rpm);
        let decoder_thread = Some(std::thread::spawn(move || {
            decode_frames(frame_rx, decoder_terminator_rx, scan, rpm);
        }));

        self.threads = Some(DriverThreads {
            reader_terminator_tx,
            decoder_terminator_tx,
            reader_thread,
            decoder_thread,
        });
        Ok(())
    }

    /// Signals both threads, waits for them to finish and commands the
    /// sensor to stop spinning. A no-op when already stopped. The serial
    /// port stays open so the driver can be restarted; it is released when
    /// the driver is dropped.
    pub fn stop(&mut self) {
        let Some(threads) = self.threads.take() else {
            return;
        };
        drop(threads); // joins the reader and decoder

        match stop_lds(&self.port) {
            Ok(()) => {
                if let Err(e) = flush_input(&self.port) {
                    log::warn!("Failed to drain the port after stopping: {}", e);
                }
            }
            Err(e) => log::warn!("Failed to send the stop command: {}", e),
        }
    }

    pub fn is_running(&self) -> bool {
        self.threads.is_some()
    }

    /// True once the reader loop has died on a transport fault. Distinct
    /// from "no data yet": absent slots are a valid steady state.
    pub fn transport_fault(&self) -> bool {
        self.transport_fault.load(Ordering::Acquire)
    }

    /// Sends a textual control command over the shared link. Returns false
    /// on transport or encoding failure; the decode pipeline is unaffected.
    pub fn send_command(&self, command: &str) -> bool {
        send_command(&self.port, command)
    }

    /// Point-in-time copy of the 360-degree scan. Never blocks on the
    /// reader or decoder threads.
    pub fn snapshot(&self) -> AngularScan {
        self.scan.snapshot()
    }

    /// Rotation speed in rpm from the most recently decoded frame.
    pub fn last_rpm(&self) -> Option<f64> {
        *self.rpm.lock().unwrap()
    }
}

impl Drop for LdsDriver {
    fn drop(&mut self) {
        self.stop();
    }
}
