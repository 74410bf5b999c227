use crate::constants::{DECODE_POLL_TIMEOUT_MS, FRAME_SIZE};
use crate::decode::decode_frame;
use crate::frame::take_frame;
use crate::numeric::to_string;
use crate::scan_buffer::ScanBuffer;
use crate::serial::{read_available, SharedPort};
use crate::time::sleep_ms;
use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

/// Struct that contains driver threads.
pub(crate) struct DriverThreads {
    pub(crate) reader_terminator_tx: Sender<bool>,
    pub(crate) decoder_terminator_tx: Sender<bool>,
    pub(crate) reader_thread: Option<JoinHandle<()>>,
    pub(crate) decoder_thread: Option<JoinHandle<()>>,
}

/// Ingestion loop: drains the serial port, frames the byte stream and hands
/// validated frames to the decoder. A transport fault terminates the loop
/// and raises `transport_fault`; the decoder and scan buffer stay valid
/// with their last-known state.
pub(crate) fn read_frames(
    port: SharedPort,
    frame_tx: Sender<[u8; FRAME_SIZE]>,
    reader_terminator_rx: Receiver<bool>,
    transport_fault: Arc<AtomicBool>,
) {
    let mut buffer = VecDeque::<u8>::new();
    loop {
        if do_terminate(&reader_terminator_rx) {
            return;
        }

        let chunk = match read_available(&port) {
            Ok(chunk) => chunk,
            Err(e) => {
                log::error!("Transport failure, frame reader stopping: {}", e);
                transport_fault.store(true, Ordering::Release);
                return;
            }
        };
        if chunk.is_empty() {
            sleep_ms(1);
            continue;
        }

        buffer.extend(chunk);
        while let Some(frame) = take_frame(&mut buffer) {
            // The queue is bounded; a full queue blocks the reader until the
            // decoder catches up. A send error means the decoder is gone.
            if frame_tx.send(frame).is_err() {
                return;
            }
        }
    }
}

/// Decoding loop: pulls validated frames off the queue and folds them into
/// the angular scan buffer. Polls with a short timeout so the stop signal
/// is observed promptly.
pub(crate) fn decode_frames(
    frame_rx: Receiver<[u8; FRAME_SIZE]>,
    decoder_terminator_rx: Receiver<bool>,
    scan: Arc<ScanBuffer>,
    rpm: Arc<Mutex<Option<f64>>>,
) {
    while !do_terminate(&decoder_terminator_rx) {
        let frame = match frame_rx.recv_timeout(Duration::from_millis(DECODE_POLL_TIMEOUT_MS)) {
            Ok(frame) => frame,
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => return,
        };

        match decode_frame(&frame) {
            Some(decoded) => {
                scan.apply(&decoded);
                *rpm.lock().unwrap() = Some(decoded.rpm);
            }
            None => {
                log::debug!(
                    "Dropping frame that failed the field re-check: {}",
                    to_string(&frame)
                );
            }
        }
    }
}

pub(crate) fn do_terminate(terminator_rx: &Receiver<bool>) -> bool {
    terminator_rx.try_recv().unwrap_or(false)
}

/// Function to join driver threads.
/// This function is automatically called when `driver_threads` is dropped.
pub(crate) fn join(driver_threads: &mut DriverThreads) {
    // A loop that already exited on a transport fault has dropped its
    // terminator receiver; the failed send is expected then.
    let _ = driver_threads.reader_terminator_tx.send(true);
    let _ = driver_threads.decoder_terminator_tx.send(true);

    if let Some(thread) = driver_threads.reader_thread.take() {
        thread.join().unwrap();
    }
    if let Some(thread) = driver_threads.decoder_thread.take() {
        thread.join().unwrap();
    }
}

impl Drop for DriverThreads {
    fn drop(&mut self) {
        join(self);
    }
}
