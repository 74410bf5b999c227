use crate::constants::{FRAME_HEADER, FRAME_SIZE};
use crate::numeric::{to_string, to_u16_le};
use std::collections::VecDeque;

pub(crate) fn checksum_valid(frame: &[u8]) -> bool {
    let calculated = frame[..FRAME_SIZE - 2]
        .iter()
        .fold(0u16, |sum, b| sum.wrapping_add(*b as u16));
    calculated == to_u16_le(frame[FRAME_SIZE - 2], frame[FRAME_SIZE - 1])
}

fn find_header(buffer: &VecDeque<u8>) -> Option<usize> {
    buffer.iter().position(|b| *b == FRAME_HEADER)
}

/// Extracts the next checksum-valid frame from the accumulation buffer.
///
/// Garbage bytes ahead of a header are discarded. A candidate whose checksum
/// fails is dropped whole; its interior bytes are not re-scanned for a
/// header, matching the sender's behavior of never straddling frames.
/// Returns `None` once fewer than 22 bytes remain.
pub(crate) fn take_frame(buffer: &mut VecDeque<u8>) -> Option<[u8; FRAME_SIZE]> {
    while buffer.len() >= FRAME_SIZE {
        if buffer[0] != FRAME_HEADER {
            match find_header(buffer) {
                Some(start_index) => buffer.drain(..start_index),
                None => buffer.drain(..),
            };
            continue;
        }
        let frame: [u8; FRAME_SIZE] = buffer
            .drain(..FRAME_SIZE)
            .collect::<Vec<_>>()
            .try_into()
            .unwrap();
        if checksum_valid(&frame) {
            return Some(frame);
        }
        log::debug!("Dropping frame with bad checksum: {}", to_string(&frame));
    }
    None
}
