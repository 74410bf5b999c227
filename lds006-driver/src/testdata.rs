//! Frame burst captured from a real LDS-006 unit with a logic analyzer.
//! Sequence indices 0xE2 through 0xF3, all checksum-valid. Rotation speed
//! is 300.27 rpm for frames 0xE2..=0xE7, 299.17 for 0xE8..=0xED and
//! 300.72 for 0xEE..=0xF3.

use crate::constants::FRAME_SIZE;

pub(crate) const DOCUMENTED_BURST: [[u8; FRAME_SIZE]; 18] = [
    [0xFA, 0xE2, 0x4B, 0x75, 0x75, 0x01, 0x02, 0x08, 0x79, 0x01, 0xBA, 0x07, 0x7C, 0x01, 0x6D, 0x07, 0x84, 0x01, 0xBA, 0x07, 0x8E, 0x06],
    [0xFA, 0xE3, 0x4B, 0x75, 0x89, 0x01, 0x57, 0x07, 0x88, 0x88, 0x00, 0x00, 0x88, 0x88, 0x00, 0x00, 0x9D, 0x01, 0xAA, 0x06, 0xF3, 0x06],
    [0xFA, 0xE4, 0x4B, 0x75, 0x88, 0x88, 0x00, 0x00, 0x6E, 0x01, 0x8E, 0x02, 0x65, 0x01, 0xDE, 0x01, 0x5F, 0x01, 0xF8, 0x02, 0x4C, 0x07],
    [0xFA, 0xE5, 0x4B, 0x75, 0x5A, 0x01, 0xB3, 0x05, 0x58, 0x01, 0xF1, 0x01, 0x57, 0x01, 0xA7, 0x02, 0x54, 0x01, 0x2A, 0x06, 0x83, 0x06],
    [0xFA, 0xE6, 0x4B, 0x75, 0x53, 0x01, 0x42, 0x06, 0x55, 0x01, 0xB2, 0x03, 0x56, 0x01, 0xDE, 0x03, 0x88, 0x88, 0x00, 0x00, 0x8F, 0x06],
    [0xFA, 0xE7, 0x4B, 0x75, 0x33, 0x01, 0x7A, 0x16, 0x63, 0x01, 0xBC, 0x02, 0x6F, 0x01, 0xEE, 0x00, 0x99, 0x99, 0x00, 0x00, 0x17, 0x07],
    [0xFA, 0xE8, 0xDD, 0x74, 0x88, 0x88, 0x00, 0x00, 0x88, 0x88, 0x00, 0x00, 0x3F, 0x01, 0x42, 0x05, 0x37, 0x01, 0x95, 0x06, 0xAD, 0x06],
    [0xFA, 0xE9, 0xDD, 0x74, 0x36, 0x01, 0x8B, 0x08, 0x32, 0x01, 0xB7, 0x08, 0x2D, 0x01, 0x2A, 0x0A, 0x2C, 0x01, 0x0B, 0x0B, 0x95, 0x05],
    [0xFA, 0xEA, 0xDD, 0x74, 0x2B, 0x01, 0xBE, 0x0A, 0x2B, 0x01, 0x53, 0x0C, 0x29, 0x01, 0xCE, 0x13, 0x29, 0x01, 0x11, 0x0D, 0x07, 0x06],
    [0xFA, 0xEB, 0xDD, 0x74, 0x2C, 0x01, 0xD2, 0x0B, 0x2D, 0x01, 0x40, 0x0B, 0x30, 0x01, 0x39, 0x0A, 0x33, 0x01, 0xAB, 0x09, 0x15, 0x06],
    [0xFA, 0xEC, 0xDD, 0x74, 0x36, 0x01, 0x98, 0x08, 0x3D, 0x01, 0xBB, 0x06, 0x48, 0x01, 0x05, 0x04, 0x0D, 0x02, 0x90, 0x06, 0x04, 0x06],
    [0xFA, 0xED, 0xDD, 0x74, 0x99, 0x99, 0x00, 0x00, 0x88, 0x88, 0x00, 0x00, 0x88, 0x88, 0x00, 0x00, 0x14, 0x02, 0x8F, 0x06, 0x35, 0x07],
    [0xFA, 0xEE, 0x78, 0x75, 0x12, 0x02, 0x67, 0x06, 0x2C, 0x02, 0x77, 0x01, 0x99, 0x99, 0x00, 0x00, 0x7D, 0x01, 0x0A, 0x02, 0xB8, 0x05],
    [0xFA, 0xEF, 0x78, 0x75, 0x76, 0x01, 0xB2, 0x01, 0x8A, 0x01, 0xCA, 0x00, 0x85, 0x01, 0x5E, 0x01, 0x7E, 0x01, 0x6E, 0x01, 0x28, 0x07],
    [0xFA, 0xF0, 0x78, 0x75, 0x7F, 0x01, 0x93, 0x02, 0x7B, 0x01, 0xE9, 0x03, 0x7B, 0x01, 0x43, 0x09, 0x7D, 0x01, 0xA6, 0x03, 0x43, 0x07],
    [0xFA, 0xF1, 0x78, 0x75, 0x80, 0x01, 0xBC, 0x02, 0x80, 0x01, 0x21, 0x01, 0x86, 0x01, 0x89, 0x00, 0x8C, 0x01, 0x54, 0x00, 0xAB, 0x06],
    [0xFA, 0xF2, 0x78, 0x75, 0x9C, 0x01, 0x73, 0x00, 0x4C, 0x02, 0xC8, 0x04, 0x50, 0x02, 0xC2, 0x04, 0x59, 0x02, 0xA3, 0x04, 0x1D, 0x07],
    [0xFA, 0xF3, 0x78, 0x75, 0x61, 0x02, 0x81, 0x04, 0x88, 0x88, 0x00, 0x00, 0x99, 0x99, 0x00, 0x00, 0x88, 0x88, 0x00, 0x00, 0x14, 0x07],
];
