//! Key-scan decoding.
//!
//! The chip reports a 3x8 key matrix in 4 bytes. Byte `n` carries columns `2n` (low nibble)
//! and `2n + 1` (high nibble); within a nibble, bit `r` is key row `r`:
//!
//! ```text
//!                  SEG1     SEG2     SEG3   ...   SEG8
//!          K1  --  r0c0     r0c1     r0c2   ...   r0c7
//!          K2  --  r1c0     r1c1     r1c2   ...   r1c7
//!          K3  --  r2c0     r2c1     r2c2   ...   r2c7
//! ```
//!
//! The decoded mask has bit `row * 8 + column` set for each pressed key.

use crate::constants::{KEY_COLUMNS, KEY_ROWS, KEY_SCAN_BYTES};

/// Mask of the bits [`decode`] can set.
pub const KEY_MASK: u32 = 0x00FF_FFFF;

/// Reassembles a raw scan block into a pressed-key mask.
pub fn decode(scan: &[u8; KEY_SCAN_BYTES]) -> u32 {
    let mut keys = 0u32;
    let mut selector = 0x01u8;

    for row in 0..KEY_ROWS {
        let mut row_bits = 0u32;
        for byte in scan.iter().rev() {
            row_bits <<= 1;
            if byte & (selector << 4) != 0 {
                row_bits |= 1;
            }
            row_bits <<= 1;
            if byte & selector != 0 {
                row_bits |= 1;
            }
        }
        keys |= row_bits << (row * KEY_COLUMNS);
        selector <<= 1;
    }

    keys
}

/// Whether the key at (`row`, `column`) is set in a decoded mask.
pub fn is_pressed(keys: u32, row: u8, column: u8) -> bool {
    if row >= KEY_ROWS || column >= KEY_COLUMNS {
        return false;
    }
    keys & (1 << (row * KEY_COLUMNS + column)) != 0
}
