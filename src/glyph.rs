//! Value to seven-segment pattern translation.
//!
//! Bit 0..6 of a pattern are segments a..g, bit 7 is the decimal point. The decimal point
//! of the input value is carried over to the pattern whatever the value resolves to.

use crate::constants::{glyphs, BLANK, DECIMAL_POINT, HEX_DIGITS};

/// Set of inputs a resolver accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Alphabet {
    /// Raw values 0-15 and the ASCII letters `a-f`/`A-F`.
    Hex,
    /// Everything in [`Alphabet::Hex`] plus ASCII digits, space, the letters a seven-segment
    /// digit can render, and `_`, `-`, `~`.
    Extended,
}

/// Segment pattern for a hex digit. Only the low nibble is used.
pub const fn hex_digit(digit: u8) -> u8 {
    HEX_DIGITS[(digit & 0x0F) as usize]
}

/// Resolves `value` to a segment pattern, honouring its decimal point bit.
///
/// Values outside the alphabet resolve to a blank digit.
pub fn resolve(value: u8, alphabet: Alphabet) -> u8 {
    let dot = value & DECIMAL_POINT;
    let value = value & !DECIMAL_POINT;

    let pattern = match value {
        0..=15 => HEX_DIGITS[value as usize],
        b'a'..=b'f' | b'A'..=b'F' if alphabet == Alphabet::Hex => {
            HEX_DIGITS[(value.to_ascii_lowercase() - b'a' + 10) as usize]
        }
        _ if alphabet == Alphabet::Extended => extended(value),
        _ => BLANK,
    };

    pattern | dot
}

fn extended(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => HEX_DIGITS[(c - b'0') as usize],
        b' ' => BLANK,
        b'A' | b'a' => glyphs::A,
        b'b' => glyphs::LOWER_B,
        b'B' => glyphs::UPPER_B,
        b'C' | b'c' => glyphs::C,
        b'D' | b'd' => glyphs::D,
        b'E' | b'e' => glyphs::E,
        b'F' | b'f' => glyphs::F,
        b'g' => glyphs::LOWER_G,
        b'G' => glyphs::UPPER_G,
        b'h' => glyphs::LOWER_H,
        b'H' => glyphs::UPPER_H,
        b'i' => glyphs::LOWER_I,
        b'I' => glyphs::UPPER_I,
        b'J' | b'j' => glyphs::J,
        b'l' => glyphs::LOWER_L,
        b'L' => glyphs::UPPER_L,
        b'n' => glyphs::LOWER_N,
        b'N' => glyphs::UPPER_N,
        b'o' => glyphs::LOWER_O,
        b'O' => glyphs::UPPER_O,
        b'P' | b'p' => glyphs::P,
        b'Q' | b'q' => glyphs::Q,
        b'R' | b'r' => glyphs::R,
        b'S' | b's' => glyphs::S,
        b'T' | b't' => glyphs::T,
        b'u' => glyphs::LOWER_U,
        b'U' => glyphs::UPPER_U,
        b'Y' | b'y' => glyphs::Y,
        b'_' => glyphs::UNDERSCORE,
        b'-' => glyphs::DASH,
        b'~' => glyphs::OVERSCORE,
        // K, M, V, W, X and Z have no readable rendering
        _ => BLANK,
    }
}
