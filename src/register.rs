//! Display memory layouts.

use crate::constants::{MAX_ANODE_POSITIONS, MAX_POSITIONS};

/// How the seven-segment digits are wired to the chip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayType {
    /// One memory byte per digit; glyphs are written straight through.
    #[default]
    CommonCathode,
    /// Memory bytes are segment lanes shared between digits; the driver keeps a shadow.
    CommonAnode,
}

/// Local copy of the 16 display memory bytes of a common-anode display.
///
/// Digit `p` in `0..8` owns bit `p` of the even lanes 0, 2, .., 14. Digits 8 and 9 own bit
/// `p - 8` of the odd lanes 1, 3, .., 15. Segment `k` of a digit lives in the `k`-th lane of
/// its sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnodeShadow {
    lanes: [u8; MAX_POSITIONS as usize],
}

impl AnodeShadow {
    pub const fn new() -> Self {
        Self {
            lanes: [0; MAX_POSITIONS as usize],
        }
    }

    /// Lane bytes in chip address order.
    pub fn lanes(&self) -> &[u8; MAX_POSITIONS as usize] {
        &self.lanes
    }

    pub fn clear(&mut self) {
        self.lanes = [0; MAX_POSITIONS as usize];
    }

    /// Stores `glyphs` at consecutive digits from `start`. Digits past 9 are skipped.
    pub fn apply(&mut self, start: u8, glyphs: &[u8]) {
        for (offset, glyph) in glyphs.iter().enumerate() {
            let position = start as usize + offset;
            if let Some(position) = u8::try_from(position).ok().filter(|p| *p < MAX_ANODE_POSITIONS)
            {
                self.set_digit(position, *glyph);
            }
        }
    }

    /// Reassembles the glyph currently shown at `position`.
    pub fn digit(&self, position: u8) -> Option<u8> {
        let (first_lane, shift) = Self::placement(position)?;
        let glyph = self
            .lanes
            .iter()
            .skip(first_lane)
            .step_by(2)
            .enumerate()
            .fold(0u8, |glyph, (segment, lane)| {
                glyph | (((lane >> shift) & 0x01) << segment)
            });
        Some(glyph)
    }

    fn set_digit(&mut self, position: u8, glyph: u8) {
        let Some((first_lane, shift)) = Self::placement(position) else {
            return;
        };
        let mut segments = glyph;
        for lane in self.lanes.iter_mut().skip(first_lane).step_by(2) {
            if segments & 0x01 != 0 {
                *lane |= 1 << shift;
            } else {
                *lane &= !(1 << shift);
            }
            segments >>= 1;
        }
    }

    fn placement(position: u8) -> Option<(usize, u8)> {
        match position {
            0..=7 => Some((0, position)),
            8..=9 => Some((1, position - 8)),
            _ => None,
        }
    }
}
