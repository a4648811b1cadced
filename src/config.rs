use crate::constants::{timing, MAX_POSITIONS};
use crate::register::DisplayType;

/// How out-of-range arguments are treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Validation {
    /// Brightness is masked to 3 bits, addresses to 4 bits, and common-anode digits past 9
    /// are skipped. Nothing is rejected.
    #[default]
    Lenient,
    /// Out-of-range brightness, positions and lengths are rejected before anything is sent.
    Strict,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub display_type: DisplayType,
    pub validation: Validation,
    /// Bus timing unit in microseconds.
    pub bit_delay_us: u32,
    /// Digits used by [`crate::Tm1638::display_number`] and friends, counted from position 0.
    pub digits: u8,
}

impl Config {
    pub const fn new(display_type: DisplayType) -> Self {
        Self {
            display_type,
            validation: Validation::Lenient,
            bit_delay_us: timing::BIT_DELAY_US,
            digits: 8,
        }
    }

    pub const fn strict(mut self) -> Self {
        self.validation = Validation::Strict;
        self
    }

    pub const fn bit_delay_us(mut self, us: u32) -> Self {
        self.bit_delay_us = us;
        self
    }

    /// Clamped to the 16 positions the chip can address.
    pub const fn digits(mut self, digits: u8) -> Self {
        self.digits = if digits > MAX_POSITIONS {
            MAX_POSITIONS
        } else {
            digits
        };
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DisplayType::CommonCathode)
    }
}
