//! Instruction bytes understood by the TM1638.

use crate::constants::instruction::{self, address as addr, data, display_control as control};

/// Whether the display is lit after a display-control instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayState {
    Off,
    On,
}

impl From<bool> for DisplayState {
    fn from(on: bool) -> Self {
        if on {
            DisplayState::On
        } else {
            DisplayState::Off
        }
    }
}

/// Data instruction selecting register writes with auto-incremented address.
pub const fn write_mode() -> u8 {
    instruction::DATA | data::WRITE_DATA_TO_REGISTER | data::AUTO_ADDRESS_ADD | data::NORMAL_MODE
}

/// Data instruction selecting a key-scan read.
pub const fn read_mode() -> u8 {
    instruction::DATA | data::READ_KEY_SCAN_DATA | data::AUTO_ADDRESS_ADD | data::NORMAL_MODE
}

/// Address instruction for a start address in `0..16`; higher bits are dropped.
pub const fn address(start: u8) -> u8 {
    instruction::ADDRESS | (start & addr::ADDRESS_MASK)
}

/// Display-control instruction. Brightness is masked to 3 bits, not rejected.
pub const fn display_control(brightness: u8, state: DisplayState) -> u8 {
    let show = match state {
        DisplayState::On => control::SHOW_ON,
        DisplayState::Off => control::SHOW_OFF,
    };
    instruction::DISPLAY_CONTROL | (brightness & control::BRIGHTNESS_MASK) | show
}
