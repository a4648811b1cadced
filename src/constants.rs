pub const MAX_POSITIONS: u8 = 16; // display memory is 16 bytes
pub const MAX_ANODE_POSITIONS: u8 = 10; // 8 even lanes + 2 odd lanes
pub const MAX_BRIGHTNESS: u8 = 7; // 3 bits
pub const KEY_SCAN_BYTES: usize = 4;
pub const KEY_ROWS: u8 = 3;
pub const KEY_COLUMNS: u8 = 8;
pub const DECIMAL_POINT: u8 = 0x80;
pub const BLANK: u8 = 0x00;

/// Segment patterns for hex digits 0-F.
pub const HEX_DIGITS: [u8; 16] = [
    0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, 0x7F, 0x6F, 0x77, 0x7C, 0x39, 0x5E, 0x79, 0x71,
];

pub mod glyphs {
    pub const A: u8 = 0x77;
    pub const LOWER_B: u8 = 0x7C;
    pub const UPPER_B: u8 = 0x7F; // full "8", keeps it apart from 'b'
    pub const C: u8 = 0x39;
    pub const D: u8 = 0x5E;
    pub const E: u8 = 0x79;
    pub const F: u8 = 0x71;
    pub const LOWER_G: u8 = 0x6F;
    pub const UPPER_G: u8 = 0x3D;
    pub const LOWER_H: u8 = 0x74;
    pub const UPPER_H: u8 = 0x76;
    pub const LOWER_I: u8 = 0x04;
    pub const UPPER_I: u8 = 0x06;
    pub const J: u8 = 0x1E;
    pub const LOWER_L: u8 = 0x30;
    pub const UPPER_L: u8 = 0x38;
    pub const LOWER_N: u8 = 0x54;
    pub const UPPER_N: u8 = 0x37;
    pub const LOWER_O: u8 = 0x5C;
    pub const UPPER_O: u8 = 0x3F;
    pub const P: u8 = 0x73;
    pub const Q: u8 = 0x67;
    pub const R: u8 = 0x50;
    pub const S: u8 = 0x6D;
    pub const T: u8 = 0x78;
    pub const LOWER_U: u8 = 0x1C;
    pub const UPPER_U: u8 = 0x3E;
    pub const Y: u8 = 0x6E;
    pub const UNDERSCORE: u8 = 0x08;
    pub const DASH: u8 = 0x40;
    pub const OVERSCORE: u8 = 0x01;
}

#[allow(dead_code)]
pub mod instruction {
    pub const DATA: u8 = 0x40; // 0b01xx_xxxx
    pub const DISPLAY_CONTROL: u8 = 0x80; // 0b10xx_xxxx
    pub const ADDRESS: u8 = 0xC0; // 0b11xx_xxxx

    pub mod data {
        pub const WRITE_DATA_TO_REGISTER: u8 = 0x00; // bits 1:0 = 00
        pub const READ_KEY_SCAN_DATA: u8 = 0x02; // bits 1:0 = 10
        pub const AUTO_ADDRESS_ADD: u8 = 0x00; // bit 2 clear
        pub const FIXED_ADDRESS: u8 = 0x04; // bit 2 set
        pub const NORMAL_MODE: u8 = 0x00; // bit 3 clear
        pub const TEST_MODE: u8 = 0x08; // bit 3 set
    }

    pub mod display_control {
        pub const BRIGHTNESS_MASK: u8 = 0x07; // bits 2:0: pulse width 1/16 .. 14/16
        pub const SHOW_OFF: u8 = 0x00; // bit 3 clear
        pub const SHOW_ON: u8 = 0x08; // bit 3 set
    }

    pub mod address {
        pub const ADDRESS_MASK: u8 = 0x0F; // bits 3:0: 00H-0FH
    }
}

pub mod timing {
    pub const BIT_DELAY_US: u32 = 1; // one timing unit
    pub const READ_SETTLE_UNITS: u32 = 5; // tWAIT before the first key byte
    pub const READ_BYTE_GAP_UNITS: u32 = 2;
}
