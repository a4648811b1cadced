#![allow(dead_code)]

use std::convert::Infallible;

use tm1638::Platform;

/// Simulated TM1638 on the far side of the three lines.
///
/// Bits are latched on rising CLK edges while STB is low and DIO is driven. Closing a
/// transaction (STB high) applies it to the simulated display memory the way the chip does.
#[derive(Debug, Default)]
pub struct SimChip {
    pub initialized: bool,
    pub deinit_calls: usize,
    pub stb_low: bool,
    pub clk_high: bool,
    pub dio_output: bool,
    pub dio_level: bool,
    shift: u8,
    bit_count: u8,
    current: Vec<u8>,
    /// Every completed transaction, in order.
    pub transactions: Vec<Vec<u8>>,
    pub memory: [u8; 16],
    pub display_control: Option<u8>,
    /// Raw key-scan block served on reads.
    pub keys: [u8; 4],
    read_index: usize,
    pub delays: Vec<u32>,
}

impl SimChip {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keys(keys: [u8; 4]) -> Self {
        Self {
            keys,
            ..Self::default()
        }
    }

    pub fn take_transactions(&mut self) -> Vec<Vec<u8>> {
        std::mem::take(&mut self.transactions)
    }

    fn begin(&mut self) {
        self.current.clear();
        self.shift = 0;
        self.bit_count = 0;
        self.read_index = 0;
    }

    fn commit(&mut self) {
        assert_eq!(self.bit_count, 0, "transaction ended mid-byte");
        let bytes = std::mem::take(&mut self.current);
        if let Some((&instruction, data)) = bytes.split_first() {
            match instruction & 0xC0 {
                0x80 => self.display_control = Some(instruction),
                0xC0 => {
                    let mut address = (instruction & 0x0F) as usize;
                    for byte in data {
                        self.memory[address] = *byte;
                        address = (address + 1) & 0x0F;
                    }
                }
                _ => {}
            }
        }
        self.transactions.push(bytes);
    }
}

impl Platform for SimChip {
    type Error = Infallible;

    fn init(&mut self) -> Result<(), Infallible> {
        self.initialized = true;
        Ok(())
    }

    fn deinit(&mut self) -> Result<(), Infallible> {
        self.initialized = false;
        self.deinit_calls += 1;
        Ok(())
    }

    fn dio_as_output(&mut self) -> Result<(), Infallible> {
        self.dio_output = true;
        Ok(())
    }

    fn dio_as_input(&mut self) -> Result<(), Infallible> {
        self.dio_output = false;
        Ok(())
    }

    fn set_dio(&mut self, high: bool) -> Result<(), Infallible> {
        assert!(self.dio_output, "DIO driven while configured as input");
        self.dio_level = high;
        Ok(())
    }

    fn get_dio(&mut self) -> Result<bool, Infallible> {
        let byte = self.keys.get(self.read_index / 8).copied().unwrap_or(0xFF);
        let bit = byte & (1 << (self.read_index % 8)) != 0;
        self.read_index += 1;
        Ok(bit)
    }

    fn set_clk(&mut self, high: bool) -> Result<(), Infallible> {
        let rising = high && !self.clk_high;
        self.clk_high = high;
        if rising && self.stb_low && self.dio_output {
            self.shift |= (self.dio_level as u8) << self.bit_count;
            self.bit_count += 1;
            if self.bit_count == 8 {
                self.current.push(self.shift);
                self.shift = 0;
                self.bit_count = 0;
            }
        }
        Ok(())
    }

    fn set_stb(&mut self, high: bool) -> Result<(), Infallible> {
        if !high && !self.stb_low {
            self.begin();
        } else if high && self.stb_low {
            self.commit();
        }
        self.stb_low = !high;
        Ok(())
    }

    fn delay_us(&mut self, us: u32) {
        self.delays.push(us);
    }
}

/// Platform that accepts everything and records nothing.
pub struct NullPlatform;

impl Platform for NullPlatform {
    type Error = Infallible;

    fn dio_as_output(&mut self) -> Result<(), Infallible> {
        Ok(())
    }

    fn dio_as_input(&mut self) -> Result<(), Infallible> {
        Ok(())
    }

    fn set_dio(&mut self, _high: bool) -> Result<(), Infallible> {
        Ok(())
    }

    fn get_dio(&mut self) -> Result<bool, Infallible> {
        Ok(false)
    }

    fn set_clk(&mut self, _high: bool) -> Result<(), Infallible> {
        Ok(())
    }

    fn set_stb(&mut self, _high: bool) -> Result<(), Infallible> {
        Ok(())
    }

    fn delay_us(&mut self, _us: u32) {}
}
