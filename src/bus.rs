//! The TM1638 three-wire bus, driven by toggling GPIO lines in software.
//!
//! The bus looks a bit like SPI: STB frames a transaction, bits move LSB first and DIO is
//! sampled on the rising edge of CLK. Unlike SPI the single data line turns around when key
//! data is read back, so the bus is bit-banged through a [`Platform`].

use crate::constants::timing;

/// Line-level access to the three pins wired to the TM1638, plus a microsecond delay.
///
/// Implement this for whatever HAL the target provides. [`crate::GpioPlatform`] covers any
/// `embedded-hal` 1.0 pins.
pub trait Platform {
    type Error;

    /// One-time setup of the lines before the first transaction.
    fn init(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Return the lines to an inert state.
    fn deinit(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Put DIO into output mode (followed by calls to [`Self::set_dio`]).
    fn dio_as_output(&mut self) -> Result<(), Self::Error>;

    /// Put DIO into input mode (followed by calls to [`Self::get_dio`]).
    fn dio_as_input(&mut self) -> Result<(), Self::Error>;

    fn set_dio(&mut self, high: bool) -> Result<(), Self::Error>;

    /// Level of DIO, `true` for high.
    fn get_dio(&mut self) -> Result<bool, Self::Error>;

    fn set_clk(&mut self, high: bool) -> Result<(), Self::Error>;

    fn set_stb(&mut self, high: bool) -> Result<(), Self::Error>;

    fn delay_us(&mut self, us: u32);
}

/// Byte-level transport over a [`Platform`].
///
/// Nothing is acknowledged by the chip: a missing or miswired device reads back as whatever
/// level DIO floats at.
pub struct Bus<P> {
    platform: P,
    bit_delay_us: u32,
}

impl<P: Platform> Bus<P> {
    /// `bit_delay_us` is the timing unit every wait on the bus is a multiple of.
    pub fn new(platform: P, bit_delay_us: u32) -> Self {
        Self {
            platform,
            bit_delay_us,
        }
    }

    pub fn platform(&mut self) -> &mut P {
        &mut self.platform
    }

    pub fn release(self) -> P {
        self.platform
    }

    /// Pulls STB low, opening a transaction.
    pub fn start(&mut self) -> Result<(), P::Error> {
        self.platform.set_stb(false)
    }

    /// Drives STB high; the chip latches what was sent since [`Self::start`].
    pub fn stop(&mut self) -> Result<(), P::Error> {
        self.platform.set_stb(true)
    }

    /// Shifts `bytes` out on DIO, LSB first.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), P::Error> {
        self.platform.dio_as_output()?;

        for byte in bytes {
            #[cfg(feature = "defmt")]
            defmt::trace!("tm1638 tx {=u8:#04x}", *byte);
            for bit in 0..8 {
                self.platform.set_clk(false)?;
                self.wait(1);
                self.platform.set_dio(byte & (1 << bit) != 0)?;
                self.platform.set_clk(true)?;
                self.wait(1);
            }
        }

        Ok(())
    }

    /// Clocks `buf.len()` bytes in from DIO, LSB first.
    pub fn read_bytes(&mut self, buf: &mut [u8]) -> Result<(), P::Error> {
        self.platform.dio_as_input()?;
        self.wait(timing::READ_SETTLE_UNITS);

        for byte in buf.iter_mut() {
            let mut value = 0u8;
            for bit in 0..8 {
                self.platform.set_clk(false)?;
                self.wait(1);
                self.platform.set_clk(true)?;
                if self.platform.get_dio()? {
                    value |= 1 << bit;
                }
                self.wait(1);
            }
            #[cfg(feature = "defmt")]
            defmt::trace!("tm1638 rx {=u8:#04x}", value);
            *byte = value;
            self.wait(timing::READ_BYTE_GAP_UNITS);
        }

        Ok(())
    }

    /// Sends `bytes` as one STB-framed transaction.
    pub fn transaction(&mut self, bytes: &[u8]) -> Result<(), P::Error> {
        self.framed(|bus| bus.write_bytes(bytes))
    }

    /// Sends an instruction followed by its payload in one transaction.
    pub fn transaction_with_data(&mut self, instruction: u8, data: &[u8]) -> Result<(), P::Error> {
        self.framed(|bus| {
            bus.write_bytes(&[instruction])?;
            bus.write_bytes(data)
        })
    }

    /// Sends an instruction, then reads `buf.len()` bytes before closing the transaction.
    pub fn transaction_read(&mut self, instruction: u8, buf: &mut [u8]) -> Result<(), P::Error> {
        self.framed(|bus| {
            bus.write_bytes(&[instruction])?;
            bus.read_bytes(buf)
        })
    }

    /// Runs `transfer` between [`Self::start`] and [`Self::stop`]. STB is released even when
    /// the transfer fails; the first error wins.
    fn framed<F>(&mut self, transfer: F) -> Result<(), P::Error>
    where
        F: FnOnce(&mut Self) -> Result<(), P::Error>,
    {
        self.start()?;
        let result = transfer(self);
        let stop = self.stop();
        result.and(stop)
    }

    fn wait(&mut self, units: u32) {
        self.platform.delay_us(units.saturating_mul(self.bit_delay_us));
    }
}
