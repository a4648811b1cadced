use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use crate::bus::Platform;

/// [`Platform`] over `embedded-hal` 1.0 pins.
///
/// `embedded-hal` has no way to change a pin's direction, so DIO must be an open-drain output
/// with a pull-up that can also be read (most HALs offer one). Input mode releases the line
/// high and lets the TM1638 pull it down.
pub struct GpioPlatform<STB, CLK, DIO, D> {
    stb: STB,
    clk: CLK,
    dio: DIO,
    delay: D,
}

impl<STB, CLK, DIO, D, E> GpioPlatform<STB, CLK, DIO, D>
where
    STB: OutputPin<Error = E>,
    CLK: OutputPin<Error = E>,
    DIO: InputPin<Error = E> + OutputPin<Error = E>,
    D: DelayNs,
{
    pub fn new(stb: STB, clk: CLK, dio: DIO, delay: D) -> Self {
        Self {
            stb,
            clk,
            dio,
            delay,
        }
    }

    pub fn destroy(self) -> (STB, CLK, DIO, D) {
        (self.stb, self.clk, self.dio, self.delay)
    }
}

impl<STB, CLK, DIO, D, E> Platform for GpioPlatform<STB, CLK, DIO, D>
where
    STB: OutputPin<Error = E>,
    CLK: OutputPin<Error = E>,
    DIO: InputPin<Error = E> + OutputPin<Error = E>,
    D: DelayNs,
{
    type Error = E;

    fn init(&mut self) -> Result<(), E> {
        // idle bus: no transaction open, clock and data high
        self.stb.set_high()?;
        self.clk.set_high()?;
        self.dio.set_high()
    }

    fn deinit(&mut self) -> Result<(), E> {
        self.init()
    }

    fn dio_as_output(&mut self) -> Result<(), E> {
        Ok(())
    }

    fn dio_as_input(&mut self) -> Result<(), E> {
        self.dio.set_high()
    }

    fn set_dio(&mut self, high: bool) -> Result<(), E> {
        if high {
            self.dio.set_high()
        } else {
            self.dio.set_low()
        }
    }

    fn get_dio(&mut self) -> Result<bool, E> {
        self.dio.is_high()
    }

    fn set_clk(&mut self, high: bool) -> Result<(), E> {
        if high {
            self.clk.set_high()
        } else {
            self.clk.set_low()
        }
    }

    fn set_stb(&mut self, high: bool) -> Result<(), E> {
        if high {
            self.stb.set_high()
        } else {
            self.stb.set_low()
        }
    }

    fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us);
    }
}
