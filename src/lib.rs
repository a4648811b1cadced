//! Driver for the Titan Micro TM1638 LED/keypad controller.
//!
//! The TM1638 drives up to 16 bytes of LED memory (usually eight or ten seven-segment digits)
//! and scans a 3x8 key matrix. It talks over a three-wire bus (STB, CLK, DIO) which this crate
//! bit-bangs through a [`Platform`]; [`GpioPlatform`] implements it for `embedded-hal` pins.
//!
//! ```ignore
//! let platform = tm1638::GpioPlatform::new(stb, clk, dio, delay);
//! let mut display = tm1638::Tm1638::new(platform, tm1638::Config::default());
//! display.init()?;
//! display.config_display(7, tm1638::DisplayState::On)?;
//! display.set_digits_hex(0, &[1, 2, 3, 4 | tm1638::DECIMAL_POINT])?;
//! let keys = display.scan_keys()?;
//! ```

#![no_std]

pub mod bus;
pub mod command;
mod config;
mod constants;
mod error;
pub mod glyph;
mod gpio;
pub mod keys;
pub mod register;

pub use bus::{Bus, Platform};
pub use command::DisplayState;
pub use config::{Config, Validation};
pub use constants::*;
pub use error::Error;
pub use glyph::Alphabet;
pub use gpio::GpioPlatform;
pub use register::{AnodeShadow, DisplayType};

use num_traits::ToPrimitive;

pub struct Tm1638<P> {
    bus: Bus<P>,
    config: Config,
    shadow: Option<AnodeShadow>, // common anode only
}

impl<P, E> Tm1638<P>
where
    P: Platform<Error = E>,
{
    pub fn new(platform: P, config: Config) -> Self {
        let shadow = match config.display_type {
            DisplayType::CommonCathode => None,
            DisplayType::CommonAnode => Some(AnodeShadow::new()),
        };
        Self {
            bus: Bus::new(platform, config.bit_delay_us),
            config,
            shadow,
        }
    }

    pub fn destroy(self) -> P {
        self.bus.release()
    }

    /// Direct access to the platform.
    pub fn platform(&mut self) -> &mut P {
        self.bus.platform()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn display_type(&self) -> DisplayType {
        self.config.display_type
    }

    /// Local copy of display memory, kept for common-anode displays only.
    pub fn shadow(&self) -> Option<&[u8; MAX_POSITIONS as usize]> {
        self.shadow.as_ref().map(AnodeShadow::lanes)
    }

    /// Prepares the platform lines and resets the common-anode shadow.
    pub fn init(&mut self) -> Result<(), Error<E>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("tm1638 init {}", self.config);

        let platform = self.bus.platform();
        platform.init()?;
        platform.dio_as_output()?;
        platform.set_stb(true)?;

        if let Some(shadow) = self.shadow.as_mut() {
            shadow.clear();
        }
        Ok(())
    }

    /// Returns the lines to an inert state. The handle may be re-initialised afterwards.
    pub fn deinit(&mut self) -> Result<(), Error<E>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("tm1638 deinit");

        self.bus.platform().deinit()?;
        Ok(())
    }

    /// Sets the brightness (pulse width 1/16 .. 14/16 for 0..=7) and turns the display on or
    /// off.
    pub fn config_display(&mut self, brightness: u8, state: DisplayState) -> Result<(), Error<E>> {
        if self.is_strict() && brightness > MAX_BRIGHTNESS {
            return Err(Error::InvalidValue);
        }
        self.bus
            .transaction(&[command::display_control(brightness, state)])?;
        Ok(())
    }

    /// Writes a raw segment pattern to one position.
    pub fn set_digit(&mut self, position: u8, glyph: u8) -> Result<(), Error<E>> {
        self.set_digits(position, &[glyph])
    }

    /// Writes raw segment patterns to consecutive positions starting at `start`.
    ///
    /// On a common-cathode display the patterns go straight to display memory. On a
    /// common-anode display they are merged into the shadow, which is then rewritten whole. The
    /// shadow only takes the new patterns once the write has gone out.
    pub fn set_digits(&mut self, start: u8, glyphs: &[u8]) -> Result<(), Error<E>> {
        let end = start as usize + glyphs.len();
        let strict = self.is_strict();

        match self.shadow.as_mut() {
            None => {
                if strict && end > MAX_POSITIONS as usize {
                    return Err(Error::InvalidPosition(start.max(MAX_POSITIONS)));
                }
                self.write_registers(start, glyphs)
            }
            Some(shadow) => {
                if strict && end > MAX_ANODE_POSITIONS as usize {
                    return Err(Error::InvalidPosition(start.max(MAX_ANODE_POSITIONS)));
                }
                let mut next = *shadow;
                next.apply(start, glyphs);
                self.write_registers(0, next.lanes())?;
                self.shadow = Some(next);
                Ok(())
            }
        }
    }

    /// Writes a hex digit (0-15, or ASCII `a-f`/`A-F`) to one position. Set
    /// [`DECIMAL_POINT`] in `value` to light the dot.
    pub fn set_digit_hex(&mut self, position: u8, value: u8) -> Result<(), Error<E>> {
        self.set_digits_with(position, &[value], Alphabet::Hex)
    }

    pub fn set_digits_hex(&mut self, start: u8, values: &[u8]) -> Result<(), Error<E>> {
        self.set_digits_with(start, values, Alphabet::Hex)
    }

    /// Like [`Self::set_digit_hex`] but also accepts ASCII digits and the letters a
    /// seven-segment digit can show. Unknown characters are blank.
    pub fn set_digit_char(&mut self, position: u8, value: u8) -> Result<(), Error<E>> {
        self.set_digits_with(position, &[value], Alphabet::Extended)
    }

    pub fn set_digits_char(&mut self, start: u8, values: &[u8]) -> Result<(), Error<E>> {
        self.set_digits_with(start, values, Alphabet::Extended)
    }

    /// Blanks every position.
    pub fn clear(&mut self) -> Result<(), Error<E>> {
        self.write_registers(0, &[0; MAX_POSITIONS as usize])?;
        if let Some(shadow) = self.shadow.as_mut() {
            shadow.clear();
        }
        Ok(())
    }

    /// Shows `number` in decimal, right-aligned over the configured digits. Position 0 holds
    /// the most significant digit and leading zeros are blank.
    pub fn display_number<T>(&mut self, number: T) -> Result<(), Error<E>>
    where
        T: ToPrimitive,
    {
        let number = number.to_u32().ok_or(Error::InvalidValue)?;
        self.display_radix(number, 10)
    }

    /// Shows `number` in hex, right-aligned over the configured digits.
    pub fn display_hex_number<T>(&mut self, number: T) -> Result<(), Error<E>>
    where
        T: ToPrimitive,
    {
        let number = number.to_u32().ok_or(Error::InvalidValue)?;
        self.display_radix(number, 16)
    }

    /// Reads the key matrix. Bit `row * 8 + column` is set for each pressed key; see
    /// [`keys::is_pressed`].
    pub fn scan_keys(&mut self) -> Result<u32, Error<E>> {
        let mut scan = [0u8; KEY_SCAN_BYTES];
        self.bus.transaction_read(command::read_mode(), &mut scan)?;
        Ok(keys::decode(&scan))
    }

    fn set_digits_with(
        &mut self,
        start: u8,
        values: &[u8],
        alphabet: Alphabet,
    ) -> Result<(), Error<E>> {
        if self.is_strict() && values.len() > MAX_POSITIONS as usize {
            return Err(Error::InvalidValue);
        }

        let mut glyphs = [0u8; MAX_POSITIONS as usize];
        let count = values.len().min(glyphs.len());
        for (slot, value) in glyphs.iter_mut().zip(values) {
            *slot = glyph::resolve(*value, alphabet);
        }
        self.set_digits(start, &glyphs[..count])
    }

    fn display_radix(&mut self, mut number: u32, radix: u32) -> Result<(), Error<E>> {
        let digits = (self.config.digits as usize).min(MAX_POSITIONS as usize);
        let mut glyphs = [0u8; MAX_POSITIONS as usize];

        for (i, slot) in glyphs[..digits].iter_mut().rev().enumerate() {
            if number == 0 && i > 0 {
                break;
            }
            *slot = glyph::hex_digit((number % radix) as u8);
            number /= radix;
        }
        if number != 0 {
            return Err(Error::InvalidValue);
        }

        self.set_digits(0, &glyphs[..digits])
    }

    fn write_registers(&mut self, start: u8, data: &[u8]) -> Result<(), Error<E>> {
        self.bus.transaction(&[command::write_mode()])?;
        self.bus
            .transaction_with_data(command::address(start), data)?;
        Ok(())
    }

    fn is_strict(&self) -> bool {
        self.config.validation == Validation::Strict
    }
}
