use std::cell::Cell;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorKind, ErrorType, InputPin, OutputPin};
use tm1638::{Config, DisplayState, DisplayType, Error, GpioPlatform, Platform, Tm1638};

#[derive(Clone, Default)]
struct MockPin {
    level: Rc<Cell<bool>>,
    edges: Rc<Cell<usize>>,
    broken: bool,
}

impl MockPin {
    fn broken() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }

    fn drive(&mut self, high: bool) -> Result<(), ErrorKind> {
        if self.broken {
            return Err(ErrorKind::Other);
        }
        if self.level.get() != high {
            self.edges.set(self.edges.get() + 1);
        }
        self.level.set(high);
        Ok(())
    }
}

impl ErrorType for MockPin {
    type Error = ErrorKind;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.drive(false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.drive(true)
    }
}

impl InputPin for MockPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.level.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.level.get())
    }
}

#[derive(Default)]
struct MockDelay {
    total_ns: Rc<Cell<u64>>,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns.set(self.total_ns.get() + ns as u64);
    }
}

#[test]
fn init_idles_all_lines_high() {
    let (stb, clk, dio) = (MockPin::default(), MockPin::default(), MockPin::default());
    let mut platform = GpioPlatform::new(stb.clone(), clk.clone(), dio.clone(), MockDelay::default());

    platform.init().unwrap();
    assert!(stb.level.get() && clk.level.get() && dio.level.get());

    platform.set_stb(false).unwrap();
    platform.set_dio(false).unwrap();
    assert!(!stb.level.get());

    // input mode releases the open-drain line
    platform.dio_as_input().unwrap();
    assert!(platform.get_dio().unwrap());

    platform.deinit().unwrap();
    assert!(stb.level.get() && clk.level.get() && dio.level.get());
}

#[test]
fn byte_is_clocked_on_pins() {
    let (stb, clk, dio) = (MockPin::default(), MockPin::default(), MockPin::default());
    let delay = MockDelay::default();
    let total_ns = delay.total_ns.clone();
    let mut display = Tm1638::new(
        GpioPlatform::new(stb.clone(), clk.clone(), dio.clone(), delay),
        Config::default(),
    );
    display.init().unwrap();
    clk.edges.set(0);
    stb.edges.set(0);

    display.config_display(7, DisplayState::On).unwrap();

    // 8 low/high pairs on CLK, one low/high pair on STB
    assert_eq!(clk.edges.get(), 16);
    assert_eq!(stb.edges.get(), 2);
    assert!(stb.level.get());
    assert_eq!(total_ns.get(), 16 * 1_000);

    let (_, _, _, _) = display.destroy().destroy();
}

#[test]
fn pin_errors_propagate() {
    let stb = MockPin::default();
    let mut display = Tm1638::new(
        GpioPlatform::new(
            stb.clone(),
            MockPin::broken(),
            MockPin::default(),
            MockDelay::default(),
        ),
        Config::default(),
    );

    assert_eq!(
        display.config_display(3, DisplayState::On),
        Err(Error::Interface(ErrorKind::Other))
    );
    assert!(stb.level.get(), "STB must be released after a failed write");

    assert_eq!(display.scan_keys(), Err(Error::Interface(ErrorKind::Other)));
    assert!(stb.level.get(), "STB must be released after a failed read");
}

#[test]
fn failed_transfer_does_not_swallow_the_next_start() {
    let stb = MockPin::default();
    let clk = MockPin::default();
    let broken = Rc::new(Cell::new(false));

    #[derive(Clone)]
    struct FlakyPin {
        pin: MockPin,
        broken: Rc<Cell<bool>>,
    }
    impl ErrorType for FlakyPin {
        type Error = ErrorKind;
    }
    impl OutputPin for FlakyPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            if self.broken.get() {
                return Err(ErrorKind::Other);
            }
            self.pin.set_low()
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            if self.broken.get() {
                return Err(ErrorKind::Other);
            }
            self.pin.set_high()
        }
    }

    let mut display = Tm1638::new(
        GpioPlatform::new(
            stb.clone(),
            FlakyPin {
                pin: clk.clone(),
                broken: broken.clone(),
            },
            MockPin::default(),
            MockDelay::default(),
        ),
        Config::default(),
    );
    display.init().unwrap();

    broken.set(true);
    assert!(display.config_display(3, DisplayState::On).is_err());
    broken.set(false);

    stb.edges.set(0);
    display.config_display(3, DisplayState::On).unwrap();
    // a fresh falling edge opens the retry, a rising edge closes it
    assert_eq!(stb.edges.get(), 2);
    assert!(stb.level.get());
}

#[test]
fn failed_anode_write_leaves_shadow_untouched() {
    let mut display = Tm1638::new(
        GpioPlatform::new(
            MockPin::default(),
            MockPin::broken(),
            MockPin::default(),
            MockDelay::default(),
        ),
        Config::new(DisplayType::CommonAnode),
    );

    assert!(display.set_digit(0, 0xFF).is_err());
    assert_eq!(display.shadow(), Some(&[0; 16]));
}
