//! GPIO adapters
//!
//! Wrap `embassy-rp` pins so the drivers see the infallible
//! `ballot-hal` traits.

use ballot_hal::{InputPin, OutputPin, Polarity};
use embassy_rp::gpio::{AnyPin, Input, Level, Output, Pull};
use embassy_rp::Peri;

/// Push-pull output
pub struct RpOutput<'d> {
    pin: Output<'d>,
}

impl<'d> RpOutput<'d> {
    /// Configure a pin as an output driven to its inactive level
    pub fn new(pin: Peri<'d, AnyPin>, polarity: Polarity) -> Self {
        let level = if polarity.level(false) {
            Level::High
        } else {
            Level::Low
        };
        Self {
            pin: Output::new(pin, level),
        }
    }
}

impl OutputPin for RpOutput<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}

/// Input with an internal pull toward the inactive level
pub struct RpInput<'d> {
    pin: Input<'d>,
}

impl<'d> RpInput<'d> {
    /// Configure a pin as an input
    ///
    /// Active-low lines get a pull-up, active-high lines a pull-down, so
    /// an open switch always reads inactive.
    pub fn new(pin: Peri<'d, AnyPin>, polarity: Polarity) -> Self {
        let pull = match polarity {
            Polarity::ActiveLow => Pull::Up,
            Polarity::ActiveHigh => Pull::Down,
        };
        Self {
            pin: Input::new(pin, pull),
        }
    }
}

impl InputPin for RpInput<'_> {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}
