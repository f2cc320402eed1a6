//! GPIO pin abstractions
//!
//! Infallible digital I/O traits. Every line in this system is either
//! driven (LCD bus, keypad rows, buzzer) or sensed (keypad columns), and
//! the hardware offers no error path for either.

/// Electrical polarity of a logical signal
///
/// Keypad matrices are commonly wired active-low: a row is selected by
/// pulling it low and a closed switch pulls its column low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Active = logic high
    #[default]
    ActiveHigh,
    /// Active = logic low
    ActiveLow,
}

impl Polarity {
    /// Electrical level (true = high) that represents `active`
    pub const fn level(self, active: bool) -> bool {
        match self {
            Polarity::ActiveHigh => active,
            Polarity::ActiveLow => !active,
        }
    }

    /// Logical state represented by an electrical level
    pub const fn is_active(self, high: bool) -> bool {
        self.level(high)
    }
}

/// Digital output pin
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific level
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Drive the logical `active` state through a polarity
    fn set_active(&mut self, polarity: Polarity, active: bool) {
        self.set_state(polarity.level(active));
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;
}

/// Digital input pin
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }

    /// Check if the pin reads the active level for a polarity
    fn is_active(&self, polarity: Polarity) -> bool {
        polarity.is_active(self.is_high())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockPin {
        high: bool,
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    impl InputPin for MockPin {
        fn is_high(&self) -> bool {
            self.high
        }
    }

    #[test]
    fn test_active_low_drive() {
        let mut pin = MockPin { high: false };

        pin.set_active(Polarity::ActiveLow, true);
        assert!(!pin.is_set_high());

        pin.set_active(Polarity::ActiveLow, false);
        assert!(pin.is_set_high());
    }

    #[test]
    fn test_active_high_drive() {
        let mut pin = MockPin { high: false };

        pin.set_active(Polarity::ActiveHigh, true);
        assert!(pin.is_set_high());
    }

    #[test]
    fn test_sense_polarity() {
        let pin = MockPin { high: false };
        assert!(pin.is_active(Polarity::ActiveLow));
        assert!(!pin.is_active(Polarity::ActiveHigh));
        assert!(pin.is_low());
    }
}
