//! Hardware wiring configuration
//!
//! These types describe which GPIO carries each logical signal: the LCD
//! control lines and data bus, the keypad matrix lines and the optional
//! buzzer.

use ballot_hal::Polarity;

use super::scan_map::{MATRIX_COLS, MATRIX_ROWS};
use super::ConfigError;

/// Number of GPIO pins on the target chip (RP2040)
pub const GPIO_COUNT: u8 = 30;

/// Pin configuration with optional inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConfig {
    /// GPIO pin number (0-29 for RP2040)
    pub pin: u8,
    /// Pin is active-low (inverted)
    pub inverted: bool,
}

impl PinConfig {
    /// Create a new active-high pin config
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
        }
    }

    /// Create an inverted (active-low) pin
    pub const fn inverted(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
        }
    }

    /// Electrical polarity of this signal
    pub const fn polarity(&self) -> Polarity {
        if self.inverted {
            Polarity::ActiveLow
        } else {
            Polarity::ActiveHigh
        }
    }
}

/// Parse a pin string from config
///
/// Supports formats:
/// - "gpio11" -> pin 11, active-high
/// - "!gpio12" -> pin 12, active-low
pub fn parse_pin_string(s: &str) -> Result<PinConfig, ConfigError> {
    let s = s.trim();

    let (s, inverted) = match s.strip_prefix('!') {
        Some(rest) => (rest, true),
        None => (s, false),
    };

    let num = s.strip_prefix("gpio").ok_or(ConfigError::InvalidPin)?;
    let pin: u8 = num.parse().map_err(|_| ConfigError::InvalidPin)?;

    if pin >= GPIO_COUNT {
        return Err(ConfigError::PinOutOfRange(pin));
    }

    Ok(PinConfig { pin, inverted })
}

/// Parallel character LCD wiring (8-bit bus)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LcdPins {
    /// Register select (low = command, high = data)
    pub rs: PinConfig,
    /// Read/write (held low = write)
    pub rw: PinConfig,
    /// Enable strobe
    pub enable: PinConfig,
    /// Data bus, D0 first
    pub data: [PinConfig; 8],
}

/// Keypad matrix wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeypadPins {
    /// Row-drive outputs, scanned first to last
    pub rows: [PinConfig; MATRIX_ROWS],
    /// Column-sense inputs, checked first to last
    pub cols: [PinConfig; MATRIX_COLS],
}

impl KeypadPins {
    /// Active level shared by all row lines
    pub fn row_polarity(&self) -> Result<Polarity, ConfigError> {
        common_polarity(&self.rows)
    }

    /// Active level shared by all column lines
    pub fn col_polarity(&self) -> Result<Polarity, ConfigError> {
        common_polarity(&self.cols)
    }
}

fn common_polarity(pins: &[PinConfig]) -> Result<Polarity, ConfigError> {
    let first = pins.first().map(|p| p.inverted).unwrap_or(false);
    if pins.iter().any(|p| p.inverted != first) {
        return Err(ConfigError::MixedPolarity);
    }
    Ok(if first {
        Polarity::ActiveLow
    } else {
        Polarity::ActiveHigh
    })
}

/// Complete board wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Wiring {
    /// LCD control lines and data bus
    pub lcd: LcdPins,
    /// Keypad matrix lines
    pub keypad: KeypadPins,
    /// Optional acknowledgement buzzer
    pub buzzer: Option<PinConfig>,
}

impl Wiring {
    /// Check that no GPIO is assigned twice and keypad polarities agree
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut used: u32 = 0;
        let mut claim = |cfg: &PinConfig| -> Result<(), ConfigError> {
            if cfg.pin >= GPIO_COUNT {
                return Err(ConfigError::PinOutOfRange(cfg.pin));
            }
            let mask = 1u32 << cfg.pin;
            if used & mask != 0 {
                return Err(ConfigError::DuplicatePin(cfg.pin));
            }
            used |= mask;
            Ok(())
        };

        claim(&self.lcd.rs)?;
        claim(&self.lcd.rw)?;
        claim(&self.lcd.enable)?;
        for pin in &self.lcd.data {
            claim(pin)?;
        }
        for pin in self.keypad.rows.iter().chain(self.keypad.cols.iter()) {
            claim(pin)?;
        }
        if let Some(buzzer) = &self.buzzer {
            claim(buzzer)?;
        }

        self.keypad.row_polarity()?;
        self.keypad.col_polarity()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_wiring() -> Wiring {
        Wiring {
            lcd: LcdPins {
                rs: PinConfig::new(0),
                rw: PinConfig::new(1),
                enable: PinConfig::new(2),
                data: [
                    PinConfig::new(3),
                    PinConfig::new(4),
                    PinConfig::new(5),
                    PinConfig::new(6),
                    PinConfig::new(7),
                    PinConfig::new(8),
                    PinConfig::new(9),
                    PinConfig::new(10),
                ],
            },
            keypad: KeypadPins {
                rows: [
                    PinConfig::inverted(11),
                    PinConfig::inverted(12),
                    PinConfig::inverted(13),
                    PinConfig::inverted(14),
                ],
                cols: [
                    PinConfig::inverted(15),
                    PinConfig::inverted(16),
                    PinConfig::inverted(17),
                    PinConfig::inverted(18),
                ],
            },
            buzzer: Some(PinConfig::new(22)),
        }
    }

    #[test]
    fn test_pin_config() {
        let pin = PinConfig::new(10);
        assert_eq!(pin.pin, 10);
        assert!(!pin.inverted);
        assert_eq!(pin.polarity(), Polarity::ActiveHigh);

        let inverted = PinConfig::inverted(12);
        assert!(inverted.inverted);
        assert_eq!(inverted.polarity(), Polarity::ActiveLow);
    }

    #[test]
    fn test_parse_pin_string() {
        assert_eq!(parse_pin_string("gpio11"), Ok(PinConfig::new(11)));
        assert_eq!(parse_pin_string("!gpio12"), Ok(PinConfig::inverted(12)));
        assert_eq!(parse_pin_string("  gpio0 "), Ok(PinConfig::new(0)));
        assert_eq!(parse_pin_string("gpio29"), Ok(PinConfig::new(29)));

        assert_eq!(parse_pin_string("gpio30"), Err(ConfigError::PinOutOfRange(30)));
        assert_eq!(parse_pin_string("pin11"), Err(ConfigError::InvalidPin));
        assert_eq!(parse_pin_string("gpio"), Err(ConfigError::InvalidPin));
        assert_eq!(parse_pin_string(""), Err(ConfigError::InvalidPin));
    }

    #[test]
    fn test_valid_wiring() {
        let wiring = sample_wiring();
        assert!(wiring.validate().is_ok());
        assert_eq!(wiring.keypad.row_polarity(), Ok(Polarity::ActiveLow));
        assert_eq!(wiring.keypad.col_polarity(), Ok(Polarity::ActiveLow));
    }

    #[test]
    fn test_duplicate_pin() {
        let mut wiring = sample_wiring();
        wiring.buzzer = Some(PinConfig::new(2));
        assert_eq!(wiring.validate(), Err(ConfigError::DuplicatePin(2)));
    }

    #[test]
    fn test_mixed_keypad_polarity() {
        let mut wiring = sample_wiring();
        wiring.keypad.cols[3] = PinConfig::new(18);
        assert_eq!(wiring.validate(), Err(ConfigError::MixedPolarity));
    }

    #[test]
    fn test_no_buzzer() {
        let mut wiring = sample_wiring();
        wiring.buzzer = None;
        assert!(wiring.validate().is_ok());
    }
}
