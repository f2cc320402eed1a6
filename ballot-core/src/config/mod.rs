//! Configuration types
//!
//! Board-agnostic configuration: the keypad scan map, pin wiring and all
//! timing parameters. The firmware receives these from `voter.toml`, which
//! is validated with the parsers in this module at build time.

pub mod hardware;
pub mod scan_map;
pub mod types;

pub use hardware::*;
pub use scan_map::*;
pub use types::*;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Scan map does not have exactly four rows
    RowCount(usize),
    /// A scan map row does not have exactly four symbols
    RowWidth { row: u8, len: usize },
    /// A scan map cell holds a character that is not a keypad symbol
    UnknownKey { row: u8, col: u8, symbol: char },
    /// Pin string is not of the form `gpioN` / `!gpioN`
    InvalidPin,
    /// Pin number beyond the chip's GPIO count
    PinOutOfRange(u8),
    /// The same GPIO is assigned to two signals
    DuplicatePin(u8),
    /// Lines of one keypad group disagree on active level
    MixedPolarity,
    /// A timing parameter is zero or inconsistent
    InvalidTiming,
}
