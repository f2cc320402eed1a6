//! Character display traits
//!
//! Two layers: [`ParallelBus`] is the raw transport (an 8-bit data bus and
//! three control lines) and [`CharacterDisplay`] is the logical screen the
//! session writes to. The HD44780 driver turns the second into timed pulses
//! on the first.

use core::fmt::Write;

/// Controller register addressed by a transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    /// Instruction register (RS low)
    Command,
    /// Data register (RS high)
    Data,
}

/// Parallel display transport
///
/// Exposes the lines individually so the driver owns the transfer order
/// and the pulse timing.
pub trait ParallelBus {
    /// Place a byte on the data bus
    fn put_data(&mut self, byte: u8);

    /// Drive the register-select line
    fn select_register(&mut self, register: Register);

    /// Hold the read/write line at "write"
    fn set_write(&mut self);

    /// Drive the strobe (enable) line
    fn set_strobe(&mut self, high: bool);
}

/// Logical two-row character display
///
/// Every write is addressed explicitly by the caller; implementations keep
/// no cursor state of their own.
pub trait CharacterDisplay {
    /// Blank the screen and home the cursor
    fn clear(&mut self);

    /// Move the write position
    ///
    /// - `row`: Row number (0-1)
    /// - `col`: Column number (0-based)
    fn set_cursor(&mut self, row: u8, col: u8);

    /// Write characters at the current position
    ///
    /// Stops at the first NUL character.
    fn write_text(&mut self, text: &str);

    /// Write a number in minimal decimal form
    fn write_number(&mut self, value: u32) {
        // u32::MAX is ten digits
        let mut buf: heapless::String<10> = heapless::String::new();
        let _ = write!(buf, "{}", value);
        self.write_text(&buf);
    }
}

/// Helper trait for positioned writes
pub trait DisplayExt: CharacterDisplay {
    /// Write text starting at a position
    fn text_at(&mut self, row: u8, col: u8, text: &str) {
        self.set_cursor(row, col);
        self.write_text(text);
    }

    /// Write a number starting at a position
    fn number_at(&mut self, row: u8, col: u8, value: u32) {
        self.set_cursor(row, col);
        self.write_number(value);
    }
}

// Blanket implementation for all CharacterDisplay types
impl<T: CharacterDisplay + ?Sized> DisplayExt for T {}

#[cfg(test)]
mod tests {
    use super::*;

    /// Collects written text only
    struct TextSink {
        text: heapless::String<32>,
        cursor: Option<(u8, u8)>,
    }

    impl CharacterDisplay for TextSink {
        fn clear(&mut self) {
            self.text.clear();
        }

        fn set_cursor(&mut self, row: u8, col: u8) {
            self.cursor = Some((row, col));
        }

        fn write_text(&mut self, text: &str) {
            let _ = self.text.push_str(text);
        }
    }

    fn sink() -> TextSink {
        TextSink {
            text: heapless::String::new(),
            cursor: None,
        }
    }

    #[test]
    fn test_write_number_zero() {
        let mut display = sink();
        display.write_number(0);
        assert_eq!(display.text.as_str(), "0");
    }

    #[test]
    fn test_write_number_no_leading_zeros() {
        let mut display = sink();
        display.write_number(42);
        assert_eq!(display.text.as_str(), "42");

        display.clear();
        display.write_number(1000);
        assert_eq!(display.text.as_str(), "1000");
    }

    #[test]
    fn test_write_number_max() {
        let mut display = sink();
        display.write_number(u32::MAX);
        assert_eq!(display.text.as_str(), "4294967295");
    }

    #[test]
    fn test_number_at_positions_first() {
        let mut display = sink();
        display.number_at(1, 12, 7);
        assert_eq!(display.cursor, Some((1, 12)));
        assert_eq!(display.text.as_str(), "7");
    }
}
