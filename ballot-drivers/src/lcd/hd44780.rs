//! HD44780 character LCD driver
//!
//! Drives an HD44780-compatible controller in 8-bit mode over any
//! [`ParallelBus`]. Every byte is one transfer:
//!
//! ```text
//! data ──< byte >────────────────────────────
//! RS   ──< cmd/data >────────────────────────
//! RW   ____________________________________  (write)
//! E    ______/‾‾‾‾‾‾‾‾‾‾\_____________________
//!            |<-pulse-->|<---recovery--->|
//! ```
//!
//! The controller is never read, so the busy flag is not polled; fixed
//! settle times from [`LcdTiming`] cover each instruction's execution time.

use ballot_core::config::{DisplayGeometry, LcdTiming};
use ballot_core::traits::{CharacterDisplay, ParallelBus, Register};
use ballot_hal::DelayNs;

/// Instruction set subset used by this driver
pub mod commands {
    /// Clear display, cursor home
    pub const CLEAR_DISPLAY: u8 = 0x01;

    /// Entry mode set
    pub const ENTRY_MODE_SET: u8 = 0x04;
    /// Entry mode: increment address after each write
    pub const ENTRY_INCREMENT: u8 = 0x02;

    /// Display on/off control
    pub const DISPLAY_CONTROL: u8 = 0x08;
    /// Display control: display on
    pub const DISPLAY_ON: u8 = 0x04;
    /// Display control: underline cursor on
    pub const CURSOR_ON: u8 = 0x02;
    /// Display control: blinking cursor on
    pub const BLINK_ON: u8 = 0x01;

    /// Function set
    pub const FUNCTION_SET: u8 = 0x20;
    /// Function set: 8-bit interface
    pub const EIGHT_BIT_BUS: u8 = 0x10;
    /// Function set: two display lines
    pub const TWO_LINES: u8 = 0x08;
    /// Function set: 5x10 font (5x8 when clear)
    pub const FONT_5X10: u8 = 0x04;

    /// Set DDRAM address (low 7 bits are the address)
    pub const SET_DDRAM_ADDRESS: u8 = 0x80;
    /// Largest DDRAM address
    pub const DDRAM_ADDRESS_MASK: u8 = 0x7F;
}

use commands::*;

/// Power-on configuration sequence
const INIT_SEQUENCE: [u8; 4] = [
    FUNCTION_SET | EIGHT_BIT_BUS | TWO_LINES,
    DISPLAY_CONTROL | DISPLAY_ON,
    CLEAR_DISPLAY,
    ENTRY_MODE_SET | ENTRY_INCREMENT,
];

/// HD44780 driver
///
/// Stateless apart from its configuration: the cursor lives in the
/// controller and every write is addressed by the caller.
pub struct Hd44780<B, D> {
    bus: B,
    delay: D,
    timing: LcdTiming,
    geometry: DisplayGeometry,
}

impl<B: ParallelBus, D: DelayNs> Hd44780<B, D> {
    /// Create a driver; call [`init`](Self::init) before writing
    pub fn new(bus: B, delay: D, timing: LcdTiming, geometry: DisplayGeometry) -> Self {
        Self {
            bus,
            delay,
            timing,
            geometry,
        }
    }

    /// Run the power-on configuration sequence
    ///
    /// 8-bit bus, two lines, 5x8 font; display on with the cursor hidden;
    /// cleared; address auto-increment.
    pub fn init(&mut self) {
        self.delay.delay_ms(self.timing.power_on_ms);

        for cmd in INIT_SEQUENCE {
            self.command(cmd);
            let settle = if cmd == CLEAR_DISPLAY {
                self.timing.clear_settle_us
            } else {
                self.timing.command_settle_us
            };
            self.delay.delay_us(settle);
        }
    }

    /// Send a byte to the instruction register
    pub fn command(&mut self, cmd: u8) {
        self.transfer(Register::Command, cmd);
    }

    /// Send a byte to the data register (character at the cursor)
    pub fn write_data(&mut self, byte: u8) {
        self.transfer(Register::Data, byte);
    }

    /// DDRAM address of a cell
    ///
    /// Rows past the last clamp to the last row; the sum is masked into
    /// the 7-bit address space.
    pub fn address_for(&self, row: u8, col: u8) -> u8 {
        let last = self.geometry.row_bases.len() - 1;
        let base = self.geometry.row_bases[(row as usize).min(last)];
        base.wrapping_add(col) & DDRAM_ADDRESS_MASK
    }

    /// Consume the driver, returning the bus and delay
    pub fn release(self) -> (B, D) {
        (self.bus, self.delay)
    }

    fn transfer(&mut self, register: Register, byte: u8) {
        self.bus.put_data(byte);
        self.bus.select_register(register);
        self.bus.set_write();

        self.bus.set_strobe(true);
        self.delay.delay_us(self.timing.pulse_us);
        self.bus.set_strobe(false);
        self.delay.delay_us(self.timing.recovery_us);
    }
}

impl<B: ParallelBus, D: DelayNs> CharacterDisplay for Hd44780<B, D> {
    fn clear(&mut self) {
        self.command(CLEAR_DISPLAY);
        self.delay.delay_us(self.timing.clear_settle_us);
    }

    fn set_cursor(&mut self, row: u8, col: u8) {
        let address = self.address_for(row, col);
        self.command(SET_DDRAM_ADDRESS | address);
    }

    fn write_text(&mut self, text: &str) {
        for byte in text.bytes().take_while(|&b| b != 0) {
            self.write_data(byte);
        }
    }
}
