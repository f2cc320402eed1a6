//! GPIO-driven parallel display bus
//!
//! Eleven output lines: RS, RW, E and D0-D7. Each line carries its own
//! polarity so a board with inverting level shifters on some lines still
//! sees the controller's logical levels.

use ballot_core::traits::{ParallelBus, Register};
use ballot_hal::{OutputPin, Polarity};

/// One bus signal and the electrical level that asserts it
pub struct BusLine<P> {
    pin: P,
    polarity: Polarity,
}

impl<P: OutputPin> BusLine<P> {
    /// Create a line; it starts deasserted
    pub fn new(pin: P, polarity: Polarity) -> Self {
        let mut line = Self { pin, polarity };
        line.set(false);
        line
    }

    /// Create an active-high line
    pub fn active_high(pin: P) -> Self {
        Self::new(pin, Polarity::ActiveHigh)
    }

    /// Drive the logical state of the signal
    pub fn set(&mut self, asserted: bool) {
        self.pin.set_active(self.polarity, asserted);
    }

    /// Consume the line, returning the pin
    pub fn into_pin(self) -> P {
        self.pin
    }
}

/// 8-bit parallel bus on individual GPIO lines
pub struct GpioParallelBus<P> {
    /// Register select: asserted = data register
    rs: BusLine<P>,
    /// Read/write: asserted = read, never asserted by this bus
    rw: BusLine<P>,
    /// Enable strobe
    enable: BusLine<P>,
    /// D0 first
    data: [BusLine<P>; 8],
}

impl<P: OutputPin> GpioParallelBus<P> {
    /// Create a bus from its lines
    ///
    /// Control lines start deasserted (command register, write, strobe low).
    pub fn new(rs: BusLine<P>, rw: BusLine<P>, enable: BusLine<P>, data: [BusLine<P>; 8]) -> Self {
        Self {
            rs,
            rw,
            enable,
            data,
        }
    }

    /// Consume the bus, returning its lines
    pub fn release(self) -> (BusLine<P>, BusLine<P>, BusLine<P>, [BusLine<P>; 8]) {
        (self.rs, self.rw, self.enable, self.data)
    }
}

impl<P: OutputPin> ParallelBus for GpioParallelBus<P> {
    fn put_data(&mut self, byte: u8) {
        for (bit, line) in self.data.iter_mut().enumerate() {
            line.set(byte & (1 << bit) != 0);
        }
    }

    fn select_register(&mut self, register: Register) {
        self.rs.set(register == Register::Data);
    }

    fn set_write(&mut self) {
        self.rw.set(false);
    }

    fn set_strobe(&mut self, high: bool) {
        self.enable.set(high);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockPin;

    fn bus(data_polarity: Polarity) -> GpioParallelBus<MockPin> {
        GpioParallelBus::new(
            BusLine::active_high(MockPin::default()),
            BusLine::active_high(MockPin::default()),
            BusLine::active_high(MockPin::default()),
            core::array::from_fn(|_| BusLine::new(MockPin::default(), data_polarity)),
        )
    }

    fn data_levels(bus: &GpioParallelBus<MockPin>) -> [bool; 8] {
        core::array::from_fn(|i| bus.data[i].pin.is_set_high())
    }

    #[test]
    fn test_put_data_bit_order() {
        let mut bus = bus(Polarity::ActiveHigh);
        bus.put_data(0b1000_0101);

        assert_eq!(
            data_levels(&bus),
            [true, false, true, false, false, false, false, true]
        );
    }

    #[test]
    fn test_inverted_data_lines() {
        let mut bus = bus(Polarity::ActiveLow);
        bus.put_data(0x0F);

        assert_eq!(
            data_levels(&bus),
            [false, false, false, false, true, true, true, true]
        );
    }

    #[test]
    fn test_control_lines() {
        let mut bus = bus(Polarity::ActiveHigh);

        bus.select_register(Register::Data);
        assert!(bus.rs.pin.is_set_high());
        bus.select_register(Register::Command);
        assert!(!bus.rs.pin.is_set_high());

        bus.set_write();
        assert!(!bus.rw.pin.is_set_high());

        bus.set_strobe(true);
        assert!(bus.enable.pin.is_set_high());
        bus.set_strobe(false);
        assert!(!bus.enable.pin.is_set_high());
    }

    #[test]
    fn test_one_strobe_pulse_per_transfer() {
        use crate::lcd::Hd44780;
        use crate::testing::RecordingDelay;
        use ballot_core::config::{DisplayGeometry, LcdTiming};
        use ballot_core::traits::CharacterDisplay;

        let mut lcd = Hd44780::new(
            bus(Polarity::ActiveHigh),
            RecordingDelay::default(),
            LcdTiming::default(),
            DisplayGeometry::default(),
        );
        lcd.write_text("Vote");

        let (bus, _) = lcd.release();
        let (_, _, enable, _) = bus.release();
        // Rising and falling edge for each character
        assert_eq!(enable.into_pin().edges, 8);
    }
}
