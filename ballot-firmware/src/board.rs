//! Board assembly
//!
//! Claims the pins named in `voter.toml` from the pin bank and wraps them
//! in the drivers the session runs on.

use ballot_core::config::{
    DisplayGeometry, KeypadPins, LcdPins, LcdTiming, PinConfig, ScanMap, ScanTiming,
    SessionTiming, ToneConfig, Wiring,
};
use ballot_core::keys::Key;
use ballot_drivers::buzzer::ToneBuzzer;
use ballot_drivers::keypad::{GpioKeyMatrix, MatrixKeypad};
use ballot_drivers::lcd::{BusLine, GpioParallelBus, Hd44780};
use ballot_hal_rp2040::{PinBank, PinError, RpInput, RpOutput};
use embassy_time::Delay;

// Generated from voter.toml by build.rs
include!(concat!(env!("OUT_DIR"), "/wiring.rs"));

pub type Lcd = Hd44780<GpioParallelBus<RpOutput<'static>>, Delay>;
pub type Keypad = MatrixKeypad<GpioKeyMatrix<RpOutput<'static>, RpInput<'static>>, Delay>;
pub type Buzzer = ToneBuzzer<RpOutput<'static>, Delay>;

/// Drivers for every attached device
pub struct Board {
    pub lcd: Lcd,
    pub keypad: Keypad,
    pub buzzer: Option<Buzzer>,
}

impl Board {
    /// Claim every configured pin and build the drivers
    ///
    /// The LCD is not initialized yet.
    pub fn assemble(bank: &mut PinBank) -> Result<Self, PinError> {
        Ok(Self {
            lcd: lcd(bank, &WIRING.lcd)?,
            keypad: keypad(bank, &WIRING.keypad)?,
            buzzer: WIRING.buzzer.as_ref().map(|cfg| buzzer(bank, cfg)).transpose()?,
        })
    }
}

fn output(bank: &mut PinBank, cfg: &PinConfig) -> Result<RpOutput<'static>, PinError> {
    Ok(RpOutput::new(bank.take_config(cfg)?, cfg.polarity()))
}

fn input(bank: &mut PinBank, cfg: &PinConfig) -> Result<RpInput<'static>, PinError> {
    Ok(RpInput::new(bank.take_config(cfg)?, cfg.polarity()))
}

fn bus_line(bank: &mut PinBank, cfg: &PinConfig) -> Result<BusLine<RpOutput<'static>>, PinError> {
    Ok(BusLine::new(output(bank, cfg)?, cfg.polarity()))
}

fn lcd(bank: &mut PinBank, pins: &LcdPins) -> Result<Lcd, PinError> {
    let d = &pins.data;
    let bus = GpioParallelBus::new(
        bus_line(bank, &pins.rs)?,
        bus_line(bank, &pins.rw)?,
        bus_line(bank, &pins.enable)?,
        [
            bus_line(bank, &d[0])?,
            bus_line(bank, &d[1])?,
            bus_line(bank, &d[2])?,
            bus_line(bank, &d[3])?,
            bus_line(bank, &d[4])?,
            bus_line(bank, &d[5])?,
            bus_line(bank, &d[6])?,
            bus_line(bank, &d[7])?,
        ],
    );
    Ok(Hd44780::new(bus, Delay, LCD_TIMING, DISPLAY_GEOMETRY))
}

fn keypad(bank: &mut PinBank, pins: &KeypadPins) -> Result<Keypad, PinError> {
    let (r, c) = (&pins.rows, &pins.cols);
    let rows = [
        output(bank, &r[0])?,
        output(bank, &r[1])?,
        output(bank, &r[2])?,
        output(bank, &r[3])?,
    ];
    let cols = [
        input(bank, &c[0])?,
        input(bank, &c[1])?,
        input(bank, &c[2])?,
        input(bank, &c[3])?,
    ];
    // Polarity agreement is checked at build time
    let matrix = GpioKeyMatrix::new(rows, cols, r[0].polarity(), c[0].polarity());
    Ok(MatrixKeypad::new(matrix, Delay, SCAN_MAP, SCAN_TIMING))
}

fn buzzer(bank: &mut PinBank, cfg: &PinConfig) -> Result<Buzzer, PinError> {
    Ok(ToneBuzzer::new(output(bank, cfg)?, Delay, TONE, cfg.polarity()))
}
