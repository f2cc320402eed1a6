//! Ballot Box - Keypad Voting Appliance Firmware
//!
//! Main firmware binary for RP2040-based voting boards: a 4x4 matrix
//! keypad, an HD44780 16x2 character LCD and an optional buzzer. One
//! voting session runs per power cycle; the board then halts with the
//! result on screen.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use ballot_core::session::VotingSession;
use ballot_core::traits::Silent;
use ballot_hal_rp2040::PinBank;

mod board;

use board::{Board, SESSION_TIMING};

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Ballot Box firmware starting...");

    let p = embassy_rp::init(Default::default());
    let mut bank = PinBank::new(p);

    let Board {
        mut lcd,
        keypad,
        buzzer,
    } = match Board::assemble(&mut bank) {
        Ok(board) => board,
        Err(e) => {
            error!("Pin setup failed: {}", e);
            halt();
        }
    };
    info!("Board assembled (buzzer: {})", buzzer.is_some());

    lcd.init();
    info!("LCD initialized");

    let outcome = match buzzer {
        Some(buzzer) => {
            VotingSession::new(lcd, keypad, buzzer, Delay, SESSION_TIMING).run()
        }
        None => VotingSession::new(lcd, keypad, Silent, Delay, SESSION_TIMING).run(),
    };

    info!("Session halted: {}", outcome);
    halt();
}

/// Stop for good; the result stays on the display
fn halt() -> ! {
    loop {
        cortex_m::asm::wfe();
    }
}
