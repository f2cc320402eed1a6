//! Board-agnostic core logic for the voting appliance firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Keypad symbols and the row/column scan map
//! - Capability traits for the display bus, key matrix and vote feedback
//! - Vote tally and winner/tie determination
//! - State machine for the voting session lifecycle
//! - Screen layouts and the session controller that ties it together
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod keys;
pub mod screens;
pub mod session;
pub mod state;
pub mod tally;
pub mod traits;

#[cfg(test)]
mod testing;
