//! RP2040-specific HAL for the voting appliance firmware
//!
//! This crate provides RP2040 implementations of the shared `ballot-hal`
//! traits, plus pin allocation by number so the board wiring can come
//! from configuration:
//!
//! - [`gpio`]: `embassy-rp` GPIO adapters
//! - [`pins`]: pin bank for config-driven pin assignment

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod pins;

pub use gpio::{RpInput, RpOutput};
pub use pins::{PinBank, PinError};
