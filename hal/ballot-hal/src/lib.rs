//! Ballot Box Hardware Abstraction Layer
//!
//! This crate defines the digital I/O traits that chip-specific HALs
//! implement, so the keypad scanner, the LCD bus and the buzzer can be
//! driven from real GPIO or from a simulated backend in tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (ballot-firmware)          │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  ballot-drivers (LCD, keypad, buzzer)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  ballot-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ ballot-hal-   │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`DelayNs`] - Blocking delay, re-exported from `embedded-hal`

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;

// Re-export key traits at crate root for convenience
pub use embedded_hal::delay::DelayNs;
pub use gpio::{InputPin, OutputPin, Polarity};
