//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in ballot-core:
//!
//! - HD44780 character LCD over an 8-bit parallel bus
//! - 4x4 matrix keypad scanner
//! - GPIO backends for the LCD bus and the key matrix
//! - Square-wave buzzer for vote acknowledgement

#![no_std]
#![deny(unsafe_code)]

pub mod buzzer;
pub mod keypad;
pub mod lcd;

#[cfg(test)]
mod testing;
