//! Character LCD drivers
//!
//! - [`Hd44780`]: HD44780-compatible controller protocol
//! - [`GpioParallelBus`]: 8-bit parallel bus on plain GPIO lines

pub mod gpio_bus;
pub mod hd44780;

pub use gpio_bus::{BusLine, GpioParallelBus};
pub use hd44780::Hd44780;
