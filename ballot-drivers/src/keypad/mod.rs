//! Matrix keypad drivers
//!
//! - [`MatrixKeypad`]: scan loop, debounce and release tracking
//! - [`GpioKeyMatrix`]: row/column lines on plain GPIO

pub mod gpio_matrix;
pub mod scanner;

pub use gpio_matrix::GpioKeyMatrix;
pub use scanner::MatrixKeypad;
