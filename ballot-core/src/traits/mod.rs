//! Hardware abstraction traits
//!
//! These traits define the interface between the session logic and
//! hardware-specific implementations. Drivers live in `ballot-drivers`;
//! tests substitute recording or scripted backends.

pub mod display;
pub mod feedback;
pub mod keypad;

pub use display::{CharacterDisplay, DisplayExt, ParallelBus, Register};
pub use feedback::{Silent, VoteFeedback};
pub use keypad::{KeyMatrix, KeySource};
