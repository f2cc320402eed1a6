//! State machine for the voting session
//!
//! Defines the authoritative lifecycle of one power cycle.
//! The state machine is explicit, finite, and deterministic.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::State;
