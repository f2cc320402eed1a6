//! State machine definition
//!
//! All display output and tally updates are a function of the current
//! state and an event.

use super::events::Event;
use crate::tally::Candidate;

/// Session states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Power-on greeting
    Startup,
    /// Prompt shown, waiting for a key
    VotingLoop,
    /// Counting a vote (transient)
    Tallying(Candidate),
    /// Showing counts and the outcome
    ResultDisplay,
    /// Session over; only a reset leaves this state
    Halted,
}

impl State {
    /// Check if the session has ended
    pub fn is_terminal(&self) -> bool {
        matches!(self, State::Halted)
    }

    /// Process an event and return the next state
    ///
    /// This is the core state transition logic.
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use State::*;

        match (self, event) {
            // Startup transitions
            (Startup, GreetingShown) => VotingLoop,

            // VotingLoop transitions
            (VotingLoop, VoteCast(candidate)) => Tallying(candidate),
            (VotingLoop, EndVoting) => ResultDisplay,
            (VotingLoop, Ignored(_)) => VotingLoop,

            // Tallying transitions
            (Tallying(_), VoteRecorded) => VotingLoop,

            // ResultDisplay transitions
            (ResultDisplay, ResultsShown) => Halted,

            // Halted never leaves; anything else stays put
            _ => self,
        }
    }
}
