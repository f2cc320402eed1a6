//! Voting session controller
//!
//! The session is the central loop of the appliance. It:
//! - Greets the voter after power-on
//! - Prompts for and reads one key at a time
//! - Counts candidate votes and acknowledges them
//! - Shows the counts and the outcome when voting ends
//!
//! Everything is blocking and single-threaded. The tally is owned here and
//! is only changed by the `Tallying` state.

use ballot_hal::DelayNs;

use crate::config::SessionTiming;
use crate::screens;
use crate::state::{Event, State};
use crate::tally::{Outcome, VoteTally};
use crate::traits::{CharacterDisplay, KeySource, VoteFeedback};

/// One power cycle of the voting appliance
pub struct VotingSession<D, K, F, W> {
    display: D,
    keys: K,
    feedback: F,
    delay: W,
    timing: SessionTiming,
    tally: VoteTally,
    state: State,
}

impl<D, K, F, W> VotingSession<D, K, F, W>
where
    D: CharacterDisplay,
    K: KeySource,
    F: VoteFeedback,
    W: DelayNs,
{
    /// Create a session in the `Startup` state with an empty tally
    pub fn new(display: D, keys: K, feedback: F, delay: W, timing: SessionTiming) -> Self {
        Self {
            display,
            keys,
            feedback,
            delay,
            timing,
            tally: VoteTally::new(),
            state: State::Startup,
        }
    }

    /// Get current state
    pub fn state(&self) -> State {
        self.state
    }

    /// Read-only view of the counters
    pub fn tally(&self) -> &VoteTally {
        &self.tally
    }

    /// Perform the current state's work and take one transition
    ///
    /// Returns the new state. In `Halted` this does nothing.
    pub fn step(&mut self) -> State {
        let event = match self.state {
            State::Startup => {
                screens::greeting(&mut self.display);
                self.delay.delay_ms(self.timing.greeting_ms);
                Event::GreetingShown
            }
            State::VotingLoop => {
                screens::prompt(&mut self.display);
                let key = self.keys.next_key();
                let event = Event::from_key(key);
                #[cfg(feature = "defmt")]
                if let Event::Ignored(key) = event {
                    defmt::debug!("Ignoring key {}", key);
                }
                event
            }
            State::Tallying(candidate) => {
                self.tally.record_vote(candidate);
                #[cfg(feature = "defmt")]
                defmt::info!(
                    "Vote recorded for P{} ({} total)",
                    candidate.number(),
                    self.tally.total()
                );
                screens::vote_confirmation(&mut self.display, candidate);
                self.feedback.acknowledge();
                self.delay.delay_ms(self.timing.confirmation_ms);
                Event::VoteRecorded
            }
            State::ResultDisplay => {
                screens::tally(&mut self.display, &self.tally);
                self.delay.delay_ms(self.timing.tally_ms);
                let outcome = self.tally.outcome();
                #[cfg(feature = "defmt")]
                defmt::info!("Voting closed: {} -> {}", self.tally.counts(), outcome);
                screens::outcome(&mut self.display, outcome);
                Event::ResultsShown
            }
            State::Halted => return self.state,
        };

        self.state = self.state.transition(event);
        self.state
    }

    /// Run until the session halts and return the outcome
    pub fn run(&mut self) -> Outcome {
        while !self.state.is_terminal() {
            self.step();
        }
        self.tally.outcome()
    }

    /// Consume the session, returning its collaborators
    pub fn release(self) -> (D, K, F, W) {
        (self.display, self.keys, self.feedback, self.delay)
    }
}
