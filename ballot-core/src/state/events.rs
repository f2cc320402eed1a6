//! Events that trigger state transitions

use crate::keys::Key;
use crate::tally::Candidate;

/// Key that ends voting and reveals the result
pub const END_KEY: Key = Key::Hash;

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // Lifecycle events
    /// Greeting screen finished
    GreetingShown,

    // Keypad events
    /// Voter pressed a candidate key
    VoteCast(Candidate),
    /// Voter pressed the terminator key
    EndVoting,
    /// Voter pressed a key with no meaning
    Ignored(Key),

    // Completion events
    /// Vote counted and acknowledged
    VoteRecorded,
    /// Tally and outcome screens finished
    ResultsShown,
}

impl Event {
    /// Classify a scanned key
    pub fn from_key(key: Key) -> Self {
        if key == END_KEY {
            return Event::EndVoting;
        }
        match Candidate::from_key(key) {
            Some(candidate) => Event::VoteCast(candidate),
            None => Event::Ignored(key),
        }
    }
}
