//! Vote tally and outcome determination
//!
//! The tally owns the per-candidate counters for the whole power cycle.
//! Counters only ever grow, and only through [`VoteTally::record_vote`].

use crate::keys::Key;

/// Number of candidates on the ballot
pub const CANDIDATES: usize = 4;

/// A ballot position (0-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Candidate(u8);

impl Candidate {
    /// Create a candidate from its 0-based index
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < CANDIDATES {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Candidate selected by a keypad key
    ///
    /// Keys `1`-`4` select candidates 0-3. Every other key selects nothing.
    pub fn from_key(key: Key) -> Option<Self> {
        match key.digit()? {
            d @ 1..=4 => Self::new(d - 1),
            _ => None,
        }
    }

    /// 0-based index
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Ballot number shown to voters (1-based)
    pub const fn number(self) -> u8 {
        self.0 + 1
    }
}

/// Result of the election
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// Every counter is zero
    NoVotes,
    /// Two or more candidates share the highest count
    Tie,
    /// A single candidate holds the highest count
    Winner(Candidate),
}

/// Per-candidate vote counters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VoteTally {
    counts: [u32; CANDIDATES],
}

impl VoteTally {
    /// Create a tally with all counters at zero
    pub const fn new() -> Self {
        Self {
            counts: [0; CANDIDATES],
        }
    }

    /// Add one vote for a candidate
    pub fn record_vote(&mut self, candidate: Candidate) {
        let count = &mut self.counts[candidate.index()];
        *count = count.saturating_add(1);
    }

    /// Votes recorded for a candidate
    pub fn count(&self, candidate: Candidate) -> u32 {
        self.counts[candidate.index()]
    }

    /// Snapshot of all counters, indexed by candidate
    pub fn counts(&self) -> [u32; CANDIDATES] {
        self.counts
    }

    /// Total votes cast
    pub fn total(&self) -> u32 {
        self.counts.iter().fold(0u32, |acc, &c| acc.saturating_add(c))
    }

    /// Outcome of the votes recorded so far
    pub fn outcome(&self) -> Outcome {
        determine_outcome(&self.counts)
    }
}

/// Determine the outcome from a set of counts in a single pass
///
/// A later strict maximum clears any tie seen at a lower value, so only a
/// tie at the final maximum is reported.
pub fn determine_outcome(counts: &[u32; CANDIDATES]) -> Outcome {
    let mut max: Option<u32> = None;
    let mut winner = 0u8;
    let mut tie = false;

    for (i, &count) in counts.iter().enumerate() {
        match max {
            Some(m) if count < m => {}
            Some(m) if count == m => {
                if m > 0 {
                    tie = true;
                }
            }
            _ => {
                max = Some(count);
                winner = i as u8;
                tie = false;
            }
        }
    }

    match max {
        None | Some(0) => Outcome::NoVotes,
        Some(_) if tie => Outcome::Tie,
        // winner < CANDIDATES by construction of the loop
        Some(_) => Outcome::Winner(Candidate(winner)),
    }
}
