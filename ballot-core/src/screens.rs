//! Screen layouts
//!
//! Every piece of text the appliance shows, laid out for a 16x2 display.
//! Each function starts from a cleared screen.

use crate::tally::{Candidate, Outcome, VoteTally, CANDIDATES};
use crate::traits::{CharacterDisplay, DisplayExt};

/// Column spacing of the per-candidate count columns
pub const TALLY_COLUMN_WIDTH: u8 = 4;

/// Power-on greeting
pub fn greeting<D: CharacterDisplay + ?Sized>(display: &mut D) {
    display.clear();
    display.text_at(0, 2, "Electronic");
    display.text_at(1, 1, "Voting Machine");
}

/// Ballot prompt listing the candidate keys
///
/// The second line runs past column 15; the tail lands in DDRAM beyond
/// the visible window.
pub fn prompt<D: CharacterDisplay + ?Sized>(display: &mut D) {
    display.clear();
    display.text_at(0, 0, "P1(1) P2(2)");
    display.text_at(1, 0, "P3(3) P4(4) #=Res");
}

/// Confirmation after a vote is counted
pub fn vote_confirmation<D: CharacterDisplay + ?Sized>(display: &mut D, candidate: Candidate) {
    display.clear();
    display.text_at(0, 0, "Vote Recorded for:");
    display.text_at(1, 6, "P");
    display.write_number(candidate.number() as u32);
}

/// Per-candidate counts under a header row
pub fn tally<D: CharacterDisplay + ?Sized>(display: &mut D, tally: &VoteTally) {
    display.clear();
    display.text_at(0, 0, "P1  P2  P3  P4");
    for (i, count) in tally.counts().iter().enumerate().take(CANDIDATES) {
        display.number_at(1, i as u8 * TALLY_COLUMN_WIDTH, *count);
    }
}

/// Final result line
pub fn outcome<D: CharacterDisplay + ?Sized>(display: &mut D, outcome: Outcome) {
    display.clear();
    display.set_cursor(0, 2);
    match outcome {
        Outcome::NoVotes => display.write_text("No Votes Cast!"),
        Outcome::Tie => display.write_text("Result is a TIE!"),
        Outcome::Winner(candidate) => {
            display.write_text("Winner is: P");
            display.write_number(candidate.number() as u32);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockDisplay;

    fn c(index: u8) -> Candidate {
        Candidate::new(index).unwrap()
    }

    #[test]
    fn test_greeting_layout() {
        let mut display = MockDisplay::new();
        greeting(&mut display);
        assert_eq!(display.row(0), "  Electronic");
        assert_eq!(display.row(1), " Voting Machine");
    }

    #[test]
    fn test_prompt_layout() {
        let mut display = MockDisplay::new();
        prompt(&mut display);
        assert_eq!(display.row(0), "P1(1) P2(2)");
        assert_eq!(display.row(1), "P3(3) P4(4) #=Res");
    }

    #[test]
    fn test_confirmation_names_candidate() {
        let mut display = MockDisplay::new();
        vote_confirmation(&mut display, c(2));
        assert_eq!(display.row(0), "Vote Recorded for:");
        assert_eq!(display.row(1), "      P3");
    }

    #[test]
    fn test_tally_columns() {
        let mut votes = VoteTally::new();
        for _ in 0..12 {
            votes.record_vote(c(0));
        }
        votes.record_vote(c(2));
        for _ in 0..105 {
            votes.record_vote(c(3));
        }

        let mut display = MockDisplay::new();
        tally(&mut display, &votes);
        assert_eq!(display.row(0), "P1  P2  P3  P4");
        assert_eq!(display.row(1), "12  0   1   105");
    }

    #[test]
    fn test_outcome_messages() {
        let mut display = MockDisplay::new();

        outcome(&mut display, Outcome::NoVotes);
        assert_eq!(display.row(0), "  No Votes Cast!");

        outcome(&mut display, Outcome::Tie);
        assert_eq!(display.row(0), "  Result is a TIE!");

        outcome(&mut display, Outcome::Winner(c(3)));
        assert_eq!(display.row(0), "  Winner is: P4");
        assert_eq!(display.row(1), "");
    }
}
