//! Vote acknowledgement

/// Feedback emitted when a vote is counted
///
/// Implementations must return within a fixed, bounded time.
pub trait VoteFeedback {
    /// Signal that a vote was recorded
    fn acknowledge(&mut self);
}

/// No feedback
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl VoteFeedback for Silent {
    fn acknowledge(&mut self) {}
}

// Boards without a buzzer pass `None`
impl<F: VoteFeedback> VoteFeedback for Option<F> {
    fn acknowledge(&mut self) {
        if let Some(feedback) = self {
            feedback.acknowledge();
        }
    }
}
