//! GPIO tone buzzer
//!
//! Acknowledges a recorded vote with a short square wave on a single pin,
//! generated by busy-waiting between edges. Works with a passive piezo
//! directly or an active buzzer through a transistor.

use ballot_core::config::ToneConfig;
use ballot_core::traits::VoteFeedback;
use ballot_hal::{DelayNs, OutputPin, Polarity};

/// Square-wave buzzer on a GPIO pin
pub struct ToneBuzzer<P, D> {
    pin: P,
    delay: D,
    tone: ToneConfig,
    polarity: Polarity,
}

impl<P: OutputPin, D: DelayNs> ToneBuzzer<P, D> {
    /// Create a buzzer; the line starts inactive
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin driving the buzzer
    /// - `polarity`: Level that energizes the buzzer
    pub fn new(pin: P, delay: D, tone: ToneConfig, polarity: Polarity) -> Self {
        let mut buzzer = Self {
            pin,
            delay,
            tone,
            polarity,
        };
        buzzer.pin.set_active(polarity, false);
        buzzer
    }

    /// Create a buzzer energized by a high level
    pub fn new_active_high(pin: P, delay: D, tone: ToneConfig) -> Self {
        Self::new(pin, delay, tone, Polarity::ActiveHigh)
    }

    /// Create a buzzer energized by a low level
    pub fn new_active_low(pin: P, delay: D, tone: ToneConfig) -> Self {
        Self::new(pin, delay, tone, Polarity::ActiveLow)
    }

    /// Play the configured tone, blocking until it ends
    pub fn beep(&mut self) {
        for _ in 0..self.tone.cycles() {
            self.pin.set_active(self.polarity, true);
            self.delay.delay_us(self.tone.half_period_us);
            self.pin.set_active(self.polarity, false);
            self.delay.delay_us(self.tone.half_period_us);
        }
    }

    /// Consume the buzzer, returning the pin and delay
    pub fn release(self) -> (P, D) {
        (self.pin, self.delay)
    }
}

impl<P: OutputPin, D: DelayNs> VoteFeedback for ToneBuzzer<P, D> {
    fn acknowledge(&mut self) {
        self.beep();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockPin, RecordingDelay};

    #[test]
    fn test_default_tone() {
        let mut buzzer =
            ToneBuzzer::new_active_high(MockPin::default(), RecordingDelay::default(), ToneConfig::default());
        buzzer.acknowledge();

        let (pin, delay) = buzzer.release();
        // 100 cycles of 1 kHz, two edges each, ending low
        assert_eq!(pin.edges, 200);
        assert!(!pin.is_set_high());
        assert_eq!(delay.total_ns, 100_000_000);
    }

    #[test]
    fn test_active_low_idles_high() {
        let tone = ToneConfig {
            half_period_us: 250,
            duration_ms: 10,
        };
        let buzzer = ToneBuzzer::new_active_low(MockPin::default(), RecordingDelay::default(), tone);
        assert!(buzzer.pin.is_set_high());

        let mut buzzer = buzzer;
        buzzer.beep();
        let (pin, delay) = buzzer.release();
        assert!(pin.is_set_high());
        // Idle-high setup edge plus 20 cycles
        assert_eq!(pin.edges, 1 + 40);
        assert_eq!(delay.total_ns, 10_000_000);
    }

    #[test]
    fn test_feedback_trait() {
        let mut buzzer =
            ToneBuzzer::new_active_high(MockPin::default(), RecordingDelay::default(), ToneConfig::default());

        fn vote<F: VoteFeedback>(f: &mut F) {
            f.acknowledge();
            f.acknowledge();
        }

        vote(&mut buzzer);
        let (pin, _) = buzzer.release();
        assert_eq!(pin.edges, 400);
    }
}
