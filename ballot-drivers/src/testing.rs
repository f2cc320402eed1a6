//! Simulated pins and timing shared by the driver tests

use core::cell::Cell;

use ballot_hal::{DelayNs, InputPin, OutputPin};

/// Output pin that remembers its level and counts edges
#[derive(Default)]
pub struct MockPin {
    pub high: bool,
    pub edges: u32,
}

impl OutputPin for MockPin {
    fn set_high(&mut self) {
        if !self.high {
            self.edges += 1;
        }
        self.high = true;
    }

    fn set_low(&mut self) {
        if self.high {
            self.edges += 1;
        }
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// Input pin whose level the test controls
#[derive(Default)]
pub struct MockInput {
    pub level: Cell<bool>,
}

impl MockInput {
    pub fn new(high: bool) -> Self {
        Self {
            level: Cell::new(high),
        }
    }
}

impl InputPin for MockInput {
    fn is_high(&self) -> bool {
        self.level.get()
    }
}

/// Delay that only accumulates the requested time
#[derive(Default)]
pub struct RecordingDelay {
    pub total_ns: u64,
    pub calls: u32,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
        self.calls += 1;
    }

    fn delay_us(&mut self, us: u32) {
        self.total_ns += us as u64 * 1_000;
        self.calls += 1;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.total_ns += ms as u64 * 1_000_000;
        self.calls += 1;
    }
}
