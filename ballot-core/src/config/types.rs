//! Timing and geometry configuration
//!
//! Every delay the appliance performs is a parameter here. Defaults
//! reproduce the timing of the reference board (12 MHz 8051 with a
//! HD44780 LCD), which is conservative for any conformant controller.

use super::ConfigError;

/// Keypad scan timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScanTiming {
    /// Settle time before a scan pass starts (ms)
    pub settle_ms: u32,
}

impl Default for ScanTiming {
    fn default() -> Self {
        Self { settle_ms: 50 }
    }
}

/// Character LCD transfer timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LcdTiming {
    /// Wait after power-up before the first command (ms)
    pub power_on_ms: u32,
    /// Strobe high time per transfer (µs)
    pub pulse_us: u32,
    /// Hold after strobe falls, before the next transfer (µs)
    pub recovery_us: u32,
    /// Extra settle after an init command (µs)
    pub command_settle_us: u32,
    /// Extra settle after clear-display (µs)
    pub clear_settle_us: u32,
}

impl Default for LcdTiming {
    fn default() -> Self {
        Self {
            power_on_ms: 20,
            pulse_us: 1_000,
            recovery_us: 2_000,
            command_settle_us: 1_000,
            clear_settle_us: 2_000,
        }
    }
}

impl LcdTiming {
    /// Check the strobe has a width and clear settles at least as long
    /// as ordinary commands
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pulse_us == 0 || self.clear_settle_us < self.command_settle_us {
            return Err(ConfigError::InvalidTiming);
        }
        Ok(())
    }
}

/// Character display geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayGeometry {
    /// DDRAM address of column 0 for each row
    pub row_bases: [u8; 2],
}

impl Default for DisplayGeometry {
    fn default() -> Self {
        Self {
            row_bases: [0x00, 0x40],
        }
    }
}

/// Vote acknowledgement tone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ToneConfig {
    /// Time the line stays at each level (µs)
    pub half_period_us: u32,
    /// Total tone length (ms)
    pub duration_ms: u32,
}

impl Default for ToneConfig {
    fn default() -> Self {
        Self {
            half_period_us: 500, // 1 kHz
            duration_ms: 100,
        }
    }
}

impl ToneConfig {
    /// Number of full high/low cycles that fit in the duration
    pub fn cycles(&self) -> u32 {
        if self.half_period_us == 0 {
            return 0;
        }
        let cycles =
            u64::from(self.duration_ms) * 1_000 / (u64::from(self.half_period_us) * 2);
        u32::try_from(cycles).unwrap_or(u32::MAX)
    }

    /// A tone must complete at least one cycle
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cycles() == 0 {
            return Err(ConfigError::InvalidTiming);
        }
        Ok(())
    }
}

/// How long each informational screen stays up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SessionTiming {
    /// Greeting after power-on (ms)
    pub greeting_ms: u32,
    /// "Vote Recorded" confirmation (ms)
    pub confirmation_ms: u32,
    /// Per-candidate counts before the outcome (ms)
    pub tally_ms: u32,
}

impl Default for SessionTiming {
    fn default() -> Self {
        Self {
            greeting_ms: 2_000,
            confirmation_ms: 1_200,
            tally_ms: 3_500,
        }
    }
}
