//! Simulated backends shared by the unit tests

use ballot_hal::DelayNs;

use crate::keys::Key;
use crate::traits::{CharacterDisplay, KeySource, VoteFeedback};

/// DDRAM cells per row on an HD44780
pub const DDRAM_COLS: usize = 40;

pub type Grid = [[u8; DDRAM_COLS]; 2];

/// Display that renders into a character grid
///
/// Each `clear` archives the outgoing screen so tests can inspect every
/// frame the session produced.
pub struct MockDisplay {
    pub grid: Grid,
    pub cursor: (usize, usize),
    pub frames: heapless::Vec<Grid, 64>,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self {
            grid: [[b' '; DDRAM_COLS]; 2],
            cursor: (0, 0),
            frames: heapless::Vec::new(),
        }
    }

    /// Text of a row in the current screen, trailing blanks removed
    pub fn row(&self, row: usize) -> &str {
        row_text(&self.grid, row)
    }
}

pub fn row_text(grid: &Grid, row: usize) -> &str {
    core::str::from_utf8(&grid[row]).unwrap().trim_end()
}

impl CharacterDisplay for MockDisplay {
    fn clear(&mut self) {
        self.frames.push(self.grid).unwrap();
        self.grid = [[b' '; DDRAM_COLS]; 2];
        self.cursor = (0, 0);
    }

    fn set_cursor(&mut self, row: u8, col: u8) {
        self.cursor = (row as usize, col as usize);
    }

    fn write_text(&mut self, text: &str) {
        for b in text.bytes().take_while(|&b| b != 0) {
            let (row, col) = self.cursor;
            if col < DDRAM_COLS {
                self.grid[row][col] = b;
            }
            self.cursor.1 += 1;
        }
    }
}

/// Key source that replays a fixed script
///
/// Panics when asked for more keys than scripted, which flags a session
/// that keeps scanning after it should have stopped.
pub struct ScriptedKeys {
    keys: heapless::Vec<Key, 64>,
    next: usize,
}

impl ScriptedKeys {
    pub fn new(script: &str) -> Self {
        let mut keys = heapless::Vec::new();
        for c in script.chars() {
            keys.push(Key::from_char(c).unwrap()).unwrap();
        }
        Self { keys, next: 0 }
    }

    pub fn consumed(&self) -> usize {
        self.next
    }
}

impl KeySource for ScriptedKeys {
    fn next_key(&mut self) -> Key {
        let key = *self.keys.get(self.next).expect("key script exhausted");
        self.next += 1;
        key
    }
}

/// Delay that only accumulates the requested time
#[derive(Default)]
pub struct RecordingDelay {
    pub total_ns: u64,
}

impl RecordingDelay {
    pub fn total_ms(&self) -> u64 {
        self.total_ns / 1_000_000
    }
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
    }

    fn delay_us(&mut self, us: u32) {
        self.total_ns += us as u64 * 1_000;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.total_ns += ms as u64 * 1_000_000;
    }
}

/// Feedback that counts acknowledgements
#[derive(Default)]
pub struct CountingFeedback {
    pub count: u32,
}

impl VoteFeedback for CountingFeedback {
    fn acknowledge(&mut self) {
        self.count += 1;
    }
}
