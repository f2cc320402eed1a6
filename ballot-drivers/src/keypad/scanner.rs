//! Matrix keypad scanner
//!
//! Turns a [`KeyMatrix`] into one-shot key events:
//!
//! 1. Wait the settle interval
//! 2. Scan rows in order, selecting one at a time, and check each column
//! 3. On the first closed switch, spin until its column opens again
//! 4. Translate (row, column) through the [`ScanMap`]
//!
//! Holding a key therefore yields a single event, and when several keys
//! are down the lowest row, then lowest column, wins.

use ballot_core::config::{ScanMap, ScanTiming, MATRIX_COLS, MATRIX_ROWS};
use ballot_core::keys::Key;
use ballot_core::traits::{KeyMatrix, KeySource};
use ballot_hal::DelayNs;

/// Debounced keypad over a key matrix
pub struct MatrixKeypad<M, D> {
    matrix: M,
    delay: D,
    map: ScanMap,
    timing: ScanTiming,
}

impl<M: KeyMatrix, D: DelayNs> MatrixKeypad<M, D> {
    /// Create a scanner; all rows start deselected
    pub fn new(mut matrix: M, delay: D, map: ScanMap, timing: ScanTiming) -> Self {
        matrix.release_rows();
        Self {
            matrix,
            delay,
            map,
            timing,
        }
    }

    /// One pass over the matrix
    ///
    /// Returns the first closed switch. Its row is left selected so the
    /// caller can watch the column; on a miss every row is released.
    pub fn scan_once(&mut self) -> Option<(usize, usize)> {
        for row in 0..MATRIX_ROWS {
            self.matrix.select_row(row);
            for col in 0..MATRIX_COLS {
                if self.matrix.column_active(col) {
                    return Some((row, col));
                }
            }
        }
        self.matrix.release_rows();
        None
    }

    /// Block until a key is pressed and released
    pub fn scan_for_key(&mut self) -> Key {
        self.delay.delay_ms(self.timing.settle_ms);

        loop {
            if let Some((row, col)) = self.scan_once() {
                while self.matrix.column_active(col) {
                    core::hint::spin_loop();
                }
                self.matrix.release_rows();
                return self.map.key_at(row, col);
            }
        }
    }

    /// Consume the scanner, returning the matrix and delay
    pub fn release(self) -> (M, D) {
        (self.matrix, self.delay)
    }
}

impl<M: KeyMatrix, D: DelayNs> KeySource for MatrixKeypad<M, D> {
    fn next_key(&mut self) -> Key {
        self.scan_for_key()
    }
}
