//! Keypad scan map
//!
//! Maps a (row, column) switch coordinate to the symbol printed on it.
//! The mapping is a wiring fact: two boards with the same keypad may
//! route the matrix differently, so the map is always supplied by
//! configuration and never assumed by the scanner.

use super::ConfigError;
use crate::keys::Key;

/// Number of row-drive lines
pub const MATRIX_ROWS: usize = 4;

/// Number of column-sense lines
pub const MATRIX_COLS: usize = 4;

/// 4x4 lookup table from switch coordinate to key symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScanMap {
    keys: [[Key; MATRIX_COLS]; MATRIX_ROWS],
}

impl Default for ScanMap {
    fn default() -> Self {
        Self::TELEPHONE
    }
}

impl ScanMap {
    /// Standard membrane keypad layout
    ///
    /// ```text
    /// 1 2 3 A
    /// 4 5 6 B
    /// 7 8 9 C
    /// * 0 # D
    /// ```
    pub const TELEPHONE: Self = Self::new([
        [Key::Num1, Key::Num2, Key::Num3, Key::A],
        [Key::Num4, Key::Num5, Key::Num6, Key::B],
        [Key::Num7, Key::Num8, Key::Num9, Key::C],
        [Key::Star, Key::Num0, Key::Hash, Key::D],
    ]);

    /// Create a scan map from a table
    pub const fn new(keys: [[Key; MATRIX_COLS]; MATRIX_ROWS]) -> Self {
        Self { keys }
    }

    /// Parse a scan map from one string per row
    ///
    /// Each row string lists the symbols of that row's columns in scan
    /// order, e.g. `["123A", "456B", "789C", "*0#D"]`. Whitespace is
    /// ignored so rows may be written as `"1 2 3 A"`.
    pub fn parse_rows(rows: &[&str]) -> Result<Self, ConfigError> {
        if rows.len() != MATRIX_ROWS {
            return Err(ConfigError::RowCount(rows.len()));
        }

        let mut keys = [[Key::Num0; MATRIX_COLS]; MATRIX_ROWS];
        for (r, row) in rows.iter().enumerate() {
            let mut col = 0usize;
            for symbol in row.chars().filter(|c| !c.is_whitespace()) {
                if col >= MATRIX_COLS {
                    return Err(ConfigError::RowWidth {
                        row: r as u8,
                        len: row.chars().filter(|c| !c.is_whitespace()).count(),
                    });
                }
                keys[r][col] = Key::from_char(symbol).ok_or(ConfigError::UnknownKey {
                    row: r as u8,
                    col: col as u8,
                    symbol,
                })?;
                col += 1;
            }
            if col != MATRIX_COLS {
                return Err(ConfigError::RowWidth {
                    row: r as u8,
                    len: col,
                });
            }
        }

        Ok(Self { keys })
    }

    /// Symbol at a switch coordinate
    ///
    /// Coordinates come from the scanner's own loop bounds; out-of-range
    /// values are a caller bug and panic on the index.
    pub fn key_at(&self, row: usize, col: usize) -> Key {
        self.keys[row][col]
    }

    /// The raw table
    pub fn rows(&self) -> &[[Key; MATRIX_COLS]; MATRIX_ROWS] {
        &self.keys
    }
}
