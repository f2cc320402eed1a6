//! Keypad traits

use crate::keys::Key;

/// Matrix input lines
///
/// Row indices and column indices are 0-based and bounded by the matrix
/// dimensions in [`crate::config`].
pub trait KeyMatrix {
    /// Assert `row`'s drive line and deassert every other row
    fn select_row(&mut self, row: usize);

    /// Deassert every row
    fn release_rows(&mut self);

    /// Check if `col` reads a closed switch in the selected row
    fn column_active(&self, col: usize) -> bool;
}

/// Source of debounced, one-shot key events
pub trait KeySource {
    /// Block until a key is pressed and released, then return it
    fn next_key(&mut self) -> Key;
}
