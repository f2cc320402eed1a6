//! GPIO key matrix
//!
//! Four row-drive outputs and four column-sense inputs. Typical membrane
//! keypads are wired active-low: the selected row is pulled low and the
//! columns idle high through pull-ups, reading low through a closed
//! switch.

use ballot_core::config::{MATRIX_COLS, MATRIX_ROWS};
use ballot_core::traits::KeyMatrix;
use ballot_hal::{InputPin, OutputPin, Polarity};

/// Key matrix on GPIO lines
pub struct GpioKeyMatrix<O, I> {
    rows: [O; MATRIX_ROWS],
    cols: [I; MATRIX_COLS],
    row_polarity: Polarity,
    col_polarity: Polarity,
}

impl<O: OutputPin, I: InputPin> GpioKeyMatrix<O, I> {
    /// Create a matrix with all rows deselected
    pub fn new(
        rows: [O; MATRIX_ROWS],
        cols: [I; MATRIX_COLS],
        row_polarity: Polarity,
        col_polarity: Polarity,
    ) -> Self {
        let mut matrix = Self {
            rows,
            cols,
            row_polarity,
            col_polarity,
        };
        matrix.release_rows();
        matrix
    }

    /// Create an active-low matrix
    pub fn new_active_low(rows: [O; MATRIX_ROWS], cols: [I; MATRIX_COLS]) -> Self {
        Self::new(rows, cols, Polarity::ActiveLow, Polarity::ActiveLow)
    }
}

impl<O: OutputPin, I: InputPin> KeyMatrix for GpioKeyMatrix<O, I> {
    fn select_row(&mut self, row: usize) {
        for (index, line) in self.rows.iter_mut().enumerate() {
            line.set_active(self.row_polarity, index == row);
        }
    }

    fn release_rows(&mut self) {
        for line in self.rows.iter_mut() {
            line.set_active(self.row_polarity, false);
        }
    }

    fn column_active(&self, col: usize) -> bool {
        self.cols
            .get(col)
            .is_some_and(|line| line.is_active(self.col_polarity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockInput, MockPin};

    fn rows(matrix: &GpioKeyMatrix<MockPin, MockInput>) -> [bool; MATRIX_ROWS] {
        core::array::from_fn(|i| matrix.rows[i].is_set_high())
    }

    fn active_low() -> GpioKeyMatrix<MockPin, MockInput> {
        GpioKeyMatrix::new_active_low(
            core::array::from_fn(|_| MockPin::default()),
            core::array::from_fn(|_| MockInput::new(true)),
        )
    }

    #[test]
    fn test_rows_start_released() {
        let matrix = active_low();
        assert_eq!(rows(&matrix), [true; MATRIX_ROWS]);
    }

    #[test]
    fn test_select_row_active_low() {
        let mut matrix = active_low();

        matrix.select_row(2);
        assert_eq!(rows(&matrix), [true, true, false, true]);

        matrix.select_row(0);
        assert_eq!(rows(&matrix), [false, true, true, true]);

        matrix.release_rows();
        assert_eq!(rows(&matrix), [true; MATRIX_ROWS]);
    }

    #[test]
    fn test_column_reads_active_low() {
        let matrix = active_low();
        assert!(!matrix.column_active(1));

        matrix.cols[1].level.set(false);
        assert!(matrix.column_active(1));
        assert!(!matrix.column_active(0));
    }

    #[test]
    fn test_active_high_wiring() {
        let mut matrix = GpioKeyMatrix::new(
            core::array::from_fn(|_| MockPin::default()),
            core::array::from_fn(|_| MockInput::new(false)),
            Polarity::ActiveHigh,
            Polarity::ActiveHigh,
        );

        matrix.select_row(3);
        assert_eq!(rows(&matrix), [false, false, false, true]);

        matrix.cols[0].level.set(true);
        assert!(matrix.column_active(0));
    }

    #[test]
    fn test_out_of_range_column() {
        let matrix = active_low();
        assert!(!matrix.column_active(MATRIX_COLS));
    }
}
