//! Row-scanned LED matrix driver
//!
//! Rows are driven high to select them and columns are driven low to light
//! an LED in the selected row. Only one row is on at a time, so the caller
//! must keep calling [`LedMatrix::scan_row`] fast enough for persistence of
//! vision (a few milliseconds per row).

use embedded_hal::digital::OutputPin;

use crate::frame::{Frame, MATRIX_SIZE};

/// 5x5 LED matrix on ten GPIO pins
pub struct LedMatrix<P> {
    rows: [P; MATRIX_SIZE],
    cols: [P; MATRIX_SIZE],
    current: usize,
}

impl<P: OutputPin> LedMatrix<P> {
    /// Take the row and column pins, leftmost column and top row first
    pub fn new(rows: [P; MATRIX_SIZE], cols: [P; MATRIX_SIZE]) -> Self {
        Self {
            rows,
            cols,
            current: 0,
        }
    }

    /// Turn every LED off
    pub fn blank(&mut self) -> Result<(), P::Error> {
        for row in &mut self.rows {
            row.set_low()?;
        }
        for col in &mut self.cols {
            col.set_high()?;
        }
        Ok(())
    }

    /// Light the next row of `frame`
    ///
    /// Returns the row index that is now lit.
    pub fn scan_row(&mut self, frame: &Frame) -> Result<usize, P::Error> {
        self.rows[self.current].set_low()?;
        self.current = (self.current + 1) % MATRIX_SIZE;

        for (x, col) in self.cols.iter_mut().enumerate() {
            if frame.is_lit(x, self.current) {
                col.set_low()?;
            } else {
                col.set_high()?;
            }
        }
        self.rows[self.current].set_high()?;
        Ok(self.current)
    }

    /// Release the pins
    pub fn release(self) -> ([P; MATRIX_SIZE], [P; MATRIX_SIZE]) {
        (self.rows, self.cols)
    }
}
