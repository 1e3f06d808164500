//! 5x5 frame buffer

/// Rows and columns of the LED matrix
pub const MATRIX_SIZE: usize = 5;

/// Mask of the five used bits in a row
const ROW_MASK: u8 = 0b1_1111;

/// One image on the matrix
///
/// Each row is five bits, bit 4 is the leftmost column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    rows: [u8; MATRIX_SIZE],
}

impl Frame {
    /// All LEDs off
    pub const BLANK: Frame = Frame {
        rows: [0; MATRIX_SIZE],
    };

    /// Build a frame from five row bitmaps
    pub const fn from_rows(rows: [u8; MATRIX_SIZE]) -> Self {
        Self {
            rows: [
                rows[0] & ROW_MASK,
                rows[1] & ROW_MASK,
                rows[2] & ROW_MASK,
                rows[3] & ROW_MASK,
                rows[4] & ROW_MASK,
            ],
        }
    }

    /// Row bitmap, bit 4 leftmost
    pub fn row(&self, y: usize) -> u8 {
        self.rows.get(y).copied().unwrap_or(0)
    }

    /// Check if the LED at column `x`, row `y` is lit
    pub fn is_lit(&self, x: usize, y: usize) -> bool {
        x < MATRIX_SIZE && (self.row(y) >> (MATRIX_SIZE - 1 - x)) & 1 == 1
    }

    /// Turn the LED at column `x`, row `y` on or off
    pub fn set(&mut self, x: usize, y: usize, lit: bool) {
        if x >= MATRIX_SIZE || y >= MATRIX_SIZE {
            return;
        }
        let bit = 1 << (MATRIX_SIZE - 1 - x);
        if lit {
            self.rows[y] |= bit;
        } else {
            self.rows[y] &= !bit;
        }
    }

    /// Column `x` as a bitmap, bit `y` set when row `y` is lit
    pub fn column(&self, x: usize) -> u8 {
        (0..MATRIX_SIZE).fold(0, |col, y| col | ((self.is_lit(x, y) as u8) << y))
    }

    /// Check if every LED is off
    pub fn is_blank(&self) -> bool {
        self.rows.iter().all(|&row| row == 0)
    }

    /// Move everything one column left and bring in `column` on the right
    pub fn shift_left(&mut self, column: u8) {
        for (y, row) in self.rows.iter_mut().enumerate() {
            *row = ((*row << 1) & ROW_MASK) | ((column >> y) & 1);
        }
    }
}
