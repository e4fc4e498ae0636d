//! Coarse land/water lookup table.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

pub const MASK_ROWS: usize = 9;
pub const MASK_COLUMNS: usize = 18;

#[rustfmt::skip]
const CONTINENTS: [[u8; MASK_COLUMNS]; MASK_ROWS] = [
    [0,0,0,1,1,1,0,0,0,0,1,1,0,0,0,0,0,0],
    [0,0,1,1,1,1,1,0,0,1,1,1,1,0,0,1,1,0],
    [0,1,1,1,1,1,0,0,1,1,1,1,1,1,1,1,0,0],
    [1,1,1,1,0,0,0,1,1,1,1,0,1,1,1,0,0,0],
    [0,1,1,0,0,0,1,1,1,0,0,0,1,1,0,0,0,0],
    [0,0,0,0,1,1,1,1,0,0,0,1,1,1,0,0,1,0],
    [0,0,1,1,1,1,1,0,0,1,1,1,1,0,0,1,1,0],
    [0,1,1,1,0,0,0,0,1,1,1,0,0,0,0,0,0,0],
    [0,0,0,0,0,0,0,0,0,1,0,0,0,0,0,0,0,0],
];

/// Immutable land mask, rows running north to south, columns west to east.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LandMask {
    cells: [[bool; MASK_COLUMNS]; MASK_ROWS],
}

impl Default for LandMask {
    fn default() -> Self {
        Self::continents()
    }
}

impl LandMask {
    /// The built-in rough continent layout.
    pub const fn continents() -> Self {
        let mut cells = [[false; MASK_COLUMNS]; MASK_ROWS];
        let mut row = 0;
        while row < MASK_ROWS {
            let mut col = 0;
            while col < MASK_COLUMNS {
                cells[row][col] = CONTINENTS[row][col] == 1;
                col += 1;
            }
            row += 1;
        }
        Self { cells }
    }

    /// Look up a cell. The row is clamped and the column wraps, so any
    /// integer pair is valid.
    pub fn is_land(&self, row: i64, col: i64) -> bool {
        let row = row.clamp(0, MASK_ROWS as i64 - 1) as usize;
        let col = col.rem_euclid(MASK_COLUMNS as i64) as usize;
        self.cells[row][col]
    }

    /// Land lookup for a point given its polar angle (0 at the north pole)
    /// and its longitude relative to the globe.
    pub fn sample(&self, theta: f64, longitude: f64) -> bool {
        self.is_land(row_for_polar(theta), column_for_longitude(longitude))
    }

}

/// Mask row for a polar angle in `[0, π]`.
///
/// The north polar band reads row 4 and the rows count down to 0 at the
/// equator; the southern hemisphere clamps to row 0.
pub fn row_for_polar(theta: f64) -> i64 {
    let scale = MASK_ROWS as f64 - 0.01;
    let row = ((1.0 - (theta + FRAC_PI_2) / PI) * scale).floor() as i64;
    row.clamp(0, MASK_ROWS as i64 - 1)
}

/// Mask column for a globe-relative longitude in radians, wrapped into
/// `[0, MASK_COLUMNS)`. Longitude 0 maps to the middle of the mask.
pub fn column_for_longitude(longitude: f64) -> i64 {
    let col = ((longitude / TAU + 0.5) * MASK_COLUMNS as f64).floor() as i64;
    col.rem_euclid(MASK_COLUMNS as i64)
}
