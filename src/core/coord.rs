//! Board coordinates.
//!
//! A `Coord` names a single cell as a (row, column) pair, 0-based with the
//! origin at the top-left. Construction does not bounds-check; callers at
//! untrusted boundaries use [`Coord::in_bounds`].
//!
//! ## Usage
//!
//! ```
//! use sudoku_rules::core::Coord;
//!
//! let corner = Coord::new(8, 8);
//! assert!(corner.in_bounds());
//!
//! let outside = Coord::new(9, 0);
//! assert!(!outside.in_bounds());
//! ```

use serde::{Deserialize, Serialize};

use super::board::GRID_SIZE;

/// A (row, column) cell address on the 9x9 board.
///
/// Fields are public and unchecked; a `Coord` is an address, not a proof
/// that the address is on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Row index, 0-based from the top.
    pub row: u8,
    /// Column index, 0-based from the left.
    pub col: u8,
}

impl Coord {
    /// Create a coordinate. No bounds check is performed.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Check that both components lie on the 9x9 board.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        (self.row as usize) < GRID_SIZE && (self.col as usize) < GRID_SIZE
    }
}

impl From<(u8, u8)> for Coord {
    fn from((row, col): (u8, u8)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}
