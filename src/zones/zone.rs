//! Custom zone definitions.
//!
//! A zone is any set of exactly nine distinct board cells that must jointly
//! contain no repeated non-zero digit. `Zone` models the caller-defined
//! ones; the implicit zones (rows, columns, boxes) live in the validator.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::core::{Coord, GRID_SIZE};

/// Number of cells in every zone.
pub const ZONE_SIZE: usize = GRID_SIZE;

/// Why a coordinate list could not become a [`Zone`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ZoneError {
    /// The list does not have exactly 9 cells.
    #[error("zone has {0} cells, expected 9")]
    WrongCellCount(usize),
    /// The same cell appears twice.
    #[error("zone lists cell {0} twice")]
    DuplicateCell(Coord),
    /// A cell lies outside the board.
    #[error("zone cell {0} is outside the board")]
    OutOfBounds(Coord),
}

/// An ordered sequence of nine distinct in-bounds cells.
///
/// Checked construction keeps every `Zone` made through [`Zone::new`]
/// structurally sound. Zones arriving through `Deserialize` skip that
/// check, which is why the validator bounds-checks zone cells again before
/// reading them.
///
/// ## Usage
///
/// ```
/// use sudoku_rules::core::Coord;
/// use sudoku_rules::zones::Zone;
///
/// let diagonal = Zone::new((0..9).map(|i| Coord::new(i, i))).unwrap();
/// assert_eq!(diagonal.len(), 9);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    cells: SmallVec<[Coord; ZONE_SIZE]>,
}

impl Zone {
    /// Build a zone from nine distinct in-bounds coordinates, kept in the
    /// given order.
    pub fn new(cells: impl IntoIterator<Item = Coord>) -> Result<Self, ZoneError> {
        let cells: SmallVec<[Coord; ZONE_SIZE]> = cells.into_iter().collect();
        if cells.len() != ZONE_SIZE {
            return Err(ZoneError::WrongCellCount(cells.len()));
        }

        let mut seen = FxHashSet::default();
        for &cell in &cells {
            if !cell.in_bounds() {
                return Err(ZoneError::OutOfBounds(cell));
            }
            if !seen.insert(cell) {
                return Err(ZoneError::DuplicateCell(cell));
            }
        }

        Ok(Self { cells })
    }

    /// The zone's cells, in construction order.
    #[must_use]
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Number of cells (always 9 for checked zones).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if the zone has no cells (only possible via deserialization).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Caller-owned list of custom zones, checked in order.
pub type ZoneList = Vec<Zone>;
