//! The validation engine.
//!
//! `SudokuValidator` holds the custom zone list it was configured with and
//! checks boards against Sudoku placement rules plus those zones. Checks
//! run in a fixed order and stop at the first violation: shape, digit
//! range, custom zones, rows, columns, boxes. A board that breaks several
//! rules reports the first one in that sequence.

use log::{debug, trace};

use crate::core::{Board, DigitSet, BOX_SIZE, EMPTY, GRID_SIZE};
use crate::zones::{Zone, ZoneList};

use super::verdict::{Verdict, Violation};

/// Checks 9x9 boards against placement rules and configured custom zones.
///
/// Stateless across calls: `validate` reads the zone list and its board
/// argument and touches nothing else, so one validator can serve
/// concurrent callers.
///
/// ## Usage
///
/// ```
/// use sudoku_rules::core::Coord;
/// use sudoku_rules::rules::SudokuValidator;
/// use sudoku_rules::zones::Zone;
///
/// let diagonal = Zone::new((0..9).map(|i| Coord::new(i, i))).unwrap();
/// let validator = SudokuValidator::with_zones(vec![diagonal]);
///
/// let verdict = validator.validate(&vec![vec![0u8; 9]; 9]);
/// assert!(verdict.is_valid());
/// ```
#[derive(Clone, Debug, Default)]
pub struct SudokuValidator {
    zones: ZoneList,
}

impl SudokuValidator {
    /// Validator with no custom zones.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validator with the given custom zones, checked in list order.
    #[must_use]
    pub fn with_zones(zones: ZoneList) -> Self {
        Self { zones }
    }

    /// The configured custom zones.
    #[must_use]
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Replace the custom zone list.
    ///
    /// Callers running concurrent validations must serialize this against
    /// in-flight calls.
    pub fn set_zones(&mut self, zones: ZoneList) {
        self.zones = zones;
    }

    /// Validate a raw row grid arriving over an untyped boundary.
    ///
    /// Shape is checked first, then digit range, custom zones, rows,
    /// columns, and boxes; the first violation decides the verdict.
    #[must_use]
    pub fn validate(&self, grid: &[Vec<u8>]) -> Verdict {
        if grid.len() != GRID_SIZE || grid.iter().any(|row| row.len() != GRID_SIZE) {
            return Self::reject(Violation::BadShape);
        }

        let mut cells = [[EMPTY; GRID_SIZE]; GRID_SIZE];
        for (r, row) in grid.iter().enumerate() {
            cells[r].copy_from_slice(row);
        }

        self.check_cells(&cells)
    }

    /// Validate a typed [`Board`].
    ///
    /// `Board` already guarantees shape and digit range; the full pass runs
    /// anyway so boards and raw grids share one code path and one answer.
    #[must_use]
    pub fn validate_board(&self, board: &Board) -> Verdict {
        self.check_cells(board.rows())
    }

    fn check_cells(&self, cells: &[[u8; GRID_SIZE]; GRID_SIZE]) -> Verdict {
        let violation = Self::check_range(cells)
            .or_else(|| self.check_zones(cells))
            .or_else(|| Self::check_rows(cells))
            .or_else(|| Self::check_columns(cells))
            .or_else(|| Self::check_boxes(cells));

        match violation {
            Some(violation) => Self::reject(violation),
            None => {
                trace!("board passed all placement checks");
                Verdict::Valid
            }
        }
    }

    fn reject(violation: Violation) -> Verdict {
        debug!("validation failed: {violation}");
        Verdict::Invalid(violation)
    }

    fn check_range(cells: &[[u8; GRID_SIZE]; GRID_SIZE]) -> Option<Violation> {
        for (r, row) in cells.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                if value > 9 {
                    return Some(Violation::BadDigit { row: r, col: c, value });
                }
            }
        }
        None
    }

    fn check_zones(&self, cells: &[[u8; GRID_SIZE]; GRID_SIZE]) -> Option<Violation> {
        for (index, zone) in self.zones.iter().enumerate() {
            let mut seen = DigitSet::new();
            for &coord in zone.cells() {
                // Deserialized zones bypass checked construction; bounds are
                // rechecked before the cell is read.
                if !coord.in_bounds() {
                    return Some(Violation::ZoneOutOfBounds { zone: index, coord });
                }
                let value = cells[coord.row as usize][coord.col as usize];
                if value != EMPTY && !seen.insert(value) {
                    return Some(Violation::ZoneDuplicate { zone: index });
                }
            }
        }
        None
    }

    fn check_rows(cells: &[[u8; GRID_SIZE]; GRID_SIZE]) -> Option<Violation> {
        for (r, row) in cells.iter().enumerate() {
            let mut seen = DigitSet::new();
            for &value in row {
                if value != EMPTY && !seen.insert(value) {
                    return Some(Violation::RowDuplicate { row: r });
                }
            }
        }
        None
    }

    fn check_columns(cells: &[[u8; GRID_SIZE]; GRID_SIZE]) -> Option<Violation> {
        for c in 0..GRID_SIZE {
            let mut seen = DigitSet::new();
            for row in cells {
                let value = row[c];
                if value != EMPTY && !seen.insert(value) {
                    return Some(Violation::ColumnDuplicate { col: c });
                }
            }
        }
        None
    }

    fn check_boxes(cells: &[[u8; GRID_SIZE]; GRID_SIZE]) -> Option<Violation> {
        for box_row in 0..BOX_SIZE {
            for box_col in 0..BOX_SIZE {
                let mut seen = DigitSet::new();
                for r in box_row * BOX_SIZE..(box_row + 1) * BOX_SIZE {
                    for c in box_col * BOX_SIZE..(box_col + 1) * BOX_SIZE {
                        let value = cells[r][c];
                        if value != EMPTY && !seen.insert(value) {
                            return Some(Violation::BoxDuplicate { box_row, box_col });
                        }
                    }
                }
            }
        }
        None
    }
}
