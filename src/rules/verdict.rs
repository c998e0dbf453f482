//! Validation outcomes.
//!
//! `validate` always returns a definite [`Verdict`]; rule violations are
//! values, never errors. [`Violation`] carries the constraint kind and its
//! location with 0-based indices, and its `Display` output is the
//! user-facing message, which uses 1-based positions.

use serde::{Deserialize, Serialize};

use crate::core::Coord;

/// Outcome of one validation call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Every placement rule holds.
    Valid,
    /// The first rule violation found, in check order.
    Invalid(Violation),
}

impl Verdict {
    /// Boolean validity flag for callers that only need pass/fail.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    /// The violation, if any.
    #[must_use]
    pub fn violation(&self) -> Option<&Violation> {
        match self {
            Verdict::Valid => None,
            Verdict::Invalid(violation) => Some(violation),
        }
    }

    /// User-facing message, `None` when valid.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        self.violation().map(Violation::to_string)
    }
}

/// A violated placement constraint and where it happened.
///
/// Indices are 0-based; the rendered message is 1-based, matching what the
/// interactive form shows users.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Violation {
    /// The grid is not exactly 9x9.
    BadShape,
    /// A cell holds a value outside 0-9.
    BadDigit { row: usize, col: usize, value: u8 },
    /// A custom zone names a cell outside the board.
    ZoneOutOfBounds { zone: usize, coord: Coord },
    /// A custom zone repeats a non-zero digit.
    ZoneDuplicate { zone: usize },
    /// A row repeats a non-zero digit.
    RowDuplicate { row: usize },
    /// A column repeats a non-zero digit.
    ColumnDuplicate { col: usize },
    /// A 3x3 box repeats a non-zero digit.
    BoxDuplicate { box_row: usize, box_col: usize },
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::BadShape => write!(f, "Board must be 9x9."),
            Violation::BadDigit { row, col, value } => write!(
                f,
                "Board must contain only digits 0-9 (0 for empty); cell ({},{}) holds {}.",
                row + 1,
                col + 1,
                value
            ),
            Violation::ZoneOutOfBounds { zone, coord } => write!(
                f,
                "Custom zone {} references cell {} outside the board.",
                zone + 1,
                coord
            ),
            Violation::ZoneDuplicate { zone } => write!(
                f,
                "Custom zone {} does not contain unique digits 1-9.",
                zone + 1
            ),
            Violation::RowDuplicate { row } => {
                write!(f, "Row {} does not contain unique digits 1-9.", row + 1)
            }
            Violation::ColumnDuplicate { col } => {
                write!(f, "Column {} does not contain unique digits 1-9.", col + 1)
            }
            Violation::BoxDuplicate { box_row, box_col } => write!(
                f,
                "Box at ({},{}) does not contain unique digits 1-9.",
                box_row + 1,
                box_col + 1
            ),
        }
    }
}
