//! # sudoku-rules
//!
//! A Sudoku placement-rules engine with caller-defined zones.
//!
//! ## Design Principles
//!
//! 1. **Verdicts, not errors**: every rule violation, including a malformed
//!    board arriving over an untyped boundary, is an ordinary [`Verdict`]
//!    value. Nothing panics or throws for a structurally-decodable board.
//!
//! 2. **First violation wins**: checks run in a fixed order (shape, digit
//!    range, custom zones, rows, columns, boxes) and stop at the first
//!    failure. The ordering is part of the contract, not an implementation
//!    detail.
//!
//! 3. **Typed core, defensive edges**: [`Board`] and [`Zone`] make malformed
//!    values unrepresentable through checked construction, while the
//!    validator re-checks everything it reads so untrusted input
//!    (deserialized data, foreign callers) gets the same answers.
//!
//! ## Modules
//!
//! - `core`: coordinates, the fixed 9x9 board container, digit sets
//! - `zones`: custom zone construction and the text format interactive
//!   forms collect
//! - `rules`: the validator and its verdict types
//! - `python`: PyO3 bindings for Python front ends (feature `python`)

pub mod core;
pub mod rules;
pub mod zones;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{Board, BoardError, Coord, DigitSet, BOX_SIZE, EMPTY, GRID_SIZE};

pub use crate::rules::{SudokuValidator, Verdict, Violation};

pub use crate::zones::{parse_zone_list, Zone, ZoneError, ZoneList, ZoneParseError, ZONE_SIZE};
