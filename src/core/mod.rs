//! Core value types: coordinates, the board container, digit sets.
//!
//! These are the building blocks the rules engine operates on; none of them
//! know any Sudoku rules themselves.

pub mod board;
pub mod coord;
pub mod digit;

pub use board::{Board, BoardError, BOX_SIZE, EMPTY, GRID_SIZE};
pub use coord::Coord;
pub use digit::DigitSet;
