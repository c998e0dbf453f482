//! The validation engine and its outcomes.
//!
//! `SudokuValidator` checks boards against Sudoku placement rules plus the
//! custom zones it was configured with, and always answers with a
//! [`Verdict`]. The engine never interprets how boards or zones were
//! collected; that belongs to the calling application.

pub mod validator;
pub mod verdict;

pub use validator::SudokuValidator;
pub use verdict::{Verdict, Violation};
