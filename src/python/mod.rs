//! Python bindings for the sudoku-rules engine.
//!
//! The interactive form that collects boards and zone text is a Python
//! application; these PyO3 bindings hand it the same validator the Rust
//! API exposes.
//!
//! # Quick Start
//!
//! ```python
//! import sudoku_rules
//!
//! zones = sudoku_rules.parse_zones("0,0 1,1 2,2 3,3 4,4 5,5 6,6 7,7 8,8")
//! validator = sudoku_rules.SudokuValidator(zones)
//!
//! is_valid, error = validator.validate(board)
//! if not is_valid:
//!     show_error(error)
//! ```

use pyo3::prelude::*;

mod py_rules;

pub use py_rules::*;

/// sudoku-rules: Sudoku board validation with custom zones.
///
/// This module provides:
/// - The validator with its `(is_valid, error_message)` contract
/// - The one-zone-per-line text parser used by zone dialogs
#[pymodule]
fn sudoku_rules(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySudokuValidator>()?;
    m.add_function(wrap_pyfunction!(parse_zones, m)?)?;

    Ok(())
}
