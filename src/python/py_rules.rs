//! Validator bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::Coord;
use crate::rules::SudokuValidator;
use crate::zones::{parse_zone_list, Zone, ZoneList};

/// Python wrapper for the validator.
///
/// Mirrors the interactive form's contract: `validate` returns an
/// `(is_valid, error_message)` tuple with `error_message = None` on
/// success.
#[pyclass(name = "SudokuValidator")]
pub struct PySudokuValidator {
    inner: SudokuValidator,
}

#[pymethods]
impl PySudokuValidator {
    /// Create a validator, optionally with custom zones given as lists of
    /// `(row, col)` tuples.
    #[new]
    #[pyo3(signature = (custom_zones=None))]
    fn new(custom_zones: Option<Vec<Vec<(u8, u8)>>>) -> PyResult<Self> {
        let zones = build_zones(custom_zones.unwrap_or_default())?;
        Ok(Self {
            inner: SudokuValidator::with_zones(zones),
        })
    }

    /// Validate a board given as nine rows of nine integers (0 = empty).
    ///
    /// Returns `(is_valid, error_message)`.
    fn validate(&self, board: Vec<Vec<i64>>) -> (bool, Option<String>) {
        let grid: Vec<Vec<u8>> = board
            .iter()
            .map(|row| row.iter().map(|&v| clamp_cell(v)).collect())
            .collect();

        let verdict = self.inner.validate(&grid);
        (verdict.is_valid(), verdict.message())
    }

    /// Replace the custom zone list.
    fn set_zones(&mut self, custom_zones: Vec<Vec<(u8, u8)>>) -> PyResult<()> {
        self.inner.set_zones(build_zones(custom_zones)?);
        Ok(())
    }

    /// Number of configured custom zones.
    #[getter]
    fn zone_count(&self) -> usize {
        self.inner.zones().len()
    }

    fn __repr__(&self) -> String {
        format!("SudokuValidator(zones={})", self.inner.zones().len())
    }
}

/// Parse zone text (one zone per line, nine `row,col` pairs) into the
/// tuple form `SudokuValidator` accepts.
///
/// Raises `ValueError` on malformed input, carrying the offending line.
#[pyfunction]
pub fn parse_zones(text: &str) -> PyResult<Vec<Vec<(u8, u8)>>> {
    let zones = parse_zone_list(text).map_err(|e| PyValueError::new_err(e.to_string()))?;

    Ok(zones
        .iter()
        .map(|zone| zone.cells().iter().map(|c| (c.row, c.col)).collect())
        .collect())
}

fn build_zones(raw: Vec<Vec<(u8, u8)>>) -> PyResult<ZoneList> {
    raw.into_iter()
        .map(|cells| {
            Zone::new(cells.into_iter().map(|(row, col)| Coord::new(row, col)))
                .map_err(|e| PyValueError::new_err(e.to_string()))
        })
        .collect()
}

// Cells outside u8 range cannot be placed digits; map them to a sentinel
// the range check reports as out of range.
fn clamp_cell(value: i64) -> u8 {
    u8::try_from(value).unwrap_or(u8::MAX)
}
