//! Text format for zone lists.
//!
//! Interactive forms collect custom zones as plain text: one zone per
//! line, nine `row,col` pairs separated by whitespace.
//!
//! ```text
//! 0,0 1,1 2,2 3,3 4,4 5,5 6,6 7,7 8,8
//! ```
//!
//! Blank lines are skipped. Line numbers in errors are 1-based because they
//! point back at the form's text widget.

use std::str::FromStr;

use thiserror::Error;

use crate::core::Coord;

use super::zone::{Zone, ZoneError, ZoneList};

/// Why zone text failed to parse.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ZoneParseError {
    /// A token was not a `row,col` integer pair.
    #[error("line {line}: expected `row,col`, got `{token}`")]
    BadToken { line: usize, token: String },
    /// The line parsed into coordinates but they do not form a zone.
    #[error("line {line}: {source}")]
    BadZone { line: usize, source: ZoneError },
}

/// Parse a whole zone list, one zone per non-blank line.
///
/// ```
/// use sudoku_rules::zones::parse_zone_list;
///
/// let zones = parse_zone_list("0,0 1,1 2,2 3,3 4,4 5,5 6,6 7,7 8,8\n").unwrap();
/// assert_eq!(zones.len(), 1);
///
/// assert!(parse_zone_list("").unwrap().is_empty());
/// ```
pub fn parse_zone_list(text: &str) -> Result<ZoneList, ZoneParseError> {
    let mut zones = ZoneList::new();
    for (idx, raw) in text.lines().enumerate() {
        if raw.trim().is_empty() {
            continue;
        }
        zones.push(parse_line(raw, idx + 1)?);
    }
    Ok(zones)
}

fn parse_line(raw: &str, line: usize) -> Result<Zone, ZoneParseError> {
    let mut cells = Vec::new();
    for token in raw.split_whitespace() {
        let cell = parse_coord(token).ok_or_else(|| ZoneParseError::BadToken {
            line,
            token: token.to_string(),
        })?;
        cells.push(cell);
    }
    Zone::new(cells).map_err(|source| ZoneParseError::BadZone { line, source })
}

fn parse_coord(token: &str) -> Option<Coord> {
    let (row, col) = token.split_once(',')?;
    Some(Coord::new(row.trim().parse().ok()?, col.trim().parse().ok()?))
}

impl FromStr for Zone {
    type Err = ZoneParseError;

    /// Parse a single zone line.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_line(s, 1)
    }
}
