//! Zone system for cell groupings.
//!
//! Zones are **caller-configured**, not hardcoded. Rows, columns, and 3x3
//! boxes are implicit zones the validator always checks; callers add custom
//! zones on top, built either from coordinates or from the text format
//! interactive forms collect.
//!
//! ## Key Types
//!
//! - `Zone`: Nine distinct in-bounds cells that must hold unique digits
//! - `ZoneList`: Ordered list of custom zones, checked in order
//! - `ZoneError`: Why a coordinate list was rejected
//! - `parse_zone_list`: The one-zone-per-line text format

pub mod parse;
pub mod zone;

pub use parse::{parse_zone_list, ZoneParseError};
pub use zone::{Zone, ZoneError, ZoneList, ZONE_SIZE};
