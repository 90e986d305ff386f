//! Output formatting for block-average tables.
//!
//! This module provides formatters for displaying a `BlockTable` in
//! different formats:
//! - Terminal: Human-readable output with colors and box drawing
//! - JSON: Machine-readable serialization
//!
//! The computation itself never performs I/O; callers opt into these
//! renderings with the returned table.

mod json;
pub mod terminal;

pub use json::{to_json, to_json_pretty};
pub use terminal::format_table;
