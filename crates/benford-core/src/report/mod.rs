//! Report writers.
//!
//! Each writer takes a finished [`crate::Analysis`] by shared reference and
//! renders it to one output format. Values are rounded with
//! [`crate::fmt::round4`] on the way out.

#[cfg(feature = "json")]
pub mod json;
#[cfg(feature = "xlsx")]
pub mod xlsx;

/// Default spreadsheet file name.
pub const DEFAULT_WORKBOOK_PATH: &str = "Stats_Tables_And_Graph.xlsx";
