//! benford-core — leading-digit distribution engine.
//!
//! Provides:
//! - `extract` — anchored number-prefix scanning and leading digit extraction
//! - `distribution` — observed counts and probabilities over digits 1–9
//! - `benford` — Benford's Law reference probabilities
//! - `compare` — observed vs. theoretical comparison table
//! - `analysis` — one-pass bundle of all of the above
//! - `input` — reading input lines from disk
//! - `fmt` — rounding and console summary formatting
//!
//! With `xlsx` feature (default):
//! - `report::xlsx` — multi-sheet workbook with column charts
//!
//! With `json` feature (default):
//! - `report::json` — JSON document of the derived tables

pub mod analysis;
pub mod benford;
pub mod compare;
pub mod digit;
pub mod distribution;
pub mod error;
pub mod extract;
pub mod fmt;
pub mod input;
pub mod report;

pub use analysis::Analysis;
pub use benford::{BenfordEntry, BenfordTable, benford_probability};
pub use compare::{Comparison, ComparisonEntry};
pub use digit::Digit;
pub use distribution::{Distribution, DistributionEntry};
pub use error::{Error, Result};
pub use extract::{extract_digits, leading_digit, number_prefix};

/// Crate version, shared with the binary's `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
