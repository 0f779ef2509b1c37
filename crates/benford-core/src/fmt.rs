//! Presentation helpers: rounding and the console summary.
//!
//! Rounding happens here and in the report writers only. The tables in
//! [`crate::analysis::Analysis`] always hold unrounded values.

use std::fmt::Write;

use crate::analysis::Analysis;

/// Decimal places used for every probability shown to a user.
pub const DISPLAY_DECIMALS: i32 = 4;

/// Rounds to [`DISPLAY_DECIMALS`] places, half away from zero.
pub fn round4(value: f64) -> f64 {
    let scale = 10f64.powi(DISPLAY_DECIMALS);
    (value * scale).round() / scale
}

/// Headline of the console summary.
///
/// `workbook_written` selects between the spreadsheet wording and the plain
/// analysis wording used when no workbook was produced.
pub fn format_headline(total: u64, workbook_written: bool) -> String {
    if workbook_written {
        format!("Excel file created with {} first digits!", total)
    } else {
        format!("Analyzed {} first digits!", total)
    }
}

/// Multi-line console summary: headline plus one line per digit with
/// count, observed probability and Benford probability.
pub fn format_summary(analysis: &Analysis, workbook_written: bool) -> String {
    let mut out = format_headline(analysis.total(), workbook_written);
    out.push_str("\n\nDigit distribution:\n");
    for entry in analysis.comparison().entries() {
        let count = analysis.distribution().count(entry.digit);
        writeln!(
            out,
            "  Digit {}: Count={:3}, Observed P={:.4}, Benford P={:.4}",
            entry.digit, count, entry.observed, entry.benford
        )
        .ok();
    }
    out
}
