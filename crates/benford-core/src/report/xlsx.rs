//! Spreadsheet report with one sheet per table and a column chart per sheet.
//!
//! Layout (row/column numbers are zero-based):
//!
//! | Sheet              | Columns                                  | Chart at |
//! |--------------------|------------------------------------------|----------|
//! | `Raw First Digits` | digit                                    | -        |
//! | `Distribution`     | digit, count, observed                   | E2       |
//! | `Benford's Law`    | digit, P(n)                              | D2       |
//! | `Comparison`       | digit, observed, P(n), difference        | F2       |
//!
//! Digit tables occupy rows 1..=9 under a header in row 0.

use std::path::Path;

use rust_xlsxwriter::{Chart, ChartType, ColNum, RowNum, Workbook, Worksheet, XlsxError};
use tracing::info;

use crate::analysis::Analysis;
use crate::error::Result;
use crate::fmt::round4;

pub const RAW_SHEET: &str = "Raw First Digits";
pub const DISTRIBUTION_SHEET: &str = "Distribution";
pub const BENFORD_SHEET: &str = "Benford's Law";
pub const COMPARISON_SHEET: &str = "Comparison";

/// First and last data rows of the 1–9 digit tables.
const FIRST_DIGIT_ROW: RowNum = 1;
const LAST_DIGIT_ROW: RowNum = 9;

/// Builds the workbook in memory.
pub fn build_workbook(analysis: &Analysis) -> Result<Workbook> {
    let mut workbook = Workbook::new();
    workbook.push_worksheet(raw_sheet(analysis)?);
    workbook.push_worksheet(distribution_sheet(analysis)?);
    workbook.push_worksheet(benford_sheet(analysis)?);
    workbook.push_worksheet(comparison_sheet(analysis)?);
    Ok(workbook)
}

/// Builds the workbook and saves it to `path`.
pub fn write_workbook(analysis: &Analysis, path: &Path) -> Result<()> {
    let mut workbook = build_workbook(analysis)?;
    workbook.save(path)?;
    info!(
        "Workbook written to {} ({} digits)",
        path.display(),
        analysis.total()
    );
    Ok(())
}

/// Serializes the workbook to xlsx bytes without touching the filesystem.
pub fn workbook_bytes(analysis: &Analysis) -> Result<Vec<u8>> {
    let mut workbook = build_workbook(analysis)?;
    Ok(workbook.save_to_buffer()?)
}

fn raw_sheet(analysis: &Analysis) -> std::result::Result<Worksheet, XlsxError> {
    let mut sheet = Worksheet::new();
    sheet.set_name(RAW_SHEET)?;
    sheet.set_column_width(0, 20)?;
    sheet.write_string(0, 0, "First Non-Zero Digit")?;
    for (row, digit) in (1..).zip(analysis.samples()) {
        sheet.write_number(row, 0, f64::from(digit.get()))?;
    }
    Ok(sheet)
}

/// `(digit, count, observed)` per row, observed rounded.
pub fn distribution_rows(analysis: &Analysis) -> Vec<(u8, u64, f64)> {
    analysis
        .distribution()
        .entries()
        .iter()
        .map(|e| (e.digit.get(), e.count, round4(e.probability)))
        .collect()
}

fn distribution_sheet(analysis: &Analysis) -> std::result::Result<Worksheet, XlsxError> {
    let mut sheet = Worksheet::new();
    sheet.set_name(DISTRIBUTION_SHEET)?;
    write_headers(&mut sheet, &["Digit", "Count", "Observed Probability"])?;
    for (row, (digit, count, observed)) in (FIRST_DIGIT_ROW..).zip(distribution_rows(analysis)) {
        sheet.write_number(row, 0, f64::from(digit))?;
        sheet.write_number(row, 1, count as f64)?;
        sheet.write_number(row, 2, observed)?;
    }

    let mut chart = column_chart("Observed Probability Distribution", "Probability");
    add_series(&mut chart, DISTRIBUTION_SHEET, 2);
    sheet.insert_chart(1, 4, &chart)?;
    Ok(sheet)
}

/// `(digit, P(n))` per row, rounded.
pub fn benford_rows(analysis: &Analysis) -> Vec<(u8, f64)> {
    analysis
        .benford()
        .entries()
        .iter()
        .map(|e| (e.digit.get(), round4(e.probability)))
        .collect()
}

fn benford_sheet(analysis: &Analysis) -> std::result::Result<Worksheet, XlsxError> {
    let mut sheet = Worksheet::new();
    sheet.set_name(BENFORD_SHEET)?;
    write_headers(&mut sheet, &["Digit (n)", "P(n) = log₁₀(1 + 1/n)"])?;
    for (row, (digit, probability)) in (FIRST_DIGIT_ROW..).zip(benford_rows(analysis)) {
        sheet.write_number(row, 0, f64::from(digit))?;
        sheet.write_number(row, 1, probability)?;
    }

    let mut chart = column_chart("Benford's Law Probability Distribution", "Probability P(n)");
    add_series(&mut chart, BENFORD_SHEET, 1);
    sheet.insert_chart(1, 3, &chart)?;
    Ok(sheet)
}

/// `(digit, observed, P(n), difference)` per row, all rounded independently.
pub fn comparison_rows(analysis: &Analysis) -> Vec<(u8, f64, f64, f64)> {
    analysis
        .comparison()
        .entries()
        .iter()
        .map(|e| {
            (
                e.digit.get(),
                round4(e.observed),
                round4(e.benford),
                round4(e.difference),
            )
        })
        .collect()
}

fn comparison_sheet(analysis: &Analysis) -> std::result::Result<Worksheet, XlsxError> {
    let mut sheet = Worksheet::new();
    sheet.set_name(COMPARISON_SHEET)?;
    write_headers(
        &mut sheet,
        &["Digit", "Observed Probability", "Benford's Law P(n)", "Difference"],
    )?;
    for (row, (digit, observed, benford, difference)) in
        (FIRST_DIGIT_ROW..).zip(comparison_rows(analysis))
    {
        sheet.write_number(row, 0, f64::from(digit))?;
        sheet.write_number(row, 1, observed)?;
        sheet.write_number(row, 2, benford)?;
        sheet.write_number(row, 3, difference)?;
    }

    let mut chart = column_chart("Observed vs Benford's Law", "Probability");
    add_series(&mut chart, COMPARISON_SHEET, 1);
    add_series(&mut chart, COMPARISON_SHEET, 2);
    sheet.insert_chart(1, 5, &chart)?;
    Ok(sheet)
}

fn write_headers(sheet: &mut Worksheet, headers: &[&str]) -> std::result::Result<(), XlsxError> {
    for (col, header) in (0..).zip(headers) {
        sheet.write_string(0, col, *header)?;
        sheet.set_column_width(col, header.chars().count().max(8) as f64 + 2.0)?;
    }
    Ok(())
}

fn column_chart(title: &str, y_axis: &str) -> Chart {
    let mut chart = Chart::new(ChartType::Column);
    chart.title().set_name(title);
    chart.x_axis().set_name("Digit");
    chart.y_axis().set_name(y_axis);
    chart
}

/// Adds the values of `col` as a series, named by its header and
/// categorised by the digit column.
fn add_series(chart: &mut Chart, sheet: &str, col: ColNum) {
    chart
        .add_series()
        .set_name((sheet, 0, col))
        .set_categories((sheet, FIRST_DIGIT_ROW, 0, LAST_DIGIT_ROW, 0))
        .set_values((sheet, FIRST_DIGIT_ROW, col, LAST_DIGIT_ROW, col));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Analysis {
        Analysis::from_lines(["100", "200", "15", "9"])
    }

    #[test]
    fn test_distribution_rows() {
        let rows = distribution_rows(&sample());
        assert_eq!(rows.len(), 9);
        assert_eq!(rows[0], (1, 2, 0.5));
        assert_eq!(rows[1], (2, 1, 0.25));
        assert_eq!(rows[4], (5, 0, 0.0));
        assert_eq!(rows[8], (9, 1, 0.25));
    }

    #[test]
    fn test_benford_rows_rounded() {
        let rows = benford_rows(&sample());
        assert_eq!(rows[0], (1, 0.3010));
        assert_eq!(rows[8], (9, 0.0458));
    }

    #[test]
    fn test_comparison_rows_rounded_independently() {
        let rows = comparison_rows(&sample());
        assert_eq!(rows[0], (1, 0.5, 0.3010, 0.1990));
        assert_eq!(rows[2], (3, 0.0, 0.1249, -0.1249));
    }

    #[test]
    fn test_workbook_bytes_is_zip() {
        let bytes = workbook_bytes(&sample()).unwrap();
        assert!(bytes.len() > 100);
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_empty_analysis_still_builds() {
        let analysis = Analysis::from_lines(std::iter::empty());
        let bytes = workbook_bytes(&analysis).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_write_workbook_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(crate::report::DEFAULT_WORKBOOK_PATH);
        write_workbook(&sample(), &path).unwrap();
        let meta = std::fs::metadata(&path).unwrap();
        assert!(meta.len() > 0);
    }

    #[test]
    fn test_write_workbook_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no/such/dir/report.xlsx");
        assert!(write_workbook(&sample(), &path).is_err());
    }
}
