//! Leading digit extraction from raw input lines.
//!
//! A line qualifies when it *starts* with a decimal number: one or more
//! decimal digits, optionally followed by a single `.` and more digits
//! (`\d+\.?\d*`). Leading whitespace, signs and exponents are not accepted.
//! The number is then scanned left to right for the first digit above zero.
//!
//! "Decimal digit" means any character of the Unicode `Nd` category, so
//! Arabic-Indic (`٣`) or fullwidth (`３`) digits count with their numeric value.

use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

use crate::digit::Digit;

fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit() || (!c.is_ascii() && c.general_category() == GeneralCategory::DecimalNumber)
}

/// Numeric value of a decimal digit character, 0..=9.
///
/// `Nd` characters come in contiguous runs of ten starting at that script's
/// zero, so the value is the offset from the start of the run modulo 10.
pub fn decimal_value(c: char) -> Option<u8> {
    if let Some(v) = c.to_digit(10) {
        return Some(v as u8);
    }
    if !is_decimal_digit(c) {
        return None;
    }
    let cp = u32::from(c);
    let mut start = cp;
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        start -= 1;
    }
    Some(((cp - start) % 10) as u8)
}

/// Returns the decimal number anchored at the start of `line`, if any.
///
/// The match is maximal: `"12.50kb"` yields `"12.50"`, `"7."` yields `"7."`,
/// `"0.0.7"` yields `"0.0"` (only one decimal point is consumed).
pub fn number_prefix(line: &str) -> Option<&str> {
    let int_end = digit_run_end(line, 0);
    if int_end == 0 {
        return None;
    }

    if !line[int_end..].starts_with('.') {
        return Some(&line[..int_end]);
    }

    Some(&line[..digit_run_end(line, int_end + 1)])
}

/// Byte offset just past the run of decimal digits starting at `from`.
fn digit_run_end(line: &str, from: usize) -> usize {
    line[from..]
        .char_indices()
        .find(|&(_, c)| !is_decimal_digit(c))
        .map_or(line.len(), |(i, _)| from + i)
}

/// Extracts the first non-zero digit of the number a line starts with.
///
/// Returns `None` for lines without a leading number and for numbers made
/// only of zeros (`"0"`, `"000"`, `"0.000"`, `"０"`).
pub fn leading_digit(line: &str) -> Option<Digit> {
    number_prefix(line)?
        .chars()
        .filter_map(decimal_value)
        .find_map(Digit::new)
}

/// Extracts leading digits from every qualifying line, preserving input order.
pub fn extract_digits<'a, I>(lines: I) -> Vec<Digit>
where
    I: IntoIterator<Item = &'a str>,
{
    lines.into_iter().filter_map(leading_digit).collect()
}
