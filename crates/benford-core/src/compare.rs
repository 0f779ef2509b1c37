//! Observed vs. Benford comparison table.
//!
//! Display only: no threshold or goodness-of-fit test is applied.

use serde::Serialize;

use crate::benford::BenfordTable;
use crate::digit::Digit;
use crate::distribution::Distribution;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonEntry {
    pub digit: Digit,
    pub observed: f64,
    pub benford: f64,
    /// `observed - benford`, signed and unrounded.
    pub difference: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    entries: Vec<ComparisonEntry>,
}

impl Comparison {
    pub fn new(distribution: &Distribution, benford: &BenfordTable) -> Self {
        let entries = Digit::ALL
            .iter()
            .map(|&digit| {
                let observed = distribution.probability(digit);
                let expected = benford.probability(digit);
                ComparisonEntry {
                    digit,
                    observed,
                    benford: expected,
                    difference: observed - expected,
                }
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[ComparisonEntry] {
        &self.entries
    }

    pub fn get(&self, digit: Digit) -> &ComparisonEntry {
        &self.entries[digit.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract_digits;
    use crate::fmt::round4;

    fn d(n: u8) -> Digit {
        Digit::new(n).unwrap()
    }

    #[test]
    fn test_difference_is_signed() {
        let dist = Distribution::from_samples(&extract_digits(["100", "200", "15", "9"]));
        let cmp = Comparison::new(&dist, &BenfordTable::new());

        let one = cmp.get(d(1));
        assert_eq!(one.observed, 0.5);
        assert_eq!(round4(one.difference), 0.1990);

        let five = cmp.get(d(5));
        assert_eq!(five.observed, 0.0);
        assert!(five.difference < 0.0);
        assert_eq!(round4(five.difference), -0.0792);
    }

    #[test]
    fn test_differences_sum_to_zero_for_non_empty_samples() {
        let dist = Distribution::from_samples(&extract_digits(["3", "14", "15", "92", "65"]));
        let cmp = Comparison::new(&dist, &BenfordTable::new());
        let sum: f64 = cmp.entries().iter().map(|e| e.difference).sum();
        assert!(sum.abs() < 1e-9);
    }

    #[test]
    fn test_empty_samples_mirror_benford() {
        let benford = BenfordTable::new();
        let cmp = Comparison::new(&Distribution::default(), &benford);
        assert_eq!(cmp.entries().len(), 9);
        for entry in cmp.entries() {
            assert_eq!(entry.difference, -benford.probability(entry.digit));
        }
    }
}
