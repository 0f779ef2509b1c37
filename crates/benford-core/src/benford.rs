//! Benford's Law reference distribution.

use serde::Serialize;

use crate::digit::Digit;

/// Theoretical probability of `digit` being the leading digit: `log10(1 + 1/d)`.
pub fn benford_probability(digit: Digit) -> f64 {
    (1.0 + 1.0 / f64::from(digit.get())).log10()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BenfordEntry {
    pub digit: Digit,
    pub probability: f64,
}

/// Benford probabilities for digits 1–9. Independent of any input.
#[derive(Debug, Clone, PartialEq)]
pub struct BenfordTable {
    probabilities: [f64; 9],
}

impl BenfordTable {
    pub fn new() -> Self {
        Self {
            probabilities: Digit::ALL.map(benford_probability),
        }
    }

    pub fn probability(&self, digit: Digit) -> f64 {
        self.probabilities[digit.index()]
    }

    pub fn entries(&self) -> Vec<BenfordEntry> {
        Digit::ALL
            .iter()
            .map(|&digit| BenfordEntry {
                digit,
                probability: self.probability(digit),
            })
            .collect()
    }
}

impl Default for BenfordTable {
    fn default() -> Self {
        Self::new()
    }
}
