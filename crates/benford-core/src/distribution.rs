//! Observed leading digit distribution.

use serde::Serialize;

use crate::digit::Digit;

/// Count and observed probability for one digit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistributionEntry {
    pub digit: Digit,
    pub count: u64,
    /// `count / total`, or 0 when there are no samples. Unrounded.
    pub probability: f64,
}

/// Frequency table of leading digits 1–9.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Distribution {
    counts: [u64; 9],
    total: u64,
}

impl Distribution {
    /// Tallies a sample set. Counts always sum to `samples.len()`.
    pub fn from_samples(samples: &[Digit]) -> Self {
        let mut counts = [0u64; 9];
        for digit in samples {
            counts[digit.index()] += 1;
        }
        Self {
            counts,
            total: samples.len() as u64,
        }
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn count(&self, digit: Digit) -> u64 {
        self.counts[digit.index()]
    }

    /// Observed probability of `digit`; 0 for an empty sample set.
    pub fn probability(&self, digit: Digit) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.count(digit) as f64 / self.total as f64
        }
    }

    /// One entry per digit, ascending.
    pub fn entries(&self) -> Vec<DistributionEntry> {
        Digit::ALL
            .iter()
            .map(|&digit| DistributionEntry {
                digit,
                count: self.count(digit),
                probability: self.probability(digit),
            })
            .collect()
    }
}
