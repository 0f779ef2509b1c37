//! One-pass leading digit analysis.
//!
//! [`Analysis`] owns every derived table. Report writers and the console
//! summary borrow it immutably.

use tracing::{debug, warn};

use crate::benford::BenfordTable;
use crate::compare::Comparison;
use crate::digit::Digit;
use crate::distribution::Distribution;
use crate::extract::leading_digit;

#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    samples: Vec<Digit>,
    distribution: Distribution,
    benford: BenfordTable,
    comparison: Comparison,
    lines_scanned: u64,
}

impl Analysis {
    /// Scans `lines` once, extracting leading digits and deriving all tables.
    pub fn from_lines<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut samples = Vec::new();
        let mut lines_scanned = 0u64;
        for line in lines {
            lines_scanned += 1;
            if let Some(digit) = leading_digit(line) {
                samples.push(digit);
            }
        }
        Self::from_samples(samples, lines_scanned)
    }

    /// Builds the tables from an already extracted sample set.
    pub fn from_samples(samples: Vec<Digit>, lines_scanned: u64) -> Self {
        let distribution = Distribution::from_samples(&samples);
        let benford = BenfordTable::new();
        let comparison = Comparison::new(&distribution, &benford);

        debug!(
            "Scanned {} lines: {} digits extracted, {} skipped",
            lines_scanned,
            samples.len(),
            lines_scanned.saturating_sub(samples.len() as u64)
        );
        if samples.is_empty() {
            warn!("No leading digits found; observed probabilities default to 0");
        }

        Self {
            samples,
            distribution,
            benford,
            comparison,
            lines_scanned,
        }
    }

    /// Extracted digits in input order.
    pub fn samples(&self) -> &[Digit] {
        &self.samples
    }

    pub fn total(&self) -> u64 {
        self.distribution.total()
    }

    pub fn distribution(&self) -> &Distribution {
        &self.distribution
    }

    pub fn benford(&self) -> &BenfordTable {
        &self.benford
    }

    pub fn comparison(&self) -> &Comparison {
        &self.comparison
    }

    pub fn lines_scanned(&self) -> u64 {
        self.lines_scanned
    }

    /// Lines that did not start with a number containing a non-zero digit.
    pub fn lines_skipped(&self) -> u64 {
        self.lines_scanned.saturating_sub(self.total())
    }
}
