//! JSON rendering of an analysis.

use std::io::Write;
use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use tracing::info;

use crate::analysis::Analysis;
use crate::benford::BenfordEntry;
use crate::compare::ComparisonEntry;
use crate::digit::Digit;
use crate::distribution::DistributionEntry;
use crate::error::Result;
use crate::fmt::round4;

#[derive(Serialize)]
pub struct JsonReport<'a> {
    pub generated_at: String,
    pub source: &'a str,
    pub total: u64,
    pub lines_scanned: u64,
    pub lines_skipped: u64,
    pub digits: &'a [Digit],
    pub distribution: Vec<DistributionEntry>,
    pub benford: Vec<BenfordEntry>,
    pub comparison: Vec<ComparisonEntry>,
}

impl<'a> JsonReport<'a> {
    /// Snapshot of `analysis` with probabilities rounded for display.
    pub fn new(analysis: &'a Analysis, source: &'a str, generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            source,
            total: analysis.total(),
            lines_scanned: analysis.lines_scanned(),
            lines_skipped: analysis.lines_skipped(),
            digits: analysis.samples(),
            distribution: analysis
                .distribution()
                .entries()
                .into_iter()
                .map(|e| DistributionEntry {
                    probability: round4(e.probability),
                    ..e
                })
                .collect(),
            benford: analysis
                .benford()
                .entries()
                .into_iter()
                .map(|e| BenfordEntry {
                    probability: round4(e.probability),
                    ..e
                })
                .collect(),
            comparison: analysis
                .comparison()
                .entries()
                .iter()
                .map(|e| ComparisonEntry {
                    digit: e.digit,
                    observed: round4(e.observed),
                    benford: round4(e.benford),
                    difference: round4(e.difference),
                })
                .collect(),
        }
    }
}

pub fn to_string(analysis: &Analysis, source: &str) -> Result<String> {
    let report = JsonReport::new(analysis, source, Utc::now());
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Writes the report to `path`, or to stdout when `path` is `-`.
pub fn write_json(analysis: &Analysis, source: &str, path: &Path) -> Result<()> {
    let mut body = to_string(analysis, source)?;
    body.push('\n');

    if path.as_os_str() == "-" {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(body.as_bytes())?;
        stdout.flush()?;
    } else {
        std::fs::write(path, body)?;
        info!("JSON report written to {}", path.display());
    }
    Ok(())
}
