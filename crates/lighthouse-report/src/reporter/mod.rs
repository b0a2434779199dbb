//! Summary reporting
//!
//! Formats a [`ReportSummary`] for humans or for machines.
//!
//! # Output Formats
//!
//! - **Console**: The plain-text summary printed by default
//! - **JSON**: Compact machine-readable summary for CI pipelines
//! - **JSON (pretty)**: Indented JSON
//!
//! # Example
//!
//! ```no_run
//! use lighthouse_report::reporter::{Reporter, OutputFormat};
//! use lighthouse_report::ReportSummary;
//!
//! # fn example(summary: ReportSummary) -> anyhow::Result<()> {
//! Reporter::new(OutputFormat::Console).report(&summary)?;
//!
//! Reporter::new(OutputFormat::JsonPretty)
//!     .write_to_file(&summary, "lighthouse-summary.json")?;
//! # Ok(())
//! # }
//! ```

mod console;
mod json;

use anyhow::Result;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::report::LighthouseReport;
use crate::summary::{collect_failing_audits, HeadlineScores, ReportSummary};

pub use console::ConsoleReporter;
pub use json::JsonReporter;

/// Output format for the summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain text
    #[default]
    Console,
    /// JSON format for machine parsing
    Json,
    /// Pretty-printed JSON
    JsonPretty,
}

/// Reporter for summaries
pub struct Reporter {
    format: OutputFormat,
}

impl Reporter {
    /// Create a new reporter with the specified output format
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Report the summary to stdout
    pub fn report(&self, summary: &ReportSummary) -> Result<()> {
        let output = self.format_summary(summary)?;
        let mut stdout = io::stdout().lock();
        stdout.write_all(output.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }

    /// Summarize a report straight to stdout.
    ///
    /// Console output is written in two steps: the headline section is flushed
    /// before the failing audits are collected, so a bad audit reference still
    /// leaves the scores on stdout. JSON output is all-or-nothing.
    pub fn print_report(&self, report: &LighthouseReport) -> Result<()> {
        let mut stdout = io::stdout().lock();
        self.write_report(report, &mut stdout)
    }

    fn write_report<W: Write>(&self, report: &LighthouseReport, out: &mut W) -> Result<()> {
        if self.format != OutputFormat::Console {
            let summary = ReportSummary::from_report(report)?;
            out.write_all(self.format_summary(&summary)?.as_bytes())?;
            out.flush()?;
            return Ok(());
        }

        let headline = HeadlineScores::from_report(report)?;
        out.write_all(ConsoleReporter::format_headline(&headline)?.as_bytes())?;
        out.flush()?;

        let failing = collect_failing_audits(report)?;
        out.write_all(ConsoleReporter::format_failing_audits(&failing)?.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    /// Write the summary to a file
    pub fn write_to_file<P: AsRef<Path>>(&self, summary: &ReportSummary, path: P) -> Result<()> {
        let output = self.format_summary(summary)?;
        fs::write(path, output)?;
        Ok(())
    }

    /// Format the summary as a string
    pub fn format_summary(&self, summary: &ReportSummary) -> Result<String> {
        match self.format {
            OutputFormat::Console => ConsoleReporter::format(summary),
            OutputFormat::Json => JsonReporter::format(summary, false),
            OutputFormat::JsonPretty => JsonReporter::format(summary, true),
        }
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(OutputFormat::default())
    }
}
