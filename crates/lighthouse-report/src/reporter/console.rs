//! Console reporter for the plain-text summary

use anyhow::Result;
use std::fmt::Write;

use crate::summary::{FailingAudit, HeadlineScores, ReportSummary};

/// Console format reporter
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// Format the summary for console output
    pub fn format(summary: &ReportSummary) -> Result<String> {
        let mut output = Self::format_headline(&summary.headline())?;
        output.push_str(&Self::format_failing_audits(&summary.failing_audits)?);
        Ok(output)
    }

    /// Banner, the two headline scores and the separating blank line
    pub fn format_headline(headline: &HeadlineScores) -> Result<String> {
        let mut output = String::new();
        writeln!(output, "=== Lighthouse Results ===")?;
        writeln!(output, "Performance: {}", headline.performance)?;
        writeln!(output, "Accessibility: {}", headline.accessibility)?;
        writeln!(output)?;
        Ok(output)
    }

    /// Issues banner and entries, or the all-passed line
    pub fn format_failing_audits(failing: &[FailingAudit]) -> Result<String> {
        let mut output = String::new();
        if failing.is_empty() {
            writeln!(output, "All accessibility audits passed!")?;
            return Ok(output);
        }

        writeln!(output, "=== Remaining Accessibility Issues ({}) ===", failing.len())?;
        for audit in failing {
            writeln!(output, "  - {}", audit.title)?;
            writeln!(output, "    ID: {}, Score: {}", audit.id, audit.percent_label())?;
        }
        Ok(output)
    }
}
