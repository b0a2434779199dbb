//! Lighthouse report model and loading
//!
//! The document is kept as raw JSON per category and per audit. Entries are
//! only converted into typed values when they are looked up, so fields the
//! summary never reads are not validated.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::ReportError;

/// Report file read when no path is given
pub const DEFAULT_REPORT_PATH: &str = "lighthouse-aria-improvements.json";

/// Parsed Lighthouse report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LighthouseReport {
    /// Categories keyed by name ("performance", "accessibility", ...)
    pub categories: HashMap<String, Value>,
    /// Audits keyed by identifier
    pub audits: HashMap<String, Value>,
}

impl LighthouseReport {
    /// Load a report from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The content is not valid JSON
    /// - `categories` or `audits` is missing or not an object
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read Lighthouse report: {}", path.display()))?;
        let report = Self::from_str(&content)?;
        debug!(
            path = %path.display(),
            categories = report.categories.len(),
            audits = report.audits.len(),
            "loaded lighthouse report"
        );
        Ok(report)
    }

    /// Parse a report from a JSON string
    ///
    /// # Example
    ///
    /// ```
    /// use lighthouse_report::report::LighthouseReport;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let json = r#"{
    ///     "categories": { "performance": { "score": 0.5, "auditRefs": [] } },
    ///     "audits": {}
    /// }"#;
    /// let report = LighthouseReport::from_str(json)?;
    /// assert!(report.categories.contains_key("performance"));
    /// # Ok(())
    /// # }
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        serde_json::from_str(s).context("Failed to parse Lighthouse report JSON")
    }

    /// Look up a category by name and decode it
    pub fn category(&self, name: &str) -> Result<Category, ReportError> {
        let raw = self
            .categories
            .get(name)
            .ok_or_else(|| ReportError::MissingCategory(name.to_string()))?;
        Category::deserialize(raw).map_err(|e| ReportError::InvalidCategory {
            name: name.to_string(),
            reason: e.to_string(),
        })
    }

    /// Look up an audit by identifier and decode it
    pub fn audit(&self, id: &str) -> Result<Audit, ReportError> {
        let raw = self
            .audits
            .get(id)
            .ok_or_else(|| ReportError::MissingAudit(id.to_string()))?;
        Audit::deserialize(raw).map_err(|e| ReportError::InvalidAudit {
            id: id.to_string(),
            reason: e.to_string(),
        })
    }
}

/// A named group of audits with an aggregate score
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Aggregate score in 0.0..=1.0; Lighthouse emits null when it could not be computed
    #[serde(default)]
    pub score: Option<f64>,
    /// References to the audits that make up this category, in document order
    #[serde(default)]
    pub audit_refs: Option<Vec<AuditRef>>,
}

/// A category's reference into the audit table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditRef {
    pub id: String,
    #[serde(default)]
    pub weight: Option<f64>,
}

impl AuditRef {
    /// Weight of the reference, 0 when absent
    pub fn weight(&self) -> f64 {
        self.weight.unwrap_or(0.0)
    }
}

/// A single check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Audit {
    pub title: String,
    /// `None` means the audit is not applicable
    #[serde(default)]
    pub score: Option<f64>,
}
