//! Lighthouse report summarizer
//!
//! This crate reads a Lighthouse JSON report and condenses it into the two
//! headline category scores plus the accessibility audits that still need work.
//!
//! # Example
//!
//! ```no_run
//! use lighthouse_report::{LighthouseReport, ReportSummary, reporter::{OutputFormat, Reporter}};
//!
//! # fn example() -> anyhow::Result<()> {
//! let report = LighthouseReport::from_file("lighthouse-aria-improvements.json")?;
//! let summary = ReportSummary::from_report(&report)?;
//!
//! Reporter::new(OutputFormat::Console).report(&summary)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Input shape
//!
//! Only a small slice of the Lighthouse schema is consumed:
//!
//! ```json
//! {
//!   "categories": {
//!     "performance":   { "score": 0.87, "auditRefs": [] },
//!     "accessibility": { "score": 0.91, "auditRefs": [{ "id": "label", "weight": 10 }] }
//!   },
//!   "audits": {
//!     "label": { "title": "Form elements have associated labels", "score": 0.5 }
//!   }
//! }
//! ```

pub mod error;
pub mod report;
pub mod reporter;
pub mod summary;

// Re-export main types for convenience
pub use error::ReportError;
pub use report::{Audit, AuditRef, Category, LighthouseReport, DEFAULT_REPORT_PATH};
pub use reporter::{OutputFormat, Reporter};
pub use summary::{collect_failing_audits, FailingAudit, HeadlineScores, ReportSummary};
