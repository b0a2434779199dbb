use thiserror::Error;

/// Schema errors raised while pulling fields out of a parsed report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    #[error("Category not found in report: {0}")]
    MissingCategory(String),

    #[error("Category has no score: {0}")]
    MissingCategoryScore(String),

    #[error("Category has no auditRefs: {0}")]
    MissingAuditRefs(String),

    #[error("Audit referenced by category not found: {0}")]
    MissingAudit(String),

    #[error("Malformed category {name}: {reason}")]
    InvalidCategory { name: String, reason: String },

    #[error("Malformed audit {id}: {reason}")]
    InvalidAudit { id: String, reason: String },
}
