//! Headline scores and failing accessibility audits
//!
//! Headline percentages are truncated toward zero. Failing audit scores are
//! rounded when rendered.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ReportError;
use crate::report::LighthouseReport;

pub const PERFORMANCE: &str = "performance";
pub const ACCESSIBILITY: &str = "accessibility";

/// Convert a 0.0..=1.0 fraction to a percentage, truncating toward zero
pub fn truncated_percent(score: f64) -> i64 {
    (score * 100.0).trunc() as i64
}

/// The two category scores shown at the top of the summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadlineScores {
    pub performance: i64,
    pub accessibility: i64,
}

impl HeadlineScores {
    pub fn from_report(report: &LighthouseReport) -> Result<Self, ReportError> {
        Ok(Self {
            performance: truncated_percent(category_score(report, PERFORMANCE)?),
            accessibility: truncated_percent(category_score(report, ACCESSIBILITY)?),
        })
    }
}

fn category_score(report: &LighthouseReport, name: &str) -> Result<f64, ReportError> {
    report
        .category(name)?
        .score
        .ok_or_else(|| ReportError::MissingCategoryScore(name.to_string()))
}

/// An accessibility audit that scored below 1.0 and carries weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailingAudit {
    pub id: String,
    pub title: String,
    pub score: f64,
}

impl FailingAudit {
    /// Score as a percentage rounded to the nearest integer
    pub fn percent_label(&self) -> String {
        format!("{:.0}", self.score * 100.0)
    }
}

/// Collect accessibility audits that did not pass, in `auditRefs` order.
///
/// An audit is included only when its score is present and below 1.0 and its
/// reference weight is above 0. Repeated references yield repeated entries.
pub fn collect_failing_audits(
    report: &LighthouseReport,
) -> Result<Vec<FailingAudit>, ReportError> {
    let audit_refs = report
        .category(ACCESSIBILITY)?
        .audit_refs
        .ok_or_else(|| ReportError::MissingAuditRefs(ACCESSIBILITY.to_string()))?;
    let mut failing = Vec::new();

    for audit_ref in &audit_refs {
        let audit = report.audit(&audit_ref.id)?;
        let Some(score) = audit.score else {
            continue;
        };

        if score < 1.0 && audit_ref.weight() > 0.0 {
            failing.push(FailingAudit {
                id: audit_ref.id.clone(),
                title: audit.title,
                score,
            });
        }
    }

    debug!(
        refs = audit_refs.len(),
        failing = failing.len(),
        "collected failing accessibility audits"
    );
    Ok(failing)
}

/// Everything a reporter needs to render the summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub performance: i64,
    pub accessibility: i64,
    pub failing_audits: Vec<FailingAudit>,
}

impl ReportSummary {
    pub fn from_report(report: &LighthouseReport) -> Result<Self, ReportError> {
        let headline = HeadlineScores::from_report(report)?;
        let failing_audits = collect_failing_audits(report)?;

        Ok(Self {
            performance: headline.performance,
            accessibility: headline.accessibility,
            failing_audits,
        })
    }

    pub fn headline(&self) -> HeadlineScores {
        HeadlineScores {
            performance: self.performance,
            accessibility: self.accessibility,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failing_audits.is_empty()
    }
}


// Property tests using proptest
#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    /// One auditRef plus the audit it points at
    #[derive(Debug, Clone)]
    struct Entry {
        weight: Option<f64>,
        score: Option<f64>,
    }

    fn entry() -> impl Strategy<Value = Entry> {
        let weight = prop_oneof![
            Just(None::<f64>),
            Just(Some(0.0)),
            (1u32..20).prop_map(|w| Some(w as f64)),
        ];
        let score = prop_oneof![
            Just(None::<f64>),
            Just(Some(1.0)),
            (0u32..100).prop_map(|s| Some(s as f64 / 100.0)),
        ];
        (weight, score).prop_map(|(weight, score)| Entry { weight, score })
    }

    fn build_report(entries: &[Entry]) -> LighthouseReport {
        let refs: Vec<serde_json::Value> = entries
            .iter()
            .enumerate()
            .map(|(i, e)| match e.weight {
                Some(w) => json!({ "id": format!("audit-{}", i), "weight": w }),
                None => json!({ "id": format!("audit-{}", i) }),
            })
            .collect();
        let audits: serde_json::Map<String, serde_json::Value> = entries
            .iter()
            .enumerate()
            .map(|(i, e)| {
                (
                    format!("audit-{}", i),
                    json!({ "title": format!("Audit {}", i), "score": e.score }),
                )
            })
            .collect();

        serde_json::from_value(json!({
            "categories": {
                "performance": { "score": 0.5, "auditRefs": [] },
                "accessibility": { "score": 0.5, "auditRefs": refs }
            },
            "audits": audits
        }))
        .unwrap()
    }

    proptest! {
        /// Property: headline percentage equals floor(score * 100)
        #[test]
        fn headline_is_floor_of_percent(perf in 0.0f64..=1.0, a11y in 0.0f64..=1.0) {
            let report: LighthouseReport = serde_json::from_value(json!({
                "categories": {
                    "performance": { "score": perf, "auditRefs": [] },
                    "accessibility": { "score": a11y, "auditRefs": [] }
                },
                "audits": {}
            })).unwrap();

            let headline = HeadlineScores::from_report(&report).unwrap();
            prop_assert_eq!(headline.performance, (perf * 100.0).floor() as i64);
            prop_assert_eq!(headline.accessibility, (a11y * 100.0).floor() as i64);
        }

        /// Property: exactly the weighted, scored, imperfect audits are reported, in order
        #[test]
        fn failing_audits_match_predicate(entries in prop::collection::vec(entry(), 0..20)) {
            let report = build_report(&entries);
            let failing = collect_failing_audits(&report).unwrap();

            let expected: Vec<String> = entries
                .iter()
                .enumerate()
                .filter(|(_, e)| {
                    e.score.map_or(false, |s| s < 1.0) && e.weight.unwrap_or(0.0) > 0.0
                })
                .map(|(i, _)| format!("audit-{}", i))
                .collect();
            let actual: Vec<String> = failing.iter().map(|f| f.id.clone()).collect();
            prop_assert_eq!(actual, expected);
        }

        /// Property: zero or absent weight never produces a failing entry
        #[test]
        fn unweighted_audits_never_fail(entries in prop::collection::vec(entry(), 0..20)) {
            let report = build_report(&entries);
            let failing = collect_failing_audits(&report).unwrap();

            for audit in &failing {
                let index: usize = audit.id.trim_start_matches("audit-").parse().unwrap();
                prop_assert!(entries[index].weight.unwrap_or(0.0) > 0.0);
                prop_assert!(entries[index].score.is_some());
                prop_assert!(audit.score < 1.0);
            }
        }
    }
}
