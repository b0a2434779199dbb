//! End-to-end checks against a realistic Lighthouse report

use lighthouse_report::{LighthouseReport, OutputFormat, ReportSummary, Reporter};
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/lighthouse-sample.json")
}

fn console_output() -> String {
    let report = LighthouseReport::from_file(fixture_path()).unwrap();
    let summary = ReportSummary::from_report(&report).unwrap();
    Reporter::new(OutputFormat::Console).format_summary(&summary).unwrap()
}

#[test]
fn test_fixture_console_output() {
    assert_eq!(
        console_output(),
        "=== Lighthouse Results ===\n\
         Performance: 87\n\
         Accessibility: 91\n\
         \n\
         === Remaining Accessibility Issues (3) ===\n  \
         - Background and foreground colors do not have a sufficient contrast ratio.\n    \
         ID: color-contrast, Score: 0\n  \
         - Form elements do not have associated labels\n    \
         ID: label, Score: 50\n  \
         - Image elements do not have `[alt]` attributes\n    \
         ID: image-alt, Score: 88\n"
    );
}

#[test]
fn test_fixture_output_is_idempotent() {
    assert_eq!(console_output(), console_output());
}

#[test]
fn test_fixture_excludes_unweighted_and_not_applicable() {
    let output = console_output();

    assert!(!output.contains("video-caption"));
    assert!(!output.contains("tabindex"));
    assert!(!output.contains("bypass"));
    assert!(!output.contains("aria-allowed-attr"));
    // Performance audits are never listed
    assert!(!output.contains("largest-contentful-paint"));
}

#[test]
fn test_fixture_json_summary() {
    let report = LighthouseReport::from_file(fixture_path()).unwrap();
    let summary = ReportSummary::from_report(&report).unwrap();
    let json = Reporter::new(OutputFormat::Json).format_summary(&summary).unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["performance"], 87);
    assert_eq!(value["accessibility"], 91);
    assert_eq!(value["failing_audits"].as_array().unwrap().len(), 3);
    assert_eq!(value["failing_audits"][1]["id"], "label");
}
