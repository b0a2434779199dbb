//! Lighthouse summary binary
//!
//! Prints the performance and accessibility scores of a Lighthouse report,
//! followed by the weighted accessibility audits that did not pass.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use lighthouse_report::{
    LighthouseReport, OutputFormat, ReportSummary, Reporter, DEFAULT_REPORT_PATH,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "lighthouse-summary")]
#[command(version, about = "Summarize a Lighthouse JSON report")]
struct Args {
    /// Lighthouse JSON report to read
    #[arg(default_value = DEFAULT_REPORT_PATH)]
    report: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Console)]
    format: Format,

    /// Write the summary to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Console,
    Json,
    JsonPretty,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Console => OutputFormat::Console,
            Format::Json => OutputFormat::Json,
            Format::JsonPretty => OutputFormat::JsonPretty,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout carries only the summary
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!(report = %args.report.display(), format = ?args.format, "summarizing report");

    let report = LighthouseReport::from_file(&args.report)?;
    let reporter = Reporter::new(args.format.into());

    match args.output {
        Some(path) => {
            let summary = ReportSummary::from_report(&report)?;
            reporter.write_to_file(&summary, &path)?;
            tracing::info!(path = %path.display(), "wrote summary");
        }
        None => reporter.print_report(&report)?,
    }

    Ok(())
}
