//! Command-line entry point: argument parsing, configuration and the run loop.

use crate::model::ReportConfig;
use crate::report;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

/// File the per-kind text blocks are appended to.
pub const SUMMARY_FILE: &str = "summary.txt";
pub const IMAGE_WIDTH: u32 = 640;
pub const IMAGE_HEIGHT: u32 = 480;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "latency-report",
    version,
    about = "Summarize load-test latencies into summary.txt and per-kind histograms"
)]
pub struct Cli {
    /// CSV with `kind` and `latency_ns` columns
    pub input: PathBuf,
}

/// Build a `ReportConfig` from CLI arguments, writing into `output_dir`.
pub fn build_config(args: &Cli, output_dir: PathBuf) -> ReportConfig {
    ReportConfig {
        input: args.input.clone(),
        output_dir,
        summary_file: SUMMARY_FILE.to_string(),
        image_width: IMAGE_WIDTH,
        image_height: IMAGE_HEIGHT,
    }
}

pub fn run(args: Cli) -> Result<()> {
    let cwd = std::env::current_dir().context("get current directory")?;
    let cfg = build_config(&args, cwd);

    let outcome = report::generate_report(&cfg)?;
    for k in &outcome.kinds {
        log::info!("wrote {}", k.histogram_path.display());
    }
    log::info!("appended summary to {}", outcome.summary_path.display());

    let files = report::list_output_dir(&cfg)?;
    println!("{}", format_file_list(&files));
    Ok(())
}

/// Confirmation line naming the files in the output directory.
fn format_file_list(files: &[String]) -> String {
    format!("Report files generated: {}", files.join(", "))
}
