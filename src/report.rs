//! Report generation.
//!
//! Drives the per-kind pipeline: filter the loaded rows, compute statistics,
//! render the histogram image and append the text block. Kinds are processed
//! one after another, so a failure on a later kind leaves the earlier kind's
//! files in place.

use crate::chart;
use crate::histogram::LogHistogram;
use crate::input;
use crate::metrics;
use crate::model::{GroupStats, Kind, Measurement, ReportConfig};
use crate::text_summary;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Result of processing one kind.
#[derive(Debug, Clone)]
pub struct KindReport {
    pub kind: Kind,
    pub stats: GroupStats,
    pub histogram_path: PathBuf,
}

/// Result of a whole run, ready for presentation.
#[derive(Debug, Clone)]
pub struct ReportOutcome {
    pub kinds: Vec<KindReport>,
    pub summary_path: PathBuf,
}

/// Load the input named by `config` and write every kind's artifacts.
pub fn generate_report(config: &ReportConfig) -> Result<ReportOutcome> {
    let rows = input::load_measurements(&config.input)?;
    log::info!(
        "loaded {} rows from {}",
        rows.len(),
        config.input.display()
    );
    generate_from_rows(config, &rows)
}

/// Write every kind's artifacts for already-loaded rows.
pub fn generate_from_rows(config: &ReportConfig, rows: &[Measurement]) -> Result<ReportOutcome> {
    let mut kinds = Vec::with_capacity(Kind::ALL.len());
    for kind in Kind::ALL {
        kinds.push(process_kind(config, rows, kind)?);
    }
    Ok(ReportOutcome {
        kinds,
        summary_path: config.summary_path(),
    })
}

fn process_kind(config: &ReportConfig, rows: &[Measurement], kind: Kind) -> Result<KindReport> {
    let samples = input::latencies_ms(rows, kind);
    let stats = metrics::compute_group_stats(&samples);
    if stats.is_empty() {
        log::warn!("no {kind} rows in input; statistics are undefined");
    } else {
        log::info!(
            "{kind}: count={} avg={:.3} ms p99={:.3} ms",
            stats.count,
            stats.avg_ms.unwrap_or(f64::NAN),
            stats.p99_ms.unwrap_or(f64::NAN)
        );
    }

    let hist = LogHistogram::from_samples(&samples);
    let dropped = samples.len() as u64 - hist.total();
    if dropped > 0 {
        log::debug!("{kind}: {dropped} samples outside the histogram range");
    }

    let histogram_path = config.histogram_path(kind);
    chart::render_histogram(
        &histogram_path,
        kind,
        &hist,
        (config.image_width, config.image_height),
    )?;
    text_summary::append_block(&config.summary_path(), kind, &stats)?;

    Ok(KindReport {
        kind,
        stats,
        histogram_path,
    })
}

/// Names of the entries in `config.output_dir`, sorted.
pub fn list_output_dir(config: &ReportConfig) -> Result<Vec<String>> {
    let dir = &config.output_dir;
    let mut names = std::fs::read_dir(dir)
        .with_context(|| format!("failed to list '{}'", dir.display()))?
        .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
        .collect::<std::io::Result<Vec<_>>>()
        .with_context(|| format!("failed to list '{}'", dir.display()))?;
    names.sort();
    Ok(names)
}
