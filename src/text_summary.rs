//! Text summary builder for the report file.
//!
//! Each kind contributes one block: its uppercased name, the statistics as
//! pretty-printed JSON, and a blank line. Blocks are appended, never rewritten.

use crate::model::{GroupStats, Kind};
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Format the report block for one kind.
pub(crate) fn build_block(kind: Kind, stats: &GroupStats) -> Result<String> {
    let body = serde_json::to_string_pretty(stats).context("failed to serialize statistics")?;
    Ok(format!("{}\n{}\n\n", kind.as_str().to_uppercase(), body))
}

/// Append the block for `kind` to the report at `path`, creating it if needed.
pub(crate) fn append_block(path: &Path, kind: Kind, stats: &GroupStats) -> Result<()> {
    let block = build_block(kind, stats)?;
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open report '{}'", path.display()))?;
    file.write_all(block.as_bytes())
        .with_context(|| format!("failed to write report '{}'", path.display()))?;
    Ok(())
}
