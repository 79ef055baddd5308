//! Loading of load-test latency CSVs.

use crate::model::{Kind, Measurement};
use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Columns every input file must carry. Other columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 2] = ["kind", "latency_ns"];

/// Read every measurement row from the CSV at `path`.
pub fn load_measurements(path: &Path) -> Result<Vec<Measurement>> {
    let file = File::open(path)
        .with_context(|| format!("failed to open input CSV '{}'", path.display()))?;
    read_measurements(file).with_context(|| format!("failed to read '{}'", path.display()))
}

/// Parse measurements from any CSV source with a header row.
pub fn read_measurements<R: Read>(source: R) -> Result<Vec<Measurement>> {
    let mut rdr = csv::Reader::from_reader(source);

    let headers = rdr.headers().context("failed to read CSV header")?.clone();
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|col| !headers.iter().any(|h| h == *col))
        .collect();
    if !missing.is_empty() {
        bail!("missing required column(s): {}", missing.join(", "));
    }

    let mut rows = Vec::new();
    for (idx, record) in rdr.deserialize::<Measurement>().enumerate() {
        // Data rows start on line 2, after the header.
        let row = record.with_context(|| format!("malformed row on line {}", idx + 2))?;
        rows.push(row);
    }
    log::debug!("loaded {} measurement rows", rows.len());
    Ok(rows)
}

/// Latencies in milliseconds of the rows matching `kind`, in input order.
pub fn latencies_ms(rows: &[Measurement], kind: Kind) -> Vec<f64> {
    rows.iter()
        .filter(|m| m.kind == kind.as_str())
        .map(Measurement::latency_ms)
        .collect()
}
