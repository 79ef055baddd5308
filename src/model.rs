use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Nanoseconds per millisecond, used for the ns → ms conversion.
pub const NS_PER_MS: f64 = 1_000_000.0;

#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub summary_file: String,
    pub image_width: u32,
    pub image_height: u32,
}

impl ReportConfig {
    pub fn summary_path(&self) -> PathBuf {
        self.output_dir.join(&self.summary_file)
    }

    pub fn histogram_path(&self, kind: Kind) -> PathBuf {
        self.output_dir.join(format!("histogram_{}.png", kind.as_str()))
    }
}

/// Measurement kinds the report covers, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Enqueue,
    Dequeue,
}

impl Kind {
    pub const ALL: [Kind; 2] = [Kind::Enqueue, Kind::Dequeue];

    /// Name as it appears in the `kind` column of the input.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Enqueue => "enqueue",
            Kind::Dequeue => "dequeue",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the load-test CSV.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Measurement {
    pub kind: String,
    pub latency_ns: u64,
}

impl Measurement {
    pub fn latency_ms(&self) -> f64 {
        self.latency_ns as f64 / NS_PER_MS
    }
}

/// Per-kind statistics, all latencies in milliseconds.
///
/// Field order is the key order of the report block. Everything except
/// `count` is undefined for an empty group and serializes as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupStats {
    pub count: u64,
    pub avg_ms: Option<f64>,
    pub p50_ms: Option<f64>,
    pub p95_ms: Option<f64>,
    pub p99_ms: Option<f64>,
    pub max_ms: Option<f64>,
}

impl Default for GroupStats {
    fn default() -> Self {
        Self {
            count: 0,
            avg_ms: None,
            p50_ms: None,
            p95_ms: None,
            p99_ms: None,
            max_ms: None,
        }
    }
}

impl GroupStats {
    /// Statistics of a group with no matching rows.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
