//! Log-spaced latency histogram.

/// Lowest bin edge, in ms.
pub const MIN_EDGE_MS: f64 = 1e-3;
/// Highest bin edge, in ms.
pub const MAX_EDGE_MS: f64 = 1e3;
/// Number of bin edges; there is one bin fewer than edges.
pub const EDGE_COUNT: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct Bin {
    pub lower: f64,
    pub upper: f64,
    pub count: u64,
}

#[derive(Debug, Clone)]
pub struct LogHistogram {
    edges: Vec<f64>,
    counts: Vec<u64>,
}

/// `count` values evenly spaced in log10 space from `min` to `max`, inclusive.
pub fn log_edges(min: f64, max: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![min],
        _ => {
            let (lo, hi) = (min.log10(), max.log10());
            let step = (hi - lo) / (count - 1) as f64;
            (0..count)
                .map(|i| match i {
                    0 => min,
                    i if i == count - 1 => max,
                    i => 10f64.powf(lo + step * i as f64),
                })
                .collect()
        }
    }
}

impl Default for LogHistogram {
    fn default() -> Self {
        Self::new(log_edges(MIN_EDGE_MS, MAX_EDGE_MS, EDGE_COUNT))
    }
}

impl LogHistogram {
    /// Empty histogram over ascending `edges`.
    pub fn new(edges: Vec<f64>) -> Self {
        let bins = edges.len().saturating_sub(1);
        Self {
            edges,
            counts: vec![0; bins],
        }
    }

    /// Histogram of `samples` over the default 10^-3..10^3 ms edges.
    pub fn from_samples(samples: &[f64]) -> Self {
        let mut hist = Self::default();
        for &v in samples {
            hist.record(v);
        }
        hist
    }

    /// Count `value` into its bin. Bins are `[lo, hi)` except the last,
    /// which also takes the top edge. Out-of-range values are dropped;
    /// returns whether the value was counted.
    pub fn record(&mut self, value: f64) -> bool {
        let (Some(&first), Some(&last)) = (self.edges.first(), self.edges.last()) else {
            return false;
        };
        if self.counts.is_empty() || !(first..=last).contains(&value) {
            return false;
        }
        let idx = if value == last {
            self.counts.len() - 1
        } else {
            // first edge strictly greater than value, minus one
            self.edges.partition_point(|&e| e <= value) - 1
        };
        self.counts[idx] += 1;
        true
    }

    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn max_count(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    pub fn bins(&self) -> impl Iterator<Item = Bin> + '_ {
        self.edges
            .windows(2)
            .zip(&self.counts)
            .map(|(w, &count)| Bin {
                lower: w[0],
                upper: w[1],
                count,
            })
    }
}
