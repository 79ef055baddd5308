use crate::model::GroupStats;

/// Percentile of already-sorted samples, linearly interpolated between the
/// two nearest order statistics. `q` is a fraction in `[0, 1]`.
pub fn percentile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

/// Compute group statistics (count, mean, p50, p95, p99, max) from samples in milliseconds
pub fn compute_group_stats(samples: &[f64]) -> GroupStats {
    if samples.is_empty() {
        return GroupStats::empty();
    }
    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mean = samples.iter().sum::<f64>() / samples.len() as f64;
    GroupStats {
        count: samples.len() as u64,
        avg_ms: Some(mean),
        p50_ms: percentile_sorted(&sorted, 0.50),
        p95_ms: percentile_sorted(&sorted, 0.95),
        p99_ms: percentile_sorted(&sorted, 0.99),
        max_ms: sorted.last().copied(),
    }
}
