//! Result records and aggregate statistics.
//!
//! A [`Hit`] is one observed request outcome, tagged with the configured
//! rate that produced it. [`Metrics`] aggregates an arbitrary hit slice.
//!
//! Percentile policy: latencies are sorted ascending and the p-th
//! percentile is the value at `index = ceil(p * n / 100) - 1`, clamped to
//! `[0, n - 1]`. An empty slice yields zero for every count, ratio, and
//! percentile.

pub mod groups;


use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One observed outcome of a single issued request.
///
/// An empty `error` means success; `status` is 0 when the request never
/// produced a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hit {
    pub timestamp: DateTime<Utc>,
    #[serde(with = "duration_ns")]
    pub latency: Duration,
    pub bytes_in: u64,
    pub bytes_out: u64,
    pub status: u16,
    pub error: String,
    pub rate: u64,
}

/// Aggregate statistics over one hit slice. Recomputed per report, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metrics {
    pub requests: u64,
    #[serde(with = "duration_ns")]
    pub duration: Duration,
    pub latencies: LatencyMetrics,
    pub bytes_in: ByteMetrics,
    pub bytes_out: ByteMetrics,
    pub success: f64,
    pub status_codes: BTreeMap<String, u64>,
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatencyMetrics {
    #[serde(with = "duration_ns")]
    pub mean: Duration,
    #[serde(rename = "50th", with = "duration_ns")]
    pub p50: Duration,
    #[serde(rename = "95th", with = "duration_ns")]
    pub p95: Duration,
    #[serde(rename = "99th", with = "duration_ns")]
    pub p99: Duration,
    #[serde(with = "duration_ns")]
    pub max: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ByteMetrics {
    pub total: u64,
    pub mean: f64,
}

impl Metrics {
    /// Aggregate `hits` into one read-only statistics block.
    #[must_use]
    pub fn compute(hits: &[Hit]) -> Self {
        let requests = u64::try_from(hits.len()).unwrap_or(u64::MAX);
        if hits.is_empty() {
            return Self::empty();
        }

        let mut latencies: Vec<Duration> = hits.iter().map(|hit| hit.latency).collect();
        latencies.sort_unstable();
        let latency_sum: u128 = latencies.iter().map(Duration::as_nanos).sum();
        let mean_ns = latency_sum
            .checked_div(u128::from(requests))
            .unwrap_or_default();

        let mut bytes_in_total: u64 = 0;
        let mut bytes_out_total: u64 = 0;
        let mut ok: u64 = 0;
        let mut status_codes: BTreeMap<String, u64> = BTreeMap::new();
        let mut errors: Vec<String> = Vec::new();
        for hit in hits {
            bytes_in_total = bytes_in_total.saturating_add(hit.bytes_in);
            bytes_out_total = bytes_out_total.saturating_add(hit.bytes_out);
            if hit.error.is_empty() {
                ok = ok.saturating_add(1);
            } else if !errors.contains(&hit.error) {
                errors.push(hit.error.clone());
            }
            let count = status_codes.entry(hit.status.to_string()).or_insert(0);
            *count = count.saturating_add(1);
        }

        let count = requests as f64;
        Self {
            requests,
            duration: wall_time(hits),
            latencies: LatencyMetrics {
                mean: duration_from_ns(mean_ns),
                p50: percentile(&latencies, 50),
                p95: percentile(&latencies, 95),
                p99: percentile(&latencies, 99),
                max: latencies.last().copied().unwrap_or_default(),
            },
            bytes_in: ByteMetrics {
                total: bytes_in_total,
                mean: bytes_in_total as f64 / count,
            },
            bytes_out: ByteMetrics {
                total: bytes_out_total,
                mean: bytes_out_total as f64 / count,
            },
            success: ok as f64 / count,
            status_codes,
            errors,
        }
    }

    fn empty() -> Self {
        Self {
            requests: 0,
            duration: Duration::ZERO,
            latencies: LatencyMetrics {
                mean: Duration::ZERO,
                p50: Duration::ZERO,
                p95: Duration::ZERO,
                p99: Duration::ZERO,
                max: Duration::ZERO,
            },
            bytes_in: ByteMetrics { total: 0, mean: 0.0 },
            bytes_out: ByteMetrics { total: 0, mean: 0.0 },
            success: 0.0,
            status_codes: BTreeMap::new(),
            errors: Vec::new(),
        }
    }
}

/// Wall time covered by `hits`: the temporally last issue time plus its
/// latency, minus the temporally first issue time. Found by a scan so an
/// unsorted slice still measures correctly.
fn wall_time(hits: &[Hit]) -> Duration {
    let start = hits.iter().map(|hit| hit.timestamp).min();
    let end = hits
        .iter()
        .map(|hit| {
            chrono::Duration::from_std(hit.latency)
                .ok()
                .and_then(|latency| hit.timestamp.checked_add_signed(latency))
                .unwrap_or(hit.timestamp)
        })
        .max();
    match (start, end) {
        (Some(start), Some(end)) => end
            .signed_duration_since(start)
            .to_std()
            .unwrap_or(Duration::ZERO),
        _ => Duration::ZERO,
    }
}

fn percentile(sorted: &[Duration], p: u64) -> Duration {
    let n = u64::try_from(sorted.len()).unwrap_or(u64::MAX);
    if n == 0 {
        return Duration::ZERO;
    }
    let rank = p.saturating_mul(n).div_ceil(100);
    let index = rank.saturating_sub(1).min(n.saturating_sub(1));
    usize::try_from(index)
        .ok()
        .and_then(|index| sorted.get(index))
        .copied()
        .unwrap_or(Duration::ZERO)
}

fn duration_from_ns(nanos: u128) -> Duration {
    Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
}

/// Durations on the wire are integer nanoseconds.
mod duration_ns {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let nanos = u64::deserialize(deserializer)?;
        Ok(Duration::from_nanos(nanos))
    }
}
