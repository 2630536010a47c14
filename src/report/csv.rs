use std::fmt::Write as _;
use std::time::Duration;

use crate::error::{AppError, AppResult, ReportError};
use crate::metrics::groups::partition_by_rate;
use crate::metrics::{Hit, Metrics};

pub(super) const HEADER: &str =
    "rate,mean_ms,p50_ms,p95_ms,p99_ms,max_ms,bytesIn_B,bytesOut_B,success_percent";

/// One data row per contiguous rate group, each row's metrics computed over
/// only that group's slice.
pub(super) fn render(hits: &[Hit]) -> AppResult<Vec<u8>> {
    let mut out = String::new();
    write_line(&mut out, HEADER)?;
    for group in partition_by_rate(hits) {
        let metrics = Metrics::compute(group.slice(hits));
        let row = format!(
            "{},{},{},{},{},{},{},{},{:.2}",
            group.rate,
            format_ms(metrics.latencies.mean),
            format_ms(metrics.latencies.p50),
            format_ms(metrics.latencies.p95),
            format_ms(metrics.latencies.p99),
            format_ms(metrics.latencies.max),
            metrics.bytes_in.total,
            metrics.bytes_out.total,
            metrics.success * 100.0,
        );
        write_line(&mut out, &row)?;
    }
    Ok(out.into_bytes())
}

fn write_line(out: &mut String, line: &str) -> AppResult<()> {
    writeln!(out, "{}", line).map_err(|err| AppError::report(ReportError::Format { source: err }))
}

fn format_ms(duration: Duration) -> String {
    format!("{:.3}", duration.as_secs_f64() * 1000.0)
}
