use std::fmt::Write as _;
use std::time::Duration;

use crate::error::{AppError, AppResult, ReportError};
use crate::metrics::{Hit, Metrics};

/// Nanoseconds per microsecond, millisecond, and second.
const NS_PER_US: u128 = 1_000;
const NS_PER_MS: u128 = 1_000_000;
const NS_PER_SEC: u128 = 1_000_000_000;
/// Fraction scale for formatted durations.
const FRACTION_SCALE: u128 = 1_000;

pub(super) fn render(hits: &[Hit]) -> AppResult<Vec<u8>> {
    let metrics = Metrics::compute(hits);

    let mut codes = String::new();
    for (code, count) in &metrics.status_codes {
        write(&mut codes, format_args!("{}:{}  ", code, count))?;
    }

    let latencies = format!(
        "{}, {}, {}, {}, {}",
        format_duration(metrics.latencies.mean),
        format_duration(metrics.latencies.p50),
        format_duration(metrics.latencies.p95),
        format_duration(metrics.latencies.p99),
        format_duration(metrics.latencies.max),
    );

    let rows: [(&str, &str, String); 7] = [
        ("Requests", "[total]", metrics.requests.to_string()),
        ("Duration", "[total]", format_duration(metrics.duration)),
        ("Latencies", "[mean, 50, 95, 99, max]", latencies),
        (
            "Bytes In",
            "[total, mean]",
            format!("{}, {:.2}", metrics.bytes_in.total, metrics.bytes_in.mean),
        ),
        (
            "Bytes Out",
            "[total, mean]",
            format!("{}, {:.2}", metrics.bytes_out.total, metrics.bytes_out.mean),
        ),
        ("Success", "[ratio]", format!("{:.2}%", metrics.success * 100.0)),
        ("Status Codes", "[code:count]", codes),
    ];

    let label_width = rows.iter().map(|(label, _, _)| label.len()).max().unwrap_or(0);
    let key_width = rows.iter().map(|(_, key, _)| key.len()).max().unwrap_or(0);

    let mut out = String::new();
    for (label, key, value) in &rows {
        write(
            &mut out,
            format_args!(
                "{:<label_width$}  {:<key_width$}  {}\n",
                label, key, value
            ),
        )?;
    }
    write(&mut out, format_args!("Error Set:\n"))?;
    for error in &metrics.errors {
        write(&mut out, format_args!("{}\n", error))?;
    }

    Ok(out.into_bytes())
}

fn write(out: &mut String, args: std::fmt::Arguments<'_>) -> AppResult<()> {
    out.write_fmt(args)
        .map_err(|err| AppError::report(ReportError::Format { source: err }))
}

/// Render a duration with an adaptive unit at millisecond-grade precision,
/// e.g. `742ns`, `25ms`, `3.050s`.
pub(super) fn format_duration(duration: Duration) -> String {
    let nanos = duration.as_nanos();
    if nanos < NS_PER_US {
        format!("{}ns", nanos)
    } else if nanos < NS_PER_MS {
        format_scaled(nanos, NS_PER_US, "us")
    } else if nanos < NS_PER_SEC {
        format_scaled(nanos, NS_PER_MS, "ms")
    } else {
        format_scaled(nanos, NS_PER_SEC, "s")
    }
}

fn format_scaled(nanos: u128, unit: u128, suffix: &str) -> String {
    let whole = nanos.checked_div(unit).unwrap_or(0);
    let remainder = nanos.checked_rem(unit).unwrap_or(0);
    let thousandths = remainder
        .checked_mul(FRACTION_SCALE)
        .and_then(|value| value.checked_div(unit))
        .unwrap_or(0);
    if thousandths == 0 {
        format!("{}{}", whole, suffix)
    } else {
        format!("{}.{:03}{}", whole, thousandths, suffix)
    }
}
