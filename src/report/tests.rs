use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};

use super::records;
use super::render;
use crate::args::ReportFormat;
use crate::error::{AppError, AppResult};
use crate::metrics::Hit;

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 17, 12, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

fn hit(offset_ms: i64, latency_ms: u64, rate: u64) -> Hit {
    Hit {
        timestamp: base_time() + chrono::Duration::milliseconds(offset_ms),
        latency: Duration::from_millis(latency_ms),
        bytes_in: 512,
        bytes_out: 64,
        status: 200,
        error: String::new(),
        rate,
    }
}

fn fixture() -> Vec<Hit> {
    vec![
        hit(0, 10, 10),
        hit(100, 20, 10),
        hit(200, 30, 10),
        hit(300, 40, 10),
    ]
}

fn utf8(bytes: Vec<u8>) -> AppResult<String> {
    String::from_utf8(bytes)
        .map_err(|err| AppError::validation(format!("Report is not UTF-8: {}", err)))
}

#[test]
fn text_report_renders_fields_in_fixed_order() -> AppResult<()> {
    let text = utf8(render(ReportFormat::Text, &fixture())?)?;

    let labels = [
        "Requests",
        "Duration",
        "Latencies",
        "Bytes In",
        "Bytes Out",
        "Success",
        "Status Codes",
        "Error Set:",
    ];
    let mut cursor = 0usize;
    for label in labels {
        match text.get(cursor..).and_then(|rest| rest.find(label)) {
            Some(offset) => cursor = cursor.saturating_add(offset).saturating_add(label.len()),
            None => {
                return Err(AppError::validation(format!(
                    "Label '{}' missing or out of order in:\n{}",
                    label, text
                )));
            }
        }
    }
    Ok(())
}

#[test]
fn text_report_renders_fixture_values() -> AppResult<()> {
    let text = utf8(render(ReportFormat::Text, &fixture())?)?;
    for needle in [
        "25ms, 20ms, 40ms, 40ms, 40ms",
        "340ms",
        "2048, 512.00",
        "256, 64.00",
        "100.00%",
        "200:4",
    ] {
        if !text.contains(needle) {
            return Err(AppError::validation(format!(
                "Missing '{}' in:\n{}",
                needle, text
            )));
        }
    }
    Ok(())
}

#[test]
fn text_report_lists_errors_one_per_line() -> AppResult<()> {
    let mut hits = fixture();
    if let Some(last) = hits.last_mut() {
        last.status = 500;
        last.error = "500 Internal Server Error".to_owned();
    }
    let text = utf8(render(ReportFormat::Text, &hits)?)?;
    let mut lines = text.lines().skip_while(|line| *line != "Error Set:");
    if lines.next() != Some("Error Set:") {
        return Err(AppError::validation("Missing Error Set block"));
    }
    if lines.next() != Some("500 Internal Server Error") {
        return Err(AppError::validation(format!(
            "Unexpected error lines in:\n{}",
            text
        )));
    }
    Ok(())
}

#[test]
fn json_report_uses_stable_field_names() -> AppResult<()> {
    let bytes = render(ReportFormat::Json, &fixture())?;
    let value: serde_json::Value = serde_json::from_slice(&bytes)?;
    if value.get("requests") != Some(&serde_json::json!(4)) {
        return Err(AppError::validation(format!("Unexpected requests: {}", value)));
    }
    let p50 = value
        .get("latencies")
        .and_then(|latencies| latencies.get("50th"));
    if p50 != Some(&serde_json::json!(20_000_000u64)) {
        return Err(AppError::validation(format!("Unexpected 50th: {}", value)));
    }
    if value.get("success") != Some(&serde_json::json!(1.0)) {
        return Err(AppError::validation(format!("Unexpected success: {}", value)));
    }
    let code = value
        .get("status_codes")
        .and_then(|codes| codes.get("200"));
    if code != Some(&serde_json::json!(4)) {
        return Err(AppError::validation(format!("Unexpected codes: {}", value)));
    }
    if value.get("errors") != Some(&serde_json::json!([])) {
        return Err(AppError::validation(format!("Unexpected errors: {}", value)));
    }
    let bytes_in_mean = value
        .get("bytes_in")
        .and_then(|bytes_in| bytes_in.get("mean"));
    if bytes_in_mean != Some(&serde_json::json!(512.0)) {
        return Err(AppError::validation(format!("Unexpected bytes_in: {}", value)));
    }
    Ok(())
}

#[test]
fn csv_report_emits_one_row_per_rate_group() -> AppResult<()> {
    let hits = vec![
        hit(0, 10, 10),
        hit(100, 20, 10),
        hit(200, 30, 10),
        hit(300, 40, 50),
        hit(400, 50, 50),
    ];
    let text = utf8(render(ReportFormat::Csv, &hits)?)?;
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() != 3 {
        return Err(AppError::validation(format!(
            "Expected header + 2 rows, got:\n{}",
            text
        )));
    }
    if lines.first().copied()
        != Some("rate,mean_ms,p50_ms,p95_ms,p99_ms,max_ms,bytesIn_B,bytesOut_B,success_percent")
    {
        return Err(AppError::validation(format!(
            "Unexpected header: {:?}",
            lines.first()
        )));
    }
    if lines.get(1).copied() != Some("10,20.000,20.000,30.000,30.000,30.000,1536,192,100.00") {
        return Err(AppError::validation(format!(
            "Unexpected first row: {:?}",
            lines.get(1)
        )));
    }
    if lines.get(2).copied() != Some("50,45.000,40.000,50.000,50.000,50.000,1024,128,100.00") {
        return Err(AppError::validation(format!(
            "Unexpected second row: {:?}",
            lines.get(2)
        )));
    }
    Ok(())
}

#[test]
fn csv_report_of_empty_input_is_header_only() -> AppResult<()> {
    let text = utf8(render(ReportFormat::Csv, &[])?)?;
    if text.lines().count() != 1 {
        return Err(AppError::validation(format!(
            "Expected only the header:\n{}",
            text
        )));
    }
    Ok(())
}

#[test]
fn records_round_trip_preserves_the_sequence() -> AppResult<()> {
    let hits = vec![hit(0, 10, 10), hit(100, 20, 50)];
    let encoded = render(ReportFormat::Records, &hits)?;
    let decoded = records::read_hits(&utf8(encoded)?)?;
    if decoded != hits {
        return Err(AppError::validation("Round trip changed the sequence"));
    }
    Ok(())
}

#[test]
fn records_decode_reports_the_failing_line() -> AppResult<()> {
    match records::read_hits("not-json\n") {
        Err(err) => {
            let message = err.to_string();
            if !message.contains("line 1") {
                return Err(AppError::validation(format!(
                    "Unexpected message: {}",
                    message
                )));
            }
            Ok(())
        }
        Ok(hits) => Err(AppError::validation(format!(
            "Expected Err, got {} hits",
            hits.len()
        ))),
    }
}
