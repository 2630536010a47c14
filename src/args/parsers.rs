use std::time::Duration;

use http::header::{HeaderName, HeaderValue};

use super::types::{Ordering, RateSchedule, ReportFormat};
use crate::error::ValidationError;

pub(crate) fn parse_rate_schedule(s: &str) -> Result<RateSchedule, ValidationError> {
    s.parse()
}

pub(crate) fn parse_ordering(s: &str) -> Result<Ordering, ValidationError> {
    s.parse()
}

pub(crate) fn parse_report_format(s: &str) -> Result<ReportFormat, ValidationError> {
    s.parse()
}

/// Parse a `Key: Value` header flag.
///
/// Exactly one colon, and both sides must be non-empty after trimming. The
/// key and value must also be representable as HTTP header name/value so a
/// bad flag fails here instead of mid-pass.
pub(crate) fn parse_header(s: &str) -> Result<(String, String), ValidationError> {
    let parts: Vec<&str> = s.split(':').collect();
    let (key, value) = match parts.as_slice() {
        [key, value] => (key.trim(), value.trim()),
        _ => {
            return Err(ValidationError::InvalidHeaderFormat {
                value: s.to_owned(),
            });
        }
    };
    if key.is_empty() || value.is_empty() {
        return Err(ValidationError::InvalidHeaderFormat {
            value: s.to_owned(),
        });
    }
    if HeaderName::from_bytes(key.as_bytes()).is_err() || HeaderValue::from_str(value).is_err() {
        return Err(ValidationError::InvalidHeaderFormat {
            value: s.to_owned(),
        });
    }
    Ok((key.to_owned(), value.to_owned()))
}

/// Parse a pass duration; rejects zero.
pub(crate) fn parse_duration_arg(s: &str) -> Result<Duration, ValidationError> {
    let duration = parse_duration_value(s)?;
    if duration.as_millis() == 0 {
        return Err(ValidationError::DurationZero);
    }
    Ok(duration)
}

/// Parse a per-request timeout; zero disables the timeout.
pub(crate) fn parse_timeout_arg(s: &str) -> Result<Duration, ValidationError> {
    parse_duration_value(s)
}

fn parse_duration_value(s: &str) -> Result<Duration, ValidationError> {
    let value = s.trim();
    if value.is_empty() {
        return Err(ValidationError::DurationEmpty);
    }

    let digits_len = value.chars().take_while(char::is_ascii_digit).count();
    if digits_len == 0 {
        return Err(ValidationError::InvalidDurationFormat {
            value: value.to_owned(),
        });
    }
    let (num_part, unit_part) = value.split_at(digits_len);
    let number: u64 = num_part
        .parse()
        .map_err(|err| ValidationError::InvalidDurationNumber {
            value: value.to_owned(),
            source: err,
        })?;

    let unit = if unit_part.is_empty() { "s" } else { unit_part };
    match unit {
        "ms" => Ok(Duration::from_millis(number)),
        "s" => Ok(Duration::from_secs(number)),
        "m" => number
            .checked_mul(60)
            .map(Duration::from_secs)
            .ok_or(ValidationError::DurationOverflow),
        "h" => number
            .checked_mul(60)
            .and_then(|secs| secs.checked_mul(60))
            .map(Duration::from_secs)
            .ok_or(ValidationError::DurationOverflow),
        _ => Err(ValidationError::InvalidDurationUnit {
            unit: unit.to_owned(),
        }),
    }
}
