use super::*;
use std::time::Duration;

#[test]
fn duration_defaults_to_seconds() -> AppResult<()> {
    let parsed = parse_duration_arg("10").map_err(AppError::validation)?;
    if parsed != Duration::from_secs(10) {
        return Err(AppError::validation(format!("Unexpected: {:?}", parsed)));
    }
    Ok(())
}

#[test]
fn duration_parses_units() -> AppResult<()> {
    for (value, expected) in [
        ("250ms", Duration::from_millis(250)),
        ("3s", Duration::from_secs(3)),
        ("2m", Duration::from_secs(120)),
        ("1h", Duration::from_secs(3600)),
    ] {
        let parsed = parse_duration_arg(value).map_err(AppError::validation)?;
        if parsed != expected {
            return Err(AppError::validation(format!(
                "Unexpected duration for {}: {:?}",
                value, parsed
            )));
        }
    }
    Ok(())
}

#[test]
fn duration_rejects_zero() -> AppResult<()> {
    match parse_duration_arg("0s") {
        Err(err) => {
            let message = err.to_string();
            if message != "Duration: can't be zero" {
                return Err(AppError::validation(format!(
                    "Unexpected message: {}",
                    message
                )));
            }
            Ok(())
        }
        Ok(parsed) => Err(AppError::validation(format!(
            "Expected Err, got {:?}",
            parsed
        ))),
    }
}

#[test]
fn duration_rejects_garbage() -> AppResult<()> {
    for value in ["", "abc", "10x"] {
        if parse_duration_arg(value).is_ok() {
            return Err(AppError::validation(format!(
                "Expected Err for '{}'",
                value
            )));
        }
    }
    Ok(())
}

#[test]
fn timeout_allows_zero() -> AppResult<()> {
    let parsed = parse_timeout_arg("0s").map_err(AppError::validation)?;
    if parsed != Duration::ZERO {
        return Err(AppError::validation(format!("Unexpected: {:?}", parsed)));
    }
    Ok(())
}
