//! JSON Lines encoding of raw hit sequences, for `report` runs over a
//! previously recorded attack.

use crate::error::{AppError, AppResult, ReportError};
use crate::metrics::Hit;

pub(crate) fn render(hits: &[Hit]) -> AppResult<Vec<u8>> {
    let mut out = Vec::new();
    for hit in hits {
        let line = serde_json::to_vec(hit)
            .map_err(|err| AppError::report(ReportError::EncodeRecord { source: err }))?;
        out.extend_from_slice(&line);
        out.push(b'\n');
    }
    Ok(out)
}

/// Decode a records stream, one JSON hit per line; blank lines are skipped.
///
/// # Errors
///
/// Returns a report error naming the 1-based line of the first record that
/// fails to decode.
pub fn read_hits(content: &str) -> AppResult<Vec<Hit>> {
    let mut hits = Vec::new();
    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let hit: Hit = serde_json::from_str(line).map_err(|err| {
            AppError::report(ReportError::DecodeRecord {
                line: index.saturating_add(1),
                source: err,
            })
        })?;
        hits.push(hit);
    }
    Ok(hits)
}
