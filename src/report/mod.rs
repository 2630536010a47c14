//! Report rendering.
//!
//! Every reporter is a pure function of a hit slice returning raw bytes.
//! Format decisions, fixed once: text and CSV render percentages and byte
//! means with 2 decimal places, CSV latency columns use 3-decimal
//! milliseconds, and the JSON document uses integer-nanosecond durations
//! with serde_json's default number formatting.

mod csv;
mod json;
pub mod records;
mod text;

#[cfg(test)]
mod tests;

use crate::args::ReportFormat;
use crate::error::AppResult;
use crate::metrics::Hit;

/// Render `hits` in the selected format.
///
/// # Errors
///
/// Returns a report error if serialization or formatting fails.
pub fn render(format: ReportFormat, hits: &[Hit]) -> AppResult<Vec<u8>> {
    match format {
        ReportFormat::Text => text::render(hits),
        ReportFormat::Json => json::render(hits),
        ReportFormat::Csv => csv::render(hits),
        ReportFormat::Records => records::render(hits),
    }
}
