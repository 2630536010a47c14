use std::str::FromStr;

use crate::error::ValidationError;

/// Ordered list of target request rates, one attack pass per entry.
///
/// Parsed from a comma-separated flag value. Input order is preserved and
/// duplicates run as separate passes. A zero entry parses here and is
/// rejected when its pass is validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateSchedule(Vec<u64>);

impl RateSchedule {
    #[must_use]
    pub fn rates(&self) -> &[u64] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for RateSchedule {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.is_empty() {
            return Err(ValidationError::RatesEmpty);
        }
        let mut rates = Vec::new();
        for part in value.split(',') {
            let part = part.trim();
            let rate: u64 = part.parse().map_err(|err| ValidationError::InvalidRate {
                value: part.to_owned(),
                source: err,
            })?;
            rates.push(rate);
        }
        Ok(Self(rates))
    }
}

/// Traversal mode applied to the target list before each pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ordering {
    Sequential,
    Random,
}

impl Ordering {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Ordering::Sequential => "sequential",
            Ordering::Random => "random",
        }
    }
}

impl FromStr for Ordering {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sequential" => Ok(Ordering::Sequential),
            "random" => Ok(Ordering::Random),
            _ => Err(ValidationError::InvalidOrdering {
                value: s.to_owned(),
            }),
        }
    }
}

/// Output rendering selected for a run.
///
/// `Records` is not a report: it encodes the raw result sequence as JSON
/// Lines for a later `report` invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
    Csv,
    Records,
}

impl ReportFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ReportFormat::Text => "text",
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
            ReportFormat::Records => "records",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            "records" => Ok(ReportFormat::Records),
            _ => Err(ValidationError::InvalidReportFormat {
                value: s.to_owned(),
            }),
        }
    }
}
