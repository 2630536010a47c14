use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Rate(s): has to be specified and can't be empty")]
    RatesEmpty,
    #[error("Rate(s): '{value}' is invalid: {source}")]
    InvalidRate {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Rate(s): can't be zero")]
    RateZero,
    #[error("Duration: can't be zero")]
    DurationZero,
    #[error("Duration: must not be empty")]
    DurationEmpty,
    #[error("Duration: '{value}' is invalid")]
    InvalidDurationFormat { value: String },
    #[error("Duration: '{value}' is invalid: {source}")]
    InvalidDurationNumber {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Duration: unit '{unit}' is invalid")]
    InvalidDurationUnit { unit: String },
    #[error("Duration: overflow")]
    DurationOverflow,
    #[error("Ordering: `{value}` is invalid")]
    InvalidOrdering { value: String },
    #[error("Header '{value}' has a wrong format")]
    InvalidHeaderFormat { value: String },
    #[error("Reporting: format '{value}' is invalid")]
    InvalidReportFormat { value: String },
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
