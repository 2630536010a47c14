use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to serialize report: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to format report: {source}")]
    Format {
        #[source]
        source: std::fmt::Error,
    },
    #[error("Failed to encode result record: {source}")]
    EncodeRecord {
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to decode result record at line {line}: {source}")]
    DecodeRecord {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}
