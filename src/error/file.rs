use thiserror::Error;

#[derive(Debug, Error)]
pub enum FileError {
    #[error("Targets file: ({name}): {source}")]
    TargetsOpen {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Targets file: ({name}): invalid target line '{line}'")]
    TargetsLine { name: String, line: String },
    #[error("Targets file: ({name}): unsupported method '{method}'")]
    TargetsMethod { name: String, method: String },
    #[error("Targets file: ({name}): invalid URL '{url}': {source}")]
    TargetsUrl {
        name: String,
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Output file: ({name}): {source}")]
    OutputOpen {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Output file: ({name}): {source}")]
    OutputWrite {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Input file: ({name}): {source}")]
    InputOpen {
        name: String,
        #[source]
        source: std::io::Error,
    },
}
