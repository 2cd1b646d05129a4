use thiserror::Error;

/// Error type that captures common persistence failures.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Malformed data file `{file}`: {source}")]
    Malformed {
        file: String,
        #[source]
        source: serde_json::Error,
    },
}
