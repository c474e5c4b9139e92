use thiserror::Error;

use crate::models::SourceName;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{source_name} returned HTTP {status}")]
    SourceStatus {
        source_name: SourceName,
        status: reqwest::StatusCode,
    },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Malformed {source_name} record: {reason}")]
    MalformedRecord {
        source_name: SourceName,
        reason: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn malformed(source_name: SourceName, reason: impl Into<String>) -> Self {
        Error::MalformedRecord {
            source_name,
            reason: reason.into(),
        }
    }
}
