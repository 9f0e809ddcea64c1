use serde::{Deserialize, Serialize};

/// Body of every error response
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
}

impl ApiResponse {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Failure to turn a fetched row into a domain record.
#[derive(Debug, thiserror::Error)]
pub enum MappingError {
    #[error("column `{column}` could not be read: {reason}")]
    Column { column: String, reason: String },

    #[error("date `{value}` does not match the `YYYY-MM-DD HH:MM:SS` layout: {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}
