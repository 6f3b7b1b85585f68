use std::collections::BTreeMap;
use thiserror::Error;

/// Field-keyed validation messages as returned by the backend on HTTP 400.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Every failure the client can report.
#[derive(Debug, Error)]
pub enum Error {
    /// Settings or environment could not be loaded
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// The request never produced a response
    #[error("Transport error: {message}")]
    Transport {
        /// Underlying error text
        message: String,
    },

    /// The backend answered 401; the session is gone
    #[error("Not authenticated")]
    Unauthenticated,

    /// The backend rejected the payload with per-field messages (HTTP 400)
    #[error("Validation failed: {}", describe_fields(.fields))]
    Validation {
        /// Messages keyed by field name; `non_field_errors` for the rest
        fields: FieldErrors,
    },

    /// HTTP 404
    #[error("Resource not found: {path}")]
    NotFound {
        /// Path that was requested
        path: String,
    },

    /// Any other non-success status
    #[error("Unexpected status {status} from {path}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Path that was requested
        path: String,
        /// Raw response body
        body: String,
    },

    /// A response body did not match the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A record was rejected locally before being sent
    #[error("Invalid record: {message}")]
    InvalidRecord {
        /// Why the record is invalid
        message: String,
    },

    /// Rendering text output failed
    #[error("Formatting error: {0}")]
    Format(#[from] std::fmt::Error),

    /// Reading or writing a local file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport {
            message: value.to_string(),
        }
    }
}

impl Error {
    /// True for the 404 case that some flows treat as "absent" rather than failed.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

fn describe_fields(fields: &FieldErrors) -> String {
    fields
        .iter()
        .map(|(field, messages)| format!("{field}: {}", messages.join(" ")))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
