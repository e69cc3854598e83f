//! Error types for the Autosalon backend.
//!
//! Every failure the search engine, the inventory loader or the lead
//! notification path can produce is a variant of [`SalonError`]. The HTTP
//! layer turns these into status codes via [`SalonError::http_status_code`].

use crate::models::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the Autosalon backend.
#[derive(Debug, Error)]
pub enum SalonError {
    // Inventory source errors
    #[error("Inventory source unreadable: {message}")]
    Source {
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    // Request validation errors
    #[error("Validation failed: {} error(s)", .0.len())]
    Validation(Vec<ValidationError>),

    #[error("Unknown form type: {0}")]
    UnknownFormType(String),

    #[error("Missing required fields: {}", .fields.join(", "))]
    MissingFields { fields: Vec<&'static str> },

    // Notification errors
    #[error("Mail delivery failed: {message}")]
    Mail {
        message: String,
        status_code: Option<u16>,
    },

    // Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Result type alias for Autosalon operations.
pub type Result<T> = std::result::Result<T, SalonError>;

impl From<std::io::Error> for SalonError {
    fn from(err: std::io::Error) -> Self {
        SalonError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl From<csv::Error> for SalonError {
    fn from(err: csv::Error) -> Self {
        SalonError::Source {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl From<reqwest::Error> for SalonError {
    fn from(err: reqwest::Error) -> Self {
        SalonError::Mail {
            message: err.to_string(),
            status_code: err.status().map(|s| s.as_u16()),
        }
    }
}

impl SalonError {
    /// Create an IO error with path context.
    pub fn io_with_path(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        SalonError::Io {
            message: err.to_string(),
            path: Some(path.into()),
            source: Some(err),
        }
    }

    /// Map to the HTTP status code a handler should answer with.
    ///
    /// - 400: the caller sent something we refuse to act on
    /// - 500: everything else (source, IO, configuration, mail delivery)
    pub fn http_status_code(&self) -> u16 {
        match self {
            SalonError::Validation(_)
            | SalonError::UnknownFormType(_)
            | SalonError::MissingFields { .. } => 400,

            _ => 500,
        }
    }

    /// Whether the error message is safe to return to a client verbatim.
    pub fn is_client_error(&self) -> bool {
        self.http_status_code() < 500
    }
}
