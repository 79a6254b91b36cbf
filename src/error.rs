//! Error handling for the MBet-Adera client core

use std::fmt;
use thiserror::Error;

use crate::provider::Operation;

/// Unified error type
#[derive(Error, Debug)]
pub enum Error {
    /// Network or HTTP related errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Identity service errors
    #[error("Authentication error: {0}")]
    Auth(#[from] mbet_adera_auth::AuthError),

    /// Non-success response from a REST endpoint
    #[error("Request failed with status {status}: {message}")]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
    },

    /// No profile row for the identity
    #[error("No profile found for user {0}")]
    ProfileNotFound(String),

    /// Another operation of the same class is still running
    #[error("{0} already in progress")]
    Busy(Operation),

    /// The collaborator cannot perform this operation
    #[error("Unsupported operation: {0}")]
    Unsupported(&'static str),

    /// URL parsing errors
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// General errors
    #[error("{0}")]
    General(String),
}

impl Error {
    /// Create a new API error
    pub fn api<T: fmt::Display>(status: u16, code: Option<String>, message: T) -> Self {
        Error::Api {
            status,
            code,
            message: message.to_string(),
        }
    }

    /// Create a new configuration error
    pub fn config<T: fmt::Display>(msg: T) -> Self {
        Error::Config(msg.to_string())
    }

    /// Create a new general error
    pub fn general<T: fmt::Display>(msg: T) -> Self {
        Error::General(msg.to_string())
    }

    /// Text suitable for showing to the user.
    ///
    /// Provider-reported failures come back verbatim, without the variant prefix.
    pub fn message(&self) -> String {
        match self {
            Error::Auth(err) => err.message(),
            Error::Api { message, .. } => message.clone(),
            Error::General(msg) => msg.clone(),
            other => other.to_string(),
        }
    }

    /// HTTP status of the failed request, when there was one
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Auth(mbet_adera_auth::AuthError::ApiError { status, .. }) => Some(*status),
            Error::Http(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }
}
