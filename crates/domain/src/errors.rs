//! Error types used throughout the client

use thiserror::Error;

/// Main error type for SauceREST operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SauceRestError {
    /// The endpoint template did not produce a valid URL.
    #[error("Error constructing Sauce URL: {0}")]
    InvalidUrl(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    /// The service answered with anything other than `200 OK`.
    #[error("Unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl SauceRestError {
    /// Stable label for structured logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::InvalidUrl(_) => "invalid_url",
            Self::Network(_) => "network",
            Self::Timeout(_) => "timeout",
            Self::Status { .. } => "status",
            Self::Serialization(_) => "serialization",
            Self::Io(_) => "io",
            Self::Config(_) => "config",
        }
    }
}

/// Result type alias for SauceREST operations
pub type Result<T> = std::result::Result<T, SauceRestError>;
