//! Error types for pagechain
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Every error is fatal to the fetch chain that raised it: nothing is retried
//! and no partial page list is ever returned alongside an error.

use thiserror::Error;

/// The main error type for pagechain
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Fetch Chain Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP request error. Response code: {status}")]
    HttpStatus { status: u16 },

    #[error("Content-Type is not recognized as a text type, got {header:?}")]
    UnrecognizedContentType { header: String },

    #[error("Malformed response body: {message}")]
    MalformedBody { message: String },

    #[error("Invalid Link header {header:?}: {message}")]
    LinkHeaderParse { header: String, message: String },

    #[error("Page limit ({limit}) exceeded")]
    PageLimitExceeded { limit: usize },

    #[error("Fetch timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid header '{name}': {message}")]
    InvalidHeader { name: String, message: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

/// Coarse classification of an [`Error`], stable for callers to match on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    HttpStatus,
    UnrecognizedContentType,
    MalformedBody,
    LinkHeaderParse,
    PageLimit,
    Timeout,
    Config,
    Io,
    Other,
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16) -> Self {
        Self::HttpStatus { status }
    }

    /// Create an unrecognized content type error
    pub fn content_type(header: impl Into<String>) -> Self {
        Self::UnrecognizedContentType {
            header: header.into(),
        }
    }

    /// Create a malformed body error
    pub fn malformed_body(message: impl Into<String>) -> Self {
        Self::MalformedBody {
            message: message.into(),
        }
    }

    /// Create a link header parse error
    pub fn link_header(header: impl Into<String>, message: impl Into<String>) -> Self {
        Self::LinkHeaderParse {
            header: header.into(),
            message: message.into(),
        }
    }

    /// Create an invalid header error
    pub fn invalid_header(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidHeader {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Transport(_) => ErrorKind::Transport,
            Error::HttpStatus { .. } => ErrorKind::HttpStatus,
            Error::UnrecognizedContentType { .. } => ErrorKind::UnrecognizedContentType,
            Error::MalformedBody { .. } => ErrorKind::MalformedBody,
            Error::LinkHeaderParse { .. } => ErrorKind::LinkHeaderParse,
            Error::PageLimitExceeded { .. } => ErrorKind::PageLimit,
            Error::Timeout { .. } => ErrorKind::Timeout,
            Error::InvalidUrl(_)
            | Error::InvalidHeader { .. }
            | Error::Config { .. }
            | Error::MissingConfigField { .. }
            | Error::YamlParse(_)
            | Error::JsonParse(_) => ErrorKind::Config,
            Error::Io(_) => ErrorKind::Io,
            Error::Other(_) => ErrorKind::Other,
        }
    }
}

/// Result type alias for pagechain
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::missing_field("base_url");
        assert_eq!(err.to_string(), "Missing required config field: base_url");

        let err = Error::http_status(404);
        assert_eq!(err.to_string(), "HTTP request error. Response code: 404");

        let err = Error::content_type("image/png");
        assert_eq!(
            err.to_string(),
            "Content-Type is not recognized as a text type, got \"image/png\""
        );
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(Error::http_status(500).kind(), ErrorKind::HttpStatus);
        assert_eq!(Error::content_type("").kind(), ErrorKind::UnrecognizedContentType);
        assert_eq!(Error::malformed_body("eof").kind(), ErrorKind::MalformedBody);
        assert_eq!(Error::link_header("<", "x").kind(), ErrorKind::LinkHeaderParse);
        assert_eq!(Error::missing_field("token").kind(), ErrorKind::Config);
        assert_eq!(Error::PageLimitExceeded { limit: 3 }.kind(), ErrorKind::PageLimit);
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }
}
