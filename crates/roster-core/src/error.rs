//! Application error types with rich context

use thiserror::Error;

use crate::validate::FieldError;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    // ─────────────────────────────────────────────────────────────
    // Remote API Errors
    //
    // The four remote failure classes stay distinct so callers can
    // log and message them separately, even though the UI collapses
    // them into one error line.
    // ─────────────────────────────────────────────────────────────
    /// Network-level failure: DNS, connect, timeout, TLS.
    #[error("Network error: {message}")]
    Network { message: String },

    /// The server answered with a non-2xx status.
    #[error("HTTP error! status: {status}")]
    HttpStatus { status: u16 },

    /// A 2xx response with a blank body.
    #[error("Empty response from server")]
    EmptyResponse,

    /// A 2xx response whose body is not valid JSON. `context` names the
    /// request for the log; the display string stays user-facing.
    #[error("Invalid JSON response from server")]
    MalformedResponse {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// A well-formed envelope with `success: false`; carries the server's
    /// message (or the operation's fallback text).
    #[error("{message}")]
    Application { message: String },

    // ─────────────────────────────────────────────────────────────
    // Validation Errors
    // ─────────────────────────────────────────────────────────────
    /// Client-side schema violations. Never sent to the server; blocks
    /// submission locally.
    #[error("Validation failed for {} field(s)", errors.len())]
    Validation { errors: Vec<FieldError> },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn http_status(status: u16) -> Self {
        Self::HttpStatus { status }
    }

    pub fn malformed(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::MalformedResponse {
            context: context.into(),
            source,
        }
    }

    pub fn application(message: impl Into<String>) -> Self {
        Self::Application {
            message: message.into(),
        }
    }

    pub fn validation(errors: Vec<FieldError>) -> Self {
        Self::Validation { errors }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// True for any of the remote-call failure classes.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Error::Network { .. }
                | Error::HttpStatus { .. }
                | Error::EmptyResponse
                | Error::MalformedResponse { .. }
                | Error::Application { .. }
        )
    }

    /// Check if this is a recoverable error. Every remote failure leaves
    /// the UI in a retryable state.
    pub fn is_recoverable(&self) -> bool {
        self.is_remote() || matches!(self, Error::Validation { .. })
    }

    /// Check if this error should trigger application exit
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::TerminalInit(_) | Error::Config { .. })
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_display_messages() {
        assert_eq!(
            Error::http_status(502).to_string(),
            "HTTP error! status: 502"
        );
        assert_eq!(
            Error::network("connection refused").to_string(),
            "Network error: connection refused"
        );
        assert_eq!(
            Error::EmptyResponse.to_string(),
            "Empty response from server"
        );
        assert_eq!(
            Error::application("db down").to_string(),
            "db down"
        );

        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = Error::malformed("GET /influencers", source);
        assert_eq!(err.to_string(), "Invalid JSON response from server");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_remote_classification() {
        assert!(Error::network("timeout").is_remote());
        assert!(Error::http_status(500).is_remote());
        assert!(Error::EmptyResponse.is_remote());
        assert!(Error::application("nope").is_remote());
        assert!(!Error::config("bad key").is_remote());
    }

    #[test]
    fn test_error_is_recoverable() {
        assert!(Error::http_status(500).is_recoverable());
        assert!(Error::application("nope").is_recoverable());
        assert!(Error::validation(Vec::new()).is_recoverable());
        assert!(!Error::TerminalInit("no tty".to_string()).is_recoverable());
    }

    #[test]
    fn test_error_is_fatal() {
        assert!(Error::TerminalInit("no tty".to_string()).is_fatal());
        assert!(Error::config("unreadable").is_fatal());
        assert!(!Error::EmptyResponse.is_fatal());
    }

    #[test]
    fn test_validation_error_counts_fields() {
        let errors = vec![
            FieldError::new("name", "Name is required!"),
            FieldError::new("city", "City is required!"),
        ];
        let err = Error::validation(errors);
        assert_eq!(err.to_string(), "Validation failed for 2 field(s)");
    }
}
