//! Error types for Pasteburn client operations.
//!
//! Every failure in this crate is recoverable at the session level: the
//! session turns it into a transient alert and the caller may try again.

use std::fmt;

use thiserror::Error;

/// Error codes for front-ends that want a stable numeric identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum PasteErrorCode {
    /// Input rejected before any request was made
    Validation = 1000,
    /// Transport/network layer error
    Transport = 2000,
    /// Connection failed
    ConnectionFailed = 2001,
    /// Connection timeout
    ConnectionTimeout = 2002,
    /// Paste not found or already burned
    NotFound = 4000,
    /// Service rejected the request shape
    InvalidRequest = 4001,
    /// Unexpected HTTP status
    Status = 4002,
    /// Malformed response
    Serialization = 5000,
    /// Rate limited
    RateLimited = 8000,
    /// Service-side failure
    Server = 9000,
    /// Internal/unexpected error
    Internal = 9999,
}

/// Local input validation failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The access key does not have the required number of characters.
    #[error("access key must be {expected} characters long, got {actual}")]
    KeyLength {
        /// Required length
        expected: usize,
        /// Supplied length
        actual: usize,
    },

    /// The document id is not a hyphenated UUID v4.
    #[error("document id {0:?} is not a valid UUID v4")]
    MalformedId(String),
}

/// Comprehensive error type for Pasteburn operations.
#[derive(Debug)]
pub enum PasteError {
    /// Input failed local validation; no request was sent.
    Validation(ValidationError),

    /// Transport/network layer error.
    Transport(String),

    /// Connection failed.
    ConnectionFailed {
        /// Target service URL
        target: String,
        /// Underlying error message
        reason: String,
    },

    /// Connection timeout.
    ConnectionTimeout {
        /// Operation that timed out
        operation: String,
        /// Timeout duration in milliseconds
        timeout_ms: u64,
    },

    /// Paste does not exist or has already been read once.
    NotFound {
        /// Requested document id
        id: String,
    },

    /// The service rejected the request (bad method or malformed input).
    InvalidRequest(String),

    /// The service answered with an unexpected status code.
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, possibly empty
        body: String,
    },

    /// Response could not be decoded.
    Serialization(String),

    /// Rate limited, should retry after delay.
    RateLimited {
        /// Suggested retry delay in milliseconds
        retry_after_ms: u64,
    },

    /// The service failed while handling the request.
    Server {
        /// HTTP status code
        status: u16,
        /// Response body, possibly empty
        body: String,
    },

    /// Internal/unexpected error.
    Internal(String),
}

impl PasteError {
    /// Get the numeric error code.
    pub fn code(&self) -> PasteErrorCode {
        match self {
            Self::Validation(_) => PasteErrorCode::Validation,
            Self::Transport(_) => PasteErrorCode::Transport,
            Self::ConnectionFailed { .. } => PasteErrorCode::ConnectionFailed,
            Self::ConnectionTimeout { .. } => PasteErrorCode::ConnectionTimeout,
            Self::NotFound { .. } => PasteErrorCode::NotFound,
            Self::InvalidRequest(_) => PasteErrorCode::InvalidRequest,
            Self::Status { .. } => PasteErrorCode::Status,
            Self::Serialization(_) => PasteErrorCode::Serialization,
            Self::RateLimited { .. } => PasteErrorCode::RateLimited,
            Self::Server { .. } => PasteErrorCode::Server,
            Self::Internal(_) => PasteErrorCode::Internal,
        }
    }

    /// Returns true if repeating the same action may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Transport(_)
                | Self::ConnectionFailed { .. }
                | Self::ConnectionTimeout { .. }
                | Self::RateLimited { .. }
                | Self::Server { .. }
        )
    }

    /// Returns true if the error was raised before any request was sent.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Short, user-facing text suitable for an alert banner.
    pub fn alert_message(&self) -> String {
        match self {
            Self::Validation(ValidationError::KeyLength { .. }) => "Invalid key".to_string(),
            Self::Validation(ValidationError::MalformedId(_)) => {
                "Invalid document id".to_string()
            }
            Self::NotFound { .. } => "Paste not found or already burned".to_string(),
            Self::ConnectionFailed { .. } | Self::ConnectionTimeout { .. } => {
                "Could not reach the paste service".to_string()
            }
            Self::RateLimited { .. } => "Too many requests, try again shortly".to_string(),
            Self::Serialization(_) => "The paste service sent an unreadable response".to_string(),
            _ => "Request failed, please try again".to_string(),
        }
    }

    /// Create a not found error.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }
}

impl fmt::Display for PasteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "validation failed: {}", err),
            Self::Transport(msg) => write!(f, "transport error: {}", msg),
            Self::ConnectionFailed { target, reason } => {
                write!(f, "connection to {} failed: {}", target, reason)
            }
            Self::ConnectionTimeout {
                operation,
                timeout_ms,
            } => {
                write!(f, "{} timed out after {}ms", operation, timeout_ms)
            }
            Self::NotFound { id } => write!(f, "paste {} not found or already burned", id),
            Self::InvalidRequest(msg) => write!(f, "request rejected: {}", msg),
            Self::Status { status, body } => {
                write!(f, "unexpected status {}: {}", status, body)
            }
            Self::Serialization(msg) => write!(f, "serialization error: {}", msg),
            Self::RateLimited { retry_after_ms } => {
                write!(f, "rate limited, retry after {}ms", retry_after_ms)
            }
            Self::Server { status, body } => write!(f, "server error ({}): {}", status, body),
            Self::Internal(msg) => write!(f, "internal error: {}", msg),
        }
    }
}

impl std::error::Error for PasteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for PasteError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl From<serde_json::Error> for PasteError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = PasteError::RateLimited {
            retry_after_ms: 1000,
        };
        assert_eq!(err.code(), PasteErrorCode::RateLimited);
        assert!(err.is_retryable());

        let err = PasteError::from(ValidationError::MalformedId("nope".into()));
        assert_eq!(err.code(), PasteErrorCode::Validation);
        assert!(err.is_validation());
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_error_display() {
        let err = PasteError::from(ValidationError::KeyLength {
            expected: 32,
            actual: 5,
        });
        assert!(err.to_string().contains("32 characters"));
        assert!(err.to_string().contains("got 5"));

        let err = PasteError::not_found("3fa85f64-5717-4562-b3fc-2c963f66afa6");
        assert!(err.to_string().contains("already burned"));
    }

    #[test]
    fn test_alert_messages() {
        let err = PasteError::from(ValidationError::KeyLength {
            expected: 32,
            actual: 5,
        });
        assert_eq!(err.alert_message(), "Invalid key");

        let err = PasteError::Status {
            status: 418,
            body: String::new(),
        };
        assert!(!err.alert_message().is_empty());
    }

    #[test]
    fn test_transport_error_is_retryable() {
        let err = PasteError::Transport("paste view failed: body write aborted".to_string());
        assert_eq!(err.code(), PasteErrorCode::Transport);
        assert!(err.is_retryable());
        assert_eq!(err.alert_message(), "Request failed, please try again");
    }
}
