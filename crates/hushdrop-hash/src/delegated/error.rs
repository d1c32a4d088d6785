use std::time::Duration;

use crate::delegated::config::ConfigError;

/// Errors that can occur when calling the hashing service
#[derive(Debug, thiserror::Error)]
pub enum HashServiceError {
    /// Connection, DNS or I/O failure
    #[error("Transport: {0}")]
    Transport(String),
    /// The request did not complete in time
    #[error("Hash service request timed out after {timeout_ms} milliseconds")]
    Timeout {
        /// The configured timeout in milliseconds
        timeout_ms: u128,
    },
    /// The service answered with a non-success status
    #[error("Hash service returned HTTP status {0}")]
    Status(u16),
    /// The response body is not `{"hash": "<hex>"}`
    #[error("Malformed hash service response: {0}")]
    MalformedResponse(String),
    /// The blocking worker running the request panicked or was cancelled
    #[error("Task join error: {0}")]
    TaskJoin(String),
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),
}

impl HashServiceError {
    #[allow(
        clippy::wildcard_enum_match_arm,
        reason = "Only status codes and timeouts get their own variant."
    )]
    pub(crate) fn from_transport(error: ureq::Error, timeout: Duration) -> Self {
        match error {
            ureq::Error::StatusCode(code) => Self::Status(code),
            ureq::Error::Timeout(_) => Self::Timeout {
                timeout_ms: timeout.as_millis(),
            },
            ureq::Error::Io(io) if io.kind() == std::io::ErrorKind::TimedOut => Self::Timeout {
                timeout_ms: timeout.as_millis(),
            },
            other => Self::Transport(other.to_string()),
        }
    }

    /// Returns `true` if this error is transient and the request may be retried.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            // 429: rate limited, 5xx: server side trouble
            Self::Status(code) => *code == 429 || matches!(*code, 500..=599),
            Self::Transport(_) | Self::Timeout { .. } => true,
            Self::MalformedResponse(_) | Self::TaskJoin(_) | Self::Configuration(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_is_retriable() {
        assert!(HashServiceError::Transport("connection refused".to_owned()).is_retryable());
        assert!(HashServiceError::Timeout { timeout_ms: 10 }.is_retryable());
        assert!(HashServiceError::Status(429).is_retryable());
        assert!(HashServiceError::Status(500).is_retryable());
        assert!(HashServiceError::Status(503).is_retryable());

        assert!(!HashServiceError::Status(400).is_retryable());
        assert!(!HashServiceError::Status(404).is_retryable());
        assert!(!HashServiceError::MalformedResponse(String::new()).is_retryable());
        assert!(!HashServiceError::TaskJoin(String::new()).is_retryable());
    }

    #[test]
    fn maps_transport_errors() {
        let timeout = Duration::from_millis(1500);
        assert!(matches!(
            HashServiceError::from_transport(ureq::Error::StatusCode(502), timeout),
            HashServiceError::Status(502)
        ));
        assert!(matches!(
            HashServiceError::from_transport(
                ureq::Error::Io(std::io::ErrorKind::TimedOut.into()),
                timeout
            ),
            HashServiceError::Timeout { timeout_ms: 1500 }
        ));
        assert!(matches!(
            HashServiceError::from_transport(ureq::Error::ConnectionFailed, timeout),
            HashServiceError::Transport(_)
        ));
    }
}
