use std::time::Duration;

use http::Uri;
use thiserror::Error;

use crate::delegated::{
    BACKOFF_FACTOR, DEFAULT_HASH_ENDPOINT, DEFAULT_REQUEST_TIMEOUT_SECS, INITIAL_RETRY_DELAY_MS,
    MAX_RETRIES, MAX_RETRY_DELAY_MS,
};

/// Errors specific to the hashing service configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid hash service endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
    #[error("Hash service endpoint must use http or https, got '{0}'.")]
    UnsupportedScheme(String),
    #[error("Request timeout must be greater than zero.")]
    RequestTimeoutZero,
    #[error("Initial retry delay must be greater than zero.")]
    InitialRetryDelayZero,
    #[error("Max retry delay must be greater than or equal to initial retry delay.")]
    MaxRetryDelayLessThanInitial,
    #[error("Backoff factor must be at least 2.")]
    BackoffFactorTooLow,
}

/// Configuration for the hashing service connection and retry behavior
#[derive(Debug, Clone)]
pub struct DelegatedHasherConfig {
    /// URL of the hashing endpoint, e.g. `http://127.0.0.1:3000/api/hash/poseidon`
    pub endpoint: String,
    /// Timeout of a single request, connection included
    pub request_timeout: Duration,
    /// Maximum number of retry attempts for transient errors (0 disables retrying)
    pub max_retry_attempts: u32,
    /// Initial retry delay (Should be greater than zero)
    pub initial_retry_delay: Duration,
    /// Maximum retry delay
    pub max_retry_delay: Duration,
    /// Factor for exponential backoff. (Minimum value: 2)
    pub backoff_factor: u32,
}

/// Validated configuration for the hashing service.
/// This is the only configuration in use, `DelegatedHasherConfig` is only used to build this
/// after validation.
#[derive(Debug, Clone)]
pub struct ValidatedDelegatedHasherConfig {
    inner: DelegatedHasherConfig,
    endpoint: Uri,
}

impl std::ops::Deref for ValidatedDelegatedHasherConfig {
    type Target = DelegatedHasherConfig;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl ValidatedDelegatedHasherConfig {
    /// The parsed endpoint.
    #[must_use]
    pub const fn endpoint_uri(&self) -> &Uri {
        &self.endpoint
    }
}

impl Default for DelegatedHasherConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_HASH_ENDPOINT.to_owned(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            max_retry_attempts: MAX_RETRIES,
            initial_retry_delay: Duration::from_millis(INITIAL_RETRY_DELAY_MS),
            max_retry_delay: Duration::from_millis(MAX_RETRY_DELAY_MS),
            backoff_factor: BACKOFF_FACTOR,
        }
    }
}

impl DelegatedHasherConfig {
    /// Default retry and timeout settings for `endpoint`.
    #[must_use]
    pub fn for_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    /// Validates the configuration parameters.
    ///
    /// # Errors
    /// If any configuration parameter is invalid.
    /// Invalid parameters include:
    /// - `endpoint` is not an absolute `http`/`https` URL.
    /// - `request_timeout` is zero.
    /// - `initial_retry_delay` is zero.
    /// - `max_retry_delay` is less than `initial_retry_delay`.
    /// - `backoff_factor` is less than 2.
    pub fn validate(self) -> Result<ValidatedDelegatedHasherConfig, ConfigError> {
        let endpoint: Uri =
            self.endpoint
                .parse()
                .map_err(|e: http::uri::InvalidUri| ConfigError::InvalidEndpoint {
                    endpoint: self.endpoint.clone(),
                    reason: e.to_string(),
                })?;

        match endpoint.scheme_str() {
            Some("http" | "https") => {}
            Some(other) => return Err(ConfigError::UnsupportedScheme(other.to_owned())),
            None => {
                return Err(ConfigError::InvalidEndpoint {
                    endpoint: self.endpoint,
                    reason: "missing scheme".to_owned(),
                });
            }
        }

        if endpoint.host().is_none() {
            return Err(ConfigError::InvalidEndpoint {
                endpoint: self.endpoint,
                reason: "missing host".to_owned(),
            });
        }

        if self.request_timeout == Duration::ZERO {
            return Err(ConfigError::RequestTimeoutZero);
        }

        if self.initial_retry_delay == Duration::ZERO {
            return Err(ConfigError::InitialRetryDelayZero);
        }

        if self.max_retry_delay < self.initial_retry_delay {
            return Err(ConfigError::MaxRetryDelayLessThanInitial);
        }

        if self.backoff_factor < 2 {
            return Err(ConfigError::BackoffFactorTooLow);
        }

        Ok(ValidatedDelegatedHasherConfig {
            inner: self,
            endpoint,
        })
    }
}
