//! Hashing delegated to the external field-arithmetic service over HTTP.

mod config;
mod error;
mod retry;
mod wire;

use std::fmt;

pub use config::{ConfigError, DelegatedHasherConfig, ValidatedDelegatedHasherConfig};
pub use error::HashServiceError;
use hushdrop_core::base::{FieldElement, HashProviderKind};
use tracing::{debug, instrument};
use ureq::Agent;

use crate::HashProvider;
use crate::delegated::retry::retry_with_backoff;
use crate::delegated::wire::{HashRequest, decode_response};

/// Default endpoint of the hashing service
pub const DEFAULT_HASH_ENDPOINT: &str = "http://127.0.0.1:3000/api/hash/poseidon";
/// Default per-request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
/// Default number of retry attempts. A failed hash aborts the build unless retries are enabled.
pub const MAX_RETRIES: u32 = 0;
/// Initial retry delay in milliseconds
pub const INITIAL_RETRY_DELAY_MS: u64 = 200;
/// Maximum retry delay in milliseconds
pub const MAX_RETRY_DELAY_MS: u64 = 5000;
/// Factor for exponential backoff
pub const BACKOFF_FACTOR: u32 = 2;

/// Client of the remote hashing service.
///
/// Each call is a blocking `ureq` request run on tokio's blocking pool, so a level of the tree
/// can keep many requests in flight at once. Cloning shares the connection pool.
#[derive(Clone)]
pub struct DelegatedHasher {
    agent: Agent,
    config: ValidatedDelegatedHasherConfig,
}

impl fmt::Debug for DelegatedHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DelegatedHasher")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl DelegatedHasher {
    /// Create a client for the configured endpoint.
    #[must_use]
    pub fn new(config: ValidatedDelegatedHasherConfig) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(config.request_timeout))
            .http_status_as_error(true)
            .build()
            .into();
        Self { agent, config }
    }

    /// The configuration this client was built with.
    #[must_use]
    pub const fn config(&self) -> &ValidatedDelegatedHasherConfig {
        &self.config
    }

    #[instrument(skip_all, fields(arity = inputs.len()))]
    async fn hash(&self, inputs: Vec<FieldElement>) -> Result<FieldElement, HashServiceError> {
        let request = HashRequest::new(&inputs);
        let result = retry_with_backoff(&self.config, || self.send(request.clone())).await?;
        debug!(hash = %result, "Hash service responded");
        Ok(result)
    }

    async fn send(&self, request: HashRequest) -> Result<FieldElement, HashServiceError> {
        let agent = self.agent.clone();
        let endpoint = self.config.endpoint_uri().to_string();
        let timeout = self.config.request_timeout;

        tokio::task::spawn_blocking(move || {
            let mut response = agent
                .post(&endpoint)
                .send_json(&request)
                .map_err(|e| HashServiceError::from_transport(e, timeout))?;
            let body = response
                .body_mut()
                .read_to_string()
                .map_err(|e| HashServiceError::from_transport(e, timeout))?;
            decode_response(&body)
        })
        .await
        .map_err(|e| HashServiceError::TaskJoin(e.to_string()))?
    }
}

impl HashProvider for DelegatedHasher {
    fn kind(&self) -> HashProviderKind {
        HashProviderKind::Delegated
    }

    fn hash2(
        &self,
        left: FieldElement,
        right: FieldElement,
    ) -> impl Future<Output = Result<FieldElement, HashServiceError>> + Send {
        self.hash(vec![left, right])
    }

    fn hash3(
        &self,
        first: FieldElement,
        second: FieldElement,
        third: FieldElement,
    ) -> impl Future<Output = Result<FieldElement, HashServiceError>> + Send {
        self.hash(vec![first, second, third])
    }
}
