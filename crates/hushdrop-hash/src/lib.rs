//! Field hashing for hushdrop commitment trees.
//!
//! [`HashProvider`] is the single capability the tree code depends on. Two providers exist:
//! [`LocalHasher`], a fast deterministic placeholder for development, and [`DelegatedHasher`],
//! which forwards inputs to the external field-arithmetic service whose results a circuit or
//! on-chain verifier can reproduce. [`Hasher`] selects one of them from configuration.

mod delegated;
mod hasher;
mod local;
mod provider;

pub use delegated::{
    BACKOFF_FACTOR, ConfigError, DEFAULT_HASH_ENDPOINT, DEFAULT_REQUEST_TIMEOUT_SECS,
    DelegatedHasher, DelegatedHasherConfig, HashServiceError, INITIAL_RETRY_DELAY_MS,
    MAX_RETRIES, MAX_RETRY_DELAY_MS, ValidatedDelegatedHasherConfig,
};
pub use hasher::Hasher;
pub use local::LocalHasher;
pub use provider::HashProvider;
