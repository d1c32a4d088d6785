//! CLI-independent configuration types.

use eyre::Context as _;
use hushdrop_core::base::{HashProviderKind, SecretMask};
use hushdrop_hash::{DelegatedHasher, DelegatedHasherConfig, Hasher, LocalHasher};
use hushdrop_tree::BuildOptions;

/// Common configuration for hashing and tree construction.
#[derive(Debug, Clone)]
pub struct CommonConfig {
    /// Provider used for every leaf, node and nullifier hash.
    pub hasher: HashProviderKind,
    /// Connection settings, only used with [`HashProviderKind::Delegated`].
    pub delegated: DelegatedHasherConfig,
    /// Maximum hash computations in flight per tree level.
    pub max_concurrency: usize,
    /// Shape of freshly generated secrets.
    pub secret_mask: SecretMask,
}

impl CommonConfig {
    /// Configuration for `hasher` with default connection, concurrency and mask settings.
    #[must_use]
    pub fn new(hasher: HashProviderKind) -> Self {
        Self {
            hasher,
            delegated: DelegatedHasherConfig::default(),
            max_concurrency: hushdrop_tree::DEFAULT_MAX_CONCURRENCY,
            secret_mask: SecretMask::default(),
        }
    }

    /// Build the configured provider.
    ///
    /// # Errors
    /// Returns an error if the delegated provider is selected and its configuration is invalid.
    pub fn build_hasher(&self) -> eyre::Result<Hasher> {
        match self.hasher {
            HashProviderKind::Local => Ok(LocalHasher::new().into()),
            HashProviderKind::Delegated => {
                let config = self
                    .delegated
                    .clone()
                    .validate()
                    .context("Invalid hash service configuration")?;
                Ok(DelegatedHasher::new(config).into())
            }
        }
    }

    /// Tree construction options.
    #[must_use]
    pub const fn build_options(&self) -> BuildOptions {
        BuildOptions {
            max_concurrency: self.max_concurrency,
        }
    }
}
