use std::future::ready;

use hushdrop_core::base::{FieldElement, HashProviderKind};
use sha2::{Digest as _, Sha256};

use crate::{HashProvider, HashServiceError};

const HASH2_DOMAIN: &[u8] = b"hushdrop/local/hash2:";
const HASH3_DOMAIN: &[u8] = b"hushdrop/local/hash3:";

/// Deterministic in-process placeholder hash.
///
/// SHA-256 over a per-arity domain prefix followed by the 32-byte inputs. Results are stable
/// across processes and platforms but are not field hashes: a tree built with this provider
/// cannot be checked by a circuit. Never fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalHasher;

impl LocalHasher {
    /// Create the local provider.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn digest(domain: &[u8], inputs: &[FieldElement]) -> FieldElement {
        let mut hasher = Sha256::new();
        hasher.update(domain);
        for input in inputs {
            hasher.update(input.as_bytes());
        }
        let digest: [u8; 32] = hasher.finalize().into();
        FieldElement::from_bytes(digest)
    }
}

impl HashProvider for LocalHasher {
    fn kind(&self) -> HashProviderKind {
        HashProviderKind::Local
    }

    fn hash2(
        &self,
        left: FieldElement,
        right: FieldElement,
    ) -> impl Future<Output = Result<FieldElement, HashServiceError>> + Send {
        ready(Ok(Self::digest(HASH2_DOMAIN, &[left, right])))
    }

    fn hash3(
        &self,
        first: FieldElement,
        second: FieldElement,
        third: FieldElement,
    ) -> impl Future<Output = Result<FieldElement, HashServiceError>> + Send {
        ready(Ok(Self::digest(HASH3_DOMAIN, &[first, second, third])))
    }
}
