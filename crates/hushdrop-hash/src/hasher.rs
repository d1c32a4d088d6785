use hushdrop_core::base::{FieldElement, HashProviderKind};

use crate::{
    DelegatedHasher, HashProvider, HashServiceError, LocalHasher, ValidatedDelegatedHasherConfig,
};

/// The provider chosen by configuration.
///
/// Built once per run and shared by reference with every hashing task, so a tree never mixes
/// providers.
#[derive(Debug, Clone)]
pub enum Hasher {
    /// In-process placeholder hash
    Local(LocalHasher),
    /// Remote field-arithmetic service
    Delegated(DelegatedHasher),
}

impl Hasher {
    /// Build the provider of `kind`. `delegated` is only used for [`HashProviderKind::Delegated`].
    #[must_use]
    pub fn from_kind(kind: HashProviderKind, delegated: ValidatedDelegatedHasherConfig) -> Self {
        match kind {
            HashProviderKind::Local => Self::Local(LocalHasher::new()),
            HashProviderKind::Delegated => Self::Delegated(DelegatedHasher::new(delegated)),
        }
    }
}

impl From<LocalHasher> for Hasher {
    fn from(hasher: LocalHasher) -> Self {
        Self::Local(hasher)
    }
}

impl From<DelegatedHasher> for Hasher {
    fn from(hasher: DelegatedHasher) -> Self {
        Self::Delegated(hasher)
    }
}

impl HashProvider for Hasher {
    fn kind(&self) -> HashProviderKind {
        match self {
            Self::Local(hasher) => hasher.kind(),
            Self::Delegated(hasher) => hasher.kind(),
        }
    }

    fn hash2(
        &self,
        left: FieldElement,
        right: FieldElement,
    ) -> impl Future<Output = Result<FieldElement, HashServiceError>> + Send {
        async move {
            match self {
                Self::Local(hasher) => hasher.hash2(left, right).await,
                Self::Delegated(hasher) => hasher.hash2(left, right).await,
            }
        }
    }

    fn hash3(
        &self,
        first: FieldElement,
        second: FieldElement,
        third: FieldElement,
    ) -> impl Future<Output = Result<FieldElement, HashServiceError>> + Send {
        async move {
            match self {
                Self::Local(hasher) => hasher.hash3(first, second, third).await,
                Self::Delegated(hasher) => hasher.hash3(first, second, third).await,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DelegatedHasherConfig;

    fn delegated_config() -> ValidatedDelegatedHasherConfig {
        DelegatedHasherConfig::default()
            .validate()
            .expect("defaults are valid")
    }

    #[test]
    fn selects_provider_by_kind() {
        let local = Hasher::from_kind(HashProviderKind::Local, delegated_config());
        assert_eq!(local.kind(), HashProviderKind::Local);
        assert!(matches!(local, Hasher::Local(_)));

        let delegated = Hasher::from_kind(HashProviderKind::Delegated, delegated_config());
        assert_eq!(delegated.kind(), HashProviderKind::Delegated);
    }

    #[tokio::test]
    async fn local_dispatch_matches_direct_call() {
        let hasher = Hasher::from(LocalHasher::new());
        let a = FieldElement::from_u64(7);
        let b = FieldElement::from_u64(9);
        assert_eq!(
            hasher.hash2(a, b).await.expect("local hash never fails"),
            LocalHasher::new().hash2(a, b).await.expect("local hash never fails")
        );
    }
}
