use hushdrop_core::base::{FieldElement, HashProviderKind};

use crate::HashServiceError;

/// Pure, order-sensitive hashing of two or three field elements.
///
/// Implementations must return the same output for the same inputs for the lifetime of a
/// campaign, and a build must use one provider for every node.
pub trait HashProvider: Send + Sync {
    /// Which provider this is; recorded next to every tree built with it.
    fn kind(&self) -> HashProviderKind;

    /// Hash an ordered pair.
    fn hash2(
        &self,
        left: FieldElement,
        right: FieldElement,
    ) -> impl Future<Output = Result<FieldElement, HashServiceError>> + Send;

    /// Hash an ordered triple.
    fn hash3(
        &self,
        first: FieldElement,
        second: FieldElement,
        third: FieldElement,
    ) -> impl Future<Output = Result<FieldElement, HashServiceError>> + Send;
}
