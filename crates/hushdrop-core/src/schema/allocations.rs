use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::base::{Allocation, FieldElement, WalletId};

/// Every recipient's allocation, including secrets. Sensitive.
#[serde_as]
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
pub struct AllocationsFile {
    /// Root of the tree the allocations belong to.
    #[serde_as(as = "DisplayFromStr")]
    #[schemars(with = "String")]
    pub root: FieldElement,
    /// Allocations in leaf order.
    pub allocations: Vec<Allocation>,
}

impl AllocationsFile {
    /// Find the allocation of `wallet`.
    #[must_use]
    pub fn find(&self, wallet: &WalletId) -> Option<&Allocation> {
        self.allocations
            .iter()
            .find(|allocation| &allocation.wallet == wallet)
    }
}
