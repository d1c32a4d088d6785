use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_with::hex::Hex;
use serde_with::{DisplayFromStr, serde_as};

use super::amount::Amount;
use super::secret::Secret;
use super::wallet::WalletId;

/// One entry of the campaign's ordered recipient list.
///
/// The position in the list becomes the leaf index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient {
    /// Wallet receiving the allocation.
    pub wallet: WalletId,
    /// Allocation in smallest units.
    pub amount: Amount,
    /// Pre-assigned secret; one is generated during the build when absent.
    pub secret: Option<Secret>,
}

impl Recipient {
    /// A recipient whose secret will be generated during the build.
    #[must_use]
    pub const fn new(wallet: WalletId, amount: Amount) -> Self {
        Self {
            wallet,
            amount,
            secret: None,
        }
    }

    /// A recipient with a pre-assigned secret.
    #[must_use]
    pub const fn with_secret(wallet: WalletId, amount: Amount, secret: Secret) -> Self {
        Self {
            wallet,
            amount,
            secret: Some(secret),
        }
    }
}

/// A recipient after the build: everything they need to claim.
///
/// Allocations must reach their recipients out-of-band; losing the secret makes the
/// allocation unclaimable.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct Allocation {
    /// Wallet receiving the allocation.
    #[serde_as(as = "DisplayFromStr")]
    #[schemars(with = "String")]
    pub wallet: WalletId,
    /// Allocation in smallest units.
    #[serde_as(as = "DisplayFromStr")]
    #[schemars(with = "String")]
    pub amount: Amount,
    /// Blinding secret committed in the leaf.
    #[serde_as(as = "Hex")]
    #[schemars(with = "String")]
    pub secret: Secret,
    /// Position of the leaf in the tree.
    pub leaf_index: usize,
}
