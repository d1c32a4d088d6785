use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_with::hex::Hex;
use serde_with::{DisplayFromStr, serde_as};

use crate::base::{Amount, FieldElement, Nullifier, Secret, WalletId};

/// Everything the external prover needs for one claim.
///
/// `root` and `nullifier` are the public inputs; the rest is private witness data, so the
/// file is sensitive.
#[serde_as]
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
pub struct ClaimInputs {
    /// Campaign root the membership path leads to.
    #[serde_as(as = "DisplayFromStr")]
    #[schemars(with = "String")]
    pub root: FieldElement,
    /// One-time nullifier disclosed at claim time.
    #[serde_as(as = "DisplayFromStr")]
    #[schemars(with = "String")]
    pub nullifier: Nullifier,
    /// Claiming wallet.
    #[serde_as(as = "DisplayFromStr")]
    #[schemars(with = "String")]
    pub wallet: WalletId,
    /// Allocation in smallest units.
    #[serde_as(as = "DisplayFromStr")]
    #[schemars(with = "String")]
    pub amount: Amount,
    /// Blinding secret.
    #[serde_as(as = "Hex")]
    #[schemars(with = "String")]
    pub secret: Secret,
    /// Leaf position.
    pub leaf_index: usize,
    /// Leaf commitment.
    #[serde_as(as = "DisplayFromStr")]
    #[schemars(with = "String")]
    pub leaf: FieldElement,
    /// Sibling path, leaf to root.
    #[serde_as(as = "Vec<DisplayFromStr>")]
    #[schemars(with = "Vec<String>")]
    pub siblings: Vec<FieldElement>,
}
