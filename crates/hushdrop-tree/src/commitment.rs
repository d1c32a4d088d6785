//! Leaf commitments and nullifiers.

use hushdrop_core::base::{Amount, FieldElement, Nullifier, Secret, WalletId};
use hushdrop_hash::HashProvider;

use crate::TreeError;
use crate::tree::ensure_leaf_index;

/// `hash3(wallet, amount, secret)`, in that order.
///
/// # Errors
/// Returns [`TreeError::HashService`] if the provider fails.
pub async fn compute_leaf<H: HashProvider>(
    hasher: &H,
    wallet: &WalletId,
    amount: Amount,
    secret: &Secret,
) -> Result<FieldElement, TreeError> {
    Ok(hasher
        .hash3(
            wallet.to_field_element(),
            amount.to_field_element(),
            secret.to_field_element(),
        )
        .await?)
}

/// `hash2(secret, leaf_index)`.
///
/// Only the secret and the recipient's own index are needed, so the nullifier reveals
/// nothing linking it to the leaf without the secret.
///
/// # Errors
/// Returns [`TreeError::InvalidProofIndex`] for an index outside the tree and
/// [`TreeError::HashService`] if the provider fails.
pub async fn compute_nullifier<H: HashProvider>(
    hasher: &H,
    secret: &Secret,
    leaf_index: usize,
) -> Result<Nullifier, TreeError> {
    let index = ensure_leaf_index(leaf_index)?;
    let value = hasher
        .hash2(secret.to_field_element(), FieldElement::from_u64(index))
        .await?;
    Ok(Nullifier::new(value))
}
