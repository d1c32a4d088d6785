//! Campaign build: secrets, leaves, tree.

use futures::{StreamExt as _, TryStreamExt as _, stream};
use hushdrop_core::base::{Allocation, FieldElement, Recipient, SecretGenerator};
use hushdrop_hash::HashProvider;
use rand::CryptoRng;
use tracing::{info, instrument};

use crate::commitment::compute_leaf;
use crate::tree::ensure_capacity;
use crate::{BuildOptions, CommitmentTree, TreeError};

/// Result of a campaign build.
///
/// `allocations` holds every secret in leaf order; they must reach their recipients before
/// being discarded, or the allocations become unclaimable.
#[derive(Debug)]
pub struct BuiltCampaign {
    /// The full tree.
    pub tree: CommitmentTree,
    /// One allocation per recipient, `allocations[i].leaf_index == i`.
    pub allocations: Vec<Allocation>,
}

/// Build the commitment tree for an ordered recipient list.
///
/// The capacity is checked before anything else, so an oversized list draws no secrets and
/// computes no hashes. Recipients without a secret get a fresh one from `secrets`; all leaves
/// are then computed concurrently and the tree is built level by level.
///
/// # Errors
/// Returns [`TreeError::CapacityExceeded`] for more than [`crate::CAPACITY`] recipients and
/// [`TreeError::HashService`] if any hash fails. No partial tree is returned.
#[instrument(skip_all, fields(recipients = recipients.len(), hasher = %hasher.kind()))]
pub async fn build_campaign_tree<H, R>(
    recipients: Vec<Recipient>,
    hasher: &H,
    secrets: &mut SecretGenerator<R>,
    options: BuildOptions,
) -> Result<BuiltCampaign, TreeError>
where
    H: HashProvider,
    R: CryptoRng,
{
    ensure_capacity(recipients.len())?;

    let allocations: Vec<Allocation> = recipients
        .into_iter()
        .enumerate()
        .map(|(leaf_index, recipient)| Allocation {
            wallet: recipient.wallet,
            amount: recipient.amount,
            secret: recipient.secret.unwrap_or_else(|| secrets.generate()),
            leaf_index,
        })
        .collect();

    let leaves: Vec<FieldElement> = stream::iter(&allocations)
        .map(|allocation| {
            compute_leaf(
                hasher,
                &allocation.wallet,
                allocation.amount,
                &allocation.secret,
            )
        })
        .buffered(options.concurrency())
        .try_collect()
        .await?;

    let tree = CommitmentTree::from_leaves(leaves, hasher, options).await?;

    info!(
        root = %tree.root(),
        recipients = tree.recipient_count(),
        capacity = tree.capacity(),
        "Commitment tree built"
    );

    Ok(BuiltCampaign { tree, allocations })
}
