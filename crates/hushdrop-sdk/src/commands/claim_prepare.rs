//! Claim preparation: everything the external prover needs for one wallet.

use std::path::PathBuf;

use eyre::{Context as _, ContextCompat as _, ensure};
use hushdrop_core::base::WalletId;
use hushdrop_core::schema::allocations::AllocationsFile;
use hushdrop_core::schema::campaign::CampaignConfiguration;
use hushdrop_core::schema::claim::ClaimInputs;
use hushdrop_tree::{compute_leaf, compute_nullifier};
use tracing::{debug, info, instrument};

use super::sensitive_output::write_sensitive_output;
use super::{ensure_same_hasher, read_json, read_tree};
use crate::common::CommonConfig;

/// Prepare the claim inputs of `wallet`.
///
/// The leaf is recomputed from the allocation and must equal the tree's leaf at the allocated
/// index, and the generated proof must verify against the campaign root before anything is
/// written. The output contains the wallet's secret and is written owner-only.
///
/// # Errors
/// Returns an error if an input file is unreadable or belongs to another campaign, the
/// configured hasher differs from the campaign's, the wallet has no allocation, the
/// allocation does not match the tree, or any hash fails.
#[instrument(skip_all, fields(wallet = %wallet))]
pub async fn claim_prepare(
    config: CommonConfig,
    campaign_in: PathBuf,
    tree_in: PathBuf,
    allocations_in: PathBuf,
    wallet: String,
    claim_out: PathBuf,
) -> eyre::Result<()> {
    let wallet = WalletId::parse(&wallet).context("Invalid wallet")?;
    let campaign: CampaignConfiguration =
        read_json(&campaign_in, "campaign configuration").await?;
    ensure_same_hasher(config.hasher, &campaign)?;

    let tree = read_tree(&tree_in).await?;
    ensure!(
        tree.root() == campaign.root && tree.hasher_kind() == campaign.hasher,
        "Tree file {} does not belong to campaign {}",
        tree_in.display(),
        campaign.root
    );

    let allocations: AllocationsFile = read_json(&allocations_in, "allocations").await?;
    ensure!(
        allocations.root == campaign.root,
        "Allocations file belongs to campaign {}, expected {}",
        allocations.root,
        campaign.root
    );
    let allocation = allocations
        .find(&wallet)
        .with_context(|| format!("No allocation for wallet {wallet}"))?;
    debug!(leaf_index = allocation.leaf_index, "Found allocation");

    let hasher = config.build_hasher()?;
    let leaf = compute_leaf(
        &hasher,
        &allocation.wallet,
        allocation.amount,
        &allocation.secret,
    )
    .await?;
    ensure!(
        tree.leaf(allocation.leaf_index) == Some(leaf),
        "Allocation of wallet {wallet} does not match tree leaf {}",
        allocation.leaf_index
    );

    let proof = tree.proof(allocation.leaf_index)?;
    ensure!(
        proof.verify(&hasher, campaign.root).await?,
        "Membership proof does not verify against the campaign root"
    );
    let nullifier = compute_nullifier(&hasher, &allocation.secret, allocation.leaf_index).await?;

    let inputs = ClaimInputs {
        root: campaign.root,
        nullifier,
        wallet: allocation.wallet.clone(),
        amount: allocation.amount,
        secret: allocation.secret.clone(),
        leaf_index: allocation.leaf_index,
        leaf,
        siblings: proof.siblings,
    };
    write_sensitive_output(&claim_out, &serde_json::to_string_pretty(&inputs)?)
        .await
        .context("Failed to write claim inputs")?;
    info!(file = ?claim_out, leaf_index = inputs.leaf_index, %nullifier, "Exported claim inputs");

    Ok(())
}

#[cfg(test)]
mod tests {
    use hushdrop_core::base::HashProviderKind;
    use hushdrop_core::schema::claim::ClaimInputs;

    use crate::commands::fixtures::{built_campaign, local_config};
    use crate::common::CommonConfig;

    #[tokio::test]
    async fn writes_claim_inputs() {
        let dir = tempfile::tempdir().expect("tempdir");
        let files = built_campaign(dir.path()).await;

        files
            .prepare(local_config(), "walletB")
            .await
            .expect("claim should prepare");

        let inputs: ClaimInputs =
            serde_json::from_str(&std::fs::read_to_string(&files.claim).expect("claim file"))
                .expect("claim JSON");
        assert_eq!(inputs.wallet.as_str(), "walletB");
        assert_eq!(inputs.leaf_index, 1);
        assert_eq!(inputs.amount.base_units(), 2_000_000_000);
        assert_eq!(inputs.siblings.len(), 8);
    }

    #[tokio::test]
    async fn unknown_wallet_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let files = built_campaign(dir.path()).await;

        let err = files
            .prepare(local_config(), "walletC")
            .await
            .expect_err("no allocation");
        assert!(err.to_string().contains("No allocation"));
        assert!(!files.claim.exists());
    }

    #[tokio::test]
    async fn hasher_mismatch_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let files = built_campaign(dir.path()).await;

        let err = files
            .prepare(CommonConfig::new(HashProviderKind::Delegated), "walletA")
            .await
            .expect_err("campaign was built locally");
        assert!(err.to_string().contains("local hasher"));
    }

    #[tokio::test]
    async fn tampered_allocation_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let files = built_campaign(dir.path()).await;

        let text = std::fs::read_to_string(&files.allocations).expect("allocations file");
        let tampered = text.replacen("\"2000000000\"", "\"3000000000\"", 1);
        assert_ne!(text, tampered);
        std::fs::write(&files.allocations, tampered).expect("rewrite allocations");

        let err = files
            .prepare(local_config(), "walletB")
            .await
            .expect_err("amount no longer matches the leaf");
        assert!(err.to_string().contains("does not match tree leaf"));
    }
}
