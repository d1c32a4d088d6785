use std::path::PathBuf;

use eyre::ensure;
use hushdrop_core::schema::campaign::CampaignConfiguration;
use hushdrop_core::schema::claim::ClaimInputs;
use hushdrop_tree::{compute_leaf, compute_nullifier, verify_proof};
use tracing::{info, instrument};

use super::{ensure_same_hasher, read_json};
use crate::common::CommonConfig;

/// Verify prepared claim inputs against a campaign.
///
/// Recomputes the leaf and the nullifier from the claimed wallet, amount, secret and index,
/// and checks the sibling path against the campaign root. Any mismatch is an error.
///
/// # Errors
/// Returns an error if an input file is unreadable, the configured hasher differs from the
/// campaign's, the claim is malformed or does not verify, or any hash fails.
#[instrument(skip_all, fields(claim = ?claim_in))]
pub async fn verify_claim(
    config: CommonConfig,
    campaign_in: PathBuf,
    claim_in: PathBuf,
) -> eyre::Result<()> {
    let campaign: CampaignConfiguration =
        read_json(&campaign_in, "campaign configuration").await?;
    ensure_same_hasher(config.hasher, &campaign)?;
    let claim: ClaimInputs = read_json(&claim_in, "claim inputs").await?;

    ensure!(
        claim.root == campaign.root,
        "Claim targets root {}, campaign root is {}",
        claim.root,
        campaign.root
    );

    let hasher = config.build_hasher()?;
    let leaf = compute_leaf(&hasher, &claim.wallet, claim.amount, &claim.secret).await?;
    ensure!(
        leaf == claim.leaf,
        "Claimed leaf does not match wallet, amount and secret"
    );

    let nullifier = compute_nullifier(&hasher, &claim.secret, claim.leaf_index).await?;
    ensure!(
        nullifier == claim.nullifier,
        "Claimed nullifier does not match secret and leaf index"
    );

    let verified = verify_proof(
        &hasher,
        campaign.root,
        leaf,
        claim.leaf_index,
        &claim.siblings,
    )
    .await?;
    ensure!(verified, "Membership proof does not verify against the campaign root");

    info!(wallet = %claim.wallet, %nullifier, "Claim verified");
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(
        clippy::indexing_slicing,
        clippy::arithmetic_side_effects,
        reason = "Test code should panic on invalid data"
    )]

    use hushdrop_core::base::FieldElement;

    use super::*;
    use crate::commands::fixtures::{CampaignFiles, built_campaign, local_config};

    async fn prepared(dir: &std::path::Path) -> CampaignFiles {
        let files = built_campaign(dir).await;
        files
            .prepare(local_config(), "walletA")
            .await
            .expect("claim should prepare");
        files
    }

    fn rewrite_claim(files: &CampaignFiles, edit: impl FnOnce(&mut ClaimInputs)) {
        let mut claim: ClaimInputs =
            serde_json::from_str(&std::fs::read_to_string(&files.claim).expect("claim file"))
                .expect("claim JSON");
        edit(&mut claim);
        std::fs::write(
            &files.claim,
            serde_json::to_string(&claim).expect("serialize claim"),
        )
        .expect("rewrite claim");
    }

    #[tokio::test]
    async fn prepared_claim_verifies() {
        let dir = tempfile::tempdir().expect("tempdir");
        let files = prepared(dir.path()).await;
        files
            .verify(local_config())
            .await
            .expect("claim should verify");
    }

    #[tokio::test]
    async fn tampered_sibling_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let files = prepared(dir.path()).await;
        rewrite_claim(&files, |claim| {
            let mut bytes = claim.siblings[3].to_bytes();
            bytes[31] ^= 1;
            claim.siblings[3] = FieldElement::from_bytes(bytes);
        });

        let err = files
            .verify(local_config())
            .await
            .expect_err("sibling was altered");
        assert!(err.to_string().contains("Membership proof"));
    }

    #[tokio::test]
    async fn moved_index_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let files = prepared(dir.path()).await;
        rewrite_claim(&files, |claim| claim.leaf_index = 1);

        // Nullifier binds the index, so it is the first check to fail
        let err = files
            .verify(local_config())
            .await
            .expect_err("index was altered");
        assert!(err.to_string().contains("nullifier"));
    }

    #[tokio::test]
    async fn out_of_range_index_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let files = prepared(dir.path()).await;
        rewrite_claim(&files, |claim| claim.leaf_index = 256);

        assert!(files.verify(local_config()).await.is_err());
    }

    #[tokio::test]
    async fn truncated_path_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let files = prepared(dir.path()).await;
        rewrite_claim(&files, |claim| {
            claim.siblings.pop();
        });

        let err = files
            .verify(local_config())
            .await
            .expect_err("seven siblings");
        assert!(format!("{err:?}").contains("Expected 8 siblings"));
    }
}
