use std::path::PathBuf;

use eyre::Context as _;
use hushdrop_core::base::{HashProviderKind, SecretGenerator};
use hushdrop_core::schema::allocations::AllocationsFile;
use hushdrop_core::schema::campaign::CampaignConfiguration;
use hushdrop_core::schema::recipients::RecipientsFile;
use hushdrop_tree::{BuiltCampaign, build_campaign_tree};
use rand::SeedableRng as _;
use rand::rngs::StdRng;
use tracing::{info, instrument, warn};

use super::read_json;
use super::sensitive_output::write_sensitive_output;
use super::uniqueness::ensure_unique_recipients;
use crate::common::CommonConfig;

/// Build a campaign from a recipients file.
///
/// Recipients without a secret get a fresh one drawn from the OS RNG and shaped by
/// `config.secret_mask`. Writes the campaign configuration (public), the binary tree and the
/// allocations file holding every secret (owner-only).
///
/// # Errors
/// Returns an error if the recipients file is unreadable or malformed, lists duplicate wallets
/// or secrets, exceeds the tree capacity, if any hash fails, or if writing an output fails.
#[instrument(skip_all, fields(hasher = %config.hasher, mask = ?config.secret_mask))]
pub async fn build_campaign(
    config: CommonConfig,
    recipients_in: PathBuf,
    campaign_out: PathBuf,
    tree_out: PathBuf,
    allocations_out: PathBuf,
) -> eyre::Result<()> {
    let recipients_file: RecipientsFile = read_json(&recipients_in, "recipients").await?;
    let recipients = recipients_file
        .to_recipients()
        .context("Invalid recipients file")?;
    ensure_unique_recipients(&recipients)?;
    info!(count = recipients.len(), file = ?recipients_in, "Loaded recipients");

    if config.hasher == HashProviderKind::Local {
        warn!("Local hasher selected; the root will not match a circuit-side hash");
    }

    let hasher = config.build_hasher()?;
    let mut secrets = SecretGenerator::new(StdRng::from_os_rng(), config.secret_mask);
    let BuiltCampaign { tree, allocations } =
        build_campaign_tree(recipients, &hasher, &mut secrets, config.build_options())
            .await
            .context("Failed to build commitment tree")?;

    // Secrets go to disk before anything that publishes the root
    let allocations = AllocationsFile {
        root: tree.root(),
        allocations,
    };
    write_sensitive_output(
        &allocations_out,
        &serde_json::to_string_pretty(&allocations)?,
    )
    .await
    .context("Failed to write allocations")?;
    info!(file = ?allocations_out, count = allocations.allocations.len(), "Exported allocations");

    tokio::fs::write(&tree_out, tree.to_bytes()).await?;
    info!(file = ?tree_out, "Saved commitment tree");

    let campaign = CampaignConfiguration {
        root: tree.root(),
        depth: tree.depth(),
        capacity: tree.capacity(),
        recipient_count: tree.recipient_count(),
        hasher: tree.hasher_kind(),
        secret_mask: config.secret_mask,
    };
    tokio::fs::write(&campaign_out, serde_json::to_string_pretty(&campaign)?).await?;
    info!(file = ?campaign_out, root = %campaign.root, "Exported campaign configuration");

    Ok(())
}
