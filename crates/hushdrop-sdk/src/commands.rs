//! Application command implementations.
//!
//! This module contains the core logic for each CLI subcommand.

mod campaign_build;
mod claim_prepare;
mod claim_verify;
mod sensitive_output;
mod uniqueness;

pub use campaign_build::build_campaign;
pub use claim_prepare::claim_prepare;
pub use claim_verify::verify_claim;

use std::path::Path;

use eyre::{Context as _, ensure};
use hushdrop_core::base::HashProviderKind;
use hushdrop_core::schema::campaign::CampaignConfiguration;
use hushdrop_tree::CommitmentTree;
use serde::de::DeserializeOwned;

/// Generates and prints the JSON schema for the `CampaignConfiguration` struct.
///
/// # Errors
/// Returns an error if serialization to JSON fails.
#[allow(clippy::print_stdout, reason = "Prints schema to stdout")]
pub fn campaign_configuration_schema() -> eyre::Result<()> {
    let schema = schemars::schema_for!(CampaignConfiguration);
    let schema_str = serde_json::to_string_pretty(&schema)?;
    println!("Campaign Configuration JSON Schema:\n{schema_str}");
    Ok(())
}

/// Generates and prints the JSON schema for the recipients input file.
///
/// # Errors
/// Returns an error if serialization to JSON fails.
#[allow(clippy::print_stdout, reason = "Prints schema to stdout")]
pub fn recipients_schema() -> eyre::Result<()> {
    let schema = schemars::schema_for!(hushdrop_core::schema::recipients::RecipientsFile);
    let schema_str = serde_json::to_string_pretty(&schema)?;
    println!("Recipients JSON Schema:\n{schema_str}");
    Ok(())
}

/// Generates and prints the JSON schema for the claim inputs handed to the prover.
///
/// # Errors
/// Returns an error if serialization to JSON fails.
#[allow(clippy::print_stdout, reason = "Prints schema to stdout")]
pub fn claim_inputs_schema() -> eyre::Result<()> {
    let schema = schemars::schema_for!(hushdrop_core::schema::claim::ClaimInputs);
    let schema_str = serde_json::to_string_pretty(&schema)?;
    println!("Claim Inputs JSON Schema:\n{schema_str}");
    Ok(())
}

async fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> eyre::Result<T> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {what} file {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("Failed to parse {what} JSON"))
}

async fn read_tree(path: &Path) -> eyre::Result<CommitmentTree> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read tree file {}", path.display()))?;
    CommitmentTree::from_bytes(&bytes).context("Failed to load commitment tree")
}

fn ensure_same_hasher(
    configured: HashProviderKind,
    campaign: &CampaignConfiguration,
) -> eyre::Result<()> {
    ensure!(
        configured == campaign.hasher,
        "Campaign was built with the {} hasher, but {configured} is configured",
        campaign.hasher
    );
    Ok(())
}
