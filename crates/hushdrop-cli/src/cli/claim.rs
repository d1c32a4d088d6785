//! Claim subcommands.

use std::path::PathBuf;

use super::HasherArgs;
use super::constants::{
    DEFAULT_ALLOCATIONS_FILE, DEFAULT_CAMPAIGN_FILE, DEFAULT_CLAIM_FILE, DEFAULT_TREE_FILE,
    HUSHDROP_ALLOCATIONS_FILE, HUSHDROP_CAMPAIGN_FILE, HUSHDROP_CLAIM_IN, HUSHDROP_CLAIM_OUT,
    HUSHDROP_TREE_FILE, HUSHDROP_WALLET,
};

/// Arguments for `claim prepare`.
#[derive(Debug, clap::Args)]
pub struct ClaimPrepareArgs {
    /// Hash provider arguments.
    #[command(flatten)]
    pub hasher: HasherArgs,
    /// Campaign configuration file.
    #[arg(long, env = HUSHDROP_CAMPAIGN_FILE, default_value = DEFAULT_CAMPAIGN_FILE)]
    pub campaign: PathBuf,
    /// Binary commitment tree file.
    #[arg(long, env = HUSHDROP_TREE_FILE, default_value = DEFAULT_TREE_FILE)]
    pub tree: PathBuf,
    /// Allocations file produced by `campaign build`.
    #[arg(long, env = HUSHDROP_ALLOCATIONS_FILE, default_value = DEFAULT_ALLOCATIONS_FILE)]
    pub allocations: PathBuf,
    /// Wallet to prepare the claim for.
    #[arg(long, env = HUSHDROP_WALLET)]
    pub wallet: String,
    /// Claim inputs output file. Contains the wallet's secret.
    #[arg(long, env = HUSHDROP_CLAIM_OUT, default_value = DEFAULT_CLAIM_FILE)]
    pub claim_out: PathBuf,
}

/// Arguments for `claim verify`.
#[derive(Debug, clap::Args)]
pub struct ClaimVerifyArgs {
    /// Hash provider arguments.
    #[command(flatten)]
    pub hasher: HasherArgs,
    /// Campaign configuration file.
    #[arg(long, env = HUSHDROP_CAMPAIGN_FILE, default_value = DEFAULT_CAMPAIGN_FILE)]
    pub campaign: PathBuf,
    /// Claim inputs file produced by `claim prepare`.
    #[arg(long, env = HUSHDROP_CLAIM_IN, default_value = DEFAULT_CLAIM_FILE)]
    pub claim_in: PathBuf,
}

/// Claim command group.
#[derive(Debug, clap::Subcommand)]
pub enum ClaimCommands {
    /// Prepare the proof inputs for one wallet.
    Prepare {
        #[command(flatten)]
        args: ClaimPrepareArgs,
    },
    /// Check prepared claim inputs against a campaign.
    Verify {
        #[command(flatten)]
        args: ClaimVerifyArgs,
    },
}
