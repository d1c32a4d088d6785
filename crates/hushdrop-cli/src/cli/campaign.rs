//! Campaign subcommands.

use std::path::PathBuf;

use hushdrop_core::base::SecretMask;

use super::constants::{
    DEFAULT_ALLOCATIONS_FILE, DEFAULT_CAMPAIGN_FILE, DEFAULT_RECIPIENTS_FILE, DEFAULT_SECRET_MASK,
    DEFAULT_TREE_FILE, HUSHDROP_ALLOCATIONS_OUT, HUSHDROP_CAMPAIGN_OUT, HUSHDROP_RECIPIENTS_FILE,
    HUSHDROP_SECRET_MASK, HUSHDROP_TREE_OUT,
};
use super::{HasherArgs, parse_secret_mask};

/// Arguments for `campaign build`.
#[derive(Debug, clap::Args)]
pub struct CampaignBuildArgs {
    /// Hash provider arguments.
    #[command(flatten)]
    pub hasher: HasherArgs,
    /// Recipients input file (ordered; the position becomes the leaf index).
    #[arg(long, env = HUSHDROP_RECIPIENTS_FILE, default_value = DEFAULT_RECIPIENTS_FILE)]
    pub recipients: PathBuf,
    /// Shape of generated secrets: `field` keeps them below the BN254 modulus, `none` keeps
    /// all 256 bits.
    #[arg(
        long,
        env = HUSHDROP_SECRET_MASK,
        default_value = DEFAULT_SECRET_MASK,
        value_parser = parse_secret_mask
    )]
    pub secret_mask: SecretMask,
    /// Campaign configuration output file (public).
    #[arg(long, env = HUSHDROP_CAMPAIGN_OUT, default_value = DEFAULT_CAMPAIGN_FILE)]
    pub campaign_out: PathBuf,
    /// Binary commitment tree output file.
    #[arg(long, env = HUSHDROP_TREE_OUT, default_value = DEFAULT_TREE_FILE)]
    pub tree_out: PathBuf,
    /// Allocations output file. Contains every recipient secret.
    #[arg(long, env = HUSHDROP_ALLOCATIONS_OUT, default_value = DEFAULT_ALLOCATIONS_FILE)]
    pub allocations_out: PathBuf,
}

/// Campaign command group.
#[derive(Debug, clap::Subcommand)]
pub enum CampaignCommands {
    /// Build the commitment tree and allocations from a recipients file.
    Build {
        #[command(flatten)]
        args: CampaignBuildArgs,
    },
}
