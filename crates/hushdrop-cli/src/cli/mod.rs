//! Command-line interface for the `hushdrop` CLI application.

mod campaign;
mod claim;
mod config;
pub mod constants;

use std::time::Duration;

use clap::Parser;
use eyre::{Result, eyre};
use hushdrop_core::base::{HashProviderKind, SecretMask};
use hushdrop_hash::{
    DEFAULT_HASH_ENDPOINT, DEFAULT_REQUEST_TIMEOUT_SECS, DelegatedHasherConfig, MAX_RETRIES,
};
use hushdrop_sdk::common::CommonConfig;
use hushdrop_tree::DEFAULT_MAX_CONCURRENCY;

pub use self::campaign::CampaignCommands;
pub use self::claim::ClaimCommands;
pub use self::config::{ConfigCommands, SchemaDocument};
use self::constants::{
    DEFAULT_HASHER, HUSHDROP_HASH_ENDPOINT, HUSHDROP_HASH_RETRIES, HUSHDROP_HASH_TIMEOUT_SECS,
    HUSHDROP_HASHER, HUSHDROP_MAX_CONCURRENCY,
};

/// Command-line interface definition.
#[derive(Debug, Parser)]
#[command(name = "hushdrop")]
#[command(about = "Private airdrop commitment tools")]
pub struct Cli {
    /// CLI top-level command group.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level command groups.
#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Campaign authority commands.
    Campaign {
        /// Campaign subcommands.
        #[command(subcommand)]
        command: CampaignCommands,
    },
    /// Recipient claim commands.
    Claim {
        /// Claim subcommands.
        #[command(subcommand)]
        command: ClaimCommands,
    },
    /// File format utilities.
    Config {
        /// Config subcommands.
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Hash provider selection shared by every command that hashes.
#[derive(Debug, clap::Args)]
pub struct HasherArgs {
    /// Hash provider (`delegated` for circuit-compatible roots, `local` for testing).
    #[arg(
        long,
        env = HUSHDROP_HASHER,
        default_value = DEFAULT_HASHER,
        value_parser = parse_hasher_kind
    )]
    pub hasher: HashProviderKind,
    /// Hashing service endpoint, used with `--hasher delegated`.
    #[arg(long, env = HUSHDROP_HASH_ENDPOINT, default_value = DEFAULT_HASH_ENDPOINT)]
    pub hash_endpoint: String,
    /// Timeout of one hashing request, in seconds.
    #[arg(long, env = HUSHDROP_HASH_TIMEOUT_SECS, default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    pub hash_timeout_secs: u64,
    /// Retries for transient hashing failures (0 disables retrying).
    #[arg(long, env = HUSHDROP_HASH_RETRIES, default_value_t = MAX_RETRIES)]
    pub hash_retries: u32,
    /// Maximum hash computations in flight per tree level.
    #[arg(long, env = HUSHDROP_MAX_CONCURRENCY, default_value_t = DEFAULT_MAX_CONCURRENCY)]
    pub max_concurrency: usize,
}

impl From<HasherArgs> for CommonConfig {
    fn from(args: HasherArgs) -> Self {
        Self {
            delegated: DelegatedHasherConfig {
                request_timeout: Duration::from_secs(args.hash_timeout_secs),
                max_retry_attempts: args.hash_retries,
                ..DelegatedHasherConfig::for_endpoint(args.hash_endpoint)
            },
            max_concurrency: args.max_concurrency,
            ..Self::new(args.hasher)
        }
    }
}

pub fn parse_hasher_kind(s: &str) -> Result<HashProviderKind> {
    HashProviderKind::from_str_name(s).ok_or_else(|| {
        eyre!("Invalid hasher: {s}. Expected 'local' or 'delegated'.")
    })
}

pub fn parse_secret_mask(s: &str) -> Result<SecretMask> {
    SecretMask::from_str_name(s)
        .ok_or_else(|| eyre!("Invalid secret mask: {s}. Expected 'none' or 'field'."))
}

pub fn parse_schema_document(s: &str) -> Result<SchemaDocument> {
    match s {
        "campaign" => Ok(SchemaDocument::Campaign),
        "recipients" => Ok(SchemaDocument::Recipients),
        "claim" => Ok(SchemaDocument::Claim),
        other => Err(eyre!(
            "Invalid schema: {other}. Expected 'campaign', 'recipients', or 'claim'."
        )),
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser as _;

    use super::*;

    #[test]
    fn hasher_parse() {
        assert_eq!(
            parse_hasher_kind("local").expect("local should parse"),
            HashProviderKind::Local
        );
        assert_eq!(
            parse_hasher_kind("delegated").expect("delegated should parse"),
            HashProviderKind::Delegated
        );
        assert!(parse_hasher_kind("poseidon").is_err());
    }

    #[test]
    fn secret_mask_parse() {
        assert_eq!(
            parse_secret_mask("none").expect("none should parse"),
            SecretMask::Unmasked
        );
        assert_eq!(
            parse_secret_mask("field").expect("field should parse"),
            SecretMask::FieldCompatible
        );
        assert!(parse_secret_mask("top3").is_err());
    }

    #[test]
    fn schema_document_parse() {
        assert!(matches!(
            parse_schema_document("claim").expect("claim should parse"),
            SchemaDocument::Claim
        ));
        assert!(parse_schema_document("tree").is_err());
    }

    #[test]
    fn hasher_flags_reach_common_config() {
        let cli = Cli::try_parse_from([
            "hushdrop",
            "claim",
            "verify",
            "--hasher",
            "delegated",
            "--hash-endpoint",
            "http://hash.internal:8080/poseidon",
            "--hash-timeout-secs",
            "5",
            "--hash-retries",
            "3",
            "--max-concurrency",
            "16",
        ])
        .expect("command should parse");

        let Commands::Claim {
            command: ClaimCommands::Verify { args },
        } = cli.command
        else {
            panic!("expected claim verify");
        };
        let config = CommonConfig::from(args.hasher);
        assert_eq!(config.hasher, HashProviderKind::Delegated);
        assert_eq!(config.delegated.endpoint, "http://hash.internal:8080/poseidon");
        assert_eq!(config.delegated.request_timeout, Duration::from_secs(5));
        assert_eq!(config.delegated.max_retry_attempts, 3);
        assert_eq!(config.max_concurrency, 16);
    }

    #[test]
    fn claim_prepare_requires_wallet() {
        assert!(Cli::try_parse_from(["hushdrop", "claim", "prepare"]).is_err());
        assert!(
            Cli::try_parse_from(["hushdrop", "claim", "prepare", "--wallet", "walletA"]).is_ok()
        );
    }
}
