//! hushdrop CLI Application

mod cli;
mod logging;

use clap::Parser as _;
use cli::{CampaignCommands, ClaimCommands, Cli, Commands, ConfigCommands, SchemaDocument};
use hushdrop_sdk::commands;
use hushdrop_sdk::common::CommonConfig;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> eyre::Result<()> {
    // Load .env file (fails silently if not found)
    let _ = dotenvy::dotenv();

    logging::init(std::env::var(cli::constants::HUSHDROP_LOG).ok().as_deref())?;

    let cli = Cli::parse();

    let res = match cli.command {
        Commands::Campaign { command } => match command {
            CampaignCommands::Build { args } => {
                let config = CommonConfig {
                    secret_mask: args.secret_mask,
                    ..CommonConfig::from(args.hasher)
                };
                commands::build_campaign(
                    config,
                    args.recipients,
                    args.campaign_out,
                    args.tree_out,
                    args.allocations_out,
                )
                .await
            }
        },
        Commands::Claim { command } => match command {
            ClaimCommands::Prepare { args } => {
                commands::claim_prepare(
                    args.hasher.into(),
                    args.campaign,
                    args.tree,
                    args.allocations,
                    args.wallet,
                    args.claim_out,
                )
                .await
            }
            ClaimCommands::Verify { args } => {
                commands::verify_claim(args.hasher.into(), args.campaign, args.claim_in).await
            }
        },
        Commands::Config { command } => match command {
            ConfigCommands::Schema { document } => match document {
                SchemaDocument::Campaign => commands::campaign_configuration_schema(),
                SchemaDocument::Recipients => commands::recipients_schema(),
                SchemaDocument::Claim => commands::claim_inputs_schema(),
            },
        },
    };

    if let Err(e) = res {
        tracing::error!("Error: {:?}", e);
        std::process::exit(1);
    }

    Ok(())
}
