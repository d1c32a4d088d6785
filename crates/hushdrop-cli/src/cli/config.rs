//! Config subcommands.

use super::constants::DEFAULT_SCHEMA;
use super::parse_schema_document;

/// Documents with a published JSON schema.
#[derive(Debug, Clone, Copy)]
pub enum SchemaDocument {
    /// Campaign configuration.
    Campaign,
    /// Recipients input file.
    Recipients,
    /// Claim inputs.
    Claim,
}

/// Config command group.
#[derive(Debug, clap::Subcommand)]
pub enum ConfigCommands {
    /// Print the JSON schema of a file format.
    Schema {
        /// Document to describe: `campaign`, `recipients` or `claim`.
        #[arg(long, default_value = DEFAULT_SCHEMA, value_parser = parse_schema_document)]
        document: SchemaDocument,
    },
}
