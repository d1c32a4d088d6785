//! Shared constants for CLI.

// -------------------------
// Environment variables
// -------------------------

// Logging
pub const HUSHDROP_LOG: &str = "HUSHDROP_LOG";

// Hashing
pub const HUSHDROP_HASHER: &str = "HUSHDROP_HASHER";
pub const HUSHDROP_HASH_ENDPOINT: &str = "HUSHDROP_HASH_ENDPOINT";
pub const HUSHDROP_HASH_TIMEOUT_SECS: &str = "HUSHDROP_HASH_TIMEOUT_SECS";
pub const HUSHDROP_HASH_RETRIES: &str = "HUSHDROP_HASH_RETRIES";
pub const HUSHDROP_MAX_CONCURRENCY: &str = "HUSHDROP_MAX_CONCURRENCY";

// Campaign
pub const HUSHDROP_RECIPIENTS_FILE: &str = "HUSHDROP_RECIPIENTS_FILE";
pub const HUSHDROP_SECRET_MASK: &str = "HUSHDROP_SECRET_MASK";
pub const HUSHDROP_CAMPAIGN_OUT: &str = "HUSHDROP_CAMPAIGN_OUT";
pub const HUSHDROP_TREE_OUT: &str = "HUSHDROP_TREE_OUT";
pub const HUSHDROP_ALLOCATIONS_OUT: &str = "HUSHDROP_ALLOCATIONS_OUT";

// Claim
pub const HUSHDROP_CAMPAIGN_FILE: &str = "HUSHDROP_CAMPAIGN_FILE";
pub const HUSHDROP_TREE_FILE: &str = "HUSHDROP_TREE_FILE";
pub const HUSHDROP_ALLOCATIONS_FILE: &str = "HUSHDROP_ALLOCATIONS_FILE";
pub const HUSHDROP_WALLET: &str = "HUSHDROP_WALLET";
pub const HUSHDROP_CLAIM_OUT: &str = "HUSHDROP_CLAIM_OUT";
pub const HUSHDROP_CLAIM_IN: &str = "HUSHDROP_CLAIM_IN";

// -------------------------
// Default values
// -------------------------

// File paths
pub const DEFAULT_RECIPIENTS_FILE: &str = "recipients.json";
pub const DEFAULT_CAMPAIGN_FILE: &str = "campaign.json";
pub const DEFAULT_TREE_FILE: &str = "tree.bin";
pub const DEFAULT_ALLOCATIONS_FILE: &str = "allocations.json";
pub const DEFAULT_CLAIM_FILE: &str = "claim-inputs.json";

// Log directives: progress from the hushdrop crates, warnings from dependencies
pub const DEFAULT_LOG_FILTER: &str =
    "warn,hushdrop=info,hushdrop_sdk=info,hushdrop_tree=info,hushdrop_hash=info";

// Parsed values
pub const DEFAULT_HASHER: &str = "delegated";
pub const DEFAULT_SECRET_MASK: &str = "field";
pub const DEFAULT_SCHEMA: &str = "campaign";
