//! Commitment tree and nullifier subsystem of a hushdrop campaign.
//!
//! A campaign commits to its recipient list through a depth-8 binary Merkle tree whose leaves
//! are `hash3(wallet, amount, secret)`. Recipients later prove membership with a sibling path
//! and disclose `hash2(secret, leaf_index)` as a one-time nullifier.

mod artifact;
mod builder;
mod commitment;
mod error;
mod proof;
mod tree;

pub use builder::{BuiltCampaign, build_campaign_tree};
pub use commitment::{compute_leaf, compute_nullifier};
pub use error::TreeError;
pub use proof::{MerkleProof, verify_proof};
pub use tree::{
    BuildOptions, CAPACITY, CommitmentTree, DEFAULT_MAX_CONCURRENCY, TREE_DEPTH,
};
