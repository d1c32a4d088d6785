use hushdrop_core::base::MalformedInputError;
use hushdrop_hash::HashServiceError;
use thiserror::Error;

/// Errors raised while building, proving or verifying a commitment tree.
#[derive(Error, Debug)]
pub enum TreeError {
    /// More recipients than leaves.
    #[error("{count} recipients exceed the tree capacity of {capacity}")]
    CapacityExceeded {
        /// Number of recipients supplied.
        count: usize,
        /// Number of leaves in the tree.
        capacity: usize,
    },

    /// A hash computation failed; the whole build is abandoned.
    #[error("Hash service failure: {0}")]
    HashService(#[from] HashServiceError),

    /// Leaf index outside `0..capacity`.
    #[error("Leaf index {index} is outside the tree of {capacity} leaves")]
    InvalidProofIndex {
        /// The requested index.
        index: usize,
        /// Number of leaves in the tree.
        capacity: usize,
    },

    /// A sibling path whose length is not the tree depth.
    #[error("Expected {expected} siblings, got {actual}")]
    InvalidSiblingCount {
        /// The tree depth.
        expected: usize,
        /// Number of siblings supplied.
        actual: usize,
    },

    /// A value could not be encoded as a field element.
    #[error("Malformed input: {0}")]
    MalformedInput(#[from] MalformedInputError),

    /// A persisted tree file is corrupt or from another format version.
    #[error("Invalid tree artifact: {0}")]
    Artifact(&'static str),
}
