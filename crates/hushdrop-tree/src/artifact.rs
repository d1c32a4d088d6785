//! Binary persistence of a built tree.
//!
//! Layout: `[version u8][depth u8][provider tag u8][recipient count u64 LE]` followed by every
//! node, 32 bytes each, leaves first and the root last. Loading checks the header and length
//! and recomputes nothing.

use hushdrop_core::base::{FIELD_ELEMENT_SIZE, FieldElement, HashProviderKind};

use crate::tree::TOTAL_NODES;
use crate::{CommitmentTree, TREE_DEPTH, TreeError};

const ARTIFACT_VERSION: u8 = 1;
const HEADER_BYTES: usize = 11;
const ARTIFACT_BYTES: usize = HEADER_BYTES + TOTAL_NODES * FIELD_ELEMENT_SIZE;

impl CommitmentTree {
    /// Serialize the whole tree.
    #[allow(
        clippy::as_conversions,
        reason = "The recipient count is at most CAPACITY, which fits in a u64"
    )]
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(ARTIFACT_BYTES);
        bytes.push(ARTIFACT_VERSION);
        bytes.push(TREE_DEPTH);
        bytes.push(self.hasher_kind().tag());
        bytes.extend_from_slice(&(self.recipient_count() as u64).to_le_bytes());
        for node in self.nodes() {
            bytes.extend_from_slice(node.as_bytes());
        }
        bytes
    }

    /// Load a tree written by [`Self::to_bytes`].
    ///
    /// # Errors
    /// Returns [`TreeError::Artifact`] for a truncated or oversized file, an unknown version,
    /// depth or provider tag, a recipient count above capacity, or non-zero padding leaves.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TreeError> {
        let (&[version, depth, tag], rest) = bytes
            .split_first_chunk::<3>()
            .ok_or(TreeError::Artifact("tree file is too short"))?;
        let (&count, payload) = rest
            .split_first_chunk::<8>()
            .ok_or(TreeError::Artifact("tree file is too short"))?;

        if version != ARTIFACT_VERSION {
            return Err(TreeError::Artifact("unsupported tree file version"));
        }
        if depth != TREE_DEPTH {
            return Err(TreeError::Artifact("unexpected tree depth"));
        }
        let hasher = HashProviderKind::from_tag(tag)
            .ok_or(TreeError::Artifact("unknown hash provider tag"))?;
        let recipient_count = usize::try_from(u64::from_le_bytes(count))
            .map_err(|_| TreeError::Artifact("recipient count does not fit into usize"))?;

        let (nodes, remainder) = payload.as_chunks::<FIELD_ELEMENT_SIZE>();
        if !remainder.is_empty() || nodes.len() != TOTAL_NODES {
            return Err(TreeError::Artifact("tree file length mismatch"));
        }
        let nodes = nodes.iter().copied().map(FieldElement::from_bytes).collect();

        Self::from_parts(hasher, recipient_count, nodes)
    }
}
