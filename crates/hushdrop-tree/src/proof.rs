use hushdrop_core::base::FieldElement;
use hushdrop_hash::HashProvider;

use crate::tree::ensure_leaf_index;
use crate::{TREE_DEPTH, TreeError};

/// Sibling path from a leaf to the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleProof {
    /// Position of the leaf.
    pub leaf_index: usize,
    /// The leaf commitment.
    pub leaf: FieldElement,
    /// One sibling per level, leaf to root.
    pub siblings: Vec<FieldElement>,
}

impl MerkleProof {
    /// Check this proof against `root`. See [`verify_proof`].
    ///
    /// # Errors
    /// Same as [`verify_proof`].
    pub async fn verify<H: HashProvider>(
        &self,
        hasher: &H,
        root: FieldElement,
    ) -> Result<bool, TreeError> {
        verify_proof(hasher, root, self.leaf, self.leaf_index, &self.siblings).await
    }
}

/// Recompute the root from a leaf and its sibling path and compare it with `root`.
///
/// At each level an odd index means the running value is the right child
/// (`hash2(sibling, current)`), an even index the left child (`hash2(current, sibling)`).
/// A mismatching root is `Ok(false)`. Shape errors are reported before any hashing.
///
/// # Errors
/// Returns [`TreeError::InvalidSiblingCount`] unless exactly [`TREE_DEPTH`] siblings are
/// given, [`TreeError::InvalidProofIndex`] for an index outside the tree, and
/// [`TreeError::HashService`] if the provider fails.
#[allow(
    clippy::arithmetic_side_effects,
    reason = "Halving an index and taking its parity cannot overflow"
)]
pub async fn verify_proof<H: HashProvider>(
    hasher: &H,
    root: FieldElement,
    leaf: FieldElement,
    leaf_index: usize,
    siblings: &[FieldElement],
) -> Result<bool, TreeError> {
    let expected = usize::from(TREE_DEPTH);
    if siblings.len() != expected {
        return Err(TreeError::InvalidSiblingCount {
            expected,
            actual: siblings.len(),
        });
    }
    ensure_leaf_index(leaf_index)?;

    let mut current = leaf;
    let mut index = leaf_index;
    for &sibling in siblings {
        current = if index % 2 == 1 {
            hasher.hash2(sibling, current).await?
        } else {
            hasher.hash2(current, sibling).await?
        };
        index /= 2;
    }

    Ok(current == root)
}
