//! Dense fixed-depth commitment tree.
#![allow(
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects,
    reason = "Fixed-depth layout; every index is bounded by CAPACITY, checked on entry"
)]

use futures::{StreamExt as _, TryStreamExt as _, stream};
use hushdrop_core::base::{FieldElement, HashProviderKind};
use hushdrop_hash::HashProvider;
use tracing::{debug, instrument};

use crate::{MerkleProof, TreeError};

/// Number of levels above the leaves.
pub const TREE_DEPTH: u8 = 8;
/// Number of leaves, `2^TREE_DEPTH`.
pub const CAPACITY: usize = 1 << TREE_DEPTH;
/// Default cap on in-flight hash computations per level.
pub const DEFAULT_MAX_CONCURRENCY: usize = 128;

pub(crate) const TOTAL_NODES: usize = 2 * CAPACITY - 1;

/// Index of the first node of `level` in the flat node array.
///
/// Levels are stored leaves first: 256 leaves, then 128 parents, ..., then the root.
const fn level_offset(level: u8) -> usize {
    2 * CAPACITY - ((2 * CAPACITY) >> level)
}

const fn level_width(level: u8) -> usize {
    CAPACITY >> level
}

/// Checks `leaf_index < CAPACITY` and returns it as a `u64` for hashing.
pub(crate) fn ensure_leaf_index(leaf_index: usize) -> Result<u64, TreeError> {
    let invalid = TreeError::InvalidProofIndex {
        index: leaf_index,
        capacity: CAPACITY,
    };
    if leaf_index >= CAPACITY {
        return Err(invalid);
    }
    u64::try_from(leaf_index).map_err(|_| invalid)
}

pub(crate) const fn ensure_capacity(count: usize) -> Result<(), TreeError> {
    if count > CAPACITY {
        return Err(TreeError::CapacityExceeded {
            count,
            capacity: CAPACITY,
        });
    }
    Ok(())
}

/// Tuning for tree construction. Only affects wall-clock time, never the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOptions {
    /// Maximum hash computations in flight within one level (0 is treated as 1).
    pub max_concurrency: usize,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
        }
    }
}

impl BuildOptions {
    pub(crate) fn concurrency(self) -> usize {
        self.max_concurrency.max(1)
    }
}

/// A fully materialized depth-8 commitment tree.
///
/// `levels[i + 1][j] == hash2(levels[i][2j], levels[i][2j + 1])`; leaves past
/// `recipient_count` are zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitmentTree {
    hasher: HashProviderKind,
    recipient_count: usize,
    nodes: Vec<FieldElement>,
}

impl CommitmentTree {
    /// Build the tree over precomputed leaves, padding with zero leaves up to [`CAPACITY`].
    ///
    /// Pairs of a level are hashed concurrently (at most `options.max_concurrency` at a time);
    /// a level starts only once the previous one is complete. The first failing hash aborts the
    /// build and the remaining in-flight computations are dropped.
    ///
    /// # Errors
    /// Returns [`TreeError::CapacityExceeded`] for more than [`CAPACITY`] leaves and
    /// [`TreeError::HashService`] if any hash fails.
    #[instrument(skip_all, fields(leaves = leaves.len(), hasher = %hasher.kind()))]
    pub async fn from_leaves<H: HashProvider>(
        leaves: Vec<FieldElement>,
        hasher: &H,
        options: BuildOptions,
    ) -> Result<Self, TreeError> {
        let recipient_count = leaves.len();
        ensure_capacity(recipient_count)?;

        let mut nodes = Vec::with_capacity(TOTAL_NODES);
        nodes.extend(leaves);
        nodes.resize(CAPACITY, FieldElement::ZERO);

        for level in 0..TREE_DEPTH {
            let below = &nodes[level_offset(level)..level_offset(level + 1)];
            let (pairs, _) = below.as_chunks::<2>();
            let parents: Vec<FieldElement> = stream::iter(pairs)
                .map(|&[left, right]| hasher.hash2(left, right))
                .buffered(options.concurrency())
                .try_collect()
                .await?;
            debug!(level = level + 1, nodes = parents.len(), "Level complete");
            nodes.extend(parents);
        }

        Ok(Self {
            hasher: hasher.kind(),
            recipient_count,
            nodes,
        })
    }

    pub(crate) fn from_parts(
        hasher: HashProviderKind,
        recipient_count: usize,
        nodes: Vec<FieldElement>,
    ) -> Result<Self, TreeError> {
        ensure_capacity(recipient_count)
            .map_err(|_| TreeError::Artifact("recipient count exceeds capacity"))?;
        if nodes.len() != TOTAL_NODES {
            return Err(TreeError::Artifact("node count mismatch"));
        }
        if nodes[recipient_count..CAPACITY]
            .iter()
            .any(|leaf| !leaf.is_zero())
        {
            return Err(TreeError::Artifact("padding leaf is not zero"));
        }
        Ok(Self {
            hasher,
            recipient_count,
            nodes,
        })
    }

    /// The root.
    #[must_use]
    pub fn root(&self) -> FieldElement {
        self.nodes[TOTAL_NODES - 1]
    }

    /// The leaf at `index`, `None` outside the tree.
    #[must_use]
    pub fn leaf(&self, index: usize) -> Option<FieldElement> {
        self.leaves().get(index).copied()
    }

    /// All [`CAPACITY`] leaves, padding included.
    #[must_use]
    pub fn leaves(&self) -> &[FieldElement] {
        &self.nodes[..CAPACITY]
    }

    /// Nodes of `level` (0 = leaves, [`TREE_DEPTH`] = root).
    #[must_use]
    pub fn level(&self, level: u8) -> Option<&[FieldElement]> {
        (level <= TREE_DEPTH)
            .then(|| &self.nodes[level_offset(level)..level_offset(level) + level_width(level)])
    }

    /// Every level from the leaves up to the root.
    pub fn levels(&self) -> impl Iterator<Item = &[FieldElement]> {
        (0..=TREE_DEPTH).filter_map(|level| self.level(level))
    }

    pub(crate) fn nodes(&self) -> &[FieldElement] {
        &self.nodes
    }

    /// Number of real (non-padding) leaves.
    #[must_use]
    pub const fn recipient_count(&self) -> usize {
        self.recipient_count
    }

    /// Number of leaves.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        CAPACITY
    }

    /// Number of levels above the leaves.
    #[must_use]
    pub const fn depth(&self) -> u8 {
        TREE_DEPTH
    }

    /// Provider the tree was built with.
    #[must_use]
    pub const fn hasher_kind(&self) -> HashProviderKind {
        self.hasher
    }

    /// Membership proof for the leaf at `leaf_index`.
    ///
    /// The sibling at each level is the node at `index ^ 1`, then the index halves.
    ///
    /// # Errors
    /// Returns [`TreeError::InvalidProofIndex`] if `leaf_index >= CAPACITY`.
    pub fn proof(&self, leaf_index: usize) -> Result<MerkleProof, TreeError> {
        ensure_leaf_index(leaf_index)?;

        let mut index = leaf_index;
        let mut siblings = Vec::with_capacity(usize::from(TREE_DEPTH));
        for level in 0..TREE_DEPTH {
            siblings.push(self.nodes[level_offset(level) + (index ^ 1)]);
            index /= 2;
        }

        Ok(MerkleProof {
            leaf_index,
            leaf: self.nodes[leaf_index],
            siblings,
        })
    }
}

#[cfg(test)]
mod tests {
    use hushdrop_hash::LocalHasher;

    use super::*;

    #[test]
    fn layout() {
        assert_eq!(CAPACITY, 256);
        assert_eq!(TOTAL_NODES, 511);
        assert_eq!(level_offset(0), 0);
        assert_eq!(level_offset(1), 256);
        assert_eq!(level_offset(2), 384);
        assert_eq!(level_offset(TREE_DEPTH), 510);
        assert_eq!(level_width(TREE_DEPTH), 1);
        assert_eq!(level_offset(TREE_DEPTH) + level_width(TREE_DEPTH), TOTAL_NODES);
    }

    #[tokio::test]
    async fn levels_are_consistent() {
        let hasher = LocalHasher::new();
        let leaves = (1..=5).map(FieldElement::from_u64).collect();
        let tree = CommitmentTree::from_leaves(leaves, &hasher, BuildOptions::default())
            .await
            .expect("local build never fails");

        let levels: Vec<&[FieldElement]> = tree.levels().collect();
        assert_eq!(levels.len(), usize::from(TREE_DEPTH) + 1);
        for (below, above) in levels.iter().zip(levels.iter().skip(1)) {
            assert_eq!(below.len(), above.len() * 2);
            for (j, parent) in above.iter().enumerate() {
                let expected = hasher
                    .hash2(below[2 * j], below[2 * j + 1])
                    .await
                    .expect("local hash never fails");
                assert_eq!(*parent, expected);
            }
        }
        assert_eq!(levels[usize::from(TREE_DEPTH)], &[tree.root()]);
        assert!(tree.level(TREE_DEPTH + 1).is_none());
    }

    #[tokio::test]
    async fn zero_leaves_give_empty_root() {
        let hasher = LocalHasher::new();
        let tree = CommitmentTree::from_leaves(Vec::new(), &hasher, BuildOptions::default())
            .await
            .expect("local build never fails");

        let mut expected = FieldElement::ZERO;
        for _ in 0..TREE_DEPTH {
            expected = hasher
                .hash2(expected, expected)
                .await
                .expect("local hash never fails");
        }
        assert_eq!(tree.root(), expected);
        assert_eq!(tree.recipient_count(), 0);
        assert!(tree.leaves().iter().all(FieldElement::is_zero));
    }

    #[tokio::test]
    async fn proof_index_bounds() {
        let tree = CommitmentTree::from_leaves(
            vec![FieldElement::from_u64(1)],
            &LocalHasher::new(),
            BuildOptions::default(),
        )
        .await
        .expect("local build never fails");

        assert!(tree.proof(CAPACITY - 1).is_ok());
        assert!(matches!(
            tree.proof(CAPACITY),
            Err(TreeError::InvalidProofIndex {
                index: CAPACITY,
                capacity: CAPACITY
            })
        ));
    }

    #[tokio::test]
    async fn concurrency_does_not_change_root() {
        let hasher = LocalHasher::new();
        let leaves: Vec<FieldElement> = (0..200).map(FieldElement::from_u64).collect();
        let sequential = CommitmentTree::from_leaves(
            leaves.clone(),
            &hasher,
            BuildOptions { max_concurrency: 1 },
        )
        .await
        .expect("local build never fails");
        let unbounded = CommitmentTree::from_leaves(
            leaves.clone(),
            &hasher,
            BuildOptions {
                max_concurrency: CAPACITY,
            },
        )
        .await
        .expect("local build never fails");
        let zero = CommitmentTree::from_leaves(leaves, &hasher, BuildOptions { max_concurrency: 0 })
            .await
            .expect("local build never fails");

        assert_eq!(sequential, unbounded);
        assert_eq!(sequential, zero);
    }
}
