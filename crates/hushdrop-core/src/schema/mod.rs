//! Serialized schema/data contracts.

/// Allocations (secrets) handed to recipients after a build.
pub mod allocations;
/// Campaign configuration published after a build.
pub mod campaign;
/// Claim inputs handed to the external prover.
pub mod claim;
/// Recipient list consumed by a build.
pub mod recipients;
