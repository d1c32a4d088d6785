//! Foundational primitive types and byte/hex codecs.

mod amount;
mod error;
mod field;
mod hasher_kind;
mod nullifier;
mod recipient;
mod secret;
mod wallet;

pub use amount::{Amount, DEFAULT_DECIMALS, MAX_DECIMALS};
pub use error::MalformedInputError;
pub use field::{BN254_SCALAR_MODULUS, FIELD_ELEMENT_SIZE, FieldElement};
pub use hasher_kind::HashProviderKind;
pub use nullifier::Nullifier;
pub use recipient::{Allocation, Recipient};
pub use secret::{SECRET_SIZE, Secret, SecretGenerator, SecretMask};
pub use wallet::{MAX_WALLET_LABEL_LEN, WalletId};
