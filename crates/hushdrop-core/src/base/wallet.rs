//! Recipient wallet identifiers.

use std::fmt;
use std::str::FromStr;

use super::error::MalformedInputError;
use super::field::{FIELD_ELEMENT_SIZE, FieldElement};

/// Longest textual label accepted as a wallet identifier.
///
/// Labels are right-aligned in 32 bytes with at least one leading zero byte, which keeps the
/// encoding below any 254-bit field modulus.
pub const MAX_WALLET_LABEL_LEN: usize = FIELD_ELEMENT_SIZE - 1;

/// Number of decoded address bytes that enter the field encoding.
const ADDRESS_PREFIX_LEN: usize = FIELD_ELEMENT_SIZE - 1;

/// A wallet identifier together with its canonical text form.
///
/// Two forms are accepted, and which one applies is decided by the text alone:
/// - a base58 address that decodes to exactly 32 bytes. Its first 31 bytes are encoded
///   big-endian and right-aligned;
/// - otherwise a label of 1 to 31 UTF-8 bytes, without control characters or surrounding
///   whitespace, encoded the same way.
///
/// Identity is the text: distinct strings are distinct wallets. Two addresses that share
/// their first 31 bytes have the same field encoding; campaigns reject such pairs.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WalletId {
    text: String,
    bytes: [u8; FIELD_ELEMENT_SIZE],
}

impl WalletId {
    /// Parse a wallet identifier.
    ///
    /// # Errors
    /// Returns an error for empty text, text with surrounding whitespace or control
    /// characters, and labels longer than 31 bytes.
    pub fn parse(input: &str) -> Result<Self, MalformedInputError> {
        let invalid = || MalformedInputError::InvalidWallet(input.to_owned());

        if let Ok(address) = bs58::decode(input).into_vec()
            && address.len() == FIELD_ELEMENT_SIZE
        {
            let prefix = address.get(..ADDRESS_PREFIX_LEN).ok_or_else(invalid)?;
            return Ok(Self {
                text: input.to_owned(),
                bytes: right_aligned(prefix).ok_or_else(invalid)?,
            });
        }

        let label = input.as_bytes();
        if label.is_empty()
            || label.len() > MAX_WALLET_LABEL_LEN
            || input.chars().any(char::is_control)
            || input.trim() != input
        {
            return Err(invalid());
        }

        Ok(Self {
            text: input.to_owned(),
            bytes: right_aligned(label).ok_or_else(invalid)?,
        })
    }

    /// Canonical text form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Fixed-width encoding used as the leaf commitment input.
    #[must_use]
    pub const fn to_field_element(&self) -> FieldElement {
        FieldElement::from_bytes(self.bytes)
    }
}

fn right_aligned(value: &[u8]) -> Option<[u8; FIELD_ELEMENT_SIZE]> {
    let mut bytes = [0_u8; FIELD_ELEMENT_SIZE];
    let offset = FIELD_ELEMENT_SIZE.checked_sub(value.len())?;
    bytes.get_mut(offset..)?.copy_from_slice(value);
    Some(bytes)
}

impl fmt::Display for WalletId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for WalletId {
    type Err = MalformedInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
