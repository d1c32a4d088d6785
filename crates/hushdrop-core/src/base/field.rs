//! Fixed-width field element codec.
//!
//! Every hash input and output is carried as a 32-byte big-endian buffer. The canonical text
//! form is 64 lowercase hex digits without prefix; the hashing service wire form strips
//! leading zero bytes.

use std::fmt;
use std::str::FromStr;

use super::error::MalformedInputError;

/// Size of an encoded field element in bytes.
pub const FIELD_ELEMENT_SIZE: usize = 32;

const HEX_DIGITS: usize = FIELD_ELEMENT_SIZE * 2;

/// Big-endian encoding of the BN254 scalar field modulus.
pub const BN254_SCALAR_MODULUS: [u8; FIELD_ELEMENT_SIZE] = [
    0x30, 0x64, 0x4e, 0x72, 0xe1, 0x31, 0xa0, 0x29, 0xb8, 0x50, 0x45, 0xb6, 0x81, 0x81, 0x58, 0x5d,
    0x28, 0x33, 0xe8, 0x48, 0x79, 0xb9, 0x70, 0x91, 0x43, 0xe1, 0xf5, 0x93, 0xf0, 0x00, 0x00, 0x01,
];

/// An unsigned integer below 2^256 in its 32-byte big-endian form.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FieldElement([u8; FIELD_ELEMENT_SIZE]);

impl FieldElement {
    /// The zero element, also used for padding leaves.
    pub const ZERO: Self = Self([0_u8; FIELD_ELEMENT_SIZE]);

    /// Wrap a big-endian 32-byte buffer.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; FIELD_ELEMENT_SIZE]) -> Self {
        Self(bytes)
    }

    /// The big-endian bytes.
    #[must_use]
    pub const fn to_bytes(&self) -> [u8; FIELD_ELEMENT_SIZE] {
        self.0
    }

    /// Borrow the big-endian bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; FIELD_ELEMENT_SIZE] {
        &self.0
    }

    /// Encode a `u64` right-aligned in the 32-byte buffer.
    #[allow(
        clippy::indexing_slicing,
        clippy::arithmetic_side_effects,
        reason = "Loop is bounded by the 8 bytes of a u64, offsets stay below 32"
    )]
    #[must_use]
    pub const fn from_u64(value: u64) -> Self {
        let be = value.to_be_bytes();
        let offset = FIELD_ELEMENT_SIZE - be.len();
        let mut bytes = [0_u8; FIELD_ELEMENT_SIZE];
        let mut i = 0;
        while i < be.len() {
            bytes[offset + i] = be[i];
            i += 1;
        }
        Self(bytes)
    }

    /// Whether every byte is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == Self::ZERO.0
    }

    /// Whether the value is a canonical BN254 scalar.
    ///
    /// Big-endian byte order makes the lexicographic comparison a numeric one.
    #[must_use]
    pub fn is_below_bn254_modulus(&self) -> bool {
        self.0 < BN254_SCALAR_MODULUS
    }

    /// Canonical hex: 64 lowercase digits, no prefix.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse canonical hex (exactly 64 digits, no prefix).
    ///
    /// # Errors
    /// Returns an error if the text is not 64 hex digits.
    pub fn from_hex(text: &str) -> Result<Self, MalformedInputError> {
        if text.len() != HEX_DIGITS {
            return Err(MalformedInputError::HexLength {
                expected: HEX_DIGITS,
                actual: text.len(),
            });
        }
        let mut bytes = [0_u8; FIELD_ELEMENT_SIZE];
        hex::decode_to_slice(text, &mut bytes).map_err(|e| invalid_hex(text, &e))?;
        Ok(Self(bytes))
    }

    /// Minimal-length hex as sent to the hashing service.
    ///
    /// Leading zero bytes are stripped; zero itself is `"00"`.
    #[must_use]
    pub fn to_minimal_hex(&self) -> String {
        let first = self
            .0
            .iter()
            .position(|byte| *byte != 0)
            .unwrap_or(FIELD_ELEMENT_SIZE.saturating_sub(1));
        hex::encode(self.0.get(first..).unwrap_or_default())
    }

    /// Parse hex as returned by the hashing service.
    ///
    /// Accepts an optional `0x` prefix, odd digit counts and any length up to 64 digits.
    ///
    /// # Errors
    /// Returns an error if the text is empty, too long, or not hex.
    pub fn from_loose_hex(text: &str) -> Result<Self, MalformedInputError> {
        let digits = text
            .strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))
            .unwrap_or(text);
        if digits.is_empty() || digits.len() > HEX_DIGITS {
            return Err(MalformedInputError::HexLength {
                expected: HEX_DIGITS,
                actual: digits.len(),
            });
        }
        let padded = format!("{digits:0>width$}", width = HEX_DIGITS);
        let mut bytes = [0_u8; FIELD_ELEMENT_SIZE];
        hex::decode_to_slice(&padded, &mut bytes).map_err(|e| invalid_hex(text, &e))?;
        Ok(Self(bytes))
    }
}

fn invalid_hex(text: &str, error: &hex::FromHexError) -> MalformedInputError {
    MalformedInputError::InvalidHex {
        value: text.to_owned(),
        reason: error.to_string(),
    }
}

impl From<[u8; FIELD_ELEMENT_SIZE]> for FieldElement {
    fn from(bytes: [u8; FIELD_ELEMENT_SIZE]) -> Self {
        Self(bytes)
    }
}

impl From<FieldElement> for [u8; FIELD_ELEMENT_SIZE] {
    fn from(element: FieldElement) -> Self {
        element.0
    }
}

impl From<u64> for FieldElement {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl AsRef<[u8]> for FieldElement {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement({})", self.to_hex())
    }
}

impl FromStr for FieldElement {
    type Err = MalformedInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}
