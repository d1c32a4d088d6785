//! Per-recipient blinding secrets.

use std::fmt;

use rand::CryptoRng;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::error::MalformedInputError;
use super::field::FieldElement;

/// Size of a secret in bytes.
pub const SECRET_SIZE: usize = 32;

/// Mask applied to the most significant byte by [`SecretMask::FieldCompatible`].
///
/// Clearing the top 3 bits bounds a secret by 2^253, below the BN254 scalar modulus.
const FIELD_COMPATIBLE_TOP_BYTE_MASK: u8 = 0x1f;

/// How freshly drawn secrets are shaped.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, JsonSchema, PartialEq, Eq, Default)]
pub enum SecretMask {
    /// Use all 256 random bits; the hashing service reduces the value into the field.
    #[serde(rename = "none")]
    Unmasked,
    /// Clear the top 3 bits so the secret is already a canonical field element.
    #[default]
    #[serde(rename = "field")]
    FieldCompatible,
}

impl SecretMask {
    /// Parse from CLI text (`none` or `field`).
    #[must_use]
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s {
            "none" => Some(Self::Unmasked),
            "field" => Some(Self::FieldCompatible),
            _ => None,
        }
    }

    fn apply(self, bytes: &mut [u8; SECRET_SIZE]) {
        match self {
            Self::Unmasked => {}
            Self::FieldCompatible => {
                if let Some(top) = bytes.first_mut() {
                    *top &= FIELD_COMPATIBLE_TOP_BYTE_MASK;
                }
            }
        }
    }
}

/// A recipient's blinding secret.
///
/// The bytes are wiped when the value is dropped and never printed by `Debug`. Equality runs
/// in constant time.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Secret([u8; SECRET_SIZE]);

impl Secret {
    /// Wrap existing secret bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; SECRET_SIZE]) -> Self {
        Self(bytes)
    }

    /// Draw a fresh secret from a cryptographic RNG.
    pub fn random<R: CryptoRng + ?Sized>(rng: &mut R, mask: SecretMask) -> Self {
        let mut bytes = [0_u8; SECRET_SIZE];
        rng.fill_bytes(&mut bytes);
        mask.apply(&mut bytes);
        let secret = Self(bytes);
        bytes.zeroize();
        secret
    }

    /// Borrow the raw secret bytes.
    #[must_use]
    pub const fn expose_bytes(&self) -> &[u8; SECRET_SIZE] {
        &self.0
    }

    /// Fixed-width encoding used as a hash input.
    #[must_use]
    pub const fn to_field_element(&self) -> FieldElement {
        FieldElement::from_bytes(self.0)
    }
}

impl ConstantTimeEq for Secret {
    fn ct_eq(&self, other: &Self) -> subtle::Choice {
        self.0.as_slice().ct_eq(other.0.as_slice())
    }
}

impl PartialEq for Secret {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Secret {}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(<redacted>)")
    }
}

impl AsRef<[u8]> for Secret {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<Vec<u8>> for Secret {
    type Error = MalformedInputError;

    fn try_from(mut bytes: Vec<u8>) -> Result<Self, Self::Error> {
        let result = <[u8; SECRET_SIZE]>::try_from(bytes.as_slice())
            .map(Self)
            .map_err(|_| MalformedInputError::SecretLength(bytes.len()));
        bytes.zeroize();
        result
    }
}

/// Draws one secret per recipient with a fixed mask.
pub struct SecretGenerator<R> {
    rng: R,
    mask: SecretMask,
}

impl<R: CryptoRng> SecretGenerator<R> {
    /// Create a generator over `rng` applying `mask` to every secret.
    pub const fn new(rng: R, mask: SecretMask) -> Self {
        Self { rng, mask }
    }

    /// The mask applied to generated secrets.
    pub const fn mask(&self) -> SecretMask {
        self.mask
    }

    /// Draw the next secret.
    pub fn generate(&mut self) -> Secret {
        Secret::random(&mut self.rng, self.mask)
    }
}
