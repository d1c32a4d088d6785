use std::fmt;
use std::str::FromStr;

use super::error::MalformedInputError;
use super::field::FieldElement;

/// One-time claim tag derived from a recipient's secret and leaf index.
///
/// Kept distinct from leaf values so the two are never confused when recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Nullifier(FieldElement);

impl Nullifier {
    /// Wrap a hash output as a nullifier.
    #[must_use]
    pub const fn new(value: FieldElement) -> Self {
        Self(value)
    }

    /// The nullifier as a field element.
    #[must_use]
    pub const fn to_field_element(&self) -> FieldElement {
        self.0
    }

    /// The 32 big-endian bytes recorded by the ledger.
    #[must_use]
    pub const fn to_bytes(&self) -> [u8; 32] {
        self.0.to_bytes()
    }
}

impl From<FieldElement> for Nullifier {
    fn from(value: FieldElement) -> Self {
        Self(value)
    }
}

impl fmt::Display for Nullifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Nullifier {
    type Err = MalformedInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldElement::from_hex(s).map(Self)
    }
}
