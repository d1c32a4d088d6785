//! Allocation amounts in the ledger's smallest unit.

use std::fmt;
use std::str::FromStr;

use super::error::MalformedInputError;
use super::field::FieldElement;

/// Decimals of the default denomination (lamports per SOL).
pub const DEFAULT_DECIMALS: u8 = 9;

/// Largest decimals setting whose scale (`10^decimals`) fits in a `u64`.
pub const MAX_DECIMALS: u8 = 19;

/// A non-negative amount in the smallest unit of the denomination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(u64);

impl Amount {
    /// Wrap an amount already expressed in the smallest unit.
    #[must_use]
    pub const fn from_base_units(units: u64) -> Self {
        Self(units)
    }

    /// The amount in the smallest unit.
    #[must_use]
    pub const fn base_units(&self) -> u64 {
        self.0
    }

    /// Fixed-width encoding used as the leaf commitment input.
    #[must_use]
    pub const fn to_field_element(&self) -> FieldElement {
        FieldElement::from_u64(self.0)
    }

    /// Parse a human decimal amount such as `"1.5"` into smallest units.
    ///
    /// With `decimals = 9`, `"1.5"` becomes `1_500_000_000`.
    ///
    /// # Errors
    /// Returns an error if the amount is negative, not a plain decimal number, has more
    /// fractional digits than `decimals`, or does not fit in 64 bits.
    pub fn parse_decimal(input: &str, decimals: u8) -> Result<Self, MalformedInputError> {
        if decimals > MAX_DECIMALS {
            return Err(MalformedInputError::InvalidDecimals(decimals));
        }

        let text = input.trim();
        if text.starts_with('-') {
            return Err(MalformedInputError::NegativeAmount(input.to_owned()));
        }

        let (whole, fraction) = text.split_once('.').unwrap_or((text, ""));
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction)
        {
            return Err(MalformedInputError::InvalidAmount(input.to_owned()));
        }

        let width = usize::from(decimals);
        if fraction.len() > width {
            return Err(MalformedInputError::ExcessPrecision {
                amount: input.to_owned(),
                decimals,
            });
        }

        let overflow = || MalformedInputError::AmountOverflow(input.to_owned());

        let whole_units = if whole.is_empty() {
            0
        } else {
            whole.parse::<u64>().map_err(|_| overflow())?
        };

        let padded_fraction = format!("{fraction:0<width$}");
        let fraction_units = if padded_fraction.is_empty() {
            0
        } else {
            padded_fraction.parse::<u64>().map_err(|_| overflow())?
        };

        let scale = 10_u64
            .checked_pow(u32::from(decimals))
            .ok_or_else(overflow)?;

        whole_units
            .checked_mul(scale)
            .and_then(|units| units.checked_add(fraction_units))
            .map(Self)
            .ok_or_else(overflow)
    }
}

impl From<u64> for Amount {
    fn from(units: u64) -> Self {
        Self(units)
    }
}

/// Displays the amount in smallest units.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses an integer amount in smallest units.
impl FromStr for Amount {
    type Err = MalformedInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_decimal(s, 0)
    }
}
