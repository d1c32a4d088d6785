use thiserror::Error;

/// A wallet, amount or byte string that cannot be encoded into its fixed-width form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedInputError {
    /// Hex text could not be decoded.
    #[error("Invalid hex `{value}`: {reason}")]
    InvalidHex {
        /// The offending text.
        value: String,
        /// Decoder message.
        reason: String,
    },

    /// Hex text decoded to the wrong number of bytes.
    #[error("Expected {expected} hex digits, got {actual}")]
    HexLength {
        /// Expected number of hex digits.
        expected: usize,
        /// Actual number of hex digits.
        actual: usize,
    },

    /// Wallet identifier is neither a base58 address nor a short label.
    #[error("Invalid wallet identifier `{0}`")]
    InvalidWallet(String),

    /// Amount starts with a minus sign.
    #[error("Amount `{0}` is negative")]
    NegativeAmount(String),

    /// Amount is not a plain decimal number.
    #[error("Amount `{0}` is not a decimal number")]
    InvalidAmount(String),

    /// Amount has more fractional digits than the denomination allows.
    #[error("Amount `{amount}` has more than {decimals} fractional digits")]
    ExcessPrecision {
        /// The offending amount text.
        amount: String,
        /// Decimals supported by the denomination.
        decimals: u8,
    },

    /// Amount does not fit in 64 bits of the smallest unit.
    #[error("Amount `{0}` exceeds the 64-bit denomination width")]
    AmountOverflow(String),

    /// Decimals setting is larger than a 64-bit amount can represent.
    #[error("Unsupported decimals {0}")]
    InvalidDecimals(u8),

    /// Secret bytes have the wrong length.
    #[error("Secret must be 32 bytes, got {0}")]
    SecretLength(usize),
}
