use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_with::hex::Hex;
use serde_with::serde_as;

use crate::base::{Amount, DEFAULT_DECIMALS, MalformedInputError, Recipient, Secret, WalletId};

/// The ordered recipient list of a campaign.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
pub struct RecipientsFile {
    /// Fractional digits of the human amount notation (9 for SOL/lamports).
    #[serde(default = "default_decimals")]
    pub decimals: u8,
    /// Recipients in leaf order.
    pub recipients: Vec<RecipientEntry>,
}

/// A single recipient as written by the campaign authority.
#[serde_as]
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
pub struct RecipientEntry {
    /// Wallet identifier: a base58 address or a label of at most 31 bytes.
    pub wallet: String,
    /// Decimal amount, e.g. `"1.5"`.
    pub amount: String,
    /// Optional pre-assigned secret as 64 hex digits.
    #[serde_as(as = "Option<Hex>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Option<String>")]
    pub secret: Option<Secret>,
}

const fn default_decimals() -> u8 {
    DEFAULT_DECIMALS
}

impl RecipientsFile {
    /// Parse every entry into a [`Recipient`], preserving order.
    ///
    /// # Errors
    /// Returns the first wallet or amount that cannot be encoded.
    pub fn to_recipients(&self) -> Result<Vec<Recipient>, MalformedInputError> {
        self.recipients
            .iter()
            .map(|entry| {
                Ok(Recipient {
                    wallet: WalletId::parse(&entry.wallet)?,
                    amount: Amount::parse_decimal(&entry.amount, self.decimals)?,
                    secret: entry.secret.clone(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_json_format() {
        // Documents the expected JSON format for campaign authorities
        let json = format!(
            r#"{{
              "decimals": 9,
              "recipients": [
                {{ "wallet": "walletA", "amount": "1.5" }},
                {{ "wallet": "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU", "amount": "0.000002", "secret": "{}" }}
              ]
            }}"#,
            "01".repeat(32)
        );

        let file: RecipientsFile = serde_json::from_str(&json).expect("Failed to deserialize JSON");
        let recipients = file.to_recipients().expect("recipients should parse");

        assert_eq!(recipients.len(), 2);
        assert_eq!(recipients[0].wallet.as_str(), "walletA");
        assert_eq!(recipients[0].amount.base_units(), 1_500_000_000);
        assert!(recipients[0].secret.is_none());
        assert_eq!(
            recipients[1].wallet.as_str(),
            "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU"
        );
        assert_eq!(recipients[1].amount.base_units(), 2_000);
        assert_eq!(
            recipients[1].secret,
            Some(Secret::from_bytes([1_u8; 32]))
        );
    }

    #[test]
    fn decimals_default_to_nine() {
        let file: RecipientsFile =
            serde_json::from_str(r#"{ "recipients": [ { "wallet": "w", "amount": "1" } ] }"#)
                .expect("Failed to deserialize JSON");
        assert_eq!(file.decimals, DEFAULT_DECIMALS);
        let recipients = file.to_recipients().expect("recipients should parse");
        assert_eq!(recipients[0].amount.base_units(), 1_000_000_000);
    }

    #[test]
    fn malformed_amount_is_reported() {
        let file = RecipientsFile {
            decimals: 9,
            recipients: vec![RecipientEntry {
                wallet: "w".to_owned(),
                amount: "-3".to_owned(),
                secret: None,
            }],
        };
        assert!(matches!(
            file.to_recipients(),
            Err(MalformedInputError::NegativeAmount(_))
        ));
    }
}
