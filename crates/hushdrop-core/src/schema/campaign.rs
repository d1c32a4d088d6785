use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::base::{FieldElement, HashProviderKind, SecretMask};

/// Public description of a built campaign.
///
/// This is what the campaign authority publishes next to the on-chain root.
#[serde_as]
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
pub struct CampaignConfiguration {
    /// Merkle root of the commitment tree.
    #[serde_as(as = "DisplayFromStr")]
    #[schemars(with = "String")]
    pub root: FieldElement,
    /// Tree depth.
    pub depth: u8,
    /// Number of leaves (`2^depth`).
    pub capacity: usize,
    /// Number of real (non-padding) leaves.
    pub recipient_count: usize,
    /// Hash provider the tree was built with. Proofs must be checked with the same one.
    pub hasher: HashProviderKind,
    /// Mask applied to generated secrets.
    pub secret_mask: SecretMask,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_json_format() {
        let json = format!(
            r#"{{
              "root": "{}",
              "depth": 8,
              "capacity": 256,
              "recipient_count": 2,
              "hasher": "delegated",
              "secret_mask": "field"
            }}"#,
            "05".repeat(32)
        );

        let config: CampaignConfiguration =
            serde_json::from_str(&json).expect("Failed to deserialize JSON");

        assert_eq!(
            config,
            CampaignConfiguration {
                root: FieldElement::from_bytes([5_u8; 32]),
                depth: 8,
                capacity: 256,
                recipient_count: 2,
                hasher: HashProviderKind::Delegated,
                secret_mask: SecretMask::FieldCompatible,
            }
        );
    }

    #[test]
    fn rejects_non_canonical_root() {
        let json = r#"{
          "root": "0x05",
          "depth": 8,
          "capacity": 256,
          "recipient_count": 0,
          "hasher": "local",
          "secret_mask": "none"
        }"#;
        assert!(serde_json::from_str::<CampaignConfiguration>(json).is_err());
    }
}
