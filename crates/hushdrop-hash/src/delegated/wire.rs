//! JSON contract of the hashing service.
//!
//! Request: `{"inputs": ["<hex>", ...]}` with minimal-length lowercase hex and no prefix.
//! Response: `{"hash": "<hex>"}`, at most 64 digits, optional `0x`.

use hushdrop_core::base::FieldElement;
use serde::{Deserialize, Serialize};

use crate::HashServiceError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct HashRequest {
    inputs: Vec<String>,
}

impl HashRequest {
    pub(crate) fn new(inputs: &[FieldElement]) -> Self {
        Self {
            inputs: inputs.iter().map(FieldElement::to_minimal_hex).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct HashResponse {
    hash: String,
}

pub(crate) fn decode_response(body: &str) -> Result<FieldElement, HashServiceError> {
    let response: HashResponse = serde_json::from_str(body)
        .map_err(|e| HashServiceError::MalformedResponse(e.to_string()))?;
    FieldElement::from_loose_hex(&response.hash)
        .map_err(|e| HashServiceError::MalformedResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;

    use super::*;

    #[test]
    fn request_uses_minimal_hex() {
        let request = HashRequest::new(&[
            FieldElement::ZERO,
            FieldElement::from_u64(0x0102),
            FieldElement::from_bytes([0xab; 32]),
        ]);
        let json = serde_json::to_string(&request).expect("request serializes");
        assert_eq!(
            json,
            format!(r#"{{"inputs":["00","0102","{}"]}}"#, "ab".repeat(32))
        );
    }

    #[test]
    fn response_accepts_prefix_and_odd_length() {
        let expected = FieldElement::from_u64(0xabc);
        assert_eq!(
            decode_response(r#"{"hash":"0xabc"}"#).expect("valid response"),
            expected
        );
        assert_eq!(
            decode_response(r#"{"hash":"abc"}"#).expect("valid response"),
            expected
        );
    }

    #[test]
    fn response_full_width() {
        let body = r#"{"hash":"1e4b5f8a2c7d9e0f1a2b3c4d5e6f708192a3b4c5d6e7f8091a2b3c4d5e6f7081"}"#;
        assert_eq!(
            decode_response(body).expect("valid response"),
            FieldElement::from_bytes(hex!(
                "1e4b5f8a2c7d9e0f1a2b3c4d5e6f708192a3b4c5d6e7f8091a2b3c4d5e6f7081"
            ))
        );
    }

    #[test]
    fn malformed_responses_are_rejected() {
        for body in [
            "not json",
            r#"{"digest":"00"}"#,
            r#"{"hash":""}"#,
            r#"{"hash":"0x"}"#,
            r#"{"hash":"zz"}"#,
            &format!(r#"{{"hash":"{}"}}"#, "1".repeat(65)),
        ] {
            assert!(
                matches!(
                    decode_response(body),
                    Err(HashServiceError::MalformedResponse(_))
                ),
                "accepted {body}"
            );
        }
    }
}
