use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which hash provider built (or must verify) a commitment tree.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, JsonSchema, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum HashProviderKind {
    /// In-process placeholder hash, not circuit compatible.
    Local,
    /// Field-exact hash computed by the external hashing service.
    Delegated,
}

impl HashProviderKind {
    /// Parse from CLI/config text.
    #[must_use]
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s {
            "local" => Some(Self::Local),
            "delegated" => Some(Self::Delegated),
            _ => None,
        }
    }

    /// Stable one-byte tag used in binary artifacts.
    #[must_use]
    pub const fn tag(self) -> u8 {
        match self {
            Self::Local => 0,
            Self::Delegated => 1,
        }
    }

    /// Inverse of [`Self::tag`].
    #[must_use]
    pub const fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(Self::Local),
            1 => Some(Self::Delegated),
            _ => None,
        }
    }
}

impl fmt::Display for HashProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => f.write_str("local"),
            Self::Delegated => f.write_str("delegated"),
        }
    }
}
