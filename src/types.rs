//! Ledger value objects referenced by the settings document.
//!
//! These mirror the identifiers a ledger API exchanges: the network being
//! checked, accounts used to originate transactions, and the currencies they
//! hold. Decoding is strict; semantic checks live in [`crate::asserter`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Free-form metadata attached to an identifier.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// Identifies the blockchain and network a check runs against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkIdentifier {
    pub blockchain: String,

    pub network: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_network_identifier: Option<SubNetworkIdentifier>,
}

impl NetworkIdentifier {
    pub fn new(blockchain: impl Into<String>, network: impl Into<String>) -> Self {
        Self {
            blockchain: blockchain.into(),
            network: network.into(),
            sub_network_identifier: None,
        }
    }
}

impl fmt::Display for NetworkIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.blockchain, self.network)?;
        if let Some(ref sub) = self.sub_network_identifier {
            write!(f, ":{}", sub.network)?;
        }
        Ok(())
    }
}

/// Shard or sub-chain within a network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubNetworkIdentifier {
    pub network: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Account on the network under test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccountIdentifier {
    pub address: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_account: Option<SubAccountIdentifier>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl AccountIdentifier {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            sub_account: None,
            metadata: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubAccountIdentifier {
    pub address: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Currency held by an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Currency {
    pub symbol: String,

    /// Number of decimal places in the standard unit representation.
    pub decimals: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Currency {
    pub fn new(symbol: impl Into<String>, decimals: i32) -> Self {
        Self {
            symbol: symbol.into(),
            decimals,
            metadata: None,
        }
    }
}

/// Signature curve tag of a key pair.
///
/// Kept as the raw tag so an unsupported curve surfaces as a validation
/// failure naming the tag instead of a decode failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurveType(String);

impl CurveType {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
