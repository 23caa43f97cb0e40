//! Semantic checks for ledger value objects.
//!
//! The validator consults an [`Asserter`] for every identifier it cannot
//! judge structurally on its own. [`StructuralAsserter`] covers the rules
//! that hold for any ledger; deployments with stricter requirements inject
//! their own implementation through [`crate::config::ConfigLoader`].

use crate::error::AssertionError;
use crate::types::{AccountIdentifier, Currency, CurveType, NetworkIdentifier};

/// Curve tags accepted by [`StructuralAsserter`].
pub const SUPPORTED_CURVE_TYPES: &[&str] = &[
    "secp256k1",
    "secp256k1_bip340",
    "secp256r1",
    "edwards25519",
    "tweedle",
    "pallas",
];

pub trait Asserter {
    fn network_identifier(&self, network: &NetworkIdentifier) -> Result<(), AssertionError>;

    fn curve_type(&self, curve: &CurveType) -> Result<(), AssertionError>;

    fn account_identifier(&self, account: &AccountIdentifier) -> Result<(), AssertionError>;

    fn currency(&self, currency: &Currency) -> Result<(), AssertionError>;
}

/// Ledger-agnostic asserter: required fields present, curve tag known.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralAsserter;

impl Asserter for StructuralAsserter {
    fn network_identifier(&self, network: &NetworkIdentifier) -> Result<(), AssertionError> {
        if network.blockchain.is_empty() {
            return Err(AssertionError::NetworkBlockchainMissing);
        }
        if network.network.is_empty() {
            return Err(AssertionError::NetworkNetworkMissing);
        }
        if let Some(ref sub) = network.sub_network_identifier {
            if sub.network.is_empty() {
                return Err(AssertionError::SubNetworkMissing);
            }
        }
        Ok(())
    }

    fn curve_type(&self, curve: &CurveType) -> Result<(), AssertionError> {
        if SUPPORTED_CURVE_TYPES.contains(&curve.as_str()) {
            Ok(())
        } else {
            Err(AssertionError::UnsupportedCurveType(curve.to_string()))
        }
    }

    fn account_identifier(&self, account: &AccountIdentifier) -> Result<(), AssertionError> {
        if account.address.is_empty() {
            return Err(AssertionError::AccountAddressMissing);
        }
        if let Some(ref sub) = account.sub_account {
            if sub.address.is_empty() {
                return Err(AssertionError::SubAccountAddressMissing);
            }
        }
        Ok(())
    }

    fn currency(&self, currency: &Currency) -> Result<(), AssertionError> {
        if currency.symbol.is_empty() {
            return Err(AssertionError::CurrencySymbolEmpty);
        }
        if currency.decimals < 0 {
            return Err(AssertionError::CurrencyDecimalsNegative(currency.decimals));
        }
        Ok(())
    }
}
