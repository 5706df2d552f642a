// Path: crates/types/src/caip/mod.rs

//! Conversions between hex, decimal and CAIP-2 chain identifiers, and between
//! CAIP-10 account ids and plain addresses.
//!
//! Plugins and bridge providers speak CAIP while the EVM pipeline speaks
//! `0x`-prefixed hex, so every value crossing that boundary goes through here.

use crate::error::{AddressError, ChainIdError};
use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};
use std::fmt;
use std::str::FromStr;

/// The CAIP-2 namespace for EVM chains.
pub const EIP155_NAMESPACE: &str = "eip155";
/// The CAIP-2 identifier of Solana mainnet.
pub const SOLANA_MAINNET: &str = "solana:5eykt4UsFv8P8NJdTREpY1vzqKqZKvdp";
/// The decimal alias bridge providers use for Solana mainnet.
pub const SOLANA_DECIMAL_CHAIN_ID: u64 = 1_151_111_081_099_710;

/// A validated CAIP-2 chain identifier (`<namespace>:<reference>`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CaipChainId {
    namespace: String,
    reference: String,
}

fn valid_namespace(ns: &str) -> bool {
    (3..=8).contains(&ns.len())
        && ns
            .chars()
            .all(|c| c == '-' || c.is_ascii_lowercase() || c.is_ascii_digit())
}

fn valid_reference(reference: &str) -> bool {
    (1..=32).contains(&reference.len())
        && reference
            .chars()
            .all(|c| c == '-' || c == '_' || c.is_ascii_alphanumeric())
}

impl CaipChainId {
    /// Builds a chain id from its parts, validating both against CAIP-2.
    pub fn new(namespace: &str, reference: &str) -> Result<Self, ChainIdError> {
        if !valid_namespace(namespace) || !valid_reference(reference) {
            return Err(ChainIdError::InvalidCaip(format!(
                "{}:{}",
                namespace, reference
            )));
        }
        Ok(Self {
            namespace: namespace.to_string(),
            reference: reference.to_string(),
        })
    }

    /// Builds an `eip155` chain id from a numeric chain id.
    pub fn eip155(chain_id: u64) -> Self {
        Self {
            namespace: EIP155_NAMESPACE.to_string(),
            reference: chain_id.to_string(),
        }
    }

    /// The namespace part, e.g. `eip155`.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The reference part, e.g. `1`.
    pub fn reference(&self) -> &str {
        &self.reference
    }
}

impl FromStr for CaipChainId {
    type Err = ChainIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (namespace, reference) = s
            .split_once(':')
            .ok_or_else(|| ChainIdError::InvalidCaip(s.to_string()))?;
        Self::new(namespace, reference)
    }
}

impl TryFrom<String> for CaipChainId {
    type Error = ChainIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CaipChainId> for String {
    fn from(value: CaipChainId) -> Self {
        value.to_string()
    }
}

impl fmt::Display for CaipChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.reference)
    }
}

/// A chain id in any of the representations callers hand us.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainIdInput<'a> {
    /// A numeric chain id.
    Numeric(u64),
    /// A hex, decimal or CAIP-2 string.
    Text(&'a str),
}

impl From<u64> for ChainIdInput<'_> {
    fn from(value: u64) -> Self {
        Self::Numeric(value)
    }
}

impl<'a> From<&'a str> for ChainIdInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

/// Returns true for `0x` followed by at least one hex digit.
pub fn is_strict_hex(value: &str) -> bool {
    value
        .strip_prefix("0x")
        .map(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_ascii_hexdigit()))
        .unwrap_or(false)
}

/// Returns true when the value is a well-formed CAIP-2 chain id.
pub fn is_caip_chain_id(value: &str) -> bool {
    value.parse::<CaipChainId>().is_ok()
}

fn hex_to_u64(value: &str) -> Result<u64, ChainIdError> {
    let digits = value
        .strip_prefix("0x")
        .ok_or_else(|| ChainIdError::NotNumeric(value.to_string()))?;
    u64::from_str_radix(digits, 16).map_err(|_| ChainIdError::NotNumeric(value.to_string()))
}

/// Converts any supported chain id representation to CAIP-2.
pub fn normalize_chain_id<'a>(
    chain_id: impl Into<ChainIdInput<'a>>,
) -> Result<CaipChainId, ChainIdError> {
    let text = match chain_id.into() {
        ChainIdInput::Numeric(n) => n.to_string(),
        ChainIdInput::Text(s) => {
            if let Ok(caip) = s.parse::<CaipChainId>() {
                return Ok(caip);
            }
            if is_strict_hex(s) {
                return Ok(CaipChainId::eip155(hex_to_u64(s)?));
            }
            s.to_string()
        }
    };
    if text == SOLANA_DECIMAL_CHAIN_ID.to_string() {
        return SOLANA_MAINNET.parse();
    }
    CaipChainId::new(EIP155_NAMESPACE, &text)
}

/// Converts any supported chain id representation to its decimal form.
pub fn format_chain_id_to_dec<'a>(
    chain_id: impl Into<ChainIdInput<'a>>,
) -> Result<u64, ChainIdError> {
    match chain_id.into() {
        ChainIdInput::Numeric(n) => Ok(n),
        ChainIdInput::Text(s) if is_strict_hex(s) => hex_to_u64(s),
        ChainIdInput::Text(s) if s == SOLANA_MAINNET => Ok(SOLANA_DECIMAL_CHAIN_ID),
        ChainIdInput::Text(s) => {
            let reference = match s.parse::<CaipChainId>() {
                Ok(caip) => caip.reference,
                Err(_) => s.to_string(),
            };
            reference
                .parse::<u64>()
                .map_err(|_| ChainIdError::NotNumeric(s.to_string()))
        }
    }
}

/// The number of hex digits in an EVM address.
const ADDRESS_HEX_LEN: usize = 40;

/// Applies EIP-55 mixed-case checksumming to a hex address.
///
/// The input must be exactly 20 bytes of hex, with or without the `0x` prefix.
pub fn to_checksum_address(address: &str) -> Result<String, AddressError> {
    let lower = address
        .strip_prefix("0x")
        .unwrap_or(address)
        .to_ascii_lowercase();
    if lower.len() != ADDRESS_HEX_LEN || !lower.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(AddressError::InvalidHexAddress(address.to_string()));
    }
    let digest = hex::encode(Keccak256::digest(lower.as_bytes()));

    let mut out = String::with_capacity(lower.len() + 2);
    out.push_str("0x");
    for (c, h) in lower.chars().zip(digest.chars()) {
        let nibble = h.to_digit(16).unwrap_or(0);
        if c.is_ascii_alphabetic() && nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    Ok(out)
}

/// Formats an address for display and comparison.
///
/// Hex addresses are checksummed; CAIP-10 account ids are reduced to their
/// address segment. A hex value that is not 20 bytes long is an error.
pub fn format_address_to_string(address: Option<&str>) -> Result<Option<String>, AddressError> {
    let Some(address) = address.filter(|a| !a.is_empty()) else {
        return Ok(None);
    };
    if is_strict_hex(address) {
        return to_checksum_address(address).map(Some);
    }
    Ok(address.rsplit(':').next().map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caip_input_is_returned_unchanged() {
        let caip = normalize_chain_id("eip155:137").unwrap();
        assert_eq!(caip.to_string(), "eip155:137");
        assert_eq!(caip.namespace(), "eip155");
        assert_eq!(caip.reference(), "137");
    }

    #[test]
    fn hex_chain_id_becomes_eip155() {
        assert_eq!(normalize_chain_id("0x1").unwrap().to_string(), "eip155:1");
        assert_eq!(
            normalize_chain_id("0xa4b1").unwrap().to_string(),
            "eip155:42161"
        );
    }

    #[test]
    fn numeric_and_decimal_chain_ids_become_eip155() {
        assert_eq!(normalize_chain_id(10u64).unwrap().to_string(), "eip155:10");
        assert_eq!(normalize_chain_id("56").unwrap().to_string(), "eip155:56");
    }

    #[test]
    fn solana_decimal_alias_maps_to_solana_mainnet() {
        assert_eq!(
            normalize_chain_id("1151111081099710").unwrap().to_string(),
            SOLANA_MAINNET
        );
        assert_eq!(
            normalize_chain_id(SOLANA_DECIMAL_CHAIN_ID)
                .unwrap()
                .to_string(),
            SOLANA_MAINNET
        );
    }

    #[test]
    fn bare_0x_is_not_strict_hex() {
        assert!(!is_strict_hex("0x"));
        assert!(!is_strict_hex("0xzz"));
        assert!(is_strict_hex("0xAb"));
    }

    #[test]
    fn invalid_reference_is_rejected() {
        assert!(matches!(
            normalize_chain_id("not a chain"),
            Err(ChainIdError::InvalidCaip(_))
        ));
    }

    #[test]
    fn chain_id_to_decimal() {
        assert_eq!(format_chain_id_to_dec("0x89").unwrap(), 137);
        assert_eq!(format_chain_id_to_dec("eip155:10").unwrap(), 10);
        assert_eq!(
            format_chain_id_to_dec(SOLANA_MAINNET).unwrap(),
            SOLANA_DECIMAL_CHAIN_ID
        );
        assert_eq!(format_chain_id_to_dec(59144u64).unwrap(), 59144);
        assert!(format_chain_id_to_dec("bip122:000000000019d6689c085ae165831e93").is_err());
    }

    #[test]
    fn caip_chain_id_serializes_as_string() {
        let caip: CaipChainId = serde_json::from_str("\"eip155:1\"").unwrap();
        assert_eq!(caip, CaipChainId::eip155(1));
        assert_eq!(serde_json::to_string(&caip).unwrap(), "\"eip155:1\"");
        assert!(serde_json::from_str::<CaipChainId>("\"E:1\"").is_err());
    }

    #[test]
    fn hex_address_is_checksummed() {
        assert_eq!(
            format_address_to_string(Some("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed"))
                .unwrap()
                .unwrap(),
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"
        );
        assert_eq!(
            to_checksum_address("0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359").unwrap(),
            "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359"
        );
    }

    #[test]
    fn caip10_account_is_reduced_to_address() {
        assert_eq!(
            format_address_to_string(Some(
                "solana:5eykt4UsFv8P8NJdTREpY1vzqKqZKvdp:9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin"
            ))
            .unwrap()
            .unwrap(),
            "9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin"
        );
    }

    #[test]
    fn empty_address_is_none() {
        assert_eq!(format_address_to_string(None), Ok(None));
        assert_eq!(format_address_to_string(Some("")), Ok(None));
    }

    #[test]
    fn hex_of_wrong_length_is_rejected() {
        let long = format!("0x{}", "ab".repeat(40));
        assert_eq!(
            format_address_to_string(Some(&long)),
            Err(AddressError::InvalidHexAddress(long.clone()))
        );
        assert!(to_checksum_address("0x1234").is_err());
    }
}
