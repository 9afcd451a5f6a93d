//! EVM address parsing and canonical text form
//!
//! Reverse resolution hashes the *text* of an address, so the canonical form
//! matters: lowercase hex, 40 characters, no `0x` prefix, no checksum casing.

use alloy::primitives::Address;

use crate::error::{ResolveError, Result};

/// Parse a 20-byte EVM address from hex (with or without 0x prefix)
///
/// Any casing is accepted; EIP-55 checksums are not enforced.
pub fn parse_evm_address(addr: &str) -> Result<Address> {
    let hex_str = addr.trim();
    let hex_str = hex_str
        .strip_prefix("0x")
        .or_else(|| hex_str.strip_prefix("0X"))
        .unwrap_or(hex_str);

    if hex_str.len() != 40 {
        return Err(ResolveError::Derivation(format!(
            "Invalid EVM address length: expected 40 hex chars, got {}",
            hex_str.len()
        )));
    }

    let bytes = hex::decode(hex_str)
        .map_err(|e| ResolveError::Derivation(format!("Invalid EVM address hex: {}", e)))?;

    Ok(Address::from_slice(&bytes))
}

/// Lowercase hex of the address without the 0x prefix
pub fn canonical_hex(address: &Address) -> String {
    hex::encode(address.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHECKSUMMED: &str = "0xC79E675A8Dd11fBEc7Ea1042efB6686C9DfdC57E";

    #[test]
    fn test_parse_mixed_case() {
        let addr = parse_evm_address(CHECKSUMMED).unwrap();
        assert_eq!(addr.as_slice()[0], 0xc7);
        assert_eq!(addr.as_slice()[19], 0x7e);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let upper = parse_evm_address(&CHECKSUMMED.to_uppercase().replace("0X", "0x")).unwrap();
        let lower = parse_evm_address(&CHECKSUMMED.to_lowercase()).unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_parse_without_prefix() {
        let addr = parse_evm_address("c79e675a8dd11fbec7ea1042efb6686c9dfdc57e").unwrap();
        assert_eq!(addr, parse_evm_address(CHECKSUMMED).unwrap());
    }

    #[test]
    fn test_parse_rejects_bad_length() {
        let err = parse_evm_address("0xdead").unwrap_err();
        assert!(matches!(err, ResolveError::Derivation(_)));
    }

    #[test]
    fn test_parse_rejects_non_hex() {
        let err = parse_evm_address("0xzz9e675a8dd11fbec7ea1042efb6686c9dfdc57e").unwrap_err();
        assert!(matches!(err, ResolveError::Derivation(_)));
    }

    #[test]
    fn test_canonical_hex_is_lowercase_without_prefix() {
        let addr = parse_evm_address(CHECKSUMMED).unwrap();
        assert_eq!(
            canonical_hex(&addr),
            "c79e675a8dd11fbec7ea1042efb6686c9dfdc57e"
        );
    }
}
