//! Chain Configuration
//!
//! Describes the chains the supported namespaces live on, their default
//! public RPC endpoints, and whether their reverse registry shares the
//! primary `addr.reverse` namespace.

use eyre::{eyre, Result};

use crate::redact::Redacted;

/// Ethereum mainnet chain ID
pub const MAINNET_CHAIN_ID: u64 = 1;

/// Base mainnet chain ID
pub const BASE_CHAIN_ID: u64 = 8453;

/// Cyber mainnet chain ID
pub const CYBER_CHAIN_ID: u64 = 7560;

/// Chains whose reverse registry lives under `addr.reverse`
///
/// Mainnet is the primary chain; Cyber's public resolver reuses the same
/// reverse namespace.
pub const ADDR_REVERSE_CHAINS: &[u64] = &[MAINNET_CHAIN_ID, CYBER_CHAIN_ID];

/// Default mainnet RPC endpoint
pub const DEFAULT_MAINNET_RPC_URL: &str = "https://eth.merkle.io";

/// Default Base RPC endpoint
pub const DEFAULT_BASE_RPC_URL: &str = "https://mainnet.base.org";

/// Default Cyber RPC endpoint
pub const DEFAULT_CYBER_RPC_URL: &str = "https://cyber.alt.technology";

// ============================================================================
// URL Validation
// ============================================================================

/// Validates that a URL uses http/https and has a host component.
pub fn validate_rpc_url(url_str: &str, name: &str) -> Result<()> {
    let parsed = url::Url::parse(url_str)
        .map_err(|e| eyre!("{} must be a valid URL: {}", name, e))?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(eyre!(
            "{} must use http:// or https:// scheme, got {}",
            name,
            scheme
        ));
    }

    if parsed.host_str().is_none() {
        return Err(eyre!("{} must have a host component", name));
    }

    if scheme == "http" {
        tracing::warn!(
            url = %Redacted(url_str),
            "{} uses unencrypted http:// — use https:// in production",
            name
        );
    }

    Ok(())
}

// ============================================================================
// Chain Configuration
// ============================================================================

/// Configuration for a single EVM chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainConfig {
    /// Human-readable name (e.g., "mainnet", "base")
    pub name: String,
    /// Native EVM chain ID
    pub chain_id: u64,
    /// RPC endpoint URL
    pub rpc_url: String,
    /// Reverse records live under `addr.reverse` instead of a SLIP-44 coin type
    pub shares_primary_reverse: bool,
}

impl ChainConfig {
    /// Create a chain config, deriving the reverse namespace from the chain ID
    pub fn new(name: &str, chain_id: u64, rpc_url: &str) -> Self {
        Self {
            name: name.to_string(),
            chain_id,
            rpc_url: rpc_url.to_string(),
            shares_primary_reverse: ADDR_REVERSE_CHAINS.contains(&chain_id),
        }
    }

    /// Ethereum mainnet with the default public endpoint
    pub fn mainnet() -> Self {
        Self::new("mainnet", MAINNET_CHAIN_ID, DEFAULT_MAINNET_RPC_URL)
    }

    /// Base mainnet with the default public endpoint
    pub fn base() -> Self {
        Self::new("base", BASE_CHAIN_ID, DEFAULT_BASE_RPC_URL)
    }

    /// Cyber mainnet with the default public endpoint
    pub fn cyber() -> Self {
        Self::new("cyber", CYBER_CHAIN_ID, DEFAULT_CYBER_RPC_URL)
    }

    /// Replace the RPC endpoint, keeping everything else
    pub fn with_rpc_url(mut self, rpc_url: impl Into<String>) -> Self {
        self.rpc_url = rpc_url.into();
        self
    }

    /// Validate the chain configuration
    pub fn validate(&self) -> Result<()> {
        if self.rpc_url.is_empty() {
            return Err(eyre!("RPC URL is empty for chain {}", self.name));
        }
        validate_rpc_url(
            &self.rpc_url,
            &format!("{}_RPC_URL", self.name.to_uppercase()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_chains_reverse_namespace() {
        assert!(ChainConfig::mainnet().shares_primary_reverse);
        assert!(ChainConfig::cyber().shares_primary_reverse);
        assert!(!ChainConfig::base().shares_primary_reverse);
    }

    #[test]
    fn test_custom_chain_defaults_to_coin_type() {
        let chain = ChainConfig::new("arbitrum", 42161, "https://arb1.arbitrum.io/rpc");
        assert!(!chain.shares_primary_reverse);
    }

    #[test]
    fn test_with_rpc_url() {
        let chain = ChainConfig::base().with_rpc_url("https://my.custom.base.rpc");
        assert_eq!(chain.rpc_url, "https://my.custom.base.rpc");
        assert_eq!(chain.chain_id, BASE_CHAIN_ID);
    }

    #[test]
    fn test_validate_defaults() {
        assert!(ChainConfig::mainnet().validate().is_ok());
        assert!(ChainConfig::base().validate().is_ok());
        assert!(ChainConfig::cyber().validate().is_ok());
    }

    #[test]
    fn test_validate_empty_url() {
        let chain = ChainConfig::base().with_rpc_url("");
        assert!(chain.validate().is_err());
    }

    #[test]
    fn test_validate_rpc_url_rejects_scheme() {
        assert!(validate_rpc_url("ws://localhost:8545", "TEST").is_err());
        assert!(validate_rpc_url("not a url", "TEST").is_err());
    }

    #[test]
    fn test_validate_rpc_url_allows_http() {
        assert!(validate_rpc_url("http://localhost:8545", "TEST").is_ok());
    }
}
