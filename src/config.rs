//! Resolver configuration
//!
//! RPC endpoints per namespace, loaded from the environment.
//!
//! ```text
//! ENS_RPC_URL=https://eth.merkle.io          # optional, mainnet
//! BASE_RPC_URL=https://mainnet.base.org      # optional, Base
//! CYBER_RPC_URL=https://cyber.alt.technology # optional, Cyber
//! ```

use eyre::Result;
use std::env;

use crate::chains::ChainConfig;
use crate::redact::Redacted;
use crate::types::Namespace;

/// Chains backing each namespace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Mainnet (ENS)
    pub ens: ChainConfig,
    /// Base (Basenames)
    pub base: ChainConfig,
    /// Cyber (CyberID)
    pub cyber: ChainConfig,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            ens: ChainConfig::mainnet(),
            base: ChainConfig::base(),
            cyber: ChainConfig::cyber(),
        }
    }
}

impl ResolverConfig {
    /// Load configuration from environment
    pub fn load() -> Result<Self> {
        // Try to load .env file
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!("Loaded .env from {:?}", path);
        }

        let defaults = Self::default();
        let config = Self {
            ens: rpc_override(defaults.ens, "ENS_RPC_URL"),
            base: rpc_override(defaults.base, "BASE_RPC_URL"),
            cyber: rpc_override(defaults.cyber, "CYBER_RPC_URL"),
        };

        config.validate()?;

        tracing::info!(
            ens_rpc = %Redacted(&config.ens.rpc_url),
            base_rpc = %Redacted(&config.base.rpc_url),
            cyber_rpc = %Redacted(&config.cyber.rpc_url),
            "Resolver configuration loaded"
        );

        Ok(config)
    }

    /// Validate every chain's endpoint
    pub fn validate(&self) -> Result<()> {
        self.ens.validate()?;
        self.base.validate()?;
        self.cyber.validate()?;
        Ok(())
    }

    /// Chain backing a namespace
    pub fn chain(&self, namespace: Namespace) -> ChainConfig {
        match namespace {
            Namespace::Ens => self.ens.clone(),
            Namespace::Base => self.base.clone(),
            Namespace::Cyber => self.cyber.clone(),
        }
    }
}

fn rpc_override(chain: ChainConfig, var: &str) -> ChainConfig {
    match env::var(var) {
        Ok(url) if !url.trim().is_empty() => chain.with_rpc_url(url.trim()),
        _ => chain,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        env::remove_var("ENS_RPC_URL");
        env::remove_var("BASE_RPC_URL");
        env::remove_var("CYBER_RPC_URL");
    }

    #[test]
    fn test_default_endpoints() {
        let config = ResolverConfig::default();
        assert_eq!(config.chain(Namespace::Ens).chain_id, 1);
        assert_eq!(config.chain(Namespace::Base).rpc_url, "https://mainnet.base.org");
        assert_eq!(config.chain(Namespace::Cyber).chain_id, 7560);
    }

    #[test]
    #[serial]
    fn test_load_without_overrides() {
        clear_env();
        let config = ResolverConfig::load().unwrap();
        assert_eq!(config, ResolverConfig::default());
    }

    #[test]
    #[serial]
    fn test_load_with_override() {
        clear_env();
        env::set_var("BASE_RPC_URL", " https://my.custom.base.rpc ");

        let config = ResolverConfig::load().unwrap();
        assert_eq!(config.base.rpc_url, "https://my.custom.base.rpc");
        assert_eq!(config.base.chain_id, 8453);
        assert_eq!(config.ens, ChainConfig::mainnet());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_rejects_invalid_override() {
        clear_env();
        env::set_var("ENS_RPC_URL", "ftp://mainnet.example.com");

        assert!(ResolverConfig::load().is_err());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_blank_override_ignored() {
        clear_env();
        env::set_var("CYBER_RPC_URL", "   ");

        let config = ResolverConfig::load().unwrap();
        assert_eq!(config.cyber, ChainConfig::cyber());

        clear_env();
    }
}
