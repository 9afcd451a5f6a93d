//! Reverse resolvers on secondary chains
//!
//! Basenames (Base) and CyberID (Cyber) both expose `name(bytes32)` on a
//! single resolver contract keyed directly by the chain's reverse node; no
//! registry hop is needed.

use alloy::primitives::Address;
use async_trait::async_trait;
use tracing::debug;

use super::{ensure_chain, read_contract, Resolver};
use crate::chains::ChainConfig;
use crate::error::Result;
use crate::evm::contracts::{L2Resolver, BASE_L2_RESOLVER_ADDRESS, CYBER_RESOLVER_ADDRESS};
use crate::evm::ReadTransport;
use crate::reverse_node::reverse_node_for;
use crate::types::Namespace;

/// Secondary namespace resolver bound to one contract on one chain
#[derive(Debug, Clone)]
pub struct L2ReverseResolver {
    namespace: Namespace,
    chain: ChainConfig,
    resolver: Address,
}

impl L2ReverseResolver {
    /// Create a resolver for `namespace` backed by `resolver` on `chain`
    pub fn new(namespace: Namespace, chain: ChainConfig, resolver: Address) -> Self {
        Self {
            namespace,
            chain,
            resolver,
        }
    }

    /// Basenames on Base mainnet
    pub fn base(chain: ChainConfig) -> Self {
        Self::new(Namespace::Base, chain, BASE_L2_RESOLVER_ADDRESS)
    }

    /// CyberID on Cyber mainnet
    pub fn cyber(chain: ChainConfig) -> Self {
        Self::new(Namespace::Cyber, chain, CYBER_RESOLVER_ADDRESS)
    }

    /// Resolver contract address
    pub fn resolver_address(&self) -> Address {
        self.resolver
    }
}

#[async_trait]
impl Resolver for L2ReverseResolver {
    fn namespace(&self) -> Namespace {
        self.namespace
    }

    fn chain(&self) -> &ChainConfig {
        &self.chain
    }

    async fn resolve(
        &self,
        address: Address,
        transport: &dyn ReadTransport,
    ) -> Result<Option<String>> {
        ensure_chain(&self.chain, transport)?;

        let node = reverse_node_for(&address, &self.chain);
        debug!(
            namespace = %self.namespace,
            address = %address,
            node = %node,
            "Querying reverse resolver"
        );

        let name = read_contract(transport, self.resolver, L2Resolver::nameCall { node })
            .await?
            ._0;

        if name.is_empty() {
            return Ok(None);
        }
        Ok(Some(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::parse_evm_address;
    use crate::chains::{BASE_CHAIN_ID, CYBER_CHAIN_ID};
    use crate::error::ResolveError;
    use crate::reverse_node::reverse_node;
    use crate::testing::MockTransport;
    use alloy::primitives::{Bytes, B256};
    use std::str::FromStr;

    const OBLIQUES: &str = "0xC79E675A8Dd11fBEc7Ea1042efB6686C9DfdC57E";

    fn obliques() -> Address {
        parse_evm_address(OBLIQUES).unwrap()
    }

    fn name_call(chain_id: u64) -> L2Resolver::nameCall {
        L2Resolver::nameCall {
            node: reverse_node(&obliques(), chain_id),
        }
    }

    #[tokio::test]
    async fn test_base_resolves_golden_node() {
        // The mock only answers the published reverse node for this address
        let node = B256::from_str(
            "0x66b58738193139f79c2f250c0eddb5d4deac7ef6a62f6775a08eeb095e105cdb",
        )
        .unwrap();
        let transport = MockTransport::new(BASE_CHAIN_ID).with_return(
            BASE_L2_RESOLVER_ADDRESS,
            L2Resolver::nameCall { node },
            "obliques.base.eth".to_string(),
        );

        let resolver = L2ReverseResolver::base(ChainConfig::base());
        let name = resolver.resolve(obliques(), &transport).await.unwrap();
        assert_eq!(name.as_deref(), Some("obliques.base.eth"));
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_cyber_uses_addr_reverse_node() {
        let transport = MockTransport::new(CYBER_CHAIN_ID).with_return(
            CYBER_RESOLVER_ADDRESS,
            name_call(CYBER_CHAIN_ID),
            "obliques.cyber".to_string(),
        );

        let resolver = L2ReverseResolver::cyber(ChainConfig::cyber());
        let name = resolver.resolve(obliques(), &transport).await.unwrap();
        assert_eq!(name.as_deref(), Some("obliques.cyber"));
    }

    #[tokio::test]
    async fn test_empty_name_is_not_found() {
        let transport = MockTransport::new(BASE_CHAIN_ID).with_return(
            BASE_L2_RESOLVER_ADDRESS,
            name_call(BASE_CHAIN_ID),
            String::new(),
        );

        let resolver = L2ReverseResolver::base(ChainConfig::base());
        assert_eq!(resolver.resolve(obliques(), &transport).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_revert_propagates() {
        let transport = MockTransport::new(BASE_CHAIN_ID).with_error(
            BASE_L2_RESOLVER_ADDRESS,
            name_call(BASE_CHAIN_ID),
            ResolveError::ContractCall("execution reverted".to_string()),
        );

        let resolver = L2ReverseResolver::base(ChainConfig::base());
        let err = resolver.resolve(obliques(), &transport).await.unwrap_err();
        assert!(matches!(err, ResolveError::ContractCall(_)));
    }

    #[tokio::test]
    async fn test_malformed_response_is_contract_error() {
        let transport = MockTransport::new(BASE_CHAIN_ID).with_raw(
            BASE_L2_RESOLVER_ADDRESS,
            name_call(BASE_CHAIN_ID),
            Bytes::from(vec![0xde, 0xad]),
        );

        let resolver = L2ReverseResolver::base(ChainConfig::base());
        let err = resolver.resolve(obliques(), &transport).await.unwrap_err();
        assert!(matches!(err, ResolveError::ContractCall(_)));
    }

    #[tokio::test]
    async fn test_wrong_chain_makes_no_call() {
        let transport = MockTransport::new(1);

        let resolver = L2ReverseResolver::base(ChainConfig::base());
        let err = resolver.resolve(obliques(), &transport).await.unwrap_err();
        assert!(matches!(err, ResolveError::ChainMismatch { .. }));
        assert_eq!(transport.call_count(), 0);
    }

    #[test]
    fn test_constructors() {
        let base = L2ReverseResolver::base(ChainConfig::base());
        assert_eq!(base.namespace(), Namespace::Base);
        assert_eq!(base.resolver_address(), BASE_L2_RESOLVER_ADDRESS);

        let cyber = L2ReverseResolver::cyber(ChainConfig::cyber());
        assert_eq!(cyber.namespace(), Namespace::Cyber);
        assert_eq!(cyber.chain().chain_id, CYBER_CHAIN_ID);
    }
}
