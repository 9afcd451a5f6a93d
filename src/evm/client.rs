//! EVM RPC Client Wrapper
//!
//! Provides the read-only transport resolvers query through, and the factory
//! that builds a default transport when the caller supplies none.

use std::sync::Arc;

use alloy::{
    primitives::{Address, Bytes},
    providers::{Provider, ProviderBuilder, RootProvider},
    rpc::types::{TransactionInput, TransactionRequest},
    transports::{
        http::{Client, Http},
        RpcError,
    },
};
use async_trait::async_trait;
use eyre::eyre;
use tracing::debug;

use crate::chains::ChainConfig;
use crate::error::{ResolveError, Result};
use crate::redact::Redacted;

/// Read-only contract call access to a single chain
///
/// Implementations must be safe to share across concurrent namespace
/// queries; they perform no local mutation between calls.
#[async_trait]
pub trait ReadTransport: Send + Sync {
    /// Chain this transport is bound to
    fn chain_id(&self) -> u64;

    /// Execute an `eth_call` against `to` with ABI-encoded `data`
    async fn call(&self, to: Address, data: Bytes) -> Result<Bytes>;
}

/// Builds the default transport for a chain
pub trait TransportFactory: Send + Sync {
    /// Create a transport bound to `chain`
    fn transport_for(&self, chain: &ChainConfig) -> Result<Arc<dyn ReadTransport>>;
}

/// Read-only EVM RPC client
pub struct EvmReadClient {
    /// The alloy provider
    provider: RootProvider<Http<Client>>,
    /// Chain ID
    chain_id: u64,
}

impl EvmReadClient {
    /// Create a new read-only EVM client
    pub fn new(rpc_url: &str, chain_id: u64) -> eyre::Result<Self> {
        let provider = ProviderBuilder::new().on_http(
            rpc_url
                .parse()
                .map_err(|e| eyre!("Invalid RPC URL: {}", e))?,
        );

        debug!(rpc_url = %Redacted(rpc_url), chain_id = chain_id, "Created read-only EVM client");

        Ok(Self { provider, chain_id })
    }

    /// Create a client for a configured chain
    pub fn for_chain(chain: &ChainConfig) -> eyre::Result<Self> {
        Self::new(&chain.rpc_url, chain.chain_id)
    }

    /// Get the underlying provider
    pub fn provider(&self) -> &RootProvider<Http<Client>> {
        &self.provider
    }
}

#[async_trait]
impl ReadTransport for EvmReadClient {
    fn chain_id(&self) -> u64 {
        self.chain_id
    }

    async fn call(&self, to: Address, data: Bytes) -> Result<Bytes> {
        let tx = TransactionRequest::default()
            .to(to)
            .input(TransactionInput::new(data));

        match self.provider.call(&tx).await {
            Ok(output) => Ok(output),
            // The node answered, but the call itself reverted
            Err(RpcError::ErrorResp(payload)) => Err(ResolveError::ContractCall(format!(
                "eth_call to {} failed: {}",
                to, payload
            ))),
            Err(e) => Err(ResolveError::Network(format!(
                "eth_call to {} on chain {} failed: {}",
                to, self.chain_id, e
            ))),
        }
    }
}

/// Default factory: a fresh HTTP client per request, from the chain's RPC URL
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpTransportFactory;

impl TransportFactory for HttpTransportFactory {
    fn transport_for(&self, chain: &ChainConfig) -> Result<Arc<dyn ReadTransport>> {
        let client = EvmReadClient::for_chain(chain).map_err(|e| {
            ResolveError::Config(format!("Failed to create client for {}: {}", chain.name, e))
        })?;
        Ok(Arc::new(client))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = EvmReadClient::new("http://localhost:8545", 31337).unwrap();
        assert_eq!(client.chain_id(), 31337);
    }

    #[test]
    fn test_client_invalid_url() {
        assert!(EvmReadClient::new("not a url", 1).is_err());
    }

    #[test]
    fn test_factory_builds_bound_transport() {
        let transport = HttpTransportFactory
            .transport_for(&ChainConfig::base())
            .unwrap();
        assert_eq!(transport.chain_id(), 8453);
    }

    #[test]
    fn test_factory_rejects_bad_url() {
        let chain = ChainConfig::base().with_rpc_url("::::");
        let err = match HttpTransportFactory.transport_for(&chain) {
            Ok(_) => panic!("expected config error"),
            Err(e) => e,
        };
        assert!(matches!(err, ResolveError::Config(_)));
    }

    #[tokio::test]
    async fn test_call_unreachable_is_network_error() {
        // Port 9 (discard) on localhost is not an RPC node
        let client = EvmReadClient::new("http://127.0.0.1:9", 1).unwrap();
        let err = client
            .call(Address::ZERO, Bytes::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ResolveError::Network(_)));
    }
}
