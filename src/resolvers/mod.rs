//! Per-namespace registry queries
//!
//! Each namespace has one [`Resolver`] implementation bound to a fixed
//! contract on a fixed chain. Resolvers are collected into a
//! [`ResolverTable`] at startup; the dispatcher never looks resolvers up any
//! other way.
//!
//! - `ens` - primary ENS reverse resolution on mainnet
//! - `l2` - reverse resolvers on secondary chains (Basenames, CyberID)

pub mod ens;
pub mod l2;

pub use ens::EnsResolver;
pub use l2::L2ReverseResolver;

use std::collections::BTreeMap;
use std::sync::Arc;

use alloy::primitives::{Address, Bytes};
use alloy::sol_types::SolCall;
use async_trait::async_trait;

use crate::chains::ChainConfig;
use crate::config::ResolverConfig;
use crate::error::{ResolveError, Result};
use crate::evm::ReadTransport;
use crate::types::Namespace;

/// Resolves an address to a name within one namespace
#[async_trait]
pub trait Resolver: Send + Sync {
    /// Namespace served by this resolver
    fn namespace(&self) -> Namespace;

    /// Chain the namespace's contracts live on
    fn chain(&self) -> &ChainConfig;

    /// Look up the name for `address`
    ///
    /// `Ok(None)` means the registry has no name set. Network and contract
    /// failures are returned as errors; isolating them is the dispatcher's job.
    async fn resolve(&self, address: Address, transport: &dyn ReadTransport)
        -> Result<Option<String>>;
}

/// Explicit namespace → resolver table
#[derive(Clone, Default)]
pub struct ResolverTable {
    resolvers: BTreeMap<Namespace, Arc<dyn Resolver>>,
}

impl ResolverTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Table with every supported namespace on its default public endpoint
    pub fn mainnet() -> Self {
        Self::from_config(&ResolverConfig::default())
    }

    /// Table with every supported namespace, using configured endpoints
    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::new()
            .with(EnsResolver::new(config.chain(Namespace::Ens)))
            .with(L2ReverseResolver::base(config.chain(Namespace::Base)))
            .with(L2ReverseResolver::cyber(config.chain(Namespace::Cyber)))
    }

    /// Register a resolver, replacing any previous one for its namespace
    pub fn with<R: Resolver + 'static>(mut self, resolver: R) -> Self {
        self.resolvers.insert(resolver.namespace(), Arc::new(resolver));
        self
    }

    /// Get the resolver for a namespace
    pub fn get(&self, namespace: Namespace) -> Option<&Arc<dyn Resolver>> {
        self.resolvers.get(&namespace)
    }

    /// Namespaces with a registered resolver
    pub fn namespaces(&self) -> impl Iterator<Item = Namespace> + '_ {
        self.resolvers.keys().copied()
    }
}

/// Reject a transport bound to a different chain than the resolver's
pub(crate) fn ensure_chain(chain: &ChainConfig, transport: &dyn ReadTransport) -> Result<()> {
    if transport.chain_id() != chain.chain_id {
        return Err(ResolveError::ChainMismatch {
            expected: chain.chain_id,
            got: transport.chain_id(),
        });
    }
    Ok(())
}

/// Encode a call, send it, and decode its return values
pub(crate) async fn read_contract<C: SolCall>(
    transport: &dyn ReadTransport,
    to: Address,
    call: C,
) -> Result<C::Return> {
    let output = transport
        .call(to, Bytes::from(call.abi_encode()))
        .await?;

    C::abi_decode_returns(&output, true).map_err(|e| {
        ResolveError::ContractCall(format!(
            "Failed to decode {} return from {}: {}",
            C::SIGNATURE,
            to,
            e
        ))
    })
}
