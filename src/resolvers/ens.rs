//! ENS reverse resolution on Ethereum mainnet
//!
//! ENS resolves the bare address through its own reverse convention:
//!
//! 1. `node = reverse node of address under addr.reverse`
//! 2. `resolver = registry.resolver(node)`; zero means no reverse record
//! 3. `name = resolver.name(node)`; empty means no name set
//! 4. forward check: `addr(namehash(name))` must point back at the address,
//!    otherwise the claim is ignored
//!
//! The forward resolver is located the ENSIP-10 way: the registry is asked
//! for `name`, then each parent in turn, until one has a resolver. A resolver
//! found on a parent only serves the name if it implements
//! `resolve(bytes,bytes)`, and is then queried through it with the
//! DNS-encoded name and the `addr` calldata.

use alloy::primitives::{Address, B256};
use alloy::sol_types::SolCall;
use async_trait::async_trait;
use tracing::debug;

use super::{ensure_chain, read_contract, Resolver};
use crate::chains::ChainConfig;
use crate::error::{ResolveError, Result};
use crate::evm::contracts::{
    ENSRegistry, ENSResolver, ExtendedResolver, ENS_REGISTRY_ADDRESS,
    EXTENDED_RESOLVER_INTERFACE_ID,
};
use crate::evm::ReadTransport;
use crate::hash::{dns_encode, namehash};
use crate::reverse_node::reverse_node_for;
use crate::types::Namespace;

/// Primary namespace resolver (ENS)
#[derive(Debug, Clone)]
pub struct EnsResolver {
    chain: ChainConfig,
    registry: Address,
}

impl EnsResolver {
    /// ENS resolver using the canonical registry
    pub fn new(chain: ChainConfig) -> Self {
        Self {
            chain,
            registry: ENS_REGISTRY_ADDRESS,
        }
    }

    /// ENS resolver against a different registry deployment
    pub fn with_registry(chain: ChainConfig, registry: Address) -> Self {
        Self { chain, registry }
    }

    async fn resolver_of(&self, transport: &dyn ReadTransport, node: B256) -> Result<Address> {
        let result =
            read_contract(transport, self.registry, ENSRegistry::resolverCall { node }).await?;
        Ok(result._0)
    }

    /// Find the resolver responsible for `name`
    ///
    /// Returns the resolver and whether it was set on `name` itself, or
    /// `None` when neither the name nor any parent below the root has one.
    async fn find_resolver(
        &self,
        transport: &dyn ReadTransport,
        name: &str,
    ) -> Result<Option<(Address, bool)>> {
        let mut candidate = name;
        loop {
            let node = B256::from(namehash(candidate));
            let resolver = self.resolver_of(transport, node).await?;
            if resolver != Address::ZERO {
                return Ok(Some((resolver, candidate.len() == name.len())));
            }
            match candidate.split_once('.') {
                Some((_, parent)) if !parent.is_empty() => candidate = parent,
                _ => return Ok(None),
            }
        }
    }

    /// `addr(node)` through an ENSIP-10 wildcard resolver
    ///
    /// `None` when the resolver does not implement `resolve(bytes,bytes)`.
    async fn wildcard_addr(
        &self,
        transport: &dyn ReadTransport,
        resolver: Address,
        name: &str,
        node: B256,
    ) -> Result<Option<Address>> {
        let supports = read_contract(
            transport,
            resolver,
            ExtendedResolver::supportsInterfaceCall {
                interfaceID: EXTENDED_RESOLVER_INTERFACE_ID,
            },
        )
        .await;
        match supports {
            Ok(result) if result._0 => {}
            // ERC-165: a revert means the interface is not supported
            Ok(_) | Err(ResolveError::ContractCall(_)) => return Ok(None),
            Err(e) => return Err(e),
        }

        let call = ExtendedResolver::resolveCall {
            name: dns_encode(name).into(),
            data: ENSResolver::addrCall { node }.abi_encode().into(),
        };
        let output = read_contract(transport, resolver, call).await?._0;
        if output.is_empty() {
            return Ok(None);
        }
        let decoded = ENSResolver::addrCall::abi_decode_returns(&output, true).map_err(|e| {
            ResolveError::ContractCall(format!(
                "Failed to decode wildcard addr for {} from {}: {}",
                name, resolver, e
            ))
        })?;
        Ok(Some(decoded._0))
    }

    /// Forward-resolve `name` and check it points back at `address`
    async fn verify_forward(
        &self,
        transport: &dyn ReadTransport,
        name: &str,
        address: Address,
    ) -> Result<bool> {
        let node = B256::from(namehash(name));

        let forward = match self.find_resolver(transport, name).await? {
            None => return Ok(false),
            Some((resolver, true)) => {
                read_contract(transport, resolver, ENSResolver::addrCall { node })
                    .await?
                    ._0
            }
            Some((resolver, false)) => {
                debug!(name = %name, resolver = %resolver, "Using wildcard resolver");
                match self.wildcard_addr(transport, resolver, name, node).await? {
                    Some(forward) => forward,
                    None => return Ok(false),
                }
            }
        };
        Ok(forward == address)
    }
}

#[async_trait]
impl Resolver for EnsResolver {
    fn namespace(&self) -> Namespace {
        Namespace::Ens
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

        let resolver = self.resolver_of(transport, node).await?;
        if resolver == Address::ZERO {
            debug!(address = %address, "No ENS reverse resolver set");
            return Ok(None);
        }

        let name = read_contract(transport, resolver, ENSResolver::nameCall { node })
            .await?
            ._0;
        if name.is_empty() {
            return Ok(None);
        }

        if !self.verify_forward(transport, &name, address).await? {
            debug!(address = %address, name = %name, "ENS reverse record does not resolve back");
            return Ok(None);
        }

        Ok(Some(name))
    }
}
