//! Namespace dispatch
//!
//! Runs the requested namespace queries concurrently on the caller's task and
//! joins them into a [`NameResults`]. A failing namespace never affects the
//! others: its error is captured as [`ResolutionOutcome::Failed`] and reads as
//! "not found" in the combined result.
//!
//! ```ignore
//! use multiname_rs::{get_names, parse_evm_address, GetNamesConfig, Namespace};
//!
//! let address = parse_evm_address("0xC79E675A8Dd11fBEc7Ea1042efB6686C9DfdC57E")?;
//! let names = get_names(address, &[Namespace::Ens, Namespace::Base], &GetNamesConfig::new()).await;
//! // { ens: "obliques.eth", base: "obliques.base.eth", cyber: null }
//! ```

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::Arc;

use alloy::primitives::Address;
use futures::future::join_all;
use tracing::{debug, warn};

use crate::address::parse_evm_address;
use crate::config::ResolverConfig;
use crate::error::{ResolveError, Result};
use crate::evm::{HttpTransportFactory, ReadTransport, TransportFactory};
use crate::resolvers::ResolverTable;
use crate::types::{NameResults, Namespace, ResolutionOutcome};

/// Per-namespace options
#[derive(Clone, Default)]
pub struct NamespaceConfig {
    /// Transport used instead of the default one (e.g. a custom RPC endpoint)
    pub client: Option<Arc<dyn ReadTransport>>,
}

impl NamespaceConfig {
    /// Use `client` for this namespace
    pub fn with_client(client: Arc<dyn ReadTransport>) -> Self {
        Self {
            client: Some(client),
        }
    }
}

impl fmt::Debug for NamespaceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamespaceConfig")
            .field("client", &self.client.as_ref().map(|c| c.chain_id()))
            .finish()
    }
}

/// Per-namespace options for one call
pub type GetNamesConfig = HashMap<Namespace, NamespaceConfig>;

/// Multi-namespace reverse resolver
#[derive(Clone)]
pub struct NameResolver {
    table: ResolverTable,
    factory: Arc<dyn TransportFactory>,
}

impl NameResolver {
    /// Create a resolver from an explicit table and transport factory
    pub fn new(table: ResolverTable, factory: impl TransportFactory + 'static) -> Self {
        Self {
            table,
            factory: Arc::new(factory),
        }
    }

    /// All namespaces on their default public endpoints
    pub fn mainnet() -> Self {
        Self::new(ResolverTable::mainnet(), HttpTransportFactory)
    }

    /// All namespaces on configured endpoints
    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::new(ResolverTable::from_config(config), HttpTransportFactory)
    }

    /// Resolve `address` in each requested namespace
    ///
    /// Never fails. Every supported namespace is present in the result;
    /// namespaces that were not requested, have no name, or failed are `None`.
    pub async fn get_names(
        &self,
        address: Address,
        namespaces: &[Namespace],
        config: &GetNamesConfig,
    ) -> NameResults {
        let mut results = NameResults::empty();

        for (namespace, outcome) in self.resolve_outcomes(address, namespaces, config).await {
            if let ResolutionOutcome::Failed(e) = &outcome {
                warn!(
                    namespace = %namespace,
                    address = %address,
                    error = %e,
                    "Namespace resolution failed, reporting as not found"
                );
            }
            results.set(namespace, outcome.into_name());
        }

        results
    }

    /// Like [`get_names`](Self::get_names), with the address and namespaces as strings
    ///
    /// Input is validated up front: a malformed address or an unknown
    /// namespace key is an error and nothing is queried.
    pub async fn get_names_str(
        &self,
        address: &str,
        namespaces: &[&str],
        config: &GetNamesConfig,
    ) -> Result<NameResults> {
        let address = parse_evm_address(address)?;
        let namespaces = namespaces
            .iter()
            .map(|ns| ns.parse())
            .collect::<Result<Vec<Namespace>>>()?;

        Ok(self.get_names(address, &namespaces, config).await)
    }

    /// Resolve each requested namespace and report its captured outcome
    ///
    /// Duplicate namespaces are queried once. All queries run concurrently and
    /// this returns only after every one of them has settled.
    pub async fn resolve_outcomes(
        &self,
        address: Address,
        namespaces: &[Namespace],
        config: &GetNamesConfig,
    ) -> Vec<(Namespace, ResolutionOutcome)> {
        let requested: BTreeSet<Namespace> = namespaces.iter().copied().collect();

        debug!(
            address = %address,
            namespaces = ?requested,
            "Dispatching namespace queries"
        );

        let queries = requested.into_iter().map(|namespace| async move {
            let client = config.get(&namespace).and_then(|c| c.client.clone());
            let outcome = self.resolve_one(namespace, address, client).await;
            (namespace, outcome)
        });

        join_all(queries).await
    }

    async fn resolve_one(
        &self,
        namespace: Namespace,
        address: Address,
        client: Option<Arc<dyn ReadTransport>>,
    ) -> ResolutionOutcome {
        let Some(resolver) = self.table.get(namespace) else {
            return ResolutionOutcome::Failed(ResolveError::UnsupportedNamespace(
                namespace.to_string(),
            ));
        };

        let transport = match client {
            Some(client) => client,
            None => match self.factory.transport_for(resolver.chain()) {
                Ok(transport) => transport,
                Err(e) => return ResolutionOutcome::Failed(e),
            },
        };

        resolver.resolve(address, transport.as_ref()).await.into()
    }
}

impl Default for NameResolver {
    fn default() -> Self {
        Self::mainnet()
    }
}

/// Resolve `address` in each requested namespace using default endpoints
pub async fn get_names(
    address: Address,
    namespaces: &[Namespace],
    config: &GetNamesConfig,
) -> NameResults {
    NameResolver::mainnet()
        .get_names(address, namespaces, config)
        .await
}
