//! Multiname-RS: Multi-Namespace Reverse Name Resolution
//!
//! Resolves an EVM address to a human-readable name across several naming
//! registries and returns one uniform result per namespace:
//!
//! - **ENS** - primary registry on Ethereum mainnet (`addr.reverse`)
//! - **Base** - Basenames L2 resolver on Base (`80002105.reverse`)
//! - **Cyber** - CyberID public resolver on Cyber (shares `addr.reverse`)
//!
//! ## Modules
//!
//! - **Hash / Reverse Node** - keccak, namehash, and the address → reverse node derivation
//! - **Coin Type** - SLIP-44 coin type of a chain's reverse registry
//! - **EVM** - read-only transport, transport factory, and registry ABIs
//! - **Resolvers** - one resolver per namespace, collected in a table
//! - **Dispatch** - concurrent fan-out/fan-in across namespaces
//! - **Testing** - mock transports (feature `testing`)
//!
//! ## Usage
//!
//! ```ignore
//! use multiname_rs::{parse_evm_address, GetNamesConfig, NameResolver, Namespace, ResolverConfig};
//!
//! let resolver = NameResolver::from_config(&ResolverConfig::load()?);
//! let address = parse_evm_address("0xC79E675A8Dd11fBEc7Ea1042efB6686C9DfdC57E")?;
//! let names = resolver
//!     .get_names(address, &[Namespace::Ens, Namespace::Base], &GetNamesConfig::new())
//!     .await;
//! ```
//!
//! ## Feature Flags
//!
//! - `testing` - Expose mock transports for downstream tests

// Core modules
pub mod address;
pub mod chains;
pub mod coin_type;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod evm;
pub mod hash;
pub mod redact;
pub mod resolvers;
pub mod reverse_node;
pub mod types;

// Testing utilities (feature-gated)
#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Re-export commonly used items at the crate root
pub use address::{canonical_hex, parse_evm_address};
pub use chains::{ChainConfig, BASE_CHAIN_ID, CYBER_CHAIN_ID, MAINNET_CHAIN_ID};
pub use coin_type::{coin_type_for_chain, CoinType};
pub use config::ResolverConfig;
pub use dispatch::{get_names, GetNamesConfig, NameResolver, NamespaceConfig};
pub use error::{ResolveError, Result};
pub use evm::{EvmReadClient, HttpTransportFactory, ReadTransport, TransportFactory};
pub use hash::{bytes32_to_hex, keccak256, namehash};
pub use resolvers::{EnsResolver, L2ReverseResolver, Resolver, ResolverTable};
pub use reverse_node::{reverse_node, reverse_node_for};
pub use types::{NameResults, Namespace, ResolutionOutcome};
