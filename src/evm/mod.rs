//! EVM Chain Support Module
//!
//! Read-only access to the chains that host naming registries.
//!
//! ## Submodules
//!
//! - `client` - Read-only RPC transport and the factory that builds it
//! - `contracts` - Registry and resolver ABIs using alloy sol! macro

pub mod client;
pub mod contracts;

// Re-export commonly used items
pub use client::{EvmReadClient, HttpTransportFactory, ReadTransport, TransportFactory};
pub use contracts::{ENSRegistry, ENSResolver, L2Resolver};
