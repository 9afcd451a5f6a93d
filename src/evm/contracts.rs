//! Naming registry ABI definitions
//!
//! Uses alloy's sol! macro to generate call types. Calls are encoded and
//! decoded by hand so they can go through any [`ReadTransport`].
//!
//! [`ReadTransport`]: crate::evm::client::ReadTransport

use alloy::primitives::{address, Address, FixedBytes};
use alloy::sol;

/// ENS registry on Ethereum mainnet
pub const ENS_REGISTRY_ADDRESS: Address = address!("00000000000C2E074eC69A0dFb2997BA6C7d2e1e");

/// Basenames L2 resolver on Base mainnet
pub const BASE_L2_RESOLVER_ADDRESS: Address =
    address!("C6d566A56A1aFf6508b41f6c90ff131615583BCD");

/// CyberID public resolver on Cyber mainnet
pub const CYBER_RESOLVER_ADDRESS: Address = address!("fb2f304c1fcd6b053ee033c03293616d5121944b");

/// ENSIP-10 interface id, `resolve(bytes,bytes)`
pub const EXTENDED_RESOLVER_INTERFACE_ID: FixedBytes<4> = FixedBytes([0x90, 0x61, 0xb9, 0x23]);

sol! {
    /// ENS registry: node → resolver lookup
    interface ENSRegistry {
        function resolver(bytes32 node) external view returns (address);
    }

    /// ENS public resolver (reverse `name` and forward `addr` records)
    interface ENSResolver {
        function name(bytes32 node) external view returns (string memory);
        function addr(bytes32 node) external view returns (address);
    }

    /// ENSIP-10 wildcard resolver, serving every name below the node it is set on
    interface ExtendedResolver {
        function supportsInterface(bytes4 interfaceID) external view returns (bool);
        function resolve(bytes name, bytes data) external view returns (bytes memory);
    }

    /// Reverse resolver deployed on secondary chains (Basenames, CyberID)
    interface L2Resolver {
        function name(bytes32 node) external view returns (string memory);
    }
}
