//! Reverse node derivation
//!
//! Converts an address into the `bytes32` node a reverse resolver is keyed by:
//!
//! ```text
//! addressNode     = keccak256(lowercase hex text of address, no 0x)
//! baseReverseNode = namehash("<coinType>.reverse")
//! reverseNode     = keccak256(baseReverseNode ++ addressNode)
//! ```
//!
//! The address node hashes the hex *text*, not the 20 raw bytes. Getting this
//! wrong still yields a valid-looking node, it just never has a name set.

use alloy::primitives::{Address, B256};

use crate::address::canonical_hex;
use crate::chains::ChainConfig;
use crate::coin_type::CoinType;
use crate::hash::{keccak256, keccak256_pair, namehash};

/// Hash of the address's canonical hex text
pub fn address_node(address: &Address) -> B256 {
    B256::from(keccak256(canonical_hex(address).as_bytes()))
}

/// Namehash of `<coinType>.reverse`
pub fn base_reverse_node(coin_type: CoinType) -> B256 {
    B256::from(namehash(&coin_type.reverse_domain()))
}

/// Reverse node of an address under a coin type
pub fn reverse_node_for_coin_type(address: &Address, coin_type: CoinType) -> B256 {
    let base = base_reverse_node(coin_type);
    let node = address_node(address);
    B256::from(keccak256_pair(&base.0, &node.0))
}

/// Reverse node of an address on a chain, using the built-in alias set
pub fn reverse_node(address: &Address, chain_id: u64) -> B256 {
    reverse_node_for_coin_type(address, CoinType::for_chain_id(chain_id))
}

/// Reverse node of an address on a configured chain
pub fn reverse_node_for(address: &Address, chain: &ChainConfig) -> B256 {
    reverse_node_for_coin_type(address, CoinType::for_chain(chain))
}
