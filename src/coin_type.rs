//! SLIP-44 coin types for reverse registries
//!
//! Each chain's reverse records live under `<coinType>.reverse`. Chains that
//! share the primary registry use the literal label `addr`; every other EVM
//! chain uses `0x80000000 | chainId` rendered as uppercase hex.

use std::fmt;

use crate::chains::{ChainConfig, ADDR_REVERSE_CHAINS};

/// Bit set on EVM chain IDs to form their SLIP-44 coin type
pub const EVM_COIN_TYPE_FLAG: u32 = 0x8000_0000;

/// Reverse-registry coin type of a chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoinType {
    /// Primary registry (`addr.reverse`)
    Addr,
    /// SLIP-44 EVM coin type (`0x80000000 | chainId`)
    Slip44(u32),
}

impl CoinType {
    /// Coin type for a chain using the built-in `addr` alias set
    pub fn for_chain_id(chain_id: u64) -> Self {
        if ADDR_REVERSE_CHAINS.contains(&chain_id) {
            CoinType::Addr
        } else {
            CoinType::Slip44(evm_coin_type(chain_id))
        }
    }

    /// Coin type for a configured chain
    pub fn for_chain(chain: &ChainConfig) -> Self {
        if chain.shares_primary_reverse {
            CoinType::Addr
        } else {
            CoinType::Slip44(evm_coin_type(chain.chain_id))
        }
    }

    /// Domain under which this coin type's reverse records live
    ///
    /// The token is embedded exactly as rendered by `Display`; `addr` stays
    /// lowercase.
    pub fn reverse_domain(&self) -> String {
        format!("{}.reverse", self)
    }
}

impl fmt::Display for CoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoinType::Addr => f.write_str("addr"),
            CoinType::Slip44(value) => write!(f, "{:X}", value),
        }
    }
}

/// `(0x80000000 | chainId)` truncated to 32 bits
pub fn evm_coin_type(chain_id: u64) -> u32 {
    EVM_COIN_TYPE_FLAG | (chain_id as u32)
}

/// Coin-type token for a chain ID (`"addr"` or uppercase hex)
pub fn coin_type_for_chain(chain_id: u64) -> String {
    CoinType::for_chain_id(chain_id).to_string()
}
