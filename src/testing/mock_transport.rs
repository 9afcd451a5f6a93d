//! Canned-response transport
//!
//! Responses are keyed by target contract and exact calldata. A call with no
//! canned response behaves like an `eth_call` that reverted.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use alloy::primitives::{Address, Bytes};
use alloy::sol_types::{SolCall, SolValue};
use async_trait::async_trait;

use crate::chains::ChainConfig;
use crate::error::{ResolveError, Result};
use crate::evm::{ReadTransport, TransportFactory};

/// In-memory [`ReadTransport`] with canned `eth_call` responses
#[derive(Debug, Default)]
pub struct MockTransport {
    chain_id: u64,
    responses: HashMap<(Address, Vec<u8>), Result<Bytes>>,
    /// When set, every call fails with this error
    fail_all: Option<ResolveError>,
    calls: AtomicUsize,
}

impl MockTransport {
    /// Empty transport bound to `chain_id`
    pub fn new(chain_id: u64) -> Self {
        Self {
            chain_id,
            ..Default::default()
        }
    }

    /// Transport whose every call fails with a network error
    pub fn failing(chain_id: u64) -> Self {
        Self {
            chain_id,
            fail_all: Some(ResolveError::Network("connection refused".to_string())),
            ..Default::default()
        }
    }

    /// Answer `call` on `to` with the ABI-encoded `value`
    pub fn with_return<C: SolCall, V: SolValue>(mut self, to: Address, call: C, value: V) -> Self {
        let output = Bytes::from(value.abi_encode());
        self.responses.insert((to, call.abi_encode()), Ok(output));
        self
    }

    /// Answer `call` on `to` with raw bytes
    pub fn with_raw<C: SolCall>(mut self, to: Address, call: C, output: Bytes) -> Self {
        self.responses.insert((to, call.abi_encode()), Ok(output));
        self
    }

    /// Fail `call` on `to` with `error`
    pub fn with_error<C: SolCall>(mut self, to: Address, call: C, error: ResolveError) -> Self {
        self.responses.insert((to, call.abi_encode()), Err(error));
        self
    }

    /// Number of calls made so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReadTransport for MockTransport {
    fn chain_id(&self) -> u64 {
        self.chain_id
    }

    async fn call(&self, to: Address, data: Bytes) -> Result<Bytes> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(error) = &self.fail_all {
            return Err(error.clone());
        }

        match self.responses.get(&(to, data.to_vec())) {
            Some(response) => response.clone(),
            None => Err(ResolveError::ContractCall(format!(
                "execution reverted (no mock for call to {})",
                to
            ))),
        }
    }
}

/// [`TransportFactory`] handing out preconfigured mocks by chain ID
#[derive(Default)]
pub struct MockTransportFactory {
    transports: HashMap<u64, Arc<MockTransport>>,
}

impl MockTransportFactory {
    /// Empty factory; every chain is unconfigured
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `transport` for its chain
    pub fn with(mut self, transport: Arc<MockTransport>) -> Self {
        self.transports.insert(transport.chain_id(), transport);
        self
    }
}

impl TransportFactory for MockTransportFactory {
    fn transport_for(&self, chain: &ChainConfig) -> Result<Arc<dyn ReadTransport>> {
        match self.transports.get(&chain.chain_id) {
            Some(transport) => Ok(transport.clone()),
            None => Err(ResolveError::Config(format!(
                "No mock transport for chain {}",
                chain.chain_id
            ))),
        }
    }
}
