use std::{
    collections::HashMap,
    fmt,
    sync::{Arc, RwLock},
};

use async_trait::async_trait;
use bundler_basic_types::{ChainId, U256};
use jsonrpsee::core::ClientError;

use crate::{
    types::{Error, EthClientResult},
    EthInterface, PriorityFeeProvider,
};

/// Mutable part of [`MockEthereum`] that needs to be synchronized via an `RwLock`.
#[derive(Debug, Default)]
struct MockEthereumInner {
    calls: HashMap<&'static str, usize>,
}

/// Mock Ethereum client that serves fixed fee values and records the incoming requests
/// for the further analysis.
#[derive(Clone)]
pub struct MockEthereum {
    chain_id: ChainId,
    max_priority_fee_per_gas: U256,
    base_fee_per_gas: Option<U256>,
    gas_price: U256,
    /// Methods that fail with a gateway error instead of returning a value.
    failing_methods: Vec<&'static str>,
    inner: Arc<RwLock<MockEthereumInner>>,
}

impl fmt::Debug for MockEthereum {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("MockEthereum")
            .field("chain_id", &self.chain_id)
            .field("max_priority_fee_per_gas", &self.max_priority_fee_per_gas)
            .field("base_fee_per_gas", &self.base_fee_per_gas)
            .field("gas_price", &self.gas_price)
            .field("failing_methods", &self.failing_methods)
            .finish_non_exhaustive()
    }
}

impl Default for MockEthereum {
    fn default() -> Self {
        Self {
            chain_id: ChainId(1),
            max_priority_fee_per_gas: 10.into(),
            base_fee_per_gas: Some(100.into()),
            gas_price: 110.into(),
            failing_methods: vec![],
            inner: Arc::default(),
        }
    }
}

impl MockEthereum {
    pub const CHAIN_ID: &'static str = "eth_chainId";
    pub const MAX_PRIORITY_FEE_PER_GAS: &'static str = "eth_maxPriorityFeePerGas";
    pub const GET_BLOCK_BY_NUMBER: &'static str = "eth_getBlockByNumber";
    pub const GAS_PRICE: &'static str = "eth_gasPrice";

    pub fn with_chain_id(self, chain_id: ChainId) -> Self {
        Self { chain_id, ..self }
    }

    pub fn with_max_priority_fee_per_gas(self, fee: impl Into<U256>) -> Self {
        Self {
            max_priority_fee_per_gas: fee.into(),
            ..self
        }
    }

    /// Sets the pending block base fee; `None` emulates a chain without EIP-1559 fees.
    pub fn with_base_fee_per_gas(self, base_fee: Option<U256>) -> Self {
        Self {
            base_fee_per_gas: base_fee,
            ..self
        }
    }

    pub fn with_gas_price(self, gas_price: impl Into<U256>) -> Self {
        Self {
            gas_price: gas_price.into(),
            ..self
        }
    }

    /// Makes all requests to the specified method fail, e.g. [`Self::MAX_PRIORITY_FEE_PER_GAS`].
    pub fn with_failing_method(mut self, method: &'static str) -> Self {
        self.failing_methods.push(method);
        self
    }

    /// Returns the number of requests made to the specified method, including failed ones.
    pub fn call_count(&self, method: &str) -> usize {
        let inner = self.inner.read().unwrap();
        inner.calls.get(method).copied().unwrap_or(0)
    }

    fn respond<T>(&self, method: &'static str, value: T) -> EthClientResult<T> {
        *self.inner.write().unwrap().calls.entry(method).or_default() += 1;
        if self.failing_methods.contains(&method) {
            let source = ClientError::Custom(format!("mock failure for `{method}`"));
            return Err(Error::EthereumGateway { method, source });
        }
        Ok(value)
    }
}

#[async_trait]
impl PriorityFeeProvider for MockEthereum {
    async fn max_priority_fee_per_gas(&self) -> EthClientResult<U256> {
        self.respond(Self::MAX_PRIORITY_FEE_PER_GAS, self.max_priority_fee_per_gas)
    }
}

#[async_trait]
impl EthInterface for MockEthereum {
    async fn fetch_chain_id(&self) -> EthClientResult<ChainId> {
        self.respond(Self::CHAIN_ID, self.chain_id)
    }

    async fn get_pending_block_base_fee_per_gas(&self) -> EthClientResult<Option<U256>> {
        self.respond(Self::GET_BLOCK_BY_NUMBER, self.base_fee_per_gas)
    }

    async fn get_gas_price(&self) -> EthClientResult<U256> {
        self.respond(Self::GAS_PRICE, self.gas_price)
    }
}
