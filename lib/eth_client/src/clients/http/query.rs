use std::time::Duration;

use async_trait::async_trait;
use bundler_basic_types::{web3, ChainId, U256};
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};

use super::{decl::L1EthNamespaceClient, Method, METRICS};
use crate::{
    types::{Error, EthClientResult, RpcContext},
    EthInterface, PriorityFeeProvider,
};

/// Default timeout for a single request, used unless overridden via [`QueryClient::with_timeout()`].
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// JSON-RPC HTTP client for an Ethereum node.
///
/// The client doesn't retry requests or cache responses; each method call results in exactly one
/// request, bounded only by the configured request timeout.
#[derive(Debug, Clone)]
pub struct QueryClient {
    web3: HttpClient,
    component: &'static str,
}

impl QueryClient {
    /// Creates a client for the node at `url` with the default request timeout.
    pub fn new(url: &str) -> EthClientResult<Self> {
        Self::with_timeout(url, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Creates a client for the node at `url` with a custom request timeout.
    pub fn with_timeout(url: &str, request_timeout: Duration) -> EthClientResult<Self> {
        let web3 = HttpClientBuilder::default()
            .request_timeout(request_timeout)
            .build(url)
            .map_err(|source| Error::InvalidUrl {
                url: url.to_owned(),
                source,
            })?;
        Ok(Self {
            web3,
            component: "",
        })
    }

    /// Tags requests sent by this client with the specified component name in metrics.
    #[must_use]
    pub fn for_component(mut self, component: &'static str) -> Self {
        self.component = component;
        self
    }

    async fn fetch_block_base_fee(
        &self,
        number: web3::types::BlockNumber,
    ) -> EthClientResult<Option<Option<U256>>> {
        let block = self
            .web3
            .get_block_by_number(number, false)
            .await
            .rpc_context("eth_getBlockByNumber")?;
        Ok(block.map(|block| block.base_fee_per_gas))
    }
}

#[async_trait]
impl PriorityFeeProvider for QueryClient {
    async fn max_priority_fee_per_gas(&self) -> EthClientResult<U256> {
        METRICS.observe_call(Method::MaxPriorityFeePerGas, self.component);
        let latency = METRICS.latency[&Method::MaxPriorityFeePerGas].start();
        let fee = self
            .web3
            .max_priority_fee_per_gas()
            .await
            .rpc_context("eth_maxPriorityFeePerGas")
            .inspect_err(|_| {
                METRICS.errors[&Method::MaxPriorityFeePerGas].inc();
            })?;
        latency.observe();
        tracing::trace!(%fee, component = self.component, "fetched max priority fee per gas");
        Ok(fee)
    }
}

#[async_trait]
impl EthInterface for QueryClient {
    async fn fetch_chain_id(&self) -> EthClientResult<ChainId> {
        METRICS.observe_call(Method::ChainId, self.component);
        let latency = METRICS.latency[&Method::ChainId].start();
        let raw_chain_id = self
            .web3
            .chain_id()
            .await
            .rpc_context("eth_chainId")
            .inspect_err(|_| {
                METRICS.errors[&Method::ChainId].inc();
            })?;
        latency.observe();
        Ok(ChainId(raw_chain_id.as_u64()))
    }

    async fn get_pending_block_base_fee_per_gas(&self) -> EthClientResult<Option<U256>> {
        METRICS.observe_call(Method::PendingBlockBaseFee, self.component);
        let latency = METRICS.latency[&Method::PendingBlockBaseFee].start();

        let base_fee = match self
            .fetch_block_base_fee(web3::types::BlockNumber::Pending)
            .await
        {
            Ok(Some(base_fee)) => Ok(base_fee),
            // Some nodes (e.g., local dev nodes producing blocks on demand) have no pending block.
            Ok(None) => self
                .fetch_block_base_fee(web3::types::BlockNumber::Latest)
                .await
                .and_then(|base_fee| {
                    base_fee.ok_or_else(|| Error::InvalidResponse {
                        method: "eth_getBlockByNumber",
                        reason: "neither pending nor latest block is available".to_owned(),
                    })
                }),
            Err(err) => Err(err),
        }
        .inspect_err(|_| {
            METRICS.errors[&Method::PendingBlockBaseFee].inc();
        })?;

        latency.observe();
        Ok(base_fee)
    }

    async fn get_gas_price(&self) -> EthClientResult<U256> {
        METRICS.observe_call(Method::GasPrice, self.component);
        let latency = METRICS.latency[&Method::GasPrice].start();
        let gas_price = self
            .web3
            .gas_price()
            .await
            .rpc_context("eth_gasPrice")
            .inspect_err(|_| {
                METRICS.errors[&Method::GasPrice].inc();
            })?;
        latency.observe();
        Ok(gas_price)
    }
}
