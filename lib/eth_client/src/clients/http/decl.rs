use bundler_basic_types::{web3, H256, U256, U64};
use jsonrpsee::{core::RpcResult, proc_macros::rpc};

/// Subset of the `eth` namespace used by the bundler client.
#[rpc(client, namespace = "eth")]
pub(super) trait L1EthNamespace {
    #[method(name = "chainId")]
    async fn chain_id(&self) -> RpcResult<U64>;

    #[method(name = "maxPriorityFeePerGas")]
    async fn max_priority_fee_per_gas(&self) -> RpcResult<U256>;

    #[method(name = "gasPrice")]
    async fn gas_price(&self) -> RpcResult<U256>;

    // **Important.** Must be called with `full_transactions = false` only.
    #[method(name = "getBlockByNumber")]
    async fn get_block_by_number(
        &self,
        block_number: web3::types::BlockNumber,
        full_transactions: bool,
    ) -> RpcResult<Option<web3::types::Block<H256>>>;
}
