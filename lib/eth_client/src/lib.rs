#![allow(clippy::upper_case_acronyms, clippy::derive_partial_eq_without_eq)]

use std::fmt;

use async_trait::async_trait;
use bundler_basic_types::{ChainId, U256};

pub use crate::types::{EthClientResult, Error};

pub mod clients;
pub mod types;

/// Source of the node's currently suggested priority fee (`eth_maxPriorityFeePerGas`).
///
/// This is the only node query the fee reconciliation logic itself performs. Implementations
/// must make exactly one request per call and must not cache results; a failed request
/// is reported as an error and never as a zero fee.
#[async_trait]
pub trait PriorityFeeProvider: 'static + fmt::Debug + Send + Sync {
    /// Returns the priority fee per gas suggested by the node.
    async fn max_priority_fee_per_gas(&self) -> EthClientResult<U256>;
}

/// Fee-related subset of the Web3 interface, as seen by the bundler.
///
/// ## Trait contents
///
/// Methods perform "abstract" queries that don't depend on a particular contract or account.
/// Callers that only need the priority fee should take [`PriorityFeeProvider`] instead.
#[async_trait]
pub trait EthInterface: PriorityFeeProvider {
    /// Fetches the chain ID reported by the node.
    async fn fetch_chain_id(&self) -> EthClientResult<ChainId>;

    /// Returns the `base_fee_per_gas` value for the currently pending block, or `None`
    /// if the chain doesn't use EIP-1559 fees.
    async fn get_pending_block_base_fee_per_gas(&self) -> EthClientResult<Option<U256>>;

    /// Returns the current (legacy) gas price.
    async fn get_gas_price(&self) -> EthClientResult<U256>;
}
