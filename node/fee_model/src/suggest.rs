use bundler_eth_client::{EthClientResult, PriorityFeeProvider};
use bundler_types::{OperationFees, U256};

use crate::{
    mean::mean,
    metrics::{FeeDimension, METRICS},
};

/// Multiplier applied to the current base fee to get the `maxFeePerGas` baseline. Doubling
/// keeps a bundle includable for several consecutive blocks with a maximally increasing base fee.
pub const BASE_FEE_MULTIPLIER: u64 = 2;

fn reconcile<I>(dimension: FeeDimension, baseline: U256, declared: I) -> U256
where
    I: ExactSizeIterator<Item = U256>,
{
    let batch_size = declared.len();
    let batch_mean = mean(declared);
    METRICS.batch_size[&dimension].observe(batch_size as u64);

    let fee = baseline.max(batch_mean);
    if batch_mean > baseline {
        METRICS.batch_mean_wins[&dimension].inc();
    }
    tracing::debug!(
        ?dimension,
        %baseline,
        %batch_mean,
        batch_size,
        %fee,
        "reconciled batch fee with baseline"
    );
    fee
}

/// Suggests `maxPriorityFeePerGas` for a bundle: the maximum of the tip suggested by the node
/// and the mean tip declared by operations in `batch`.
///
/// Performs exactly one node request. A failed request is returned as is; no fallback value is
/// substituted.
pub async fn suggest_mean_gas_tip_cap<P, T>(eth: &P, batch: &[T]) -> EthClientResult<U256>
where
    P: PriorityFeeProvider + ?Sized,
    T: OperationFees,
{
    let tip = eth.max_priority_fee_per_gas().await?;
    Ok(reconcile(
        FeeDimension::PriorityFee,
        tip,
        batch.iter().map(|op| op.max_priority_fee_per_gas()),
    ))
}

/// Suggests `maxFeePerGas` for a bundle: the maximum of `base_fee * BASE_FEE_MULTIPLIER`
/// and the mean max fee declared by operations in `batch`.
pub fn suggest_mean_gas_fee_cap<T: OperationFees>(base_fee: U256, batch: &[T]) -> U256 {
    let baseline = base_fee.saturating_mul(BASE_FEE_MULTIPLIER.into());
    reconcile(
        FeeDimension::MaxFee,
        baseline,
        batch.iter().map(|op| op.max_fee_per_gas()),
    )
}

/// Suggests the legacy `gasPrice` for a bundle: the maximum of `gas_price` and the mean
/// max fee declared by operations in `batch`.
pub fn suggest_mean_gas_price<T: OperationFees>(gas_price: U256, batch: &[T]) -> U256 {
    reconcile(
        FeeDimension::GasPrice,
        gas_price,
        batch.iter().map(|op| op.max_fee_per_gas()),
    )
}
