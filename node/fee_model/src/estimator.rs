use bundler_config::{FeeMode, GasPricingConfig};
use bundler_eth_client::{EthInterface, Error as EthClientError};
use bundler_types::{OperationFees, U256};
use serde::Serialize;

use crate::suggest::{suggest_mean_gas_fee_cap, suggest_mean_gas_price, suggest_mean_gas_tip_cap};

/// Fee parameters to attach to a bundle transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum BundleFeeParams {
    /// EIP-1559 fee parameters.
    #[serde(rename_all = "camelCase")]
    Eip1559 {
        max_fee_per_gas: U256,
        max_priority_fee_per_gas: U256,
    },
    /// Pre-EIP-1559 fee parameters.
    #[serde(rename_all = "camelCase")]
    Legacy { gas_price: U256 },
}

#[derive(Debug, thiserror::Error)]
pub enum FeeEstimationError {
    #[error(transparent)]
    Client(#[from] EthClientError),
    #[error("Pending block has no base fee; EIP-1559 fees cannot be estimated")]
    NoBaseFee,
    #[error("Max fee {0} less than priority fee {1}")]
    WrongFeeProvided(U256, U256),
}

/// Estimates fee parameters for bundles, querying the node for the network side of the pricing.
///
/// The estimator holds no state besides the client; each estimate is computed from scratch.
#[derive(Debug)]
pub struct BundleFeeEstimator {
    client: Box<dyn EthInterface>,
    mode: FeeMode,
}

impl BundleFeeEstimator {
    pub fn new(client: Box<dyn EthInterface>, config: GasPricingConfig) -> Self {
        Self {
            client,
            mode: config.mode,
        }
    }

    /// Estimates fee parameters for a bundle consisting of `batch`.
    pub async fn estimate<T: OperationFees>(
        &self,
        batch: &[T],
    ) -> Result<BundleFeeParams, FeeEstimationError> {
        match self.mode {
            FeeMode::Legacy => self.estimate_legacy(batch).await,
            FeeMode::Eip1559 => {
                let base_fee = self
                    .client
                    .get_pending_block_base_fee_per_gas()
                    .await?
                    .ok_or(FeeEstimationError::NoBaseFee)?;
                self.estimate_eip1559(base_fee, batch).await
            }
            FeeMode::Auto => match self.client.get_pending_block_base_fee_per_gas().await? {
                Some(base_fee) => self.estimate_eip1559(base_fee, batch).await,
                None => {
                    tracing::debug!("pending block has no base fee, falling back to legacy fees");
                    self.estimate_legacy(batch).await
                }
            },
        }
    }

    async fn estimate_eip1559<T: OperationFees>(
        &self,
        base_fee: U256,
        batch: &[T],
    ) -> Result<BundleFeeParams, FeeEstimationError> {
        let max_priority_fee_per_gas = suggest_mean_gas_tip_cap(self.client.as_ref(), batch).await?;
        let max_fee_per_gas = suggest_mean_gas_fee_cap(base_fee, batch);
        if max_fee_per_gas < max_priority_fee_per_gas {
            tracing::warn!(
                %base_fee,
                %max_fee_per_gas,
                %max_priority_fee_per_gas,
                "estimated max fee is below priority fee"
            );
            return Err(FeeEstimationError::WrongFeeProvided(
                max_fee_per_gas,
                max_priority_fee_per_gas,
            ));
        }

        Ok(BundleFeeParams::Eip1559 {
            max_fee_per_gas,
            max_priority_fee_per_gas,
        })
    }

    async fn estimate_legacy<T: OperationFees>(
        &self,
        batch: &[T],
    ) -> Result<BundleFeeParams, FeeEstimationError> {
        let gas_price = self.client.get_gas_price().await?;
        Ok(BundleFeeParams::Legacy {
            gas_price: suggest_mean_gas_price(gas_price, batch),
        })
    }
}
