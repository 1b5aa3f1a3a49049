use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{Address, Bytes, U256};

/// Read-only view of the fee fields declared by a submitted operation.
///
/// Pricing code works with this trait rather than with a concrete operation type, so that
/// it never needs more than these two values.
pub trait OperationFees {
    /// `maxPriorityFeePerGas` the submitter is willing to pay.
    fn max_priority_fee_per_gas(&self) -> U256;
    /// `maxFeePerGas` the submitter is willing to pay.
    fn max_fee_per_gas(&self) -> U256;
}

impl<T: OperationFees + ?Sized> OperationFees for &T {
    fn max_priority_fee_per_gas(&self) -> U256 {
        (**self).max_priority_fee_per_gas()
    }

    fn max_fee_per_gas(&self) -> U256 {
        (**self).max_fee_per_gas()
    }
}

impl<T: OperationFees + ?Sized> OperationFees for Arc<T> {
    fn max_priority_fee_per_gas(&self) -> U256 {
        (**self).max_priority_fee_per_gas()
    }

    fn max_fee_per_gas(&self) -> U256 {
        (**self).max_fee_per_gas()
    }
}

/// Minimal projection of an operation onto its fee fields.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeView {
    pub max_fee_per_gas: U256,
    pub max_priority_fee_per_gas: U256,
}

impl FeeView {
    pub fn new(max_fee_per_gas: impl Into<U256>, max_priority_fee_per_gas: impl Into<U256>) -> Self {
        Self {
            max_fee_per_gas: max_fee_per_gas.into(),
            max_priority_fee_per_gas: max_priority_fee_per_gas.into(),
        }
    }
}

impl OperationFees for FeeView {
    fn max_priority_fee_per_gas(&self) -> U256 {
        self.max_priority_fee_per_gas
    }

    fn max_fee_per_gas(&self) -> U256 {
        self.max_fee_per_gas
    }
}

/// ERC-4337 user operation as submitted to the bundler.
///
/// Quantities are (de)serialized as `0x`-prefixed hex strings, byte fields as hex data,
/// matching the `eth_sendUserOperation` JSON representation.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserOperation {
    pub sender: Address,
    pub nonce: U256,
    pub init_code: Bytes,
    pub call_data: Bytes,
    pub call_gas_limit: U256,
    pub verification_gas_limit: U256,
    pub pre_verification_gas: U256,
    pub max_fee_per_gas: U256,
    pub max_priority_fee_per_gas: U256,
    pub paymaster_and_data: Bytes,
    pub signature: Bytes,
}

impl UserOperation {
    /// Projects the operation onto its fee fields.
    pub fn fees(&self) -> FeeView {
        FeeView {
            max_fee_per_gas: self.max_fee_per_gas,
            max_priority_fee_per_gas: self.max_priority_fee_per_gas,
        }
    }
}

impl OperationFees for UserOperation {
    fn max_priority_fee_per_gas(&self) -> U256 {
        self.max_priority_fee_per_gas
    }

    fn max_fee_per_gas(&self) -> U256 {
        self.max_fee_per_gas
    }
}
