//! Fee reconciliation for bundle transactions.
//!
//! A bundle aggregates user operations that each declare how much they are willing to pay per gas.
//! The fee attached to the bundle must not be lower than what the network currently requires
//! (the *baseline*), and must not be lower than what the batch itself asks for on average, so that
//! operations wanting fast inclusion during congestion are not stalled. Each entry point in this crate
//! thus returns `max(baseline, mean(batch))` for a specific fee dimension:
//!
//! - [`suggest_mean_gas_tip_cap()`] for `maxPriorityFeePerGas`; the baseline is queried from the node.
//! - [`suggest_mean_gas_fee_cap()`] for `maxFeePerGas`; the baseline is derived from the current base fee.
//! - [`suggest_mean_gas_price()`] for the legacy `gasPrice`; the baseline is supplied by the caller.
//!
//! [`BundleFeeEstimator`] combines them into complete fee parameters for a bundle transaction.

pub use self::{
    estimator::{BundleFeeEstimator, BundleFeeParams, FeeEstimationError},
    mean::mean,
    suggest::{
        suggest_mean_gas_fee_cap, suggest_mean_gas_price, suggest_mean_gas_tip_cap,
        BASE_FEE_MULTIPLIER,
    },
};

mod estimator;
mod mean;
mod metrics;
mod suggest;
