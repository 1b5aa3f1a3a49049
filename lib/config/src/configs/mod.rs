// Public re-exports
pub use self::{
    eth_client::EthClientConfig,
    gas_pricing::{FeeMode, GasPricingConfig},
    observability::ObservabilityConfig,
};

pub mod eth_client;
pub mod gas_pricing;
pub mod observability;
