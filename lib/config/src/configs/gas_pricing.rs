use serde::Deserialize;

/// Fee model used for bundle transactions.
#[derive(Debug, Default, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FeeMode {
    /// EIP-1559 fees if the pending block has a base fee, legacy gas price otherwise.
    #[default]
    Auto,
    /// Always price bundles with `maxFeePerGas` / `maxPriorityFeePerGas`.
    Eip1559,
    /// Always price bundles with a single `gasPrice`.
    Legacy,
}

/// Configuration for pricing bundle transactions.
#[derive(Debug, Default, Deserialize, Clone, Copy, PartialEq)]
pub struct GasPricingConfig {
    #[serde(default)]
    pub mode: FeeMode,
}
