use std::time::Duration;

// External uses
use bundler_basic_types::{network::Network, ChainId};
use serde::Deserialize;

/// Configuration for the Ethereum node connection.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct EthClientConfig {
    /// Network the bundler operates on. The node is expected to report the matching chain ID.
    pub network: Network,
    /// Address of the Ethereum node API.
    pub web3_url: String,
    /// Timeout for a single JSON-RPC request to the node, in milliseconds.
    #[serde(default = "EthClientConfig::default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl EthClientConfig {
    const fn default_request_timeout_ms() -> u64 {
        30_000
    }

    pub fn chain_id(&self) -> ChainId {
        self.network.chain_id()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}
