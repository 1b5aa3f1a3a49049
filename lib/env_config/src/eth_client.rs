use anyhow::Context as _;
use bundler_config::EthClientConfig;
use url::Url;

use crate::{envy_load, FromEnv};

impl FromEnv for EthClientConfig {
    fn from_env() -> anyhow::Result<Self> {
        let config: Self = envy_load("eth_client", "ETH_CLIENT_")?;
        if config.web3_url.contains(',') {
            anyhow::bail!(
                "Multiple web3 URLs aren't supported. Provided invalid value: {}",
                config.web3_url
            );
        }
        Url::parse(&config.web3_url)
            .with_context(|| format!("Invalid web3 URL: {}", config.web3_url))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use bundler_basic_types::{network::Network, ChainId};

    use super::*;
    use crate::test_utils::EnvMutex;

    static MUTEX: EnvMutex = EnvMutex::new();

    fn expected_config() -> EthClientConfig {
        EthClientConfig {
            network: Network::ArbitrumGoerli,
            web3_url: "http://127.0.0.1:8545".into(),
            request_timeout_ms: 5_000,
        }
    }

    #[test]
    fn from_env() {
        let mut lock = MUTEX.lock();
        let config = r#"
            ETH_CLIENT_NETWORK="arbitrumGoerli"
            ETH_CLIENT_WEB3_URL="http://127.0.0.1:8545"
            ETH_CLIENT_REQUEST_TIMEOUT_MS="5000"
        "#;
        lock.set_env(config);

        let actual = EthClientConfig::from_env().unwrap();
        assert_eq!(actual, expected_config());
        assert_eq!(actual.chain_id(), ChainId(421613));
    }

    #[test]
    fn from_env_with_defaults() {
        let mut lock = MUTEX.lock();
        lock.remove_env(&["ETH_CLIENT_REQUEST_TIMEOUT_MS"]);
        let config = r#"
            ETH_CLIENT_NETWORK="ethereum"
            ETH_CLIENT_WEB3_URL="http://127.0.0.1:8545"
        "#;
        lock.set_env(config);

        let actual = EthClientConfig::from_env().unwrap();
        assert_eq!(actual.network, Network::Ethereum);
        assert_eq!(actual.request_timeout_ms, 30_000);
    }

    #[test]
    fn multiple_urls_are_rejected() {
        let mut lock = MUTEX.lock();
        let config = r#"
            ETH_CLIENT_NETWORK="goerli"
            ETH_CLIENT_WEB3_URL="http://127.0.0.1:8545,http://127.0.0.1:8546"
        "#;
        lock.set_env(config);

        assert!(EthClientConfig::from_env().is_err());
    }

    #[test]
    fn unknown_network_is_rejected() {
        let mut lock = MUTEX.lock();
        let config = r#"
            ETH_CLIENT_NETWORK="sepolia"
            ETH_CLIENT_WEB3_URL="http://127.0.0.1:8545"
        "#;
        lock.set_env(config);

        assert!(EthClientConfig::from_env().is_err());
    }
}
