use std::path::PathBuf;

use anyhow::Context as _;
use bundler_config::{EthClientConfig, GasPricingConfig, ObservabilityConfig};
use bundler_env_config::FromEnv;
use bundler_eth_client::{clients::QueryClient, EthInterface};
use bundler_fee_model::BundleFeeEstimator;
use bundler_types::Network;
use bundler_vlog::{LogFormat, Logs, ObservabilityBuilder};
use clap::Parser;

mod batch;

#[derive(Debug, Parser)]
#[command(
    author = "The Bundler Team",
    version,
    about = "Computes fee parameters for a bundle of user operations",
    long_about = None
)]
struct Cli {
    /// Path to a JSON file with an array of user operations to be bundled.
    #[arg(long)]
    batch: PathBuf,
    /// Do not check that the node's chain ID matches the configured network.
    #[arg(long)]
    skip_chain_id_check: bool,
}

/// Checks that the node serves the configured network.
async fn check_chain_id(client: &dyn EthInterface, network: Network) -> anyhow::Result<()> {
    let chain_id = client
        .fetch_chain_id()
        .await
        .context("failed fetching chain ID")?;
    if chain_id == network.chain_id() {
        return Ok(());
    }

    match Network::from_chain_id(chain_id) {
        Some(actual) => anyhow::bail!(
            "Configured network is {network} (chain ID {}), but the node serves {actual} (chain ID {chain_id})",
            network.chain_id()
        ),
        None => anyhow::bail!(
            "Configured network is {network} (chain ID {}), but the node serves unknown chain ID {chain_id}",
            network.chain_id()
        ),
    }
}

impl Cli {
    async fn run(
        self,
        eth_config: &EthClientConfig,
        pricing_config: GasPricingConfig,
    ) -> anyhow::Result<()> {
        let client = QueryClient::with_timeout(&eth_config.web3_url, eth_config.request_timeout())
            .context("failed creating Ethereum client")?
            .for_component("gas_pricer");
        if self.skip_chain_id_check {
            tracing::warn!("Skipping chain ID check for network {}", eth_config.network);
        } else {
            check_chain_id(&client, eth_config.network).await?;
        }

        let batch = batch::read_batch(&self.batch).await?;
        tracing::info!("Estimating fees in {:?} mode", pricing_config.mode);
        let estimator = BundleFeeEstimator::new(Box::new(client), pricing_config);
        let params = estimator
            .estimate(&batch)
            .await
            .context("failed estimating bundle fees")?;

        let output = serde_json::to_string_pretty(&params)?;
        println!("{output}");
        Ok(())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let observability_config =
        ObservabilityConfig::from_env().context("ObservabilityConfig::from_env()")?;
    let log_format: LogFormat = observability_config
        .log_format
        .parse()
        .context("Invalid log format")?;
    ObservabilityBuilder::new()
        .with_logs(Some(Logs::new(
            log_format,
            observability_config.log_directives,
        )))
        .try_build()?;

    let eth_config = EthClientConfig::from_env().context("EthClientConfig::from_env()")?;
    let pricing_config = GasPricingConfig::from_env().context("GasPricingConfig::from_env()")?;
    cli.run(&eth_config, pricing_config).await
}
