//! This crate contains the observability subsystem.
//! It is responsible for providing a centralized interface for consistent logging configuration.

use anyhow::Context as _;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use crate::logs::{LogFormat, Logs};

pub mod logs;

/// Builder for the observability subsystem.
/// Currently capable of configuring logging output.
#[derive(Debug, Default)]
pub struct ObservabilityBuilder {
    logs: Option<Logs>,
}

impl ObservabilityBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_logs(mut self, logs: Option<Logs>) -> Self {
        self.logs = logs;
        self
    }

    /// Tries to initialize the observability subsystem. Returns an error if it's already initialized
    /// or if log directives are malformed.
    pub fn try_build(self) -> anyhow::Result<()> {
        let logs = self.logs.unwrap_or_default();
        let filter = logs.build_filter()?;
        let logs_layer = logs.into_layer();

        tracing_subscriber::registry()
            .with(filter)
            .with(logs_layer)
            .try_init()
            .context("failed installing global logger")?;
        Ok(())
    }
}
