use serde::Deserialize;

/// Configuration for the essential observability stack, i.e. logging.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ObservabilityConfig {
    /// Format of the logs as expected by the `vlog` crate.
    /// Currently must be either `plain` or `json`.
    #[serde(default = "ObservabilityConfig::default_log_format")]
    pub log_format: String,
    /// Log directives in format that is used in `RUST_LOG`.
    #[serde(default = "ObservabilityConfig::default_log_directives")]
    pub log_directives: String,
}

impl ObservabilityConfig {
    fn default_log_format() -> String {
        "plain".to_owned()
    }

    fn default_log_directives() -> String {
        "bundler=info".to_owned()
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_format: Self::default_log_format(),
            log_directives: Self::default_log_directives(),
        }
    }
}
