use bundler_config::ObservabilityConfig;

use crate::{envy_load, FromEnv};

#[derive(Debug, serde::Deserialize)]
struct MiscLogConfig {
    log_format: Option<String>,
}

impl FromEnv for ObservabilityConfig {
    fn from_env() -> anyhow::Result<Self> {
        let misc: MiscLogConfig = envy_load("observability", "MISC_")?;
        let mut config = Self::default();
        if let Some(log_format) = misc.log_format {
            config.log_format = log_format;
        }
        if let Ok(log_directives) = std::env::var("RUST_LOG") {
            config.log_directives = log_directives;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::EnvMutex;

    static MUTEX: EnvMutex = EnvMutex::new();

    #[test]
    fn from_env() {
        let mut lock = MUTEX.lock();
        let config = r#"
            MISC_LOG_FORMAT="json"
            RUST_LOG="bundler_fee_model=debug"
        "#;
        lock.set_env(config);

        let actual = ObservabilityConfig::from_env().unwrap();
        assert_eq!(
            actual,
            ObservabilityConfig {
                log_format: "json".into(),
                log_directives: "bundler_fee_model=debug".into(),
            }
        );
    }

    #[test]
    fn defaults() {
        let mut lock = MUTEX.lock();
        lock.remove_env(&["MISC_LOG_FORMAT", "RUST_LOG"]);

        let actual = ObservabilityConfig::from_env().unwrap();
        assert_eq!(actual, ObservabilityConfig::default());
    }
}
