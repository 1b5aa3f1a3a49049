use bundler_config::GasPricingConfig;

use crate::{envy_load, FromEnv};

impl FromEnv for GasPricingConfig {
    fn from_env() -> anyhow::Result<Self> {
        envy_load("gas_pricing", "GAS_PRICING_")
    }
}

#[cfg(test)]
mod tests {
    use bundler_config::FeeMode;

    use super::*;
    use crate::test_utils::EnvMutex;

    static MUTEX: EnvMutex = EnvMutex::new();

    #[test]
    fn from_env() {
        let mut lock = MUTEX.lock();
        lock.set_env(r#"GAS_PRICING_MODE="legacy""#);

        let actual = GasPricingConfig::from_env().unwrap();
        assert_eq!(actual.mode, FeeMode::Legacy);
    }

    #[test]
    fn mode_defaults_to_auto() {
        let mut lock = MUTEX.lock();
        lock.remove_env(&["GAS_PRICING_MODE"]);

        let actual = GasPricingConfig::from_env().unwrap();
        assert_eq!(actual, GasPricingConfig::default());
        assert_eq!(actual.mode, FeeMode::Auto);
    }
}
