#![allow(clippy::upper_case_acronyms, clippy::derive_partial_eq_without_eq)]

pub use crate::configs::{EthClientConfig, FeeMode, GasPricingConfig, ObservabilityConfig};

pub mod configs;
