//! The declaration of the most primitive types used by the bundler.
//!
//! Most of them are just re-exported from the `web3` crate.

use std::{fmt, num::ParseIntError, ops::Deref, str::FromStr};

use serde::{Deserialize, Serialize};
pub use web3;
pub use web3::types::{Address, Bytes, H160, H256, U256, U64};

pub mod network;

/// Chain ID of an EVM network, as returned by `eth_chainId`.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ChainId(pub u64);

impl Deref for ChainId {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<u64> for ChainId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for ChainId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}
