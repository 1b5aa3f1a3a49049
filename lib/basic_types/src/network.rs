//! The networks a bundler can be deployed to.
//!
//! The catalog is a fixed mapping known at compile time; it is never mutated at runtime.

// Built-in uses
use std::{fmt, str::FromStr};

// External uses
use serde::{Deserialize, Serialize};

// Workspace uses
use crate::ChainId;

/// Network the bundler submits bundles to.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Network {
    /// Ethereum Mainnet.
    Ethereum,
    /// Ethereum Görli testnet.
    Goerli,
    /// Arbitrum One rollup.
    ArbitrumOne,
    /// Arbitrum Görli testnet rollup.
    ArbitrumGoerli,
}

impl Network {
    /// All networks in the catalog.
    pub const ALL: [Self; 4] = [
        Self::Ethereum,
        Self::Goerli,
        Self::ArbitrumOne,
        Self::ArbitrumGoerli,
    ];

    /// Looks up the network by its chain ID. Returns `None` for chains outside the catalog.
    pub fn from_chain_id(chain_id: ChainId) -> Option<Self> {
        Some(match *chain_id {
            1 => Self::Ethereum,
            5 => Self::Goerli,
            42161 => Self::ArbitrumOne,
            421613 => Self::ArbitrumGoerli,
            _ => return None,
        })
    }

    /// Returns the chain ID of the network.
    pub const fn chain_id(self) -> ChainId {
        match self {
            Self::Ethereum => ChainId(1),
            Self::Goerli => ChainId(5),
            Self::ArbitrumOne => ChainId(42161),
            Self::ArbitrumGoerli => ChainId(421613),
        }
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        Ok(match string {
            "ethereum" => Self::Ethereum,
            "goerli" => Self::Goerli,
            "arbitrumOne" => Self::ArbitrumOne,
            "arbitrumGoerli" => Self::ArbitrumGoerli,
            another => return Err(another.to_owned()),
        })
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ethereum => write!(f, "ethereum"),
            Self::Goerli => write!(f, "goerli"),
            Self::ArbitrumOne => write!(f, "arbitrumOne"),
            Self::ArbitrumGoerli => write!(f, "arbitrumGoerli"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use test_casing::test_casing;

    use super::*;

    #[test_casing(4, Network::ALL)]
    #[test]
    fn network_roundtrips_through_catalog(network: Network) {
        assert_eq!(Network::from_chain_id(network.chain_id()), Some(network));
        assert_eq!(network.to_string().parse::<Network>(), Ok(network));

        let json = serde_json::to_string(&network).unwrap();
        assert_eq!(json, format!("\"{network}\""));
        assert_eq!(serde_json::from_str::<Network>(&json).unwrap(), network);
    }

    #[test]
    fn chain_ids_are_unique() {
        let ids: HashSet<_> = Network::ALL.iter().map(|net| net.chain_id()).collect();
        assert_eq!(ids.len(), Network::ALL.len());
    }

    #[test]
    fn known_chain_ids() {
        assert_eq!(Network::Ethereum.chain_id(), ChainId(1));
        assert_eq!(Network::Goerli.chain_id(), ChainId(5));
        assert_eq!(Network::ArbitrumOne.chain_id(), ChainId(42161));
        assert_eq!(Network::ArbitrumGoerli.chain_id(), ChainId(421613));
    }

    #[test]
    fn unknown_networks_are_rejected() {
        assert_eq!(Network::from_chain_id(ChainId(9)), None);
        assert_eq!("sepolia".parse::<Network>(), Err("sepolia".to_owned()));
    }
}
