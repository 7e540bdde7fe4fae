// src/networks.rs
//
// Supported networks and their canonical ordering. Every per-network loop in
// the bindings generator walks `Network::ALL` in declaration order, never
// alphabetically, so that emitted artifacts diff deterministically.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A network the protocol can be deployed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Network {
    Mainnet,
    Arbitrum,
    Optimism,
    Base,
    Sonic,
}

impl Network {
    /// Declared network order used for all per-network emission loops.
    pub const ALL: [Network; 5] = [
        Network::Mainnet,
        Network::Arbitrum,
        Network::Optimism,
        Network::Base,
        Network::Sonic,
    ];

    pub fn chain_id(&self) -> u64 {
        match self {
            Network::Mainnet => 1,
            Network::Arbitrum => 42161,
            Network::Optimism => 10,
            Network::Base => 8453,
            Network::Sonic => 146,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Network::Mainnet => "Mainnet",
            Network::Arbitrum => "Arbitrum",
            Network::Optimism => "Optimism",
            Network::Base => "Base",
            Network::Sonic => "Sonic",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Network::ALL
            .iter()
            .copied()
            .find(|n| n.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown network '{}'", s))
    }
}
