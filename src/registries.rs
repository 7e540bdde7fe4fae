// src/registries.rs
//
// The three static registries bundled for injection into the compiler. No
// module-level globals: callers construct (or deserialize) a RegistrySet once
// at startup and pass it by reference, so tests can substitute fixtures.

use crate::contracts::ContractRegistry;
use crate::errors::CompileError;
use crate::networks::Network;
use crate::price_feeds::PriceFeedRegistry;
use crate::tokens::TokenRegistry;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistrySet {
    #[serde(default)]
    pub tokens: TokenRegistry,
    #[serde(default)]
    pub contracts: ContractRegistry,
    #[serde(default)]
    pub price_feeds: PriceFeedRegistry,
}

impl RegistrySet {
    pub fn new(
        tokens: TokenRegistry,
        contracts: ContractRegistry,
        price_feeds: PriceFeedRegistry,
    ) -> Self {
        Self {
            tokens,
            contracts,
            price_feeds,
        }
    }

    /// True if any registry carries at least one entry for the network.
    pub fn has_entries_for(&self, network: Network) -> bool {
        self.tokens.deployed_on(network).next().is_some()
            || self.contracts.deployed_on(network).next().is_some()
            || self.price_feeds.has_entries_for(network)
    }

    /// Fail-fast check used before emitting anything for a network, so the
    /// generator never produces an artifact with empty sections.
    pub fn ensure_network(&self, network: Network) -> Result<(), CompileError> {
        if self.has_entries_for(network) {
            Ok(())
        } else {
            Err(CompileError::UnsupportedNetwork(network))
        }
    }

    /// Loads the three registries from JSON files authored alongside the
    /// pool configurations.
    pub fn load(
        tokens_path: impl AsRef<Path>,
        contracts_path: impl AsRef<Path>,
        price_feeds_path: impl AsRef<Path>,
    ) -> anyhow::Result<Self> {
        let tokens = read_json(tokens_path.as_ref()).context("loading token registry")?;
        let contracts = read_json(contracts_path.as_ref()).context("loading contract registry")?;
        let price_feeds =
            read_json(price_feeds_path.as_ref()).context("loading price feed registry")?;
        Ok(Self {
            tokens,
            contracts,
            price_feeds,
        })
    }
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> anyhow::Result<T> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}
