// src/tokens.rs
//
// Token registry: symbol -> decimals plus per-network deployment address.
// The registry is explicitly constructed and passed by reference into the
// compiler; insertion order is emission order.

use crate::errors::CompileError;
use crate::networks::Network;
use ethers::types::Address;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque string key into the token registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenSymbol(String);

impl TokenSymbol {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TokenSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TokenSymbol {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Per-network deployment status of a token or contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Deployment {
    Deployed(Address),
    NotDeployed,
}

impl Deployment {
    pub fn address(&self) -> Option<Address> {
        match self {
            Deployment::Deployed(addr) => Some(*addr),
            Deployment::NotDeployed => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenEntry {
    pub decimals: u8,
    #[serde(default)]
    pub deployments: IndexMap<Network, Deployment>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenRegistry {
    tokens: IndexMap<TokenSymbol, TokenEntry>,
}

impl TokenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, symbol: TokenSymbol, entry: TokenEntry) {
        self.tokens.insert(symbol, entry);
    }

    pub fn get(&self, symbol: &TokenSymbol) -> Result<&TokenEntry, CompileError> {
        self.tokens
            .get(symbol)
            .ok_or_else(|| CompileError::UnknownToken(symbol.clone()))
    }

    /// Deployment address of a token on a network. Fails if the symbol is
    /// unknown or carries the not-deployed sentinel for that network; the
    /// compiler never substitutes a placeholder address.
    pub fn address(&self, symbol: &TokenSymbol, network: Network) -> Result<Address, CompileError> {
        self.get(symbol)?
            .deployments
            .get(&network)
            .and_then(Deployment::address)
            .ok_or_else(|| CompileError::TokenNotDeployed {
                symbol: symbol.clone(),
                network,
            })
    }

    /// Validates that a referenced symbol resolves on the given network.
    pub fn ensure_deployed(
        &self,
        symbol: &TokenSymbol,
        network: Network,
    ) -> Result<(), CompileError> {
        self.address(symbol, network).map(|_| ())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TokenSymbol, &TokenEntry)> {
        self.tokens.iter()
    }

    /// Symbols deployed on a network, in registry declaration order.
    pub fn deployed_on(&self, network: Network) -> impl Iterator<Item = (&TokenSymbol, Address)> {
        self.tokens.iter().filter_map(move |(symbol, entry)| {
            entry
                .deployments
                .get(&network)
                .and_then(Deployment::address)
                .map(|addr| (symbol, addr))
        })
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
