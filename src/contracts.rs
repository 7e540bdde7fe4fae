// src/contracts.rs
//
// Contract registry: trading-venue and vault contracts keyed by symbol, each
// tagged with its integration type. The integration type decides which
// adapter-config family may target the contract and which AdapterType enum
// member the bindings generator emits for it.

use crate::errors::CompileError;
use crate::networks::Network;
use crate::tokens::Deployment;
use ethers::types::Address;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque string key into the contract registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContractSymbol(String);

impl ContractSymbol {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContractSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContractSymbol {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Closed set of venue integrations the compiler can emit adapters for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationType {
    UniswapV2Swapper,
    SushiswapSwapper,
    FraxswapSwapper,
    UniswapV3Swapper,
    CamelotV3Swapper,
    VelodromeSwapper,
    BalancerVault,
    CurvePool,
    Erc4626Vault,
    YearnVault,
    ConvexBooster,
    LidoWrapper,
    StakingRewards,
    PendleRouter,
    MellowVault,
}

/// Shape of the allow-list an adapter config carries. Each integration type
/// maps onto exactly one family; the mapping is total so a new integration
/// type is a compile-time obligation here and in `AdapterConfig::compile`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdapterFamily {
    /// Registration statement only, no allow-list.
    Plain,
    /// Plain (token_in, token_out) pairs.
    PairSwap,
    /// Pairs tagged with a discrete fee tier.
    FeeTierPairSwap,
    /// Pairs tagged with a continuous tick spacing.
    TickSpacingPairSwap,
    /// Pairs with a stability flag and a factory address.
    FactoryQualifiedPairSwap,
    /// Status-tagged pool identifiers.
    StatusTaggedPools,
    /// Market address plus input/output token plus status.
    MarketBased,
    /// One record per accepted vault underlying.
    VaultUnderlyings,
}

impl IntegrationType {
    pub const ALL: [IntegrationType; 15] = [
        IntegrationType::UniswapV2Swapper,
        IntegrationType::SushiswapSwapper,
        IntegrationType::FraxswapSwapper,
        IntegrationType::UniswapV3Swapper,
        IntegrationType::CamelotV3Swapper,
        IntegrationType::VelodromeSwapper,
        IntegrationType::BalancerVault,
        IntegrationType::CurvePool,
        IntegrationType::Erc4626Vault,
        IntegrationType::YearnVault,
        IntegrationType::ConvexBooster,
        IntegrationType::LidoWrapper,
        IntegrationType::StakingRewards,
        IntegrationType::PendleRouter,
        IntegrationType::MellowVault,
    ];

    pub fn family(&self) -> AdapterFamily {
        match self {
            IntegrationType::UniswapV2Swapper
            | IntegrationType::SushiswapSwapper
            | IntegrationType::FraxswapSwapper => AdapterFamily::PairSwap,
            IntegrationType::UniswapV3Swapper => AdapterFamily::FeeTierPairSwap,
            IntegrationType::CamelotV3Swapper => AdapterFamily::TickSpacingPairSwap,
            IntegrationType::VelodromeSwapper => AdapterFamily::FactoryQualifiedPairSwap,
            IntegrationType::BalancerVault => AdapterFamily::StatusTaggedPools,
            IntegrationType::CurvePool
            | IntegrationType::Erc4626Vault
            | IntegrationType::YearnVault
            | IntegrationType::ConvexBooster
            | IntegrationType::LidoWrapper
            | IntegrationType::StakingRewards => AdapterFamily::Plain,
            IntegrationType::PendleRouter => AdapterFamily::MarketBased,
            IntegrationType::MellowVault => AdapterFamily::VaultUnderlyings,
        }
    }

    /// Member name in the emitted AdapterType enum.
    pub fn adapter_type_name(&self) -> &'static str {
        match self {
            IntegrationType::UniswapV2Swapper => "UNISWAP_V2",
            IntegrationType::SushiswapSwapper => "SUSHISWAP",
            IntegrationType::FraxswapSwapper => "FRAXSWAP",
            IntegrationType::UniswapV3Swapper => "UNISWAP_V3",
            IntegrationType::CamelotV3Swapper => "CAMELOT_V3",
            IntegrationType::VelodromeSwapper => "VELODROME",
            IntegrationType::BalancerVault => "BALANCER_VAULT",
            IntegrationType::CurvePool => "CURVE_POOL",
            IntegrationType::Erc4626Vault => "ERC4626_VAULT",
            IntegrationType::YearnVault => "YEARN_VAULT",
            IntegrationType::ConvexBooster => "CONVEX_BOOSTER",
            IntegrationType::LidoWrapper => "LIDO_WRAPPER",
            IntegrationType::StakingRewards => "STAKING_REWARDS",
            IntegrationType::PendleRouter => "PENDLE_ROUTER",
            IntegrationType::MellowVault => "MELLOW_VAULT",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractEntry {
    pub integration: IntegrationType,
    /// Protocol label used for documentation in emitted registries, never
    /// for dispatch.
    pub protocol: String,
    #[serde(default)]
    pub deployments: IndexMap<Network, Deployment>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContractRegistry {
    contracts: IndexMap<ContractSymbol, ContractEntry>,
}

impl ContractRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, symbol: ContractSymbol, entry: ContractEntry) {
        self.contracts.insert(symbol, entry);
    }

    pub fn get(&self, symbol: &ContractSymbol) -> Result<&ContractEntry, CompileError> {
        self.contracts
            .get(symbol)
            .ok_or_else(|| CompileError::UnknownContract(symbol.clone()))
    }

    pub fn address(
        &self,
        symbol: &ContractSymbol,
        network: Network,
    ) -> Result<Address, CompileError> {
        self.get(symbol)?
            .deployments
            .get(&network)
            .and_then(Deployment::address)
            .ok_or_else(|| CompileError::ContractNotDeployed {
                symbol: symbol.clone(),
                network,
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ContractSymbol, &ContractEntry)> {
        self.contracts.iter()
    }

    pub fn deployed_on(
        &self,
        network: Network,
    ) -> impl Iterator<Item = (&ContractSymbol, &ContractEntry, Address)> {
        self.contracts.iter().filter_map(move |(symbol, entry)| {
            entry
                .deployments
                .get(&network)
                .and_then(Deployment::address)
                .map(|addr| (symbol, entry, addr))
        })
    }

    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_integration_type_has_a_family_and_name() {
        // A new variant that misses either mapping fails to compile, but this
        // also guards the ALL listing against omissions.
        assert_eq!(IntegrationType::ALL.len(), 15);
        for it in IntegrationType::ALL {
            let _ = it.family();
            assert!(!it.adapter_type_name().is_empty());
        }
    }

    #[test]
    fn allowlist_families_match_expectations() {
        assert_eq!(
            IntegrationType::UniswapV3Swapper.family(),
            AdapterFamily::FeeTierPairSwap
        );
        assert_eq!(IntegrationType::YearnVault.family(), AdapterFamily::Plain);
        assert_eq!(
            IntegrationType::MellowVault.family(),
            AdapterFamily::VaultUnderlyings
        );
    }
}
