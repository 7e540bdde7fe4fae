// src/adapter_config.rs
//
// Adapter configurations: one per registered trading/yield venue, tagged by
// allow-list family. The union is closed, so adding a variant is a
// compile-time obligation at every match site; an integration type whose
// registry tag disagrees with the config family aborts compilation instead
// of silently emitting only the registration line.

use crate::contracts::{AdapterFamily, ContractSymbol};
use crate::emit::{Expr, SourceBlock};
use crate::errors::CompileError;
use crate::networks::Network;
use crate::registries::RegistrySet;
use crate::tokens::TokenSymbol;
use ethers::types::{Address, U256};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub token_in: TokenSymbol,
    pub token_out: TokenSymbol,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeTierPair {
    pub token0: TokenSymbol,
    pub token1: TokenSymbol,
    pub fee: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickSpacingPair {
    pub token0: TokenSymbol,
    pub token1: TokenSymbol,
    pub tick_spacing: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VelodromePool {
    pub token0: TokenSymbol,
    pub token1: TokenSymbol,
    pub stable: bool,
    pub factory: Address,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalancerPool {
    pub pool_id: U256,
    pub status: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendleMarket {
    pub market: Address,
    pub input_token: TokenSymbol,
    pub output_token: TokenSymbol,
    pub status: u8,
}

/// One adapter registration plus its venue-specific allowed set. Allow-list
/// input order is reproduced byte-for-byte in the emitted block.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AdapterConfig {
    /// Vault/venue without an allow-list; registration statement only.
    Swapper { contract: ContractSymbol },
    UniswapV2Pairs {
        contract: ContractSymbol,
        pairs: Vec<TokenPair>,
    },
    UniswapV3Pairs {
        contract: ContractSymbol,
        pairs: Vec<FeeTierPair>,
    },
    CamelotV3Pairs {
        contract: ContractSymbol,
        pairs: Vec<TickSpacingPair>,
    },
    VelodromePools {
        contract: ContractSymbol,
        pools: Vec<VelodromePool>,
    },
    BalancerPools {
        contract: ContractSymbol,
        pools: Vec<BalancerPool>,
    },
    PendleMarkets {
        contract: ContractSymbol,
        markets: Vec<PendleMarket>,
    },
    MellowUnderlyings {
        contract: ContractSymbol,
        vault: ContractSymbol,
        underlyings: Vec<TokenSymbol>,
    },
}

impl AdapterConfig {
    pub fn contract(&self) -> &ContractSymbol {
        match self {
            AdapterConfig::Swapper { contract }
            | AdapterConfig::UniswapV2Pairs { contract, .. }
            | AdapterConfig::UniswapV3Pairs { contract, .. }
            | AdapterConfig::CamelotV3Pairs { contract, .. }
            | AdapterConfig::VelodromePools { contract, .. }
            | AdapterConfig::BalancerPools { contract, .. }
            | AdapterConfig::PendleMarkets { contract, .. }
            | AdapterConfig::MellowUnderlyings { contract, .. } => contract,
        }
    }

    /// Allow-list family this config carries. Must agree with the registry
    /// integration type of the target contract.
    pub fn family(&self) -> AdapterFamily {
        match self {
            AdapterConfig::Swapper { .. } => AdapterFamily::Plain,
            AdapterConfig::UniswapV2Pairs { .. } => AdapterFamily::PairSwap,
            AdapterConfig::UniswapV3Pairs { .. } => AdapterFamily::FeeTierPairSwap,
            AdapterConfig::CamelotV3Pairs { .. } => AdapterFamily::TickSpacingPairSwap,
            AdapterConfig::VelodromePools { .. } => AdapterFamily::FactoryQualifiedPairSwap,
            AdapterConfig::BalancerPools { .. } => AdapterFamily::StatusTaggedPools,
            AdapterConfig::PendleMarkets { .. } => AdapterFamily::MarketBased,
            AdapterConfig::MellowUnderlyings { .. } => AdapterFamily::VaultUnderlyings,
        }
    }

    /// Emits the registration statement and, where the family carries one,
    /// the allow-list records. Tokens go through the identifier sanitizer and
    /// contracts through their registry enum names; raw venue addresses never
    /// appear in allow-list records.
    pub fn compile(
        &self,
        regs: &RegistrySet,
        network: Network,
    ) -> Result<SourceBlock, CompileError> {
        let contract = self.contract();
        let entry = regs.contracts.get(contract)?;
        if entry.integration.family() != self.family() {
            return Err(CompileError::AdapterMismatch {
                contract: contract.clone(),
                integration: entry.integration,
            });
        }

        let mut block = SourceBlock::new();
        block.push("cp.contracts", Expr::Contract(contract.clone()));

        match self {
            AdapterConfig::Swapper { .. } => {}
            AdapterConfig::UniswapV2Pairs { pairs, .. } => {
                for pair in pairs {
                    regs.tokens.ensure_deployed(&pair.token_in, network)?;
                    regs.tokens.ensure_deployed(&pair.token_out, network)?;
                    block.push(
                        "cp.adapterConfig.uniswapV2Pairs",
                        Expr::record(
                            "UniswapV2Pair",
                            vec![
                                ("router", Expr::Contract(contract.clone())),
                                ("token0", Expr::Token(pair.token_in.clone())),
                                ("token1", Expr::Token(pair.token_out.clone())),
                            ],
                        ),
                    );
                }
            }
            AdapterConfig::UniswapV3Pairs { pairs, .. } => {
                for pair in pairs {
                    regs.tokens.ensure_deployed(&pair.token0, network)?;
                    regs.tokens.ensure_deployed(&pair.token1, network)?;
                    block.push(
                        "cp.adapterConfig.uniswapV3Pairs",
                        Expr::record(
                            "UniswapV3Pair",
                            vec![
                                ("router", Expr::Contract(contract.clone())),
                                ("token0", Expr::Token(pair.token0.clone())),
                                ("token1", Expr::Token(pair.token1.clone())),
                                ("fee", Expr::Lit(pair.fee.to_string())),
                            ],
                        ),
                    );
                }
            }
            AdapterConfig::CamelotV3Pairs { pairs, .. } => {
                for pair in pairs {
                    regs.tokens.ensure_deployed(&pair.token0, network)?;
                    regs.tokens.ensure_deployed(&pair.token1, network)?;
                    // same numeric slot as the fee-tier family, sourced from
                    // the venue's tick spacing instead of a discrete tier
                    block.push(
                        "cp.adapterConfig.camelotV3Pairs",
                        Expr::record(
                            "CamelotV3Pair",
                            vec![
                                ("router", Expr::Contract(contract.clone())),
                                ("token0", Expr::Token(pair.token0.clone())),
                                ("token1", Expr::Token(pair.token1.clone())),
                                ("tickSpacing", Expr::Lit(pair.tick_spacing.to_string())),
                            ],
                        ),
                    );
                }
            }
            AdapterConfig::VelodromePools { pools, .. } => {
                for pool in pools {
                    regs.tokens.ensure_deployed(&pool.token0, network)?;
                    regs.tokens.ensure_deployed(&pool.token1, network)?;
                    block.push(
                        "cp.adapterConfig.velodromePools",
                        Expr::record(
                            "VelodromePool",
                            vec![
                                ("token0", Expr::Token(pool.token0.clone())),
                                ("token1", Expr::Token(pool.token1.clone())),
                                ("stable", Expr::Bool(pool.stable)),
                                ("factory", Expr::Addr(pool.factory)),
                            ],
                        ),
                    );
                }
            }
            AdapterConfig::BalancerPools { pools, .. } => {
                for pool in pools {
                    block.push(
                        "cp.adapterConfig.balancerPools",
                        Expr::record(
                            "BalancerPool",
                            vec![
                                ("poolId", Expr::Uint(pool.pool_id)),
                                ("status", Expr::Lit(pool.status.to_string())),
                            ],
                        ),
                    );
                }
            }
            AdapterConfig::PendleMarkets { markets, .. } => {
                for market in markets {
                    regs.tokens.ensure_deployed(&market.input_token, network)?;
                    regs.tokens.ensure_deployed(&market.output_token, network)?;
                    block.push(
                        "cp.adapterConfig.pendleMarkets",
                        Expr::record(
                            "PendleMarket",
                            vec![
                                ("market", Expr::Addr(market.market)),
                                ("inputToken", Expr::Token(market.input_token.clone())),
                                ("outputToken", Expr::Token(market.output_token.clone())),
                                ("status", Expr::Lit(market.status.to_string())),
                            ],
                        ),
                    );
                }
            }
            AdapterConfig::MellowUnderlyings {
                vault, underlyings, ..
            } => {
                regs.contracts.get(vault)?;
                for underlying in underlyings {
                    regs.tokens.ensure_deployed(underlying, network)?;
                    block.push(
                        "cp.adapterConfig.mellowUnderlyings",
                        Expr::record(
                            "MellowUnderlying",
                            vec![
                                ("vault", Expr::Contract(vault.clone())),
                                ("underlying", Expr::Token(underlying.clone())),
                            ],
                        ),
                    );
                }
            }
        }

        Ok(block)
    }
}
