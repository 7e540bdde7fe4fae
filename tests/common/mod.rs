//! Shared registry and pool-definition fixtures for integration tests.
//!
//! The fixture deliberately leaves Optimism, Base and Sonic empty so tests
//! can exercise the unsupported-network fail-fast path.

#![allow(dead_code)]

use ethers::types::{Address, U256};
use indexmap::IndexMap;
use lendgen_sdk::adapter_config::{AdapterConfig, FeeTierPair};
use lendgen_sdk::contracts::{ContractEntry, ContractRegistry, ContractSymbol, IntegrationType};
use lendgen_sdk::networks::Network;
use lendgen_sdk::pool_definition::{
    CollateralToken, CreditManagerConfig, IrmParams, PoolDefinition, QuotaParams, QuotaTable,
};
use lendgen_sdk::price_feeds::{FeedPair, PriceFeed, PriceFeedRegistry, TokenFeeds};
use lendgen_sdk::registries::RegistrySet;
use lendgen_sdk::tokens::{Deployment, TokenEntry, TokenRegistry, TokenSymbol};
use once_cell::sync::Lazy;

pub static REGS: Lazy<RegistrySet> = Lazy::new(build_registries);

pub fn chainlink(byte: u8) -> PriceFeed {
    PriceFeed::Chainlink {
        address: Address::repeat_byte(byte),
        stale_after: 86_400,
    }
}

fn deployments(byte: u8, networks: &[Network]) -> IndexMap<Network, Deployment> {
    networks
        .iter()
        .map(|n| (*n, Deployment::Deployed(Address::repeat_byte(byte))))
        .collect()
}

pub fn build_registries() -> RegistrySet {
    let mut tokens = TokenRegistry::new();
    tokens.insert(
        TokenSymbol::from("USDC"),
        TokenEntry {
            decimals: 6,
            deployments: deployments(0x01, &[Network::Mainnet, Network::Arbitrum]),
        },
    );
    tokens.insert(
        TokenSymbol::from("WETH"),
        TokenEntry {
            decimals: 18,
            deployments: deployments(0x02, &[Network::Mainnet, Network::Arbitrum]),
        },
    );
    tokens.insert(
        TokenSymbol::from("3Crv"),
        TokenEntry {
            decimals: 18,
            deployments: deployments(0x03, &[Network::Mainnet]),
        },
    );
    tokens.insert(
        TokenSymbol::from("wstETH"),
        TokenEntry {
            decimals: 18,
            deployments: deployments(0x04, &[Network::Mainnet]),
        },
    );

    let mut contracts = ContractRegistry::new();
    contracts.insert(
        ContractSymbol::from("UNISWAP_V3_ROUTER"),
        ContractEntry {
            integration: IntegrationType::UniswapV3Swapper,
            protocol: "uniswap_v3".into(),
            deployments: deployments(0xe1, &[Network::Mainnet, Network::Arbitrum]),
        },
    );
    contracts.insert(
        ContractSymbol::from("CURVE_3POOL"),
        ContractEntry {
            integration: IntegrationType::CurvePool,
            protocol: "curve".into(),
            deployments: deployments(0xe2, &[Network::Mainnet]),
        },
    );
    contracts.insert(
        ContractSymbol::from("SUSHISWAP_ROUTER"),
        ContractEntry {
            integration: IntegrationType::SushiswapSwapper,
            protocol: "sushiswap".into(),
            deployments: deployments(0xe3, &[Network::Mainnet]),
        },
    );

    let mut feeds = PriceFeedRegistry::new();

    let mut usdc = TokenFeeds::default();
    usdc.by_network.insert(
        Network::Mainnet,
        FeedPair {
            main: chainlink(0xa1),
            reserve: Some(PriceFeed::Bounded {
                inner: Box::new(chainlink(0xa2)),
                upper_bound: U256::from(110_000_000u64),
            }),
        },
    );
    usdc.by_network
        .insert(Network::Arbitrum, FeedPair::main_only(chainlink(0xa3)));
    feeds.insert(TokenSymbol::from("USDC"), usdc);

    let mut weth = TokenFeeds::default();
    weth.by_network
        .insert(Network::Mainnet, FeedPair::main_only(chainlink(0xb1)));
    weth.by_network
        .insert(Network::Arbitrum, FeedPair::main_only(chainlink(0xb2)));
    feeds.insert(TokenSymbol::from("WETH"), weth);

    let mut crv3 = TokenFeeds::default();
    crv3.by_network.insert(
        Network::Mainnet,
        FeedPair::main_only(PriceFeed::SameAs {
            token: TokenSymbol::from("USDC"),
        }),
    );
    feeds.insert(TokenSymbol::from("3Crv"), crv3);

    let mut wsteth = TokenFeeds::default();
    wsteth.by_network.insert(
        Network::Mainnet,
        FeedPair::main_only(PriceFeed::Composite {
            target_to_base: Box::new(chainlink(0xc1)),
            base_to_usd: Box::new(PriceFeed::SameAs {
                token: TokenSymbol::from("WETH"),
            }),
        }),
    );
    feeds.insert(TokenSymbol::from("wstETH"), wsteth);

    RegistrySet::new(tokens, contracts, feeds)
}

/// A USDC pool on Mainnet with one credit manager, two quoted tokens and
/// two adapters.
pub fn pool_definition() -> PoolDefinition {
    let mut quotas = QuotaTable::new();
    quotas.insert(
        TokenSymbol::from("WETH"),
        QuotaParams {
            min_rate: 10,
            max_rate: 300,
            quota_increase_fee: 10,
            limit: U256::from(5_000_000u64),
        },
    );
    quotas.insert(
        TokenSymbol::from("3Crv"),
        QuotaParams {
            min_rate: 5,
            max_rate: 100,
            quota_increase_fee: 0,
            limit: U256::from(2_000_000u64),
        },
    );

    PoolDefinition {
        id: "mainnet-usdc-v3".into(),
        symbol: "dUSDC".into(),
        name: "Diesel USDC v3".into(),
        network: Network::Mainnet,
        underlying: TokenSymbol::from("USDC"),
        total_debt_limit: U256::from(10_000_000u64),
        withdrawal_fee: 0,
        irm: IrmParams {
            u1: 8_000,
            u2: 9_000,
            r_base: 0,
            r_slope1: 100,
            r_slope2: 400,
            r_slope3: 7_500,
            forbid_borrowing_above_u2: true,
        },
        quotas,
        credit_managers: vec![CreditManagerConfig {
            name: "USDC Tier 1".into(),
            min_debt: U256::from(20_000u64),
            max_debt: U256::from(1_000_000u64),
            fee_interest: 5_000,
            fee_liquidation: 150,
            liquidation_premium: 400,
            expiration_date: None,
            pool_limit: U256::from(5_000_000u64),
            max_enabled_tokens: 4,
            collateral_tokens: vec![
                CollateralToken {
                    token: TokenSymbol::from("WETH"),
                    lt: 9_000,
                },
                CollateralToken {
                    token: TokenSymbol::from("3Crv"),
                    lt: 8_500,
                },
            ],
            adapters: vec![
                AdapterConfig::UniswapV3Pairs {
                    contract: ContractSymbol::from("UNISWAP_V3_ROUTER"),
                    pairs: vec![FeeTierPair {
                        token0: TokenSymbol::from("USDC"),
                        token1: TokenSymbol::from("WETH"),
                        fee: 500,
                    }],
                },
                AdapterConfig::Swapper {
                    contract: ContractSymbol::from("CURVE_3POOL"),
                },
            ],
        }],
    }
}
