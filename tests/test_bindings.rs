//! Bindings generation tests: the six registry-derived targets, network
//! filtering, staged failure behavior and feed-tree lowering.

mod common;

use common::{build_registries, chainlink, REGS};
use indexmap::IndexMap;
use lendgen_sdk::bindings::{BindingsGenerator, BindingsTarget};
use lendgen_sdk::errors::CompileError;
use lendgen_sdk::networks::Network;
use lendgen_sdk::price_feeds::{FeedPair, PriceFeed, PriceFeedRegistry, TokenFeeds};
use lendgen_sdk::registries::RegistrySet;
use lendgen_sdk::tokens::TokenSymbol;

const FIXTURE_NETWORKS: [Network; 2] = [Network::Mainnet, Network::Arbitrum];

#[test]
fn renders_all_six_targets_in_fixed_order() {
    let generator = BindingsGenerator::with_networks(&REGS, &FIXTURE_NETWORKS);
    let artifacts = generator.render_all().unwrap();
    let names: Vec<&str> = artifacts.iter().map(|a| a.name).collect();
    assert_eq!(
        names,
        vec![
            "Tokens.sol",
            "NetworkDetector.sol",
            "PriceFeedData.sol",
            "ContractsRegister.sol",
            "AdapterType.sol",
            "AdapterData.sol",
        ]
    );
    for artifact in &artifacts {
        assert!(!artifact.contents.is_empty());
    }
}

#[test]
fn token_bindings_sanitize_and_respect_deployments() {
    let generator = BindingsGenerator::with_networks(&REGS, &FIXTURE_NETWORKS);
    let contents = generator.render_target(BindingsTarget::TokenBindings).unwrap();

    // enum members, sanitized
    assert!(contents.contains("_3Crv,"));
    assert!(contents.contains("USDC,"));

    assert!(contents.contains("id: Tokens.USDC, addr: 0x0101"));
    assert!(contents.contains("symbol: \"3Crv\", decimals: 18"));

    // 3Crv is Mainnet-only, so no Arbitrum data record for it
    assert!(contents.contains("tokenDataByNetwork[Mainnet].push(TokenData({id: Tokens._3Crv"));
    assert!(!contents.contains("tokenDataByNetwork[Arbitrum].push(TokenData({id: Tokens._3Crv"));
}

#[test]
fn network_detector_lists_chain_ids_in_declared_order() {
    let generator = BindingsGenerator::with_networks(&REGS, &FIXTURE_NETWORKS);
    let contents = generator.render_target(BindingsTarget::NetworkDetector).unwrap();
    assert_eq!(
        contents,
        "supportedNetworks.push(NetworkInfo({chainId: 1, name: \"Mainnet\"}));\n\
         supportedNetworks.push(NetworkInfo({chainId: 42161, name: \"Arbitrum\"}));\n"
    );
}

#[test]
fn caller_network_order_does_not_leak_into_output() {
    let reversed = BindingsGenerator::with_networks(&REGS, &[Network::Arbitrum, Network::Mainnet]);
    let declared = BindingsGenerator::with_networks(&REGS, &FIXTURE_NETWORKS);
    assert_eq!(
        reversed.render_target(BindingsTarget::NetworkDetector).unwrap(),
        declared.render_target(BindingsTarget::NetworkDetector).unwrap()
    );
}

#[test]
fn price_feed_bindings_lower_wrapper_trees() {
    let generator = BindingsGenerator::with_networks(&REGS, &FIXTURE_NETWORKS);
    let contents = generator
        .render_target(BindingsTarget::PriceFeedBindings)
        .unwrap();

    // kind enum
    assert!(contents.contains("CHAINLINK_ORACLE,"));
    assert!(contents.contains("NETWORK_DEPENDENT,"));

    // plain main feed
    assert!(contents.contains(
        "priceFeedsByNetwork[Mainnet].push(PriceFeedEntry({token: Tokens.USDC, priority: Main, feed: chainlink("
    ));
    // declared reserve feed, bounded wrapper lowered to a nested call
    assert!(contents.contains("priority: Reserve, feed: bounded(chainlink("));
    assert!(contents.contains("), 110_000_000)"));
    // same-as alias resolves to the aliased token's feed
    assert!(contents.contains("token: Tokens._3Crv, priority: Main, feed: chainlink("));
    // composite lowers both legs
    assert!(contents.contains("token: Tokens.wstETH, priority: Main, feed: composite(chainlink("));

    // wstETH is priced on Mainnet only
    assert!(!contents.contains("priceFeedsByNetwork[Arbitrum].push(PriceFeedEntry({token: Tokens.wstETH"));
}

#[test]
fn contract_bindings_carry_protocol_labels() {
    let generator = BindingsGenerator::with_networks(&REGS, &FIXTURE_NETWORKS);
    let contents = generator
        .render_target(BindingsTarget::ContractBindings)
        .unwrap();
    assert!(contents.contains("UNISWAP_V3_ROUTER,"));
    assert!(contents.contains(
        "contractsByNetwork[Mainnet].push(ContractData({id: Contracts.CURVE_3POOL"
    ));
    assert!(contents.contains("protocol: \"curve\""));
    // Mainnet-only contract stays out of the Arbitrum section
    assert!(!contents.contains("contractsByNetwork[Arbitrum].push(ContractData({id: Contracts.CURVE_3POOL"));
}

#[test]
fn adapter_type_bindings_list_every_integration() {
    let generator = BindingsGenerator::with_networks(&REGS, &FIXTURE_NETWORKS);
    let contents = generator
        .render_target(BindingsTarget::AdapterTypeBindings)
        .unwrap();
    // comment line plus one member per integration type
    assert_eq!(contents.lines().count(), 16);
    assert!(contents.contains("UNISWAP_V2,"));
    assert!(contents.contains("MELLOW_VAULT,"));
}

#[test]
fn adapter_registry_maps_contracts_to_types() {
    let generator = BindingsGenerator::with_networks(&REGS, &FIXTURE_NETWORKS);
    let contents = generator
        .render_target(BindingsTarget::AdapterRegistry)
        .unwrap();
    assert!(contents.contains(
        "adapterTypes.push(AdapterEntry({id: Contracts.CURVE_3POOL, adapterType: AdapterType.CURVE_POOL}));"
    ));
    assert!(contents.contains(
        "adapterTypes.push(AdapterEntry({id: Contracts.UNISWAP_V3_ROUTER, adapterType: AdapterType.UNISWAP_V3}));"
    ));
}

/// The fixture has no entries on Optimism, Base or Sonic; a full-network
/// generator must refuse the whole batch before rendering anything.
#[test]
fn empty_network_fails_the_whole_batch() {
    let generator = BindingsGenerator::new(&REGS);
    assert!(matches!(
        generator.render_all(),
        Err(CompileError::UnsupportedNetwork(Network::Optimism))
    ));
}

#[test]
fn rendering_is_deterministic() {
    let generator = BindingsGenerator::with_networks(&REGS, &FIXTURE_NETWORKS);
    let first = generator.render_all().unwrap();
    let second = generator.render_all().unwrap();
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.contents, b.contents);
    }
}

#[test]
fn same_as_cycle_is_reported_not_followed_forever() {
    let mut feeds = PriceFeedRegistry::new();
    let mut a = TokenFeeds::default();
    a.by_network.insert(
        Network::Mainnet,
        FeedPair::main_only(PriceFeed::SameAs {
            token: TokenSymbol::from("B"),
        }),
    );
    feeds.insert(TokenSymbol::from("A"), a);
    let mut b = TokenFeeds::default();
    b.by_network.insert(
        Network::Mainnet,
        FeedPair::main_only(PriceFeed::SameAs {
            token: TokenSymbol::from("A"),
        }),
    );
    feeds.insert(TokenSymbol::from("B"), b);
    let regs = RegistrySet::new(Default::default(), Default::default(), feeds);

    let generator = BindingsGenerator::with_networks(&regs, &[Network::Mainnet]);
    assert!(matches!(
        generator.render_target(BindingsTarget::PriceFeedBindings),
        Err(CompileError::FeedDepthExceeded { .. })
    ));
}

#[test]
fn network_dependent_feed_inside_a_wrapper_is_rejected() {
    let mut regs = build_registries();
    let mut inner = IndexMap::new();
    inner.insert(Network::Mainnet, chainlink(0xdd));
    let mut bad = TokenFeeds::default();
    bad.by_network.insert(
        Network::Mainnet,
        FeedPair::main_only(PriceFeed::Composite {
            target_to_base: Box::new(PriceFeed::NetworkDependent { feeds: inner }),
            base_to_usd: Box::new(chainlink(0xde)),
        }),
    );
    regs.price_feeds.insert(TokenSymbol::from("BAD"), bad);

    let generator = BindingsGenerator::with_networks(&regs, &[Network::Mainnet]);
    assert!(matches!(
        generator.render_target(BindingsTarget::PriceFeedBindings),
        Err(CompileError::NestedNetworkDependence { .. })
    ));
}
