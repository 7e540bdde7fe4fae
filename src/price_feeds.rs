// src/price_feeds.rs
//
// Price-feed descriptor tree and its resolver. Descriptors form a recursive
// tagged union: leaf oracles (Chainlink-style, zero, RedStone-style) and
// wrappers (bounded, composite target->base->USD, same-as alias,
// network-dependent table). The resolver flattens network selection only;
// the emission layer walks the remaining wrappers with a hard depth bound.

use crate::errors::CompileError;
use crate::networks::Network;
use crate::tokens::TokenSymbol;
use ethers::types::{Address, U256};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Maximum wrapper depth the emission layer will walk before declaring a
/// cycle. Real configurations nest two or three levels at most.
pub const MAX_FEED_DEPTH: usize = 8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PriceFeed {
    /// Direct on-chain oracle with a staleness window in seconds.
    Chainlink { address: Address, stale_after: u64 },
    /// Constant zero price, used for compatibility listings.
    Zero,
    /// Signed off-chain oracle.
    Redstone {
        data_service_id: String,
        data_id: String,
        signers_threshold: u8,
    },
    /// Inner feed clamped to an upper bound.
    Bounded {
        inner: Box<PriceFeed>,
        upper_bound: U256,
    },
    /// Target->base chained with base->USD.
    Composite {
        target_to_base: Box<PriceFeed>,
        base_to_usd: Box<PriceFeed>,
    },
    /// Alias to another token's feed.
    SameAs { token: TokenSymbol },
    /// Per-network descriptor table. Only legal at the top of an entry;
    /// nested tables are a validation error, never silently unwrapped.
    NetworkDependent { feeds: IndexMap<Network, PriceFeed> },
}

impl PriceFeed {
    /// Member name in the emitted PriceFeedType enum.
    pub fn kind_name(&self) -> &'static str {
        match self {
            PriceFeed::Chainlink { .. } => "CHAINLINK_ORACLE",
            PriceFeed::Zero => "ZERO_ORACLE",
            PriceFeed::Redstone { .. } => "REDSTONE_ORACLE",
            PriceFeed::Bounded { .. } => "BOUNDED_ORACLE",
            PriceFeed::Composite { .. } => "COMPOSITE_ORACLE",
            PriceFeed::SameAs { .. } => "SAME_AS_ORACLE",
            PriceFeed::NetworkDependent { .. } => "NETWORK_DEPENDENT",
        }
    }

    /// Every kind, for the PriceFeedType enum bindings target.
    pub const KIND_NAMES: [&'static str; 7] = [
        "CHAINLINK_ORACLE",
        "ZERO_ORACLE",
        "REDSTONE_ORACLE",
        "BOUNDED_ORACLE",
        "COMPOSITE_ORACLE",
        "SAME_AS_ORACLE",
        "NETWORK_DEPENDENT",
    ];
}

/// Mandatory main feed plus optional reserve feed for one token scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedPair {
    pub main: PriceFeed,
    #[serde(default)]
    pub reserve: Option<PriceFeed>,
}

impl FeedPair {
    pub fn main_only(main: PriceFeed) -> Self {
        Self { main, reserve: None }
    }
}

/// Registry entry for one token: an optional all-networks pair plus
/// per-network overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenFeeds {
    #[serde(default)]
    pub all_networks: Option<FeedPair>,
    #[serde(default)]
    pub by_network: IndexMap<Network, FeedPair>,
}

impl TokenFeeds {
    pub fn all(pair: FeedPair) -> Self {
        Self {
            all_networks: Some(pair),
            by_network: IndexMap::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceFeedRegistry {
    feeds: IndexMap<TokenSymbol, TokenFeeds>,
}

impl PriceFeedRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, symbol: TokenSymbol, feeds: TokenFeeds) {
        self.feeds.insert(symbol, feeds);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TokenSymbol, &TokenFeeds)> {
        self.feeds.iter()
    }

    pub fn len(&self) -> usize {
        self.feeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.feeds.is_empty()
    }

    pub fn has_entries_for(&self, network: Network) -> bool {
        self.feeds
            .values()
            .any(|tf| tf.by_network.contains_key(&network) || tf.all_networks.is_some())
    }

    /// Selection precedence, total over every entry combination:
    /// 1. the exact per-network pair;
    /// 2. otherwise the all-networks pair;
    /// 3. a `NetworkDependent` descriptor selected this way is unwrapped for
    ///    the network exactly once — a missing sub-entry is a lookup error
    ///    and a nested table is a validation error.
    fn select_pair(&self, token: &TokenSymbol, network: Network) -> Option<&FeedPair> {
        let entry = self.feeds.get(token)?;
        entry
            .by_network
            .get(&network)
            .or(entry.all_networks.as_ref())
    }

    fn unwrap_network_dependent<'a>(
        &self,
        token: &TokenSymbol,
        feed: &'a PriceFeed,
        network: Network,
    ) -> Result<&'a PriceFeed, CompileError> {
        match feed {
            PriceFeed::NetworkDependent { feeds } => {
                let inner =
                    feeds
                        .get(&network)
                        .ok_or_else(|| CompileError::MissingPriceFeed {
                            symbol: token.clone(),
                            network,
                        })?;
                if matches!(inner, PriceFeed::NetworkDependent { .. }) {
                    return Err(CompileError::NestedNetworkDependence {
                        symbol: token.clone(),
                    });
                }
                Ok(inner)
            }
            other => Ok(other),
        }
    }

    /// Resolves the mandatory main feed for a token/network pair. Missing
    /// entries are a hard error; the resolver never defaults to the zero
    /// oracle, since that would silently understate collateral risk.
    pub fn resolve(
        &self,
        token: &TokenSymbol,
        network: Network,
    ) -> Result<&PriceFeed, CompileError> {
        let pair =
            self.select_pair(token, network)
                .ok_or_else(|| CompileError::MissingPriceFeed {
                    symbol: token.clone(),
                    network,
                })?;
        self.unwrap_network_dependent(token, &pair.main, network)
    }

    /// Resolves the optional reserve feed. Absence is `Ok(None)` and never
    /// fails main-only computation paths; a reserve that is declared but
    /// unresolvable for the network is still an error.
    pub fn resolve_reserve(
        &self,
        token: &TokenSymbol,
        network: Network,
    ) -> Result<Option<&PriceFeed>, CompileError> {
        let Some(pair) = self.select_pair(token, network) else {
            return Ok(None);
        };
        match &pair.reserve {
            None => Ok(None),
            Some(feed) => self
                .unwrap_network_dependent(token, feed, network)
                .map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chainlink(byte: u8) -> PriceFeed {
        PriceFeed::Chainlink {
            address: Address::repeat_byte(byte),
            stale_after: 86_400,
        }
    }

    fn registry() -> PriceFeedRegistry {
        let mut reg = PriceFeedRegistry::new();

        // all-networks entry plus a mainnet-specific override
        let mut weth = TokenFeeds::all(FeedPair::main_only(chainlink(0xaa)));
        weth.by_network
            .insert(Network::Mainnet, FeedPair::main_only(chainlink(0xbb)));
        reg.insert(TokenSymbol::from("WETH"), weth);

        // network-dependent wrapper in the all-networks slot
        let mut by_net = IndexMap::new();
        by_net.insert(Network::Mainnet, chainlink(0xcc));
        by_net.insert(Network::Arbitrum, PriceFeed::Zero);
        reg.insert(
            TokenSymbol::from("ARB"),
            TokenFeeds::all(FeedPair::main_only(PriceFeed::NetworkDependent {
                feeds: by_net,
            })),
        );

        reg
    }

    #[test]
    fn per_network_entry_wins_over_all_networks() {
        let reg = registry();
        let weth = TokenSymbol::from("WETH");
        let mainnet = reg.resolve(&weth, Network::Mainnet).unwrap();
        let optimism = reg.resolve(&weth, Network::Optimism).unwrap();
        assert_eq!(mainnet, &chainlink(0xbb));
        assert_eq!(optimism, &chainlink(0xaa));
    }

    #[test]
    fn network_dependent_unwraps_exactly_once() {
        let reg = registry();
        let arb = TokenSymbol::from("ARB");
        assert_eq!(
            reg.resolve(&arb, Network::Mainnet).unwrap(),
            &chainlink(0xcc)
        );
        assert_eq!(
            reg.resolve(&arb, Network::Arbitrum).unwrap(),
            &PriceFeed::Zero
        );
        assert!(matches!(
            reg.resolve(&arb, Network::Base),
            Err(CompileError::MissingPriceFeed { .. })
        ));
    }

    #[test]
    fn nested_network_dependence_is_rejected() {
        let mut reg = PriceFeedRegistry::new();
        let mut inner = IndexMap::new();
        inner.insert(Network::Mainnet, PriceFeed::Zero);
        let mut outer = IndexMap::new();
        outer.insert(
            Network::Mainnet,
            PriceFeed::NetworkDependent { feeds: inner },
        );
        reg.insert(
            TokenSymbol::from("BAD"),
            TokenFeeds::all(FeedPair::main_only(PriceFeed::NetworkDependent {
                feeds: outer,
            })),
        );
        assert!(matches!(
            reg.resolve(&TokenSymbol::from("BAD"), Network::Mainnet),
            Err(CompileError::NestedNetworkDependence { .. })
        ));
    }

    #[test]
    fn missing_reserve_is_none_not_error() {
        let reg = registry();
        let weth = TokenSymbol::from("WETH");
        assert!(reg
            .resolve_reserve(&weth, Network::Mainnet)
            .unwrap()
            .is_none());
        // a token with no registry entry at all also yields None for reserve
        assert!(reg
            .resolve_reserve(&TokenSymbol::from("GHOST"), Network::Mainnet)
            .unwrap()
            .is_none());
        // ... but main resolution fails loudly
        assert!(reg
            .resolve(&TokenSymbol::from("GHOST"), Network::Mainnet)
            .is_err());
    }
}
