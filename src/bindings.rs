// src/bindings.rs
//
// Batch bindings generator: six fixed emission targets over the static
// registries. Rendering is staged: every target renders before any file is
// written, so a failure anywhere aborts the whole batch without leaving
// partially-written artifacts behind.

use crate::emit::{Expr, SourceBlock};
use crate::errors::CompileError;
use crate::networks::Network;
use crate::price_feeds::{PriceFeed, MAX_FEED_DEPTH};
use crate::registries::RegistrySet;
use crate::tokens::TokenSymbol;
use log::{debug, info};

/// The fixed emission targets. Not discovered dynamically: adding a target
/// means extending this enum and every match on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingsTarget {
    TokenBindings,
    NetworkDetector,
    PriceFeedBindings,
    ContractBindings,
    AdapterTypeBindings,
    AdapterRegistry,
}

impl BindingsTarget {
    pub const ALL: [BindingsTarget; 6] = [
        BindingsTarget::TokenBindings,
        BindingsTarget::NetworkDetector,
        BindingsTarget::PriceFeedBindings,
        BindingsTarget::ContractBindings,
        BindingsTarget::AdapterTypeBindings,
        BindingsTarget::AdapterRegistry,
    ];

    /// Template/artifact file name for this target.
    pub fn artifact_name(&self) -> &'static str {
        match self {
            BindingsTarget::TokenBindings => "Tokens.sol",
            BindingsTarget::NetworkDetector => "NetworkDetector.sol",
            BindingsTarget::PriceFeedBindings => "PriceFeedData.sol",
            BindingsTarget::ContractBindings => "ContractsRegister.sol",
            BindingsTarget::AdapterTypeBindings => "AdapterType.sol",
            BindingsTarget::AdapterRegistry => "AdapterData.sol",
        }
    }
}

/// One rendered artifact, ready for template splicing.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub name: &'static str,
    pub contents: String,
}

pub struct BindingsGenerator<'a> {
    regs: &'a RegistrySet,
    networks: Vec<Network>,
}

impl<'a> BindingsGenerator<'a> {
    /// Generator over the full declared network order.
    pub fn new(regs: &'a RegistrySet) -> Self {
        Self {
            regs,
            networks: Network::ALL.to_vec(),
        }
    }

    /// Generator restricted to an explicit network subset. Relative order
    /// still follows the declared enumeration, not the caller's order.
    pub fn with_networks(regs: &'a RegistrySet, networks: &[Network]) -> Self {
        let networks = Network::ALL
            .iter()
            .copied()
            .filter(|n| networks.contains(n))
            .collect();
        Self { regs, networks }
    }

    /// Renders all six targets. Staged: nothing is returned unless every
    /// target renders, so callers can commit the batch atomically.
    pub fn render_all(&self) -> Result<Vec<Artifact>, CompileError> {
        for network in &self.networks {
            self.regs.ensure_network(*network)?;
        }
        let mut artifacts = Vec::with_capacity(BindingsTarget::ALL.len());
        for target in BindingsTarget::ALL {
            let contents = self.render_target(target)?;
            debug!(
                "rendered {} ({} bytes)",
                target.artifact_name(),
                contents.len()
            );
            artifacts.push(Artifact {
                name: target.artifact_name(),
                contents,
            });
        }
        info!("rendered {} bindings artifacts", artifacts.len());
        Ok(artifacts)
    }

    pub fn render_target(&self, target: BindingsTarget) -> Result<String, CompileError> {
        let block = match target {
            BindingsTarget::TokenBindings => self.token_bindings()?,
            BindingsTarget::NetworkDetector => self.network_detector(),
            BindingsTarget::PriceFeedBindings => self.price_feed_bindings()?,
            BindingsTarget::ContractBindings => self.contract_bindings()?,
            BindingsTarget::AdapterTypeBindings => self.adapter_type_bindings(),
            BindingsTarget::AdapterRegistry => self.adapter_registry(),
        };
        Ok(block.render())
    }

    /// Token enum members plus the per-network token data registry.
    fn token_bindings(&self) -> Result<SourceBlock, CompileError> {
        let mut block = SourceBlock::new();
        block.comment("enum Tokens");
        for (symbol, _) in self.regs.tokens.iter() {
            block.raw(format!("{},", crate::ident::sanitize(symbol.as_str())));
        }
        for network in &self.networks {
            block.blank();
            block.comment(format!("{} tokens", network));
            for (symbol, addr) in self.regs.tokens.deployed_on(*network) {
                let entry = self.regs.tokens.get(symbol)?;
                block.push(
                    format!("tokenDataByNetwork[{}]", network),
                    Expr::record(
                        "TokenData",
                        vec![
                            ("id", Expr::Token(symbol.clone())),
                            ("addr", Expr::Addr(addr)),
                            ("symbol", Expr::Str(symbol.as_str().to_string())),
                            ("decimals", Expr::Lit(entry.decimals.to_string())),
                        ],
                    ),
                );
            }
        }
        Ok(block)
    }

    /// Chain-id to network-name table, in declared network order.
    fn network_detector(&self) -> SourceBlock {
        let mut block = SourceBlock::new();
        for network in &self.networks {
            block.push(
                "supportedNetworks",
                Expr::record(
                    "NetworkInfo",
                    vec![
                        ("chainId", Expr::Lit(network.chain_id().to_string())),
                        ("name", Expr::Str(network.name().to_string())),
                    ],
                ),
            );
        }
        block
    }

    /// PriceFeedType enum plus the resolved feed entry per token/network.
    fn price_feed_bindings(&self) -> Result<SourceBlock, CompileError> {
        let mut block = SourceBlock::new();
        block.comment("enum PriceFeedType");
        for kind in PriceFeed::KIND_NAMES {
            block.raw(format!("{},", kind));
        }
        for network in &self.networks {
            block.blank();
            block.comment(format!("{} price feeds", network));
            for (token, entry) in self.regs.price_feeds.iter() {
                // tokens priced only on other networks are simply absent
                // here; broken entries for this network still abort
                let declared = entry.by_network.contains_key(network) || entry.all_networks.is_some();
                if !declared {
                    continue;
                }
                let main = self.regs.price_feeds.resolve(token, *network);
                let main = match main {
                    Ok(feed) => feed,
                    Err(CompileError::MissingPriceFeed { .. })
                        if !entry.by_network.contains_key(network) =>
                    {
                        // network-dependent all-networks entry without a
                        // sub-entry for this network: not priced here
                        continue;
                    }
                    Err(e) => return Err(e),
                };
                block.push(
                    format!("priceFeedsByNetwork[{}]", network),
                    Expr::record(
                        "PriceFeedEntry",
                        vec![
                            ("token", Expr::Token(token.clone())),
                            ("priority", Expr::Lit("Main".into())),
                            ("feed", self.feed_expr(token, main, *network, 0)?),
                        ],
                    ),
                );
                if let Some(reserve) = self.regs.price_feeds.resolve_reserve(token, *network)? {
                    block.push(
                        format!("priceFeedsByNetwork[{}]", network),
                        Expr::record(
                            "PriceFeedEntry",
                            vec![
                                ("token", Expr::Token(token.clone())),
                                ("priority", Expr::Lit("Reserve".into())),
                                ("feed", self.feed_expr(token, reserve, *network, 0)?),
                            ],
                        ),
                    );
                }
            }
        }
        Ok(block)
    }

    /// Recursively lowers a descriptor tree into a constructor expression.
    /// `SameAs` chains re-enter the registry, so depth is bounded to turn an
    /// aliasing cycle into an error instead of a hang.
    fn feed_expr(
        &self,
        token: &TokenSymbol,
        feed: &PriceFeed,
        network: Network,
        depth: usize,
    ) -> Result<Expr, CompileError> {
        if depth > MAX_FEED_DEPTH {
            return Err(CompileError::FeedDepthExceeded {
                symbol: token.clone(),
                max_depth: MAX_FEED_DEPTH,
            });
        }
        match feed {
            PriceFeed::Chainlink {
                address,
                stale_after,
            } => Ok(Expr::call(
                "chainlink",
                vec![Expr::Addr(*address), Expr::Lit(stale_after.to_string())],
            )),
            PriceFeed::Zero => Ok(Expr::call("zero", vec![])),
            PriceFeed::Redstone {
                data_service_id,
                data_id,
                signers_threshold,
            } => Ok(Expr::call(
                "redstone",
                vec![
                    Expr::Str(data_service_id.clone()),
                    Expr::Str(data_id.clone()),
                    Expr::Lit(signers_threshold.to_string()),
                ],
            )),
            PriceFeed::Bounded { inner, upper_bound } => Ok(Expr::call(
                "bounded",
                vec![
                    self.feed_expr(token, inner, network, depth + 1)?,
                    Expr::Uint(*upper_bound),
                ],
            )),
            PriceFeed::Composite {
                target_to_base,
                base_to_usd,
            } => Ok(Expr::call(
                "composite",
                vec![
                    self.feed_expr(token, target_to_base, network, depth + 1)?,
                    self.feed_expr(token, base_to_usd, network, depth + 1)?,
                ],
            )),
            PriceFeed::SameAs { token: aliased } => {
                let resolved = self.regs.price_feeds.resolve(aliased, network)?;
                self.feed_expr(aliased, resolved, network, depth + 1)
            }
            PriceFeed::NetworkDependent { .. } => Err(CompileError::NestedNetworkDependence {
                symbol: token.clone(),
            }),
        }
    }

    /// Contract enum members plus the per-network contract registry.
    fn contract_bindings(&self) -> Result<SourceBlock, CompileError> {
        let mut block = SourceBlock::new();
        block.comment("enum Contracts");
        for (symbol, _) in self.regs.contracts.iter() {
            block.raw(format!("{},", symbol));
        }
        for network in &self.networks {
            block.blank();
            block.comment(format!("{} contracts", network));
            for (symbol, entry, addr) in self.regs.contracts.deployed_on(*network) {
                block.push(
                    format!("contractsByNetwork[{}]", network),
                    Expr::record(
                        "ContractData",
                        vec![
                            ("id", Expr::Contract(symbol.clone())),
                            ("addr", Expr::Addr(addr)),
                            ("protocol", Expr::Str(entry.protocol.clone())),
                        ],
                    ),
                );
            }
        }
        Ok(block)
    }

    /// AdapterType enum: one member per integration type, in declared order.
    fn adapter_type_bindings(&self) -> SourceBlock {
        let mut block = SourceBlock::new();
        block.comment("enum AdapterType");
        for it in crate::contracts::IntegrationType::ALL {
            block.raw(format!("{},", it.adapter_type_name()));
        }
        block
    }

    /// Contract-to-adapter-type mapping; the integration tag is global, so
    /// this target is network-independent.
    fn adapter_registry(&self) -> SourceBlock {
        let mut block = SourceBlock::new();
        for (symbol, entry) in self.regs.contracts.iter() {
            block.push(
                "adapterTypes",
                Expr::record(
                    "AdapterEntry",
                    vec![
                        ("id", Expr::Contract(symbol.clone())),
                        (
                            "adapterType",
                            Expr::Lit(format!(
                                "AdapterType.{}",
                                entry.integration.adapter_type_name()
                            )),
                        ),
                    ],
                ),
            );
        }
        block
    }
}
