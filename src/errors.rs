// src/errors.rs
//
// Closed error taxonomy for the configuration compiler. Every lookup failure
// names the offending symbol and network so config maintainers get a fast
// authoring-time feedback loop.

use crate::contracts::{ContractSymbol, IntegrationType};
use crate::networks::Network;
use crate::tokens::TokenSymbol;

#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("token {0} is not listed in the token registry")]
    UnknownToken(TokenSymbol),

    #[error("token {symbol} is not deployed on {network}")]
    TokenNotDeployed { symbol: TokenSymbol, network: Network },

    #[error("contract {0} is not listed in the contract registry")]
    UnknownContract(ContractSymbol),

    #[error("contract {symbol} is not deployed on {network}")]
    ContractNotDeployed {
        symbol: ContractSymbol,
        network: Network,
    },

    #[error("no price feed is defined for token {symbol} on {network}")]
    MissingPriceFeed { symbol: TokenSymbol, network: Network },

    #[error("network-dependent price feed for {symbol} nests another network-dependent feed")]
    NestedNetworkDependence { symbol: TokenSymbol },

    #[error(
        "price feed for {symbol} exceeds composition depth {max_depth}; aliasing cycle suspected"
    )]
    FeedDepthExceeded { symbol: TokenSymbol, max_depth: usize },

    #[error(
        "adapter config for {contract} does not match its registry integration type {integration:?}"
    )]
    AdapterMismatch {
        contract: ContractSymbol,
        integration: IntegrationType,
    },

    #[error("duplicate collateral token {symbol} in credit manager '{manager}'")]
    DuplicateCollateral { symbol: TokenSymbol, manager: String },

    #[error("no registry entries exist for network {0}")]
    UnsupportedNetwork(Network),

    #[error("template {path} is missing the '{marker}' marker")]
    MissingMarker { path: String, marker: &'static str },
}
