// src/pool_definition.rs
//
// Hand-authored pool configuration objects: the aggregate root the compiler
// consumes. A PoolDefinition is constructed once from a literal value and is
// immutable thereafter; configurators project disposable state snapshots
// from it and never write back.

use crate::adapter_config::AdapterConfig;
use crate::networks::Network;
use crate::tokens::TokenSymbol;
use ethers::types::U256;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Linear interest-rate-model parameters. Utilization breakpoints and rates
/// are expressed in 1/100 of a percent (10000 = 100%).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct IrmParams {
    pub u1: u16,
    pub u2: u16,
    pub r_base: u16,
    pub r_slope1: u16,
    pub r_slope2: u16,
    pub r_slope3: u16,
    pub forbid_borrowing_above_u2: bool,
}

/// Per-token quota parameters: rate bounds, quota-increase fee and the
/// absolute quota limit in underlying base units.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct QuotaParams {
    pub min_rate: u16,
    pub max_rate: u16,
    pub quota_increase_fee: u16,
    pub limit: U256,
}

/// The shared rate/limit table. Built once per pool definition and passed by
/// value into the quota-keeper, gauge and credit-manager configurators so
/// they never derive it independently.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuotaTable {
    entries: IndexMap<TokenSymbol, QuotaParams>,
}

impl QuotaTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, token: TokenSymbol, params: QuotaParams) {
        self.entries.insert(token, params);
    }

    pub fn get(&self, token: &TokenSymbol) -> Option<&QuotaParams> {
        self.entries.get(token)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TokenSymbol, &QuotaParams)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One collateral listing: a liquidation threshold of zero means "listed for
/// compatibility, not counted as collateral".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollateralToken {
    pub token: TokenSymbol,
    pub lt: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditManagerConfig {
    pub name: String,
    pub min_debt: U256,
    pub max_debt: U256,
    pub fee_interest: u16,
    pub fee_liquidation: u16,
    pub liquidation_premium: u16,
    /// Unix timestamp; None for non-expiring managers.
    #[serde(default)]
    pub expiration_date: Option<u64>,
    /// Cap on this manager's exposure to the pool.
    pub pool_limit: U256,
    pub max_enabled_tokens: u8,
    pub collateral_tokens: Vec<CollateralToken>,
    pub adapters: Vec<AdapterConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolDefinition {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub network: Network,
    pub underlying: TokenSymbol,
    pub total_debt_limit: U256,
    pub withdrawal_fee: u16,
    pub irm: IrmParams,
    pub quotas: QuotaTable,
    pub credit_managers: Vec<CreditManagerConfig>,
}
