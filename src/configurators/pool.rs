// Pool configurator: identity, debt ceiling and withdrawal fee, plus the
// not-yet-deployed state mirror used by reports.

use crate::configurators::{percent_human, ValidationReport};
use crate::emit::{Expr, SourceBlock};
use crate::errors::CompileError;
use crate::networks::Network;
use crate::pool_definition::PoolDefinition;
use crate::registries::RegistrySet;
use crate::tokens::TokenSymbol;
use ethers::types::U256;

/// Mutable state snapshot mimicking a freshly deployed pool: zero cumulative
/// index, nothing borrowed, not paused.
#[derive(Debug, Clone, Default)]
pub struct PoolState {
    pub expected_liquidity: U256,
    pub total_borrowed: U256,
    pub base_interest_index: U256,
    pub is_paused: bool,
}

#[derive(Debug, Clone)]
pub struct PoolConfigurator {
    symbol: String,
    name: String,
    network: Network,
    underlying: TokenSymbol,
    total_debt_limit: U256,
    withdrawal_fee: u16,
    pub state: PoolState,
}

impl PoolConfigurator {
    pub fn new(def: &PoolDefinition) -> Self {
        Self {
            symbol: def.symbol.clone(),
            name: def.name.clone(),
            network: def.network,
            underlying: def.underlying.clone(),
            total_debt_limit: def.total_debt_limit,
            withdrawal_fee: def.withdrawal_fee,
            state: PoolState::default(),
        }
    }

    pub fn underlying(&self) -> &TokenSymbol {
        &self.underlying
    }

    // Cross-referential checks (underlying feed defined, symbol conventions)
    // are not enforced yet; lookup failures surface during compile instead.
    pub fn validate(&self) -> ValidationReport {
        ValidationReport::new()
    }

    pub fn compile(&self, regs: &RegistrySet) -> Result<SourceBlock, CompileError> {
        regs.tokens.ensure_deployed(&self.underlying, self.network)?;
        let mut block = SourceBlock::new();
        block.declare(
            "PoolV3DeployParams",
            "poolParams",
            Expr::record(
                "PoolV3DeployParams",
                vec![
                    ("symbol", Expr::Str(self.symbol.clone())),
                    ("name", Expr::Str(self.name.clone())),
                    ("underlying", Expr::Token(self.underlying.clone())),
                    ("totalDebtLimit", Expr::Uint(self.total_debt_limit)),
                    ("withdrawalFee", Expr::Percent(self.withdrawal_fee)),
                ],
            ),
        );
        Ok(block)
    }

    pub fn describe(&self) -> String {
        [
            format!("Pool {} ({}) on {}:", self.symbol, self.name, self.network),
            format!("  underlying: {}", self.underlying),
            format!("  total debt limit: {}", self.total_debt_limit),
            format!("  withdrawal fee: {}", percent_human(self.withdrawal_fee)),
            format!(
                "  state: borrowed {} / liquidity {}, {}",
                self.state.total_borrowed,
                self.state.expected_liquidity,
                if self.state.is_paused { "paused" } else { "active" }
            ),
        ]
        .join("\n")
    }
}
