// Quota-keeper configurator: per-token quota limits and increase fees,
// driven by the shared QuotaTable built once per pool definition.

use crate::configurators::{percent_human, ValidationReport};
use crate::emit::{Expr, SourceBlock};
use crate::errors::CompileError;
use crate::networks::Network;
use crate::pool_definition::QuotaTable;
use crate::registries::RegistrySet;
use crate::tokens::TokenSymbol;
use ethers::types::U256;
use indexmap::IndexMap;

/// Freshly deployed keeper state: zero quoted amounts, not frozen.
#[derive(Debug, Clone, Default)]
pub struct QuotaKeeperState {
    pub total_quoted: IndexMap<TokenSymbol, U256>,
    pub frozen: bool,
}

#[derive(Debug, Clone)]
pub struct QuotaKeeperConfigurator {
    network: Network,
    quotas: QuotaTable,
    pub state: QuotaKeeperState,
}

impl QuotaKeeperConfigurator {
    pub fn new(network: Network, quotas: QuotaTable) -> Self {
        let total_quoted = quotas
            .iter()
            .map(|(token, _)| (token.clone(), U256::zero()))
            .collect();
        Self {
            network,
            quotas,
            state: QuotaKeeperState {
                total_quoted,
                frozen: false,
            },
        }
    }

    pub fn quotas(&self) -> &QuotaTable {
        &self.quotas
    }

    pub fn validate(&self) -> ValidationReport {
        ValidationReport::new()
    }

    pub fn compile(&self, regs: &RegistrySet) -> Result<SourceBlock, CompileError> {
        let mut block = SourceBlock::new();
        for (token, params) in self.quotas.iter() {
            regs.tokens.ensure_deployed(token, self.network)?;
            block.push(
                "quotaLimits",
                Expr::record(
                    "QuotaLimit",
                    vec![
                        ("token", Expr::Token(token.clone())),
                        ("limit", Expr::Uint(params.limit)),
                        ("fee", Expr::Percent(params.quota_increase_fee)),
                    ],
                ),
            );
        }
        Ok(block)
    }

    pub fn describe(&self) -> String {
        let mut lines = vec![format!(
            "Quota keeper ({} tokens, {}):",
            self.quotas.len(),
            if self.state.frozen { "frozen" } else { "live" }
        )];
        for (token, params) in self.quotas.iter() {
            lines.push(format!(
                "  {}: limit {}, increase fee {}",
                token,
                params.limit,
                percent_human(params.quota_increase_fee)
            ));
        }
        lines.join("\n")
    }
}
