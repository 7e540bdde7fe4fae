// Gauge configurator: per-token min/max quota rates from the shared
// QuotaTable.

use crate::configurators::{percent_human, ValidationReport};
use crate::emit::{Expr, SourceBlock};
use crate::errors::CompileError;
use crate::networks::Network;
use crate::pool_definition::QuotaTable;
use crate::registries::RegistrySet;

/// Freshly deployed gauge state: epoch zero, voting not frozen.
#[derive(Debug, Clone, Default)]
pub struct GaugeState {
    pub epoch: u16,
    pub epoch_frozen: bool,
}

#[derive(Debug, Clone)]
pub struct GaugeConfigurator {
    network: Network,
    quotas: QuotaTable,
    pub state: GaugeState,
}

impl GaugeConfigurator {
    pub fn new(network: Network, quotas: QuotaTable) -> Self {
        Self {
            network,
            quotas,
            state: GaugeState::default(),
        }
    }

    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();
        for (token, params) in self.quotas.iter() {
            if params.min_rate > params.max_rate {
                report.warn(format!(
                    "gauge: {} min rate {} exceeds max rate {}",
                    token,
                    percent_human(params.min_rate),
                    percent_human(params.max_rate)
                ));
            }
        }
        report
    }

    pub fn compile(&self, regs: &RegistrySet) -> Result<SourceBlock, CompileError> {
        let mut block = SourceBlock::new();
        for (token, params) in self.quotas.iter() {
            regs.tokens.ensure_deployed(token, self.network)?;
            block.push(
                "gaugeRates",
                Expr::record(
                    "GaugeRate",
                    vec![
                        ("token", Expr::Token(token.clone())),
                        ("minRate", Expr::Percent(params.min_rate)),
                        ("maxRate", Expr::Percent(params.max_rate)),
                    ],
                ),
            );
        }
        Ok(block)
    }

    pub fn describe(&self) -> String {
        let mut lines = vec![format!(
            "Gauge (epoch {}, {}):",
            self.state.epoch,
            if self.state.epoch_frozen { "frozen" } else { "live" }
        )];
        for (token, params) in self.quotas.iter() {
            lines.push(format!(
                "  {}: rates {} .. {}",
                token,
                percent_human(params.min_rate),
                percent_human(params.max_rate)
            ));
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool_definition::QuotaParams;
    use crate::tokens::TokenSymbol;
    use ethers::types::U256;

    #[test]
    fn inverted_rates_warn() {
        let mut quotas = QuotaTable::new();
        quotas.insert(
            TokenSymbol::from("WETH"),
            QuotaParams {
                min_rate: 500,
                max_rate: 100,
                quota_increase_fee: 0,
                limit: U256::zero(),
            },
        );
        let report = GaugeConfigurator::new(Network::Mainnet, quotas).validate();
        assert_eq!(report.warnings.len(), 1);
    }
}
