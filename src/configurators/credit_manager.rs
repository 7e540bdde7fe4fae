// Credit-manager configurator: risk parameters, the ordered collateral set
// and the adapter configs for one manager under a pool.

use crate::configurators::{percent_human, ValidationReport};
use crate::emit::{Expr, SourceBlock};
use crate::errors::CompileError;
use crate::networks::Network;
use crate::pool_definition::{CreditManagerConfig, QuotaTable};
use crate::registries::RegistrySet;
use crate::tokens::TokenSymbol;
use chrono::DateTime;
use ethers::types::U256;
use indexmap::IndexSet;

/// Freshly deployed manager state: no debt, nothing enabled, not paused.
#[derive(Debug, Clone, Default)]
pub struct CreditManagerState {
    pub total_debt: U256,
    pub enabled_tokens: u8,
    pub is_paused: bool,
}

#[derive(Debug, Clone)]
pub struct CreditManagerConfigurator {
    index: usize,
    network: Network,
    config: CreditManagerConfig,
    quotas: QuotaTable,
    pub state: CreditManagerState,
}

impl CreditManagerConfigurator {
    pub fn new(
        index: usize,
        network: Network,
        config: CreditManagerConfig,
        quotas: QuotaTable,
    ) -> Self {
        Self {
            index,
            network,
            config,
            quotas,
            state: CreditManagerState::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn config(&self) -> &CreditManagerConfig {
        &self.config
    }

    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();
        let mut seen: IndexSet<&TokenSymbol> = IndexSet::new();
        for collateral in &self.config.collateral_tokens {
            if !seen.insert(&collateral.token) {
                report.error(format!(
                    "credit manager '{}': duplicate collateral token {}",
                    self.config.name, collateral.token
                ));
            }
            if collateral.lt > 10_000 {
                report.error(format!(
                    "credit manager '{}': liquidation threshold for {} is {} (above 100%)",
                    self.config.name,
                    collateral.token,
                    percent_human(collateral.lt)
                ));
            }
            if collateral.lt > 0 && self.quotas.get(&collateral.token).is_none() {
                report.warn(format!(
                    "credit manager '{}': collateral {} has no quota table entry",
                    self.config.name, collateral.token
                ));
            }
        }
        if self.config.min_debt > self.config.max_debt {
            report.error(format!(
                "credit manager '{}': min debt {} exceeds max debt {}",
                self.config.name, self.config.min_debt, self.config.max_debt
            ));
        }
        report
    }

    pub fn compile(&self, regs: &RegistrySet) -> Result<SourceBlock, CompileError> {
        let cfg = &self.config;
        let mut block = SourceBlock::new();
        block.comment(format!("credit manager {} ('{}')", self.index, cfg.name));
        block.raw("CreditManagerV3DeployParams storage cp = _creditManagers.push();");
        block.assign("cp.name", Expr::Str(cfg.name.clone()));
        block.assign("cp.minDebt", Expr::Uint(cfg.min_debt));
        block.assign("cp.maxDebt", Expr::Uint(cfg.max_debt));
        block.assign("cp.feeInterest", Expr::Percent(cfg.fee_interest));
        block.assign("cp.feeLiquidation", Expr::Percent(cfg.fee_liquidation));
        block.assign("cp.liquidationPremium", Expr::Percent(cfg.liquidation_premium));
        block.assign("cp.poolLimit", Expr::Uint(cfg.pool_limit));
        block.assign(
            "cp.maxEnabledTokens",
            Expr::Lit(cfg.max_enabled_tokens.to_string()),
        );
        if let Some(expiration) = cfg.expiration_date {
            block.assign("cp.expirationDate", Expr::Uint(U256::from(expiration)));
        }

        let mut seen: IndexSet<&TokenSymbol> = IndexSet::new();
        for collateral in &cfg.collateral_tokens {
            if !seen.insert(&collateral.token) {
                // emitting the duplicate would silently override the earlier
                // threshold on-chain
                return Err(CompileError::DuplicateCollateral {
                    symbol: collateral.token.clone(),
                    manager: cfg.name.clone(),
                });
            }
            regs.tokens.ensure_deployed(&collateral.token, self.network)?;
            block.push(
                "cp.collateralTokens",
                Expr::record(
                    "CollateralToken",
                    vec![
                        ("token", Expr::Token(collateral.token.clone())),
                        ("lt", Expr::Percent(collateral.lt)),
                    ],
                ),
            );
        }

        for adapter in &cfg.adapters {
            block.extend(adapter.compile(regs, self.network)?);
        }

        Ok(block)
    }

    pub fn describe(&self) -> String {
        let cfg = &self.config;
        let mut lines = vec![format!("Credit manager {} ('{}'):", self.index, cfg.name)];
        lines.push(format!("  debt: {} .. {}", cfg.min_debt, cfg.max_debt));
        lines.push(format!(
            "  fees: interest {}, liquidation {}, premium {}",
            percent_human(cfg.fee_interest),
            percent_human(cfg.fee_liquidation),
            percent_human(cfg.liquidation_premium)
        ));
        match cfg.expiration_date {
            Some(ts) => {
                let when = DateTime::from_timestamp(ts as i64, 0)
                    .map(|dt| dt.format("%Y-%m-%d %H:%M UTC").to_string())
                    .unwrap_or_else(|| format!("timestamp {}", ts));
                lines.push(format!("  expires: {}", when));
            }
            None => lines.push("  expires: never".to_string()),
        }
        lines.push(format!(
            "  pool limit: {}, max enabled tokens: {}",
            cfg.pool_limit, cfg.max_enabled_tokens
        ));
        lines.push(format!(
            "  collateral ({} tokens):",
            cfg.collateral_tokens.len()
        ));
        for collateral in &cfg.collateral_tokens {
            let note = if collateral.lt == 0 {
                " (compatibility listing)"
            } else {
                ""
            };
            lines.push(format!(
                "    {} at lt {}{}",
                collateral.token,
                percent_human(collateral.lt),
                note
            ));
        }
        lines.push(format!("  adapters ({}):", cfg.adapters.len()));
        for adapter in &cfg.adapters {
            lines.push(format!("    {}", adapter.contract()));
        }
        lines.join("\n")
    }
}
