// src/pool_core.rs
//
// Pool core orchestrator: composes the five entity configurators for one
// pool definition and drives whole-pool reporting and compilation. The
// quota-keeper and gauge are built from the same QuotaTable the credit
// managers reference, constructed once and passed by value.

use crate::configurators::{
    CreditManagerConfigurator, GaugeConfigurator, InterestRateModelConfigurator,
    PoolConfigurator, QuotaKeeperConfigurator, ValidationReport,
};
use crate::emit::SourceBlock;
use crate::errors::CompileError;
use crate::pool_definition::PoolDefinition;
use crate::registries::RegistrySet;
use log::debug;

pub struct PoolCore {
    pub interest_rate_model: InterestRateModelConfigurator,
    pub pool: PoolConfigurator,
    pub quota_keeper: QuotaKeeperConfigurator,
    pub gauge: GaugeConfigurator,
    pub credit_managers: Vec<CreditManagerConfigurator>,
}

impl PoolCore {
    /// Builds all five configurators in fixed dependency order: the rate
    /// model and pool first, then quota-keeper and gauge from the shared
    /// rate/limit table, then the credit managers that reference it.
    pub fn compose(def: &PoolDefinition) -> Self {
        debug!(
            "composing pool core for {} with {} credit managers",
            def.id,
            def.credit_managers.len()
        );
        let interest_rate_model = InterestRateModelConfigurator::new(def.irm);
        let pool = PoolConfigurator::new(def);
        let quota_keeper = QuotaKeeperConfigurator::new(def.network, def.quotas.clone());
        let gauge = GaugeConfigurator::new(def.network, def.quotas.clone());
        let credit_managers = def
            .credit_managers
            .iter()
            .enumerate()
            .map(|(index, cfg)| {
                CreditManagerConfigurator::new(index, def.network, cfg.clone(), def.quotas.clone())
            })
            .collect();
        Self {
            interest_rate_model,
            pool,
            quota_keeper,
            gauge,
            credit_managers,
        }
    }

    /// Merged findings from every configurator. Non-fatal; the caller
    /// decides whether errors abort.
    pub fn validate(&self) -> ValidationReport {
        let mut report = self.interest_rate_model.validate();
        report.merge(self.pool.validate());
        report.merge(self.quota_keeper.validate());
        report.merge(self.gauge.validate());
        for cm in &self.credit_managers {
            report.merge(cm.validate());
        }
        report
    }

    /// One combined human-readable report, independent of the emitted source.
    pub fn describe(&self) -> String {
        let mut sections = vec![
            self.pool.describe(),
            self.interest_rate_model.describe(),
            self.quota_keeper.describe(),
            self.gauge.describe(),
        ];
        for cm in &self.credit_managers {
            sections.push(cm.describe());
        }
        sections.join("\n\n")
    }

    /// Compiles one credit manager's block, in configuration list order.
    pub fn compile_credit_manager(
        &self,
        index: usize,
        regs: &RegistrySet,
    ) -> Result<SourceBlock, CompileError> {
        self.credit_managers[index].compile(regs)
    }

    /// Compiles the whole pool: pool-level blocks first, then each credit
    /// manager in list order. The result is the per-pool deployment-parameter
    /// artifact body the caller splices into its template.
    pub fn compile(&self, regs: &RegistrySet) -> Result<String, CompileError> {
        let mut block = self.pool.compile(regs)?;
        block.extend(self.interest_rate_model.compile());
        block.blank();
        block.extend(self.quota_keeper.compile(regs)?);
        block.extend(self.gauge.compile(regs)?);
        for (index, _) in self.credit_managers.iter().enumerate() {
            block.blank();
            block.extend(self.compile_credit_manager(index, regs)?);
        }
        Ok(block.render())
    }
}
