// Linear interest-rate-model configurator. The only configurator with real
// validation today: utilization breakpoints must lie in [0, 100%).

use crate::configurators::{percent_human, ValidationReport};
use crate::emit::{Expr, SourceBlock};
use crate::pool_definition::IrmParams;
use ethers::types::Address;

#[derive(Debug, Clone, Default)]
pub struct IrmState {
    /// Set when the configurator mirrors an already-deployed model.
    pub deployed_at: Option<Address>,
}

#[derive(Debug, Clone)]
pub struct InterestRateModelConfigurator {
    params: IrmParams,
    state: IrmState,
}

impl InterestRateModelConfigurator {
    pub fn new(params: IrmParams) -> Self {
        Self {
            params,
            state: IrmState::default(),
        }
    }

    /// Reconstructs a configurator for a deployed model with zeroed
    /// parameters; a later on-chain read step outside this crate fills them.
    pub fn from_address(address: Address) -> Self {
        Self {
            params: IrmParams::default(),
            state: IrmState {
                deployed_at: Some(address),
            },
        }
    }

    pub fn params(&self) -> &IrmParams {
        &self.params
    }

    pub fn state(&self) -> &IrmState {
        &self.state
    }

    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();
        if self.params.u1 >= 10_000 {
            report.error(format!(
                "interest rate model: U_1 = {} is outside [0, 100%)",
                percent_human(self.params.u1)
            ));
        }
        if self.params.u2 >= 10_000 {
            report.error(format!(
                "interest rate model: U_2 = {} is outside [0, 100%)",
                percent_human(self.params.u2)
            ));
        }
        if self.params.u1 > self.params.u2 {
            report.warn(format!(
                "interest rate model: U_1 = {} exceeds U_2 = {}",
                percent_human(self.params.u1),
                percent_human(self.params.u2)
            ));
        }
        report
    }

    pub fn compile(&self) -> SourceBlock {
        let p = &self.params;
        let mut block = SourceBlock::new();
        block.declare(
            "LinearIRMV3DeployParams",
            "irmParams",
            Expr::record(
                "LinearIRMV3DeployParams",
                vec![
                    ("U_1", Expr::Percent(p.u1)),
                    ("U_2", Expr::Percent(p.u2)),
                    ("R_base", Expr::Percent(p.r_base)),
                    ("R_slope1", Expr::Percent(p.r_slope1)),
                    ("R_slope2", Expr::Percent(p.r_slope2)),
                    ("R_slope3", Expr::Percent(p.r_slope3)),
                    (
                        "_isBorrowingMoreU2Forbidden",
                        Expr::Bool(p.forbid_borrowing_above_u2),
                    ),
                ],
            ),
        );
        block
    }

    pub fn describe(&self) -> String {
        let p = &self.params;
        let mut lines = vec!["Interest rate model (linear):".to_string()];
        if let Some(addr) = self.state.deployed_at {
            lines.push(format!("  deployed at: {:?} (parameters pending read)", addr));
        }
        lines.push(format!(
            "  U_1: {}  U_2: {}",
            percent_human(p.u1),
            percent_human(p.u2)
        ));
        lines.push(format!(
            "  R_base: {}  R_slope1: {}  R_slope2: {}  R_slope3: {}",
            percent_human(p.r_base),
            percent_human(p.r_slope1),
            percent_human(p.r_slope2),
            percent_human(p.r_slope3)
        ));
        lines.push(format!(
            "  borrowing above U_2: {}",
            if p.forbid_borrowing_above_u2 {
                "forbidden"
            } else {
                "allowed"
            }
        ));
        lines.join("\n")
    }
}
