// Entity configurators: each wraps one slice of a PoolDefinition, owns the
// not-yet-deployed "current state" mirror used for reporting, and exposes
// validate / compile / describe.

pub mod credit_manager;
pub mod gauge;
pub mod interest_rate_model;
pub mod pool;
pub mod quota_keeper;

pub use credit_manager::CreditManagerConfigurator;
pub use gauge::GaugeConfigurator;
pub use interest_rate_model::InterestRateModelConfigurator;
pub use pool::PoolConfigurator;
pub use quota_keeper::QuotaKeeperConfigurator;

/// Non-fatal findings from a configurator. The caller decides whether to
/// treat errors as fatal; compilation itself halts only on lookup and
/// variant failures.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warn(&mut self, finding: impl Into<String>) {
        self.warnings.push(finding.into());
    }

    pub fn error(&mut self, finding: impl Into<String>) {
        self.errors.push(finding.into());
    }

    pub fn merge(&mut self, other: ValidationReport) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
    }

    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty() && self.errors.is_empty()
    }
}

/// Renders a 1/100-percent value for human-readable reports, e.g. 9_000 ->
/// "90%". Emission never uses this; it goes through the numeric encoder.
pub(crate) fn percent_human(value: u16) -> String {
    let d = rust_decimal::Decimal::new(value as i64, 2).normalize();
    format!("{}%", d)
}
