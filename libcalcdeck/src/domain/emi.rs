//! Loan instalment (EMI) calculator

use serde::Deserialize;

use super::round_to;
use crate::error::{CalcError, Result};

/// Monthly instalment breakdown, rounded to 2 decimals
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmiResult {
    pub emi: f64,
    pub total: f64,
    pub interest: f64,
}

/// Loan form inputs; the defaults are the values restored by "Reset"
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct EmiInputs {
    pub principal: f64,
    pub rate: f64,
    pub tenure: u32,
}

impl Default for EmiInputs {
    fn default() -> Self {
        Self {
            principal: 50000.0,
            rate: 7.5,
            tenure: 36,
        }
    }
}

impl EmiInputs {
    pub fn calculate(&self) -> Result<EmiResult> {
        calculate_emi(self.principal, self.rate, self.tenure)
    }
}

/// Equated monthly instalment for a loan
///
/// `annual_rate_percent` is the yearly rate in percent; the monthly rate is
/// `rate / 100 / 12`. A zero rate degenerates to equal instalments with no
/// interest. Total and interest are derived from the unrounded instalment
/// and all three figures are rounded to 2 decimals in both branches.
pub fn calculate_emi(principal: f64, annual_rate_percent: f64, tenure_months: u32) -> Result<EmiResult> {
    if !principal.is_finite() || principal < 0.0 {
        return Err(CalcError::InvalidInput(format!("invalid loan amount: {}", principal)));
    }
    if !annual_rate_percent.is_finite() || annual_rate_percent < 0.0 {
        return Err(CalcError::InvalidInput(format!(
            "invalid annual rate: {}",
            annual_rate_percent
        )));
    }
    if tenure_months == 0 {
        return Err(CalcError::InvalidInput("tenure must be at least one month".to_string()));
    }

    let n = f64::from(tenure_months);
    let r = annual_rate_percent / 100.0 / 12.0;

    let emi = if r == 0.0 {
        principal / n
    } else {
        let growth = (1.0 + r).powf(n);
        principal * r * growth / (growth - 1.0)
    };
    let total = emi * n;
    let interest = total - principal;

    if !total.is_finite() {
        return Err(CalcError::NonFinite(total));
    }

    Ok(EmiResult {
        emi: round_to(emi, 2),
        total: round_to(total, 2),
        interest: round_to(interest, 2),
    })
}
