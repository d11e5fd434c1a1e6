// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::finite_or_zero;
use crate::error::{InputError, require_non_negative, require_positive};

/// Weekly schedules approximate a month as 4.33 weeks.
pub const WEEKS_PER_MONTH: f64 = 4.33;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TenureUnit {
    Months,
    Years,
}

impl TenureUnit {
    pub fn to_months(self, value: f64) -> f64 {
        match self {
            TenureUnit::Months => value,
            TenureUnit::Years => value * 12.0,
        }
    }
}

impl FromStr for TenureUnit {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "m" | "month" | "months" => Ok(TenureUnit::Months),
            "y" | "year" | "years" => Ok(TenureUnit::Years),
            other => Err(InputError::parse(
                "tenure unit",
                other,
                "expected months or years",
            )),
        }
    }
}

impl fmt::Display for TenureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TenureUnit::Months => write!(f, "months"),
            TenureUnit::Years => write!(f, "years"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepaymentFrequency {
    Monthly,
    Weekly,
}

impl RepaymentFrequency {
    pub fn periods_per_year(self) -> f64 {
        match self {
            RepaymentFrequency::Monthly => 12.0,
            RepaymentFrequency::Weekly => 52.0,
        }
    }

    pub fn periods_per_month(self) -> f64 {
        match self {
            RepaymentFrequency::Monthly => 1.0,
            RepaymentFrequency::Weekly => WEEKS_PER_MONTH,
        }
    }
}

impl FromStr for RepaymentFrequency {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monthly" => Ok(RepaymentFrequency::Monthly),
            "weekly" => Ok(RepaymentFrequency::Weekly),
            other => Err(InputError::parse(
                "repayment frequency",
                other,
                "expected monthly or weekly",
            )),
        }
    }
}

impl fmt::Display for RepaymentFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepaymentFrequency::Monthly => write!(f, "monthly"),
            RepaymentFrequency::Weekly => write!(f, "weekly"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub tenure_value: f64,
    pub tenure_unit: TenureUnit,
    pub frequency: RepaymentFrequency,
    #[serde(default)]
    pub grace_period_months: f64,
}

impl Default for LoanTerms {
    fn default() -> Self {
        LoanTerms::new(100_000.0, 10.0, 2.0, TenureUnit::Years)
    }
}

impl LoanTerms {
    /// Monthly repayment, no grace period.
    pub fn new(
        principal: f64,
        annual_rate_percent: f64,
        tenure_value: f64,
        tenure_unit: TenureUnit,
    ) -> Self {
        Self {
            principal,
            annual_rate_percent,
            tenure_value,
            tenure_unit,
            frequency: RepaymentFrequency::Monthly,
            grace_period_months: 0.0,
        }
    }

    pub fn with_frequency(mut self, frequency: RepaymentFrequency) -> Self {
        self.frequency = frequency;
        self
    }

    pub fn with_grace(mut self, months: f64) -> Self {
        self.grace_period_months = months;
        self
    }

    pub fn tenure_months(&self) -> f64 {
        self.tenure_unit.to_months(self.tenure_value)
    }

    pub fn rate_per_period(&self) -> f64 {
        self.annual_rate_percent / 100.0 / self.frequency.periods_per_year()
    }

    pub fn total_periods(&self) -> f64 {
        self.tenure_months() * self.frequency.periods_per_month()
    }

    pub fn validate(&self) -> Result<(), InputError> {
        require_positive("principal", self.principal)?;
        require_positive("interest rate", self.annual_rate_percent)?;
        require_positive("tenure", self.tenure_value)?;
        require_non_negative("grace period", self.grace_period_months)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanResult {
    pub principal: f64,
    pub periods: f64,
    pub periodic_payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
}

impl LoanResult {
    fn zero(principal: f64, periods: f64) -> Self {
        Self {
            principal,
            periods: finite_or_zero(periods),
            periodic_payment: 0.0,
            total_payment: 0.0,
            total_interest: 0.0,
        }
    }
}

/// Annuity payment for `principal` over `periods` at `rate` per period.
///
/// Returns `None` when the formula degenerates: a zero rate, a non-positive
/// period count, or any non-finite intermediate.
pub fn amortize(principal: f64, rate: f64, periods: f64) -> Option<f64> {
    if rate == 0.0 || !(periods > 0.0) {
        return None;
    }
    let growth = (1.0 + rate).powf(periods);
    let payment = principal * rate * growth / (growth - 1.0);
    payment.is_finite().then_some(payment)
}

pub fn compute_emi(terms: &LoanTerms) -> LoanResult {
    let rate = terms.rate_per_period();
    let periods = terms.total_periods();
    debug!(
        principal = terms.principal,
        rate,
        periods,
        frequency = %terms.frequency,
        "computing installment"
    );

    let Some(payment) = amortize(terms.principal, rate, periods) else {
        debug!("degenerate loan terms, reporting zero installment");
        return LoanResult::zero(terms.principal, periods);
    };
    let total_payment = payment * periods;
    let total_interest = total_payment - terms.principal;
    if !total_payment.is_finite() || !total_interest.is_finite() {
        debug!("non-finite totals, reporting zero installment");
        return LoanResult::zero(terms.principal, periods);
    }
    LoanResult {
        principal: terms.principal,
        periods,
        periodic_payment: payment,
        total_payment,
        total_interest,
    }
}
