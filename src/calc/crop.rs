// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Seasonal crop loans: a grace period of simple interest that is capitalized
//! before a regular monthly amortization starts.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::finite_or_zero;
use super::loan::{LoanTerms, amortize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RepaymentScheduleEntry {
    pub due_date: NaiveDate,
    pub amount_due: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropLoanPlan {
    /// As entered, fractions included.
    pub grace_months: f64,
    pub grace_interest: f64,
    pub capitalized_principal: f64,
    pub repayment_months: u32,
    pub periodic_payment: f64,
    pub repayment_start: Option<NaiveDate>,
    pub schedule: Vec<RepaymentScheduleEntry>,
}

impl CropLoanPlan {
    pub fn is_empty(&self) -> bool {
        self.schedule.is_empty()
    }

    pub fn total_repayment(&self) -> f64 {
        self.schedule.iter().map(|e| e.amount_due).sum()
    }
}

/// Plan a crop loan whose grace period starts on `today`.
///
/// Grace interest accrues on the full (possibly fractional) grace period.
/// Installments and due dates run on whole months: the repayment window is
/// `tenure - grace`, truncated, and the first due date is `today` plus the
/// whole months of grace. The repayment frequency on `terms` is ignored, crop
/// loans repay monthly.
pub fn plan_crop_loan(terms: &LoanTerms, today: NaiveDate) -> CropLoanPlan {
    let monthly_rate = terms.annual_rate_percent / 100.0 / 12.0;
    let grace_months = finite_or_zero(terms.grace_period_months.max(0.0));
    let grace_interest = finite_or_zero(terms.principal * monthly_rate * grace_months);
    let capitalized_principal = terms.principal + grace_interest;
    let remaining = terms.tenure_months() - grace_months;
    debug!(
        grace_months,
        grace_interest, remaining, "planning crop loan repayment"
    );

    let empty = CropLoanPlan {
        grace_months,
        grace_interest,
        capitalized_principal,
        repayment_months: 0,
        periodic_payment: 0.0,
        repayment_start: None,
        schedule: Vec::new(),
    };
    if !(remaining > 0.0) {
        return empty;
    }

    let Some(start) = today.checked_add_months(Months::new(whole_months(grace_months))) else {
        debug!("repayment start is out of the calendar range");
        return empty;
    };
    // Dates past the calendar range end the schedule; the installment is
    // sized for the months that actually fit.
    let due_dates: Vec<NaiveDate> = (0..whole_months(remaining))
        .map_while(|i| start.checked_add_months(Months::new(i)))
        .collect();
    if due_dates.is_empty() {
        return empty;
    }

    let repayment_months = u32::try_from(due_dates.len()).unwrap_or(u32::MAX);
    let periodic_payment =
        amortize(capitalized_principal, monthly_rate, f64::from(repayment_months)).unwrap_or(0.0);
    let schedule = due_dates
        .into_iter()
        .map(|due_date| RepaymentScheduleEntry {
            due_date,
            amount_due: periodic_payment,
        })
        .collect();

    CropLoanPlan {
        grace_months,
        grace_interest,
        capitalized_principal,
        repayment_months,
        periodic_payment,
        repayment_start: Some(start),
        schedule,
    }
}

fn whole_months(v: f64) -> u32 {
    if v.is_finite() && v > 0.0 {
        v.trunc().min(f64::from(u32::MAX)) as u32
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_months_truncates_and_clamps() {
        assert_eq!(whole_months(6.9), 6);
        assert_eq!(whole_months(-2.0), 0);
        assert_eq!(whole_months(f64::NAN), 0);
    }

    #[test]
    fn month_end_start_dates_clamp() {
        let terms = LoanTerms::new(1200.0, 12.0, 3.0, super::super::TenureUnit::Months)
            .with_grace(1.0);
        let today = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        let plan = plan_crop_loan(&terms, today);
        assert_eq!(
            plan.repayment_start,
            NaiveDate::from_ymd_opt(2025, 2, 28)
        );
        assert_eq!(
            plan.schedule[1].due_date,
            NaiveDate::from_ymd_opt(2025, 3, 28).unwrap()
        );
    }

    #[test]
    fn calendar_overflow_shortens_schedule_consistently() {
        let terms = LoanTerms::new(10_000.0, 6.0, 20_000.0, super::super::TenureUnit::Months);
        let today = NaiveDate::from_ymd_opt(262_000, 1, 1).unwrap();
        let plan = plan_crop_loan(&terms, today);
        assert!(!plan.schedule.is_empty());
        assert!(plan.schedule.len() < 20_000);
        assert_eq!(plan.schedule.len(), plan.repayment_months as usize);
        let expected = plan.periodic_payment * f64::from(plan.repayment_months);
        assert!((plan.total_repayment() - expected).abs() <= 1e-6 * expected);
    }
}
