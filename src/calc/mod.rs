// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Closed-form loan and investment arithmetic.
//!
//! Every function here is pure: a small input record goes in, a small result
//! record comes out. Degenerate arithmetic (zero rates, empty tenures, division
//! by zero) never leaks NaN or infinity to the caller; the affected outputs are
//! reported as `0.0` instead.

pub mod compare;
pub mod crop;
pub mod livestock;
pub mod loan;

pub use compare::{ComparisonRow, LoanComparison, LoanOffer, compare_loans};
pub use crop::{CropLoanPlan, RepaymentScheduleEntry, plan_crop_loan};
pub use livestock::{LivestockInvestment, LivestockResult, evaluate_livestock};
pub use loan::{LoanResult, LoanTerms, RepaymentFrequency, TenureUnit, amortize, compute_emi};

/// Collapse NaN and +/-infinity to zero.
pub(crate) fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}
