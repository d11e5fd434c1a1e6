// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{InputError, require_non_negative, require_positive};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalFeasibilityInput {
    pub goal_cost: f64,
    pub current_savings: f64,
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub tenure_months: f64,
}

impl Default for GoalFeasibilityInput {
    fn default() -> Self {
        Self {
            goal_cost: 10_000.0,
            current_savings: 1_000.0,
            monthly_income: 5_000.0,
            monthly_expenses: 3_000.0,
            tenure_months: 12.0,
        }
    }
}

impl GoalFeasibilityInput {
    pub fn validate(&self) -> Result<(), InputError> {
        require_positive("goal cost", self.goal_cost)?;
        require_non_negative("current savings", self.current_savings)?;
        require_positive("monthly income", self.monthly_income)?;
        require_non_negative("monthly expenses", self.monthly_expenses)?;
        require_positive("tenure", self.tenure_months)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GoalFeasibility {
    AlreadyAchieved,
    Feasible {
        required_monthly: f64,
        available_monthly: f64,
    },
    Infeasible {
        required_monthly: f64,
        available_monthly: f64,
        /// `None` when nothing is left over each month to save.
        suggested_tenure_months: Option<u32>,
        suggested_monthly_savings: f64,
    },
}

impl GoalFeasibility {
    pub fn is_achievable(&self) -> bool {
        !matches!(self, GoalFeasibility::Infeasible { .. })
    }
}

pub fn assess_goal(input: &GoalFeasibilityInput) -> GoalFeasibility {
    let available = input.monthly_income - input.monthly_expenses;
    let remaining = input.goal_cost - input.current_savings;
    if remaining <= 0.0 {
        return GoalFeasibility::AlreadyAchieved;
    }

    let required = remaining / input.tenure_months;
    debug!(available, required, remaining, "assessing goal");
    if available >= required {
        return GoalFeasibility::Feasible {
            required_monthly: required,
            available_monthly: available,
        };
    }

    let suggested_tenure_months = if available > 0.0 {
        let months = (remaining / available).ceil();
        (months.is_finite() && months <= f64::from(u32::MAX)).then_some(months as u32)
    } else {
        None
    };
    GoalFeasibility::Infeasible {
        required_monthly: required,
        available_monthly: available,
        suggested_tenure_months,
        suggested_monthly_savings: required,
    }
}
