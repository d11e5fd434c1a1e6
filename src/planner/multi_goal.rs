// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Spreading one monthly savings pot across several goals.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{InputError, require_positive};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanningMode {
    /// One goal at a time, highest priority (lowest number) first.
    Sequential,
    /// All goals at once, savings split by priority weight.
    Simultaneous,
}

impl FromStr for PlanningMode {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sequential" => Ok(PlanningMode::Sequential),
            "simultaneous" => Ok(PlanningMode::Simultaneous),
            other => Err(InputError::parse(
                "planning mode",
                other,
                "expected sequential or simultaneous",
            )),
        }
    }
}

impl fmt::Display for PlanningMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanningMode::Sequential => write!(f, "sequential"),
            PlanningMode::Simultaneous => write!(f, "simultaneous"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedGoal {
    pub name: String,
    pub cost: f64,
    pub priority: u8,
}

impl PlannedGoal {
    pub fn validate(&self) -> Result<(), InputError> {
        require_positive("goal cost", self.cost)?;
        if !(1..=5).contains(&self.priority) {
            return Err(InputError::PriorityOutOfRange(self.priority));
        }
        Ok(())
    }
}

/// Parses `name:cost:priority`.
impl FromStr for PlannedGoal {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').map(str::trim).collect();
        let [name, cost, priority] = parts.as_slice() else {
            return Err(InputError::parse("goal", s, "expected name:cost:priority"));
        };
        let cost = cost
            .parse::<f64>()
            .map_err(|e| InputError::parse("goal", s, e.to_string()))?;
        let priority = priority
            .parse::<u8>()
            .map_err(|e| InputError::parse("goal", s, e.to_string()))?;
        Ok(PlannedGoal {
            name: name.to_string(),
            cost,
            priority,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiGoalInput {
    pub goals: Vec<PlannedGoal>,
    pub mode: PlanningMode,
    pub monthly_savings: f64,
}

impl MultiGoalInput {
    pub fn validate(&self) -> Result<(), InputError> {
        if self.goals.is_empty() {
            return Err(InputError::Empty("goal"));
        }
        require_positive("monthly savings", self.monthly_savings)?;
        self.goals.iter().try_for_each(PlannedGoal::validate)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalStep {
    pub name: String,
    pub cost: f64,
    pub priority: u8,
    pub allocated_monthly: f64,
    /// `None` when the goal never completes with the savings it is given.
    pub months: Option<f64>,
    pub cumulative_months: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiGoalPlan {
    pub mode: PlanningMode,
    pub steps: Vec<GoalStep>,
    pub total_months: Option<f64>,
}

impl MultiGoalPlan {
    pub fn is_achievable(&self) -> bool {
        self.total_months.is_some()
    }
}

pub fn plan_goals(input: &MultiGoalInput) -> MultiGoalPlan {
    debug!(
        goals = input.goals.len(),
        mode = %input.mode,
        savings = input.monthly_savings,
        "planning goals"
    );
    match input.mode {
        PlanningMode::Sequential => sequential(input),
        PlanningMode::Simultaneous => simultaneous(input),
    }
}

fn months_to_reach(cost: f64, monthly: f64) -> Option<f64> {
    if monthly <= 0.0 {
        return None;
    }
    let months = cost / monthly;
    months.is_finite().then_some(months)
}

fn sequential(input: &MultiGoalInput) -> MultiGoalPlan {
    let mut ordered: Vec<&PlannedGoal> = input.goals.iter().collect();
    ordered.sort_by_key(|g| g.priority);

    let mut cumulative = Some(0.0);
    let steps = ordered
        .into_iter()
        .map(|g| {
            let months = months_to_reach(g.cost, input.monthly_savings);
            cumulative = cumulative.zip(months).map(|(acc, m)| acc + m);
            GoalStep {
                name: g.name.clone(),
                cost: g.cost,
                priority: g.priority,
                allocated_monthly: input.monthly_savings,
                months,
                cumulative_months: cumulative,
            }
        })
        .collect();

    MultiGoalPlan {
        mode: PlanningMode::Sequential,
        steps,
        total_months: cumulative,
    }
}

fn simultaneous(input: &MultiGoalInput) -> MultiGoalPlan {
    let total_priority: u32 = input.goals.iter().map(|g| u32::from(g.priority)).sum();

    let steps: Vec<GoalStep> = input
        .goals
        .iter()
        .map(|g| {
            let allocated = if total_priority == 0 {
                0.0
            } else {
                f64::from(g.priority) / f64::from(total_priority) * input.monthly_savings
            };
            let months = months_to_reach(g.cost, allocated);
            GoalStep {
                name: g.name.clone(),
                cost: g.cost,
                priority: g.priority,
                allocated_monthly: allocated,
                months,
                cumulative_months: months,
            }
        })
        .collect();

    let total_months = steps
        .iter()
        .try_fold(0.0_f64, |acc, s| s.months.map(|m| acc.max(m)));

    MultiGoalPlan {
        mode: PlanningMode::Simultaneous,
        steps,
        total_months,
    }
}
