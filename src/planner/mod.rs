// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod funds;
pub mod goal;
pub mod multi_goal;

pub use funds::{FundAdvice, Horizon, Location, Product, Risk, recommend};
pub use goal::{GoalFeasibility, GoalFeasibilityInput, assess_goal};
pub use multi_goal::{GoalStep, MultiGoalInput, MultiGoalPlan, PlannedGoal, PlanningMode, plan_goals};
