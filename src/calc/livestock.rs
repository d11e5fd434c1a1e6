// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::finite_or_zero;
use crate::error::{InputError, require_non_negative, require_positive};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LivestockInvestment {
    pub purchase_cost_per_unit: f64,
    pub unit_count: u32,
    pub monthly_feed_cost_per_unit: f64,
    pub duration_months: u32,
    pub sale_value_per_unit: f64,
}

impl Default for LivestockInvestment {
    fn default() -> Self {
        Self {
            purchase_cost_per_unit: 500.0,
            unit_count: 10,
            monthly_feed_cost_per_unit: 50.0,
            duration_months: 12,
            sale_value_per_unit: 1200.0,
        }
    }
}

impl LivestockInvestment {
    pub fn validate(&self) -> Result<(), InputError> {
        require_non_negative("purchase cost", self.purchase_cost_per_unit)?;
        require_positive("number of animals", f64::from(self.unit_count))?;
        require_non_negative("feed cost", self.monthly_feed_cost_per_unit)?;
        require_positive("duration", f64::from(self.duration_months))?;
        require_positive("sale value", self.sale_value_per_unit)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LivestockResult {
    pub total_purchase_cost: f64,
    pub total_feed_cost: f64,
    pub total_investment: f64,
    pub total_sale_value: f64,
    pub profit_or_loss: f64,
    pub break_even_units: f64,
}

impl LivestockResult {
    /// Animals that must be sold to cover the investment, rounded up.
    pub fn break_even_units_whole(&self) -> u64 {
        self.break_even_units.max(0.0).ceil() as u64
    }

    pub fn is_profitable(&self) -> bool {
        self.profit_or_loss > 0.0
    }
}

pub fn evaluate_livestock(input: &LivestockInvestment) -> LivestockResult {
    let units = f64::from(input.unit_count);
    let total_purchase_cost = input.purchase_cost_per_unit * units;
    let total_feed_cost =
        input.monthly_feed_cost_per_unit * units * f64::from(input.duration_months);
    let total_investment = total_purchase_cost + total_feed_cost;
    let total_sale_value = input.sale_value_per_unit * units;
    let break_even_units = if input.sale_value_per_unit == 0.0 {
        0.0
    } else {
        finite_or_zero(total_investment / input.sale_value_per_unit)
    };
    debug!(total_investment, break_even_units, "evaluated livestock batch");

    LivestockResult {
        total_purchase_cost,
        total_feed_cost,
        total_investment,
        total_sale_value,
        profit_or_loss: total_sale_value - total_investment,
        break_even_units,
    }
}
