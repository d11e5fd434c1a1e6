// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Personalized advice through an external text-generation endpoint.
//!
//! This module only builds the prompt and relays it. The endpoint receives
//! `{"prompt": "...", "input": {...}}` and must answer `{"advice": "..."}`.

use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::AdviceError;
use crate::ledger::Ledger;
use crate::models::CategoryKind;
use crate::utils::{fmt_money, http_client};

pub const NO_EXPENSES: &str = "No expenses recorded.";
pub const NO_GOALS: &str = "No savings goals set.";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdviceRequest {
    pub spending_habits: String,
    pub savings_goals: String,
    pub income: f64,
    pub budget: f64,
}

impl AdviceRequest {
    pub fn from_ledger(ledger: &Ledger) -> Self {
        let ccy = ledger.settings.currency.as_str();
        let spending_habits = ledger
            .transactions
            .iter()
            .filter(|t| t.kind == CategoryKind::Expense)
            .map(|t| {
                format!(
                    "- {} on {} ({})",
                    fmt_money(&t.amount, ccy),
                    t.category,
                    t.description
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        let savings_goals = ledger
            .goals
            .iter()
            .map(|g| format!("- Save {} for {}", fmt_money(&g.target_amount, ccy), g.name))
            .collect::<Vec<_>>()
            .join("\n");

        Self {
            spending_habits: if spending_habits.is_empty() {
                NO_EXPENSES.to_string()
            } else {
                spending_habits
            },
            savings_goals: if savings_goals.is_empty() {
                NO_GOALS.to_string()
            } else {
                savings_goals
            },
            income: ledger.summary().total_income.to_f64().unwrap_or(0.0),
            budget: ledger.settings.monthly_budget.to_f64().unwrap_or(0.0),
        }
    }

    pub fn prompt(&self) -> String {
        format!(
            "You are a personal finance advisor. Based on the user's spending habits, savings goals, income, and budget, provide personalized financial advice.\n\
             \n\
             Spending Habits: {}\n\
             Savings Goals: {}\n\
             Income: {}\n\
             Budget: {}\n\
             \n\
             Provide specific and actionable recommendations to help the user improve their financial situation and achieve their savings goals.",
            self.spending_habits, self.savings_goals, self.income, self.budget
        )
    }
}

#[derive(Debug, Deserialize)]
struct AdviceResponse {
    #[serde(default)]
    advice: String,
}

pub struct AdviceClient {
    url: String,
    key: Option<String>,
    http: reqwest::blocking::Client,
}

impl AdviceClient {
    pub fn from_config(cfg: &Config) -> Result<Self, AdviceError> {
        let url = cfg.advice_url.clone().ok_or(AdviceError::NotConfigured)?;
        Ok(Self {
            url,
            key: cfg.advice_key.clone(),
            http: http_client(cfg.advice_timeout)?,
        })
    }

    /// One request, no retry.
    pub fn generate(&self, req: &AdviceRequest) -> Result<String, AdviceError> {
        debug!(url = %self.url, "requesting advice");
        let body = json!({ "prompt": req.prompt(), "input": req });
        let mut rb = self.http.post(&self.url).json(&body);
        if let Some(k) = &self.key {
            rb = rb.bearer_auth(k);
        }
        let resp: AdviceResponse = rb.send()?.error_for_status()?.json()?;
        let advice = resp.advice.trim();
        if advice.is_empty() {
            warn!("advice endpoint answered without text");
            return Err(AdviceError::EmptyAdvice);
        }
        Ok(advice.to_string())
    }
}
