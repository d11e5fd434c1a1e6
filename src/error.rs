// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Input rejected before any arithmetic runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{field} must be positive (got {value})")]
    NotPositive { field: &'static str, value: f64 },
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },
    #[error("priority must be between 1 and 5 (got {0})")]
    PriorityOutOfRange(u8),
    #[error("at least one {0} is required")]
    Empty(&'static str),
    #[error("invalid {what} '{raw}': {reason}")]
    Parse {
        what: &'static str,
        raw: String,
        reason: String,
    },
}

impl InputError {
    pub fn parse(what: &'static str, raw: &str, reason: impl Into<String>) -> Self {
        InputError::Parse {
            what,
            raw: raw.to_string(),
            reason: reason.into(),
        }
    }
}

pub(crate) fn require_positive(field: &'static str, value: f64) -> Result<(), InputError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(InputError::NotPositive { field, value })
    }
}

pub(crate) fn require_non_negative(field: &'static str, value: f64) -> Result<(), InputError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(InputError::Negative { field, value })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("category name must not be empty")]
    BlankCategory,
    #[error("category '{0}' already exists")]
    DuplicateCategory(String),
    #[error("category '{0}' not found")]
    UnknownCategory(String),
    #[error("category '{name}' is a {actual} category, not {expected}")]
    KindMismatch {
        name: String,
        expected: String,
        actual: String,
    },
    #[error("category '{0}' is still used by {1} transaction(s)")]
    CategoryInUse(String, usize),
    #[error("{0} must be positive")]
    NotPositive(&'static str),
    #[error("{0} must not be empty")]
    Blank(&'static str),
    #[error("transaction {0} not found")]
    TransactionNotFound(i64),
    #[error("goal {0} not found")]
    GoalNotFound(i64),
    #[error("invalid currency code '{0}', expected three letters")]
    InvalidCurrency(String),
}

#[derive(Debug, Error)]
pub enum AdviceError {
    #[error("advice endpoint not configured (set AGRIFIN_ADVICE_URL)")]
    NotConfigured,
    #[error("advice request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("advice service returned no text")]
    EmptyAdvice,
}
