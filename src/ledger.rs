// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! In-memory session store for transactions, goals, categories and settings.
//!
//! The caller owns the [`Ledger`] and passes it by reference; every mutation
//! happens in place and is validated before it touches any collection.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::LedgerError;
use crate::models::{Category, CategoryKind, NewTransaction, SavingsGoal, Settings, Transaction};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub goals: Vec<SavingsGoal>,
    #[serde(default)]
    next_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub balance: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BudgetStatus {
    pub budget: Decimal,
    pub spent: Decimal,
    /// Negative when over budget.
    pub remaining: Decimal,
    pub percent_spent: Decimal,
}

impl BudgetStatus {
    pub fn is_over(&self) -> bool {
        self.remaining < Decimal::ZERO
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthFlow {
    pub month: String, // YYYY-MM
    pub income: Decimal,
    pub expense: Decimal,
}

fn ensure_positive(field: &'static str, v: Decimal) -> Result<(), LedgerError> {
    if v > Decimal::ZERO {
        Ok(())
    } else {
        Err(LedgerError::NotPositive(field))
    }
}

fn ensure_not_blank(field: &'static str, v: &str) -> Result<(), LedgerError> {
    if v.trim().is_empty() {
        Err(LedgerError::Blank(field))
    } else {
        Ok(())
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// The demo data a fresh session starts with.
    pub fn seeded() -> Self {
        let mut l = Ledger::new();
        for (name, kind) in [
            ("Salary", CategoryKind::Income),
            ("Freelance", CategoryKind::Income),
            ("Groceries", CategoryKind::Expense),
            ("Rent", CategoryKind::Expense),
            ("Utilities", CategoryKind::Expense),
            ("Entertainment", CategoryKind::Expense),
            ("Transport", CategoryKind::Expense),
            ("Dining Out", CategoryKind::Expense),
        ] {
            l.categories.push(Category {
                name: name.to_string(),
                kind,
            });
        }
        let seed = [
            (CategoryKind::Income, "Salary", 4500, 1, "Monthly Salary"),
            (CategoryKind::Expense, "Groceries", 350, 5, "Weekly grocery shopping"),
            (CategoryKind::Expense, "Rent", 1500, 1, "Monthly rent"),
            (CategoryKind::Expense, "Utilities", 150, 10, "Electricity and water bill"),
            (CategoryKind::Expense, "Entertainment", 80, 15, "Movie tickets"),
            (CategoryKind::Expense, "Transport", 100, 1, "Monthly bus pass"),
        ];
        for (kind, category, amount, day, description) in seed {
            let id = l.allocate_id();
            l.transactions.push(Transaction {
                id,
                kind,
                category: category.to_string(),
                amount: Decimal::new(amount, 0),
                date: NaiveDate::from_ymd_opt(2023, 12, day).unwrap_or_default(),
                description: description.to_string(),
            });
        }
        for (name, target) in [("Vacation to Hawaii", 3000), ("New Laptop", 1800)] {
            let id = l.allocate_id();
            l.goals.push(SavingsGoal {
                id,
                name: name.to_string(),
                target_amount: Decimal::new(target, 0),
            });
        }
        l
    }

    fn allocate_id(&mut self) -> i64 {
        let used = self
            .transactions
            .iter()
            .map(|t| t.id)
            .chain(self.goals.iter().map(|g| g.id))
            .max()
            .unwrap_or(0);
        self.next_id = self.next_id.max(used) + 1;
        self.next_id
    }

    // Categories

    pub fn category(&self, name: &str) -> Option<&Category> {
        let name = name.trim();
        self.categories
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    pub fn categories_of(&self, kind: CategoryKind) -> impl Iterator<Item = &Category> {
        self.categories.iter().filter(move |c| c.kind == kind)
    }

    pub fn add_category(&mut self, name: &str, kind: CategoryKind) -> Result<(), LedgerError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LedgerError::BlankCategory);
        }
        if self.category(name).is_some() {
            return Err(LedgerError::DuplicateCategory(name.to_string()));
        }
        self.categories.push(Category {
            name: name.to_string(),
            kind,
        });
        debug!(name, %kind, "category added");
        Ok(())
    }

    pub fn remove_category(&mut self, name: &str) -> Result<Category, LedgerError> {
        let name = name.trim();
        let pos = self
            .categories
            .iter()
            .position(|c| c.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| LedgerError::UnknownCategory(name.to_string()))?;
        let in_use = self
            .transactions
            .iter()
            .filter(|t| t.category.eq_ignore_ascii_case(name))
            .count();
        if in_use > 0 {
            return Err(LedgerError::CategoryInUse(
                self.categories[pos].name.clone(),
                in_use,
            ));
        }
        Ok(self.categories.remove(pos))
    }

    // Transactions

    fn check_transaction(&self, tx: &NewTransaction) -> Result<String, LedgerError> {
        ensure_positive("amount", tx.amount)?;
        ensure_not_blank("description", &tx.description)?;
        let cat = self
            .category(&tx.category)
            .ok_or_else(|| LedgerError::UnknownCategory(tx.category.trim().to_string()))?;
        if cat.kind != tx.kind {
            return Err(LedgerError::KindMismatch {
                name: cat.name.clone(),
                expected: tx.kind.to_string(),
                actual: cat.kind.to_string(),
            });
        }
        Ok(cat.name.clone())
    }

    pub fn transaction(&self, id: i64) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn add_transaction(&mut self, tx: NewTransaction) -> Result<i64, LedgerError> {
        let category = self.check_transaction(&tx)?;
        let id = self.allocate_id();
        self.transactions.push(Transaction {
            id,
            kind: tx.kind,
            category,
            amount: tx.amount,
            date: tx.date,
            description: tx.description.trim().to_string(),
        });
        debug!(id, "transaction added");
        Ok(id)
    }

    pub fn update_transaction(&mut self, id: i64, tx: NewTransaction) -> Result<(), LedgerError> {
        let category = self.check_transaction(&tx)?;
        let slot = self
            .transactions
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(LedgerError::TransactionNotFound(id))?;
        *slot = Transaction {
            id,
            kind: tx.kind,
            category,
            amount: tx.amount,
            date: tx.date,
            description: tx.description.trim().to_string(),
        };
        Ok(())
    }

    pub fn delete_transaction(&mut self, id: i64) -> Result<Transaction, LedgerError> {
        let pos = self
            .transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or(LedgerError::TransactionNotFound(id))?;
        Ok(self.transactions.remove(pos))
    }

    /// Newest first, ties broken by most recently added.
    pub fn recent(&self, limit: usize) -> Vec<&Transaction> {
        let mut all: Vec<&Transaction> = self.transactions.iter().collect();
        all.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        all.truncate(limit);
        all
    }

    // Goals

    pub fn add_goal(&mut self, name: &str, target_amount: Decimal) -> Result<i64, LedgerError> {
        ensure_not_blank("goal name", name)?;
        ensure_positive("target amount", target_amount)?;
        let id = self.allocate_id();
        self.goals.push(SavingsGoal {
            id,
            name: name.trim().to_string(),
            target_amount,
        });
        Ok(id)
    }

    pub fn update_goal(
        &mut self,
        id: i64,
        name: Option<&str>,
        target_amount: Option<Decimal>,
    ) -> Result<(), LedgerError> {
        if let Some(n) = name {
            ensure_not_blank("goal name", n)?;
        }
        if let Some(t) = target_amount {
            ensure_positive("target amount", t)?;
        }
        let goal = self
            .goals
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or(LedgerError::GoalNotFound(id))?;
        if let Some(n) = name {
            goal.name = n.trim().to_string();
        }
        if let Some(t) = target_amount {
            goal.target_amount = t;
        }
        Ok(())
    }

    pub fn delete_goal(&mut self, id: i64) -> Result<SavingsGoal, LedgerError> {
        let pos = self
            .goals
            .iter()
            .position(|g| g.id == id)
            .ok_or(LedgerError::GoalNotFound(id))?;
        Ok(self.goals.remove(pos))
    }

    // Settings

    pub fn set_budget(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        ensure_positive("budget", amount)?;
        self.settings.monthly_budget = amount;
        Ok(())
    }

    pub fn set_currency(&mut self, code: &str) -> Result<(), LedgerError> {
        let code = code.trim();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(LedgerError::InvalidCurrency(code.to_string()));
        }
        self.settings.currency = code.to_ascii_uppercase();
        Ok(())
    }

    // Aggregates

    fn total_of(&self, kind: CategoryKind) -> Decimal {
        self.transactions
            .iter()
            .filter(|t| t.kind == kind)
            .map(|t| t.amount)
            .sum()
    }

    pub fn summary(&self) -> Summary {
        let total_income = self.total_of(CategoryKind::Income);
        let total_expenses = self.total_of(CategoryKind::Expense);
        Summary {
            total_income,
            total_expenses,
            balance: total_income - total_expenses,
        }
    }

    pub fn budget_status(&self) -> BudgetStatus {
        let budget = self.settings.monthly_budget;
        let spent = self.total_of(CategoryKind::Expense);
        let percent_spent = if budget > Decimal::ZERO {
            spent * Decimal::ONE_HUNDRED / budget
        } else {
            Decimal::ZERO
        };
        BudgetStatus {
            budget,
            spent,
            remaining: budget - spent,
            percent_spent,
        }
    }

    /// Expense totals per category, largest first.
    pub fn spend_by_category(&self) -> Vec<(String, Decimal)> {
        let mut agg: HashMap<&str, Decimal> = HashMap::new();
        for t in self.transactions.iter().filter(|t| t.kind == CategoryKind::Expense) {
            *agg.entry(t.category.as_str()).or_insert(Decimal::ZERO) += t.amount;
        }
        let mut items: Vec<(String, Decimal)> = agg
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        items.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        items
    }

    /// Income and expense per calendar month, newest first.
    pub fn cashflow(&self) -> Vec<MonthFlow> {
        let mut map: BTreeMap<String, (Decimal, Decimal)> = BTreeMap::new();
        for t in &self.transactions {
            let entry = map
                .entry(t.date.format("%Y-%m").to_string())
                .or_insert((Decimal::ZERO, Decimal::ZERO));
            match t.kind {
                CategoryKind::Income => entry.0 += t.amount,
                CategoryKind::Expense => entry.1 += t.amount,
            }
        }
        map.into_iter()
            .rev()
            .map(|(month, (income, expense))| MonthFlow {
                month,
                income,
                expense,
            })
            .collect()
    }
}
