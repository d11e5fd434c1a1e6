// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use agrifin::error::LedgerError;
use agrifin::ledger::Ledger;
use agrifin::models::{CategoryKind, NewTransaction};
use agrifin::session;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tempfile::tempdir;

fn tx(kind: CategoryKind, category: &str, amount: i64, day: u32) -> NewTransaction {
    NewTransaction {
        kind,
        category: category.to_string(),
        amount: Decimal::new(amount, 0),
        date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
        description: format!("{category} on {day}"),
    }
}

#[test]
fn seeded_session_matches_demo_data() {
    let l = Ledger::seeded();
    assert_eq!(l.transactions.len(), 6);
    assert_eq!(l.goals.len(), 2);
    assert_eq!(l.categories.len(), 8);
    assert_eq!(l.categories_of(CategoryKind::Income).count(), 2);

    let s = l.summary();
    assert_eq!(s.total_income, Decimal::new(4500, 0));
    assert_eq!(s.total_expenses, Decimal::new(2180, 0));
    assert_eq!(s.balance, Decimal::new(2320, 0));

    let b = l.budget_status();
    assert_eq!(b.remaining, Decimal::new(820, 0));
    assert!(!b.is_over());
}

#[test]
fn transactions_must_match_their_category() {
    let mut l = Ledger::seeded();
    let err = l
        .add_transaction(tx(CategoryKind::Income, "Groceries", 10, 2))
        .unwrap_err();
    assert!(matches!(err, LedgerError::KindMismatch { .. }));

    let err = l
        .add_transaction(tx(CategoryKind::Expense, "Fertilizer", 10, 2))
        .unwrap_err();
    assert!(matches!(err, LedgerError::UnknownCategory(_)));

    let err = l
        .add_transaction(tx(CategoryKind::Expense, "Rent", 0, 2))
        .unwrap_err();
    assert!(matches!(err, LedgerError::NotPositive(_)));
    assert_eq!(l.transactions.len(), 6);
}

#[test]
fn add_update_delete_transaction() {
    let mut l = Ledger::seeded();
    let id = l
        .add_transaction(tx(CategoryKind::Expense, "groceries", 40, 3))
        .unwrap();
    assert_eq!(l.transaction(id).unwrap().category, "Groceries");
    assert_eq!(l.recent(1)[0].id, id);

    l.update_transaction(id, tx(CategoryKind::Expense, "Transport", 55, 4))
        .unwrap();
    let t = l.transaction(id).unwrap();
    assert_eq!(t.category, "Transport");
    assert_eq!(t.amount, Decimal::new(55, 0));

    l.delete_transaction(id).unwrap();
    assert!(l.transaction(id).is_none());
    assert!(matches!(
        l.delete_transaction(id),
        Err(LedgerError::TransactionNotFound(_))
    ));
}

#[test]
fn ids_stay_unique_after_deletes() {
    let mut l = Ledger::seeded();
    let a = l.add_transaction(tx(CategoryKind::Expense, "Rent", 1, 1)).unwrap();
    l.delete_transaction(a).unwrap();
    let b = l.add_transaction(tx(CategoryKind::Expense, "Rent", 1, 1)).unwrap();
    let g = l.add_goal("Drip irrigation", Decimal::new(25_000, 0)).unwrap();
    assert!(b > a);
    assert!(g > b);
}

#[test]
fn categories_in_use_cannot_be_removed() {
    let mut l = Ledger::seeded();
    assert!(matches!(
        l.remove_category("Rent"),
        Err(LedgerError::CategoryInUse(_, 1))
    ));
    assert!(matches!(
        l.add_category(" salary ", CategoryKind::Income),
        Err(LedgerError::DuplicateCategory(_))
    ));
    l.remove_category("dining out").unwrap();
    assert!(l.category("Dining Out").is_none());
}

#[test]
fn goals_and_settings_are_validated() {
    let mut l = Ledger::new();
    assert!(l.add_goal("  ", Decimal::ONE).is_err());
    assert!(l.add_goal("Pump", Decimal::ZERO).is_err());
    let id = l.add_goal("Pump", Decimal::new(900, 0)).unwrap();
    l.update_goal(id, None, Some(Decimal::new(1200, 0))).unwrap();
    assert_eq!(l.goals[0].target_amount, Decimal::new(1200, 0));
    assert!(matches!(
        l.update_goal(id + 1, Some("x"), None),
        Err(LedgerError::GoalNotFound(_))
    ));

    assert!(l.set_currency("rupee").is_err());
    l.set_currency("inr").unwrap();
    assert_eq!(l.settings.currency, "INR");
    assert!(l.set_budget(Decimal::new(-1, 0)).is_err());
}

#[test]
fn spend_and_cashflow_aggregate_by_month() {
    let mut l = Ledger::seeded();
    l.add_transaction(tx(CategoryKind::Expense, "Rent", 1500, 1)).unwrap();
    l.add_transaction(tx(CategoryKind::Income, "Freelance", 300, 9)).unwrap();

    let spend = l.spend_by_category();
    assert_eq!(spend[0], ("Rent".to_string(), Decimal::new(3000, 0)));

    let flow = l.cashflow();
    assert_eq!(flow.len(), 2);
    assert_eq!(flow[0].month, "2024-01");
    assert_eq!(flow[0].income, Decimal::new(300, 0));
    assert_eq!(flow[1].month, "2023-12");
    assert_eq!(flow[1].expense, Decimal::new(2180, 0));
}

#[test]
fn over_budget_is_reported() {
    let mut l = Ledger::seeded();
    l.set_budget(Decimal::new(2000, 0)).unwrap();
    let b = l.budget_status();
    assert!(b.is_over());
    assert_eq!(b.remaining, Decimal::new(-180, 0));
    assert_eq!(b.percent_spent, Decimal::new(109, 0));
}

#[test]
fn session_round_trips_through_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("session.json");

    let fresh = session::load(&path).unwrap();
    assert_eq!(fresh, Ledger::seeded());

    let mut l = fresh;
    l.set_currency("EUR").unwrap();
    let id = l.add_goal("Greenhouse", Decimal::new(7_500, 0)).unwrap();
    session::save(&path, &l).unwrap();

    let back = session::load(&path).unwrap();
    assert_eq!(back, l);
    assert_eq!(back.settings.currency, "EUR");
    let mut back = back;
    let next = back.add_goal("Fence", Decimal::ONE).unwrap();
    assert!(next > id);
}

#[test]
fn corrupt_session_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(session::load(&path).is_err());
}
