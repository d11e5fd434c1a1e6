// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use agrifin::advice::{AdviceClient, AdviceRequest, NO_EXPENSES, NO_GOALS};
use agrifin::config::Config;
use agrifin::error::AdviceError;
use agrifin::ledger::Ledger;
use agrifin::models::{CategoryKind, NewTransaction};
use agrifin::{cli, commands};
use chrono::NaiveDate;
use rust_decimal::Decimal;

#[test]
fn request_lists_expenses_and_goals() {
    let req = AdviceRequest::from_ledger(&Ledger::seeded());
    assert!(
        req.spending_habits
            .lines()
            .any(|l| l == "- $350.00 on Groceries (Weekly grocery shopping)")
    );
    assert_eq!(req.spending_habits.lines().count(), 5);
    assert!(req.savings_goals.contains("- Save $3,000.00 for Vacation to Hawaii"));
    assert_eq!(req.income, 4500.0);
    assert_eq!(req.budget, 3000.0);

    let prompt = req.prompt();
    assert!(prompt.starts_with("You are a personal finance advisor."));
    assert!(prompt.contains("Income: 4500"));
}

#[test]
fn empty_ledger_uses_fallback_lines() {
    let mut l = Ledger::new();
    l.add_category("Salary", CategoryKind::Income).unwrap();
    l.add_transaction(NewTransaction {
        kind: CategoryKind::Income,
        category: "Salary".into(),
        amount: Decimal::new(100, 0),
        date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        description: "Milk sales".into(),
    })
    .unwrap();
    let req = AdviceRequest::from_ledger(&l);
    assert_eq!(req.spending_habits, NO_EXPENSES);
    assert_eq!(req.savings_goals, NO_GOALS);
}

#[test]
fn client_needs_an_endpoint() {
    assert!(matches!(
        AdviceClient::from_config(&Config::default()),
        Err(AdviceError::NotConfigured)
    ));
}

#[test]
fn unconfigured_advice_command_still_succeeds() {
    let ledger = Ledger::seeded();
    for argv in [vec!["agrifin", "advice"], vec!["agrifin", "advice", "--dry-run"]] {
        let matches = cli::build_cli().get_matches_from(argv);
        let Some(("advice", sub)) = matches.subcommand() else {
            panic!("no advice subcommand");
        };
        commands::advice::handle(&ledger, &Config::default(), sub).unwrap();
    }
}

#[test]
fn doctor_flags_inconsistent_sessions() {
    let mut ledger = Ledger::seeded();
    assert!(commands::doctor::diagnose(&ledger).is_empty());

    ledger.categories.retain(|c| c.name != "Rent");
    ledger.set_budget(Decimal::new(500, 0)).unwrap();
    let dup = ledger.goals[0].clone();
    ledger.goals.push(dup);

    let issues: Vec<String> = commands::doctor::diagnose(&ledger)
        .into_iter()
        .map(|r| r[0].clone())
        .collect();
    assert!(issues.contains(&"unknown_category".to_string()));
    assert!(issues.contains(&"duplicate_id".to_string()));
    assert!(issues.contains(&"over_budget".to_string()));
}
