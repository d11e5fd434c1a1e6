// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::Ledger;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;
use serde_json::json;

pub fn handle(ledger: &Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(ledger, sub)?,
        Some(("budget", sub)) => crate::commands::budgets::show(ledger, sub)?,
        Some(("spend-by-category", sub)) => spend_by_category(ledger, sub)?,
        Some(("cashflow", sub)) => cashflow(ledger, sub)?,
        Some(("recent", sub)) => recent(ledger, sub)?,
        _ => {}
    }
    Ok(())
}

fn summary(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let s = ledger.summary();
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &s)? {
        return Ok(());
    }
    let ccy = ledger.settings.currency.as_str();
    let data = vec![
        vec!["Total income".into(), fmt_money(&s.total_income, ccy)],
        vec!["Total expenses".into(), fmt_money(&s.total_expenses, ccy)],
        vec!["Balance".into(), fmt_money(&s.balance, ccy)],
    ];
    println!("{}", pretty_table(&["Summary", "Amount"], data));
    Ok(())
}

fn spend_by_category(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let items = ledger.spend_by_category();
    let json_items: Vec<_> = items
        .iter()
        .map(|(cat, amt)| json!({ "category": cat, "spent": amt }))
        .collect();
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &json_items)? {
        return Ok(());
    }
    let ccy = ledger.settings.currency.as_str();
    let data = items
        .iter()
        .map(|(cat, amt)| vec![cat.clone(), fmt_money(amt, ccy)])
        .collect();
    println!("{}", pretty_table(&["Category", "Spent"], data));
    Ok(())
}

fn cashflow(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let months: usize = *sub.get_one::<usize>("months").unwrap_or(&12);
    let flows: Vec<_> = ledger.cashflow().into_iter().take(months).collect();
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &flows)? {
        return Ok(());
    }
    let data = flows
        .iter()
        .map(|f| {
            vec![
                f.month.clone(),
                format!("{:.2}", f.income),
                format!("{:.2}", f.expense),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Month", "Income", "Expense"], data));
    Ok(())
}

fn recent(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let limit: usize = *sub.get_one::<usize>("limit").unwrap_or(&5);
    let items = ledger.recent(limit);
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &items)? {
        return Ok(());
    }
    let ccy = ledger.settings.currency.as_str();
    let data = items
        .iter()
        .map(|t| {
            vec![
                t.date.to_string(),
                t.description.clone(),
                t.category.clone(),
                fmt_money(&t.amount, ccy),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Date", "Description", "Category", "Amount"], data)
    );
    Ok(())
}
