// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::Ledger;
use crate::models::{CategoryKind, NewTransaction};
use crate::utils::{fmt_money, maybe_print_json, parse_date, parse_decimal, pretty_table};
use anyhow::{Context, Result};
use serde::Serialize;

pub fn handle(ledger: &mut Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(ledger, sub)?,
        Some(("list", sub)) => list(ledger, sub)?,
        Some(("update", sub)) => update(ledger, sub)?,
        Some(("rm", sub)) => {
            let id = parse_id(sub)?;
            let t = ledger.delete_transaction(id)?;
            println!("Removed transaction {} ({})", id, t.description);
        }
        _ => {}
    }
    Ok(())
}

fn parse_id(sub: &clap::ArgMatches) -> Result<i64> {
    let raw = sub.get_one::<String>("id").unwrap();
    raw.trim()
        .parse::<i64>()
        .with_context(|| format!("Invalid id '{}'", raw))
}

fn add(ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let tx = NewTransaction {
        kind: sub.get_one::<String>("kind").unwrap().parse::<CategoryKind>()?,
        category: sub.get_one::<String>("category").unwrap().trim().to_string(),
        amount: parse_decimal(sub.get_one::<String>("amount").unwrap())?,
        date: parse_date(sub.get_one::<String>("date").unwrap())?,
        description: sub.get_one::<String>("description").unwrap().to_string(),
    };
    let (amount, date) = (tx.amount, tx.date);
    let id = ledger.add_transaction(tx)?;
    println!(
        "Recorded {} {} on {} (id {})",
        sub.get_one::<String>("kind").unwrap(),
        fmt_money(&amount, &ledger.settings.currency),
        date,
        id
    );
    Ok(())
}

fn update(ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let id = parse_id(sub)?;
    let cur = ledger
        .transaction(id)
        .with_context(|| format!("transaction {} not found", id))?;
    let tx = NewTransaction {
        kind: match sub.get_one::<String>("kind") {
            Some(k) => k.parse::<CategoryKind>()?,
            None => cur.kind,
        },
        category: sub
            .get_one::<String>("category")
            .map(|s| s.trim().to_string())
            .unwrap_or_else(|| cur.category.clone()),
        amount: match sub.get_one::<String>("amount") {
            Some(a) => parse_decimal(a)?,
            None => cur.amount,
        },
        date: match sub.get_one::<String>("date") {
            Some(d) => parse_date(d)?,
            None => cur.date,
        },
        description: sub
            .get_one::<String>("description")
            .cloned()
            .unwrap_or_else(|| cur.description.clone()),
    };
    ledger.update_transaction(id, tx)?;
    println!("Updated transaction {}", id);
    Ok(())
}

fn list(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(ledger, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.date.clone(),
                    r.kind.clone(),
                    r.category.clone(),
                    r.amount.clone(),
                    r.description.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["ID", "Date", "Kind", "Category", "Amount", "Description"],
                rows,
            )
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: i64,
    pub date: String,
    pub kind: String,
    pub category: String,
    pub amount: String,
    pub description: String,
}

/// Newest first, filtered by the optional month/category/kind/limit args.
pub fn query_rows(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let month = sub.get_one::<String>("month").map(|s| s.trim().to_string());
    let category = sub.get_one::<String>("category").map(|s| s.trim().to_string());
    let kind = sub
        .get_one::<String>("kind")
        .map(|s| s.parse::<CategoryKind>())
        .transpose()?;
    let limit = sub.get_one::<usize>("limit").copied().unwrap_or(usize::MAX);

    let data = ledger
        .recent(usize::MAX)
        .into_iter()
        .filter(|t| {
            month
                .as_deref()
                .is_none_or(|m| t.date.format("%Y-%m").to_string() == m)
        })
        .filter(|t| {
            category
                .as_deref()
                .is_none_or(|c| t.category.eq_ignore_ascii_case(c))
        })
        .filter(|t| kind.is_none_or(|k| t.kind == k))
        .take(limit)
        .map(|t| TransactionRow {
            id: t.id,
            date: t.date.to_string(),
            kind: t.kind.to_string(),
            category: t.category.clone(),
            amount: format!("{:.2}", t.amount),
            description: t.description.clone(),
        })
        .collect();
    Ok(data)
}
