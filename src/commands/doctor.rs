// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashSet;

use crate::ledger::Ledger;
use crate::utils::{fmt_money, pretty_table};
use anyhow::Result;

pub fn handle(ledger: &Ledger) -> Result<()> {
    let rows = diagnose(ledger);
    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}

/// One `[issue, detail]` row per problem found.
pub fn diagnose(ledger: &Ledger) -> Vec<Vec<String>> {
    let mut rows = Vec::new();

    // 1) Transactions pointing at missing categories or the wrong kind
    for t in &ledger.transactions {
        match ledger.category(&t.category) {
            None => rows.push(vec![
                "unknown_category".into(),
                format!("tx {} -> {}", t.id, t.category),
            ]),
            Some(c) if c.kind != t.kind => rows.push(vec![
                "kind_mismatch".into(),
                format!("tx {} is {} but {} is {}", t.id, t.kind, c.name, c.kind),
            ]),
            Some(_) => {}
        }
    }

    // 2) Duplicate ids
    let mut seen = HashSet::new();
    for id in ledger
        .transactions
        .iter()
        .map(|t| t.id)
        .chain(ledger.goals.iter().map(|g| g.id))
    {
        if !seen.insert(id) {
            rows.push(vec!["duplicate_id".into(), id.to_string()]);
        }
    }

    // 3) Budget overrun
    let status = ledger.budget_status();
    if status.is_over() {
        let ccy = ledger.settings.currency.as_str();
        rows.push(vec![
            "over_budget".into(),
            format!(
                "spent {} of {}",
                fmt_money(&status.spent, ccy),
                fmt_money(&status.budget, ccy)
            ),
        ]);
    }
    rows
}
