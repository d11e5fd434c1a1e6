// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::Ledger;
use crate::utils::{fmt_money, maybe_print_json, parse_decimal, pretty_table};
use anyhow::Result;

pub fn handle(ledger: &mut Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => {
            let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
            ledger.set_budget(amount)?;
            println!(
                "Monthly budget set to {}",
                fmt_money(&amount, &ledger.settings.currency)
            );
        }
        Some(("show", sub)) => show(ledger, sub)?,
        _ => {}
    }
    Ok(())
}

/// Budget against recorded expenses. Shared with `report budget`.
pub fn show(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let status = ledger.budget_status();
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &status)? {
        return Ok(());
    }
    let ccy = ledger.settings.currency.as_str();
    let rows = vec![
        vec!["Monthly budget".into(), fmt_money(&status.budget, ccy)],
        vec!["Spent".into(), fmt_money(&status.spent, ccy)],
        vec!["Remaining".into(), fmt_money(&status.remaining, ccy)],
        vec!["Used".into(), format!("{:.1}%", status.percent_spent)],
    ];
    println!("{}", pretty_table(&["Budget", "Amount"], rows));
    if status.is_over() {
        println!("You are over budget.");
    }
    Ok(())
}
