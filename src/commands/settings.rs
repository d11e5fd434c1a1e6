// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::Path;

use crate::ledger::Ledger;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(ledger: &mut Ledger, path: &Path, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", sub)) => {
            if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &ledger.settings)? {
                return Ok(());
            }
            let s = &ledger.settings;
            let rows = vec![
                vec!["currency".into(), s.currency.clone()],
                vec!["monthly_budget".into(), fmt_money(&s.monthly_budget, &s.currency)],
                vec!["session".into(), path.display().to_string()],
            ];
            println!("{}", pretty_table(&["Key", "Value"], rows));
        }
        Some(("currency", sub)) => {
            ledger.set_currency(sub.get_one::<String>("code").unwrap())?;
            println!("Currency set to {}", ledger.settings.currency);
        }
        _ => {}
    }
    Ok(())
}
