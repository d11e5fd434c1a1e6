// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::Ledger;
use crate::models::CategoryKind;
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle(ledger: &mut Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let kind = sub.get_one::<String>("kind").unwrap().parse::<CategoryKind>()?;
            ledger.add_category(name, kind)?;
            println!("Added {} category '{}'", kind, name.trim());
        }
        Some(("list", sub)) => {
            let kind = sub
                .get_one::<String>("kind")
                .map(|s| s.parse::<CategoryKind>())
                .transpose()?;
            let mut data: Vec<Vec<String>> = ledger
                .categories
                .iter()
                .filter(|c| kind.is_none_or(|k| c.kind == k))
                .map(|c| vec![c.name.clone(), c.kind.to_string()])
                .collect();
            data.sort();
            println!("{}", pretty_table(&["Category", "Kind"], data));
        }
        Some(("rm", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let removed = ledger.remove_category(name)?;
            println!("Removed category '{}'", removed.name);
        }
        _ => {}
    }
    Ok(())
}
