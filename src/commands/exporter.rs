// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::Path;

use crate::ledger::Ledger;
use anyhow::{Context, Result, bail};
use serde_json::json;

pub fn handle(ledger: &Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => {
            let fmt = sub.get_one::<String>("format").unwrap();
            let out = sub.get_one::<String>("out").unwrap();
            let n = export_transactions(ledger, fmt, Path::new(out))?;
            println!("Exported {} transactions to {}", n, out);
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Writes every transaction, oldest first. Rejects the format before
/// touching `out`.
pub fn export_transactions(ledger: &Ledger, fmt: &str, out: &Path) -> Result<usize> {
    let fmt = fmt.trim().to_lowercase();
    if fmt != "csv" && fmt != "json" {
        bail!("Unknown format: {} (use csv|json)", fmt);
    }

    let mut rows: Vec<_> = ledger.transactions.iter().collect();
    rows.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));

    if fmt == "csv" {
        let mut wtr = csv::Writer::from_path(out)
            .with_context(|| format!("Failed to create {}", out.display()))?;
        wtr.write_record(["id", "date", "kind", "category", "amount", "description"])?;
        for t in &rows {
            wtr.write_record([
                t.id.to_string(),
                t.date.to_string(),
                t.kind.to_string(),
                t.category.clone(),
                t.amount.to_string(),
                t.description.clone(),
            ])?;
        }
        wtr.flush()?;
    } else {
        let items: Vec<_> = rows
            .iter()
            .map(|t| {
                json!({
                    "id": t.id, "date": t.date, "kind": t.kind, "category": t.category,
                    "amount": t.amount.to_string(), "description": t.description
                })
            })
            .collect();
        std::fs::write(out, serde_json::to_string_pretty(&items)?)
            .with_context(|| format!("Failed to write {}", out.display()))?;
    }
    Ok(rows.len())
}
