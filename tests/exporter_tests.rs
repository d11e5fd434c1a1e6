// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use agrifin::ledger::Ledger;
use agrifin::models::{CategoryKind, NewTransaction};
use agrifin::{cli, commands::exporter};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::json;
use tempfile::tempdir;

fn one_tx_ledger() -> Ledger {
    let mut l = Ledger::new();
    l.add_category("Seeds", CategoryKind::Expense).unwrap();
    l.add_transaction(NewTransaction {
        kind: CategoryKind::Expense,
        category: "Seeds".into(),
        amount: Decimal::new(1234, 2),
        date: NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
        description: "Paddy seed".into(),
    })
    .unwrap();
    l
}

#[test]
fn export_transactions_streams_pretty_json() {
    let ledger = one_tx_ledger();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.json");
    let out_str = out_path.to_string_lossy().to_string();

    let cli = cli::build_cli();
    let matches = cli.get_matches_from([
        "agrifin",
        "export",
        "transactions",
        "--format",
        "json",
        "--out",
        &out_str,
    ]);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(&ledger, export_m).unwrap();
    } else {
        panic!("no export subcommand");
    }

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(
        parsed,
        json!([
            {
                "id": 1,
                "date": "2025-01-02",
                "kind": "expense",
                "category": "Seeds",
                "amount": "12.34",
                "description": "Paddy seed"
            }
        ])
    );
}

#[test]
fn export_transactions_writes_csv_header_and_rows() {
    let ledger = Ledger::seeded();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.csv");
    let n = exporter::export_transactions(&ledger, "CSV", &out_path).unwrap();
    assert_eq!(n, 6);

    let mut rdr = csv::Reader::from_path(&out_path).unwrap();
    let headers: Vec<String> = rdr.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(
        headers,
        ["id", "date", "kind", "category", "amount", "description"]
    );
    let first = rdr.records().next().unwrap().unwrap();
    assert_eq!(&first[1], "2023-12-01");
    assert_eq!(rdr.records().count(), 5);
}

#[test]
fn export_transactions_rejects_unknown_format() {
    let ledger = one_tx_ledger();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.unknown");
    let out_str = out_path.to_string_lossy().to_string();

    let cli = cli::build_cli();
    let matches = cli.get_matches_from([
        "agrifin",
        "export",
        "transactions",
        "--format",
        "xml",
        "--out",
        &out_str,
    ]);
    if let Some(("export", export_m)) = matches.subcommand() {
        assert!(exporter::handle(&ledger, export_m).is_err());
    } else {
        panic!("no export subcommand");
    }
    assert!(!out_path.exists());
}
