// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use agrifin::ledger::Ledger;
use agrifin::{cli, commands::transactions};

fn list_rows(ledger: &Ledger, args: &[&str]) -> Vec<transactions::TransactionRow> {
    let mut argv = vec!["agrifin", "tx", "list"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = tx_m.subcommand() {
            transactions::query_rows(ledger, list_m).unwrap()
        } else {
            panic!("no list subcommand");
        }
    } else {
        panic!("no tx subcommand");
    }
}

#[test]
fn list_limit_respected() {
    let ledger = Ledger::seeded();
    let rows = list_rows(&ledger, &["--limit", "2"]);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].date, "2023-12-15");
    assert_eq!(rows[0].category, "Entertainment");
}

#[test]
fn list_filters_by_kind_and_category() {
    let ledger = Ledger::seeded();
    let income = list_rows(&ledger, &["--kind", "income"]);
    assert_eq!(income.len(), 1);
    assert_eq!(income[0].amount, "4500.00");

    let rent = list_rows(&ledger, &["--category", "rent"]);
    assert_eq!(rent.len(), 1);
    assert_eq!(rent[0].description, "Monthly rent");

    assert!(list_rows(&ledger, &["--month", "2024-01"]).is_empty());
    assert_eq!(list_rows(&ledger, &["--month", "2023-12"]).len(), 6);
}

#[test]
fn add_then_update_through_cli() {
    let mut ledger = Ledger::seeded();
    let matches = cli::build_cli().get_matches_from([
        "agrifin",
        "tx",
        "add",
        "--kind",
        "expense",
        "--category",
        "Transport",
        "--amount",
        "42.50",
        "--date",
        "2024-02-03",
        "--description",
        "Diesel for the pump",
    ]);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    transactions::handle(&mut ledger, tx_m).unwrap();
    let id = ledger.recent(1)[0].id;

    let id_s = id.to_string();
    let matches = cli::build_cli().get_matches_from([
        "agrifin", "tx", "update", "--id", &id_s, "--amount", "45",
    ]);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    transactions::handle(&mut ledger, tx_m).unwrap();
    let t = ledger.transaction(id).unwrap();
    assert_eq!(t.amount.to_string(), "45");
    assert_eq!(t.description, "Diesel for the pump");
}

#[test]
fn add_with_mismatched_kind_fails() {
    let mut ledger = Ledger::seeded();
    let matches = cli::build_cli().get_matches_from([
        "agrifin",
        "tx",
        "add",
        "--kind",
        "income",
        "--category",
        "Rent",
        "--amount",
        "10",
        "--date",
        "2024-02-03",
        "--description",
        "oops",
    ]);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    assert!(transactions::handle(&mut ledger, tx_m).is_err());
    assert_eq!(ledger.transactions.len(), 6);
}
