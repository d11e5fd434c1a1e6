// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;

use anyhow::Result;

use agrifin::{cli, commands, config::Config, logging, session};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();
    logging::init(matches.get_count("verbose"));

    let mut cfg = Config::from_env();
    if let Some(p) = matches.get_one::<String>("session") {
        cfg.session_path = Some(PathBuf::from(p));
    }
    // Calculators only need the display currency and must run even when the
    // session file is unreadable.
    match matches.subcommand() {
        Some(("loan", sub)) => {
            return commands::loan::handle(sub, &session::display_currency(&cfg));
        }
        Some(("livestock", sub)) => {
            return commands::livestock::handle(sub, &session::display_currency(&cfg));
        }
        Some(("funds", sub)) => return commands::funds::handle(sub),
        _ => {}
    }

    let (path, mut ledger) = session::open_or_init(&cfg)?;
    let dirty = match matches.subcommand() {
        Some(("init", _)) => {
            println!("Session initialized at {}", path.display());
            true
        }
        Some(("goal", sub)) => {
            commands::goals::handle(&mut ledger, sub)?;
            matches!(sub.subcommand_name(), Some("add" | "update" | "rm"))
        }
        Some(("category", sub)) => {
            commands::categories::handle(&mut ledger, sub)?;
            sub.subcommand_name() != Some("list")
        }
        Some(("tx", sub)) => {
            commands::transactions::handle(&mut ledger, sub)?;
            sub.subcommand_name() != Some("list")
        }
        Some(("budget", sub)) => {
            commands::budgets::handle(&mut ledger, sub)?;
            sub.subcommand_name() == Some("set")
        }
        Some(("settings", sub)) => {
            commands::settings::handle(&mut ledger, &path, sub)?;
            sub.subcommand_name() == Some("currency")
        }
        Some(("report", sub)) => {
            commands::reports::handle(&ledger, sub)?;
            false
        }
        Some(("export", sub)) => {
            commands::exporter::handle(&ledger, sub)?;
            false
        }
        Some(("advice", sub)) => {
            commands::advice::handle(&ledger, &cfg, sub)?;
            false
        }
        Some(("doctor", _)) => {
            commands::doctor::handle(&ledger)?;
            false
        }
        _ => {
            cli::build_cli().print_help()?;
            println!();
            false
        }
    };
    if dirty {
        session::save(&path, &ledger)?;
    }
    Ok(())
}
