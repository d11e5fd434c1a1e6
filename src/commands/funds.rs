// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::planner::{Horizon, Location, Product, Risk, recommend};
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(sub: &clap::ArgMatches) -> Result<()> {
    let location = sub.get_one::<String>("location").unwrap().parse::<Location>()?;
    let horizon = sub.get_one::<String>("horizon").unwrap().parse::<Horizon>()?;
    let risk = sub.get_one::<String>("risk").unwrap().parse::<Risk>()?;
    let advice = recommend(location, horizon, risk);
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &advice)? {
        return Ok(());
    }

    println!("{}", advice.heading);
    println!("{}", pretty_table(&["Savings option", "Why"], rows(&advice.savings)));
    println!("Loan options");
    println!("{}", pretty_table(&["Loan", "Details"], rows(&advice.loans)));
    println!("{}", advice.disclaimer);
    Ok(())
}

fn rows(items: &[Product]) -> Vec<Vec<String>> {
    items
        .iter()
        .map(|p| vec![p.name.to_string(), p.detail.to_string()])
        .collect()
}
