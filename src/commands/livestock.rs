// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::calc::{LivestockInvestment, evaluate_livestock};
use crate::utils::{fmt_amount, maybe_print_json, parse_f64, pretty_table};
use anyhow::{Context, Result};

pub fn investment_from_args(sub: &clap::ArgMatches) -> Result<LivestockInvestment> {
    let num = |name: &str| -> Result<f64> {
        let raw = sub
            .get_one::<String>(name)
            .with_context(|| format!("--{} is required", name))?;
        parse_f64(raw)
    };
    let count = |name: &str| -> Result<u32> {
        sub.get_one::<u32>(name)
            .copied()
            .with_context(|| format!("--{} is required", name))
    };
    let input = LivestockInvestment {
        purchase_cost_per_unit: num("purchase-cost")?,
        unit_count: count("count")?,
        monthly_feed_cost_per_unit: num("feed-cost")?,
        duration_months: count("months")?,
        sale_value_per_unit: num("sale-value")?,
    };
    input.validate()?;
    Ok(input)
}

pub fn handle(sub: &clap::ArgMatches, ccy: &str) -> Result<()> {
    let input = investment_from_args(sub)?;
    let res = evaluate_livestock(&input);
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &res)? {
        return Ok(());
    }
    let outcome = if res.is_profitable() {
        "Estimated profit"
    } else {
        "Estimated loss"
    };
    let rows = vec![
        vec!["Total purchase cost".into(), fmt_amount(res.total_purchase_cost, ccy)],
        vec!["Total feed cost".into(), fmt_amount(res.total_feed_cost, ccy)],
        vec!["Total investment".into(), fmt_amount(res.total_investment, ccy)],
        vec!["Total sale value".into(), fmt_amount(res.total_sale_value, ccy)],
        vec![outcome.to_string(), fmt_amount(res.profit_or_loss.abs(), ccy)],
    ];
    println!("{}", pretty_table(&["Item", "Amount"], rows));
    println!(
        "Sell at least {} animal(s) to break even.",
        res.break_even_units_whole()
    );
    Ok(())
}
