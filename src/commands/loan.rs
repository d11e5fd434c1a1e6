// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::calc::{
    LoanOffer, LoanTerms, RepaymentFrequency, TenureUnit, compare_loans, compute_emi,
    plan_crop_loan,
};
use crate::utils::{fmt_amount, maybe_print_json, parse_date, parse_f64, pretty_table};
use anyhow::{Context, Result};
use chrono::Utc;

pub fn handle(m: &clap::ArgMatches, ccy: &str) -> Result<()> {
    match m.subcommand() {
        Some(("emi", sub)) => emi(sub, ccy)?,
        Some(("crop", sub)) => crop(sub, ccy)?,
        Some(("compare", sub)) => compare(sub, ccy)?,
        _ => {}
    }
    Ok(())
}

fn arg<'a>(sub: &'a clap::ArgMatches, name: &str) -> Result<&'a str> {
    sub.get_one::<String>(name)
        .map(String::as_str)
        .with_context(|| format!("--{} is required", name))
}

pub fn terms_from_args(sub: &clap::ArgMatches) -> Result<LoanTerms> {
    let mut terms = LoanTerms::new(
        parse_f64(arg(sub, "principal")?)?,
        parse_f64(arg(sub, "rate")?)?,
        parse_f64(arg(sub, "tenure")?)?,
        arg(sub, "unit")?.parse::<TenureUnit>()?,
    );
    if let Ok(Some(f)) = sub.try_get_one::<String>("frequency") {
        terms = terms.with_frequency(f.parse::<RepaymentFrequency>()?);
    }
    if let Ok(Some(g)) = sub.try_get_one::<String>("grace") {
        terms = terms.with_grace(parse_f64(g)?);
    }
    terms.validate()?;
    Ok(terms)
}

fn emi(sub: &clap::ArgMatches, ccy: &str) -> Result<()> {
    let terms = terms_from_args(sub)?;
    let res = compute_emi(&terms);
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &res)? {
        return Ok(());
    }
    let label = match terms.frequency {
        RepaymentFrequency::Monthly => "Monthly installment",
        RepaymentFrequency::Weekly => "Weekly installment",
    };
    let rows = vec![
        vec![label.to_string(), fmt_amount(res.periodic_payment, ccy)],
        vec!["Installments".into(), format!("{:.2}", res.periods)],
        vec!["Principal".into(), fmt_amount(res.principal, ccy)],
        vec!["Total interest".into(), fmt_amount(res.total_interest, ccy)],
        vec!["Total payment".into(), fmt_amount(res.total_payment, ccy)],
    ];
    println!("{}", pretty_table(&["Item", "Amount"], rows));
    Ok(())
}

fn crop(sub: &clap::ArgMatches, ccy: &str) -> Result<()> {
    let terms = terms_from_args(sub)?;
    let today = match sub.get_one::<String>("start") {
        Some(s) => parse_date(s)?,
        None => Utc::now().date_naive(),
    };
    let plan = plan_crop_loan(&terms, today);
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &plan)? {
        return Ok(());
    }

    println!(
        "Grace interest: {} over {} month(s); principal after grace: {}",
        fmt_amount(plan.grace_interest, ccy),
        plan.grace_months,
        fmt_amount(plan.capitalized_principal, ccy)
    );
    let Some(start) = plan.repayment_start else {
        println!("The grace period covers the whole tenure; no repayments are scheduled.");
        return Ok(());
    };
    println!(
        "Repayment starts {} with {} installments of {}",
        start,
        plan.repayment_months,
        fmt_amount(plan.periodic_payment, ccy)
    );
    let rows = plan
        .schedule
        .iter()
        .enumerate()
        .map(|(i, e)| {
            vec![
                (i + 1).to_string(),
                e.due_date.to_string(),
                fmt_amount(e.amount_due, ccy),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["#", "Due", "Amount"], rows));
    Ok(())
}

fn compare(sub: &clap::ArgMatches, ccy: &str) -> Result<()> {
    let offers = sub
        .get_many::<String>("offer")
        .context("at least one --offer is required")?
        .map(|raw| -> Result<LoanOffer> {
            let offer = raw.parse::<LoanOffer>()?;
            offer.validate()?;
            Ok(offer)
        })
        .collect::<Result<Vec<_>>>()?;
    let cmp = compare_loans(&offers);
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &cmp.rows)? {
        return Ok(());
    }
    let rows = cmp
        .rows
        .iter()
        .map(|r| {
            vec![
                r.label.clone(),
                fmt_amount(r.result.periodic_payment, ccy),
                fmt_amount(r.result.total_interest, ccy),
                fmt_amount(r.result.total_payment, ccy),
                if r.cheapest { "lowest".into() } else { String::new() },
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Offer", "Monthly", "Total interest", "Total payment", ""],
            rows
        )
    );
    Ok(())
}
