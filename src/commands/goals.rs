// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::Ledger;
use crate::planner::{
    GoalFeasibility, GoalFeasibilityInput, MultiGoalInput, PlannedGoal, PlanningMode,
    assess_goal, plan_goals,
};
use crate::utils::{
    fmt_amount, fmt_money, maybe_print_json, parse_decimal, parse_f64, pretty_table,
};
use anyhow::{Context, Result, anyhow};
use rust_decimal::prelude::ToPrimitive;

pub fn handle(ledger: &mut Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let target = parse_decimal(sub.get_one::<String>("target").unwrap())?;
            let id = ledger.add_goal(name, target)?;
            println!("Added goal {} '{}' ({})", id, name.trim(), target);
        }
        Some(("list", sub)) => list(ledger, sub)?,
        Some(("update", sub)) => {
            let id = parse_id(sub)?;
            let name = sub.get_one::<String>("name").map(String::as_str);
            let target = sub
                .get_one::<String>("target")
                .map(|s| parse_decimal(s))
                .transpose()?;
            ledger.update_goal(id, name, target)?;
            println!("Updated goal {}", id);
        }
        Some(("rm", sub)) => {
            let id = parse_id(sub)?;
            let g = ledger.delete_goal(id)?;
            println!("Removed goal {} '{}'", id, g.name);
        }
        Some(("check", sub)) => check(ledger, sub)?,
        Some(("plan", sub)) => plan(ledger, sub)?,
        _ => {}
    }
    Ok(())
}

fn parse_id(sub: &clap::ArgMatches) -> Result<i64> {
    let raw = sub.get_one::<String>("id").unwrap();
    raw.trim()
        .parse::<i64>()
        .with_context(|| format!("Invalid id '{}'", raw))
}

fn list(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &ledger.goals)? {
        return Ok(());
    }
    let ccy = ledger.settings.currency.as_str();
    let rows = ledger
        .goals
        .iter()
        .map(|g| {
            vec![
                g.id.to_string(),
                g.name.clone(),
                fmt_money(&g.target_amount, ccy),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["ID", "Goal", "Target"], rows));
    Ok(())
}

pub fn feasibility_from_args(
    ledger: &Ledger,
    sub: &clap::ArgMatches,
) -> Result<GoalFeasibilityInput> {
    let num = |name: &str| -> Result<f64> {
        parse_f64(
            sub.get_one::<String>(name)
                .with_context(|| format!("--{} is required", name))?,
        )
    };
    let goal_cost = match sub.get_one::<String>("goal-id") {
        Some(raw) => {
            let id = raw
                .trim()
                .parse::<i64>()
                .with_context(|| format!("Invalid id '{}'", raw))?;
            let goal = ledger
                .goals
                .iter()
                .find(|g| g.id == id)
                .ok_or_else(|| anyhow!("goal {} not found", id))?;
            goal.target_amount
                .to_f64()
                .context("goal target does not fit a float")?
        }
        None => num("cost")?,
    };
    let input = GoalFeasibilityInput {
        goal_cost,
        current_savings: num("saved")?,
        monthly_income: num("income")?,
        monthly_expenses: num("expenses")?,
        tenure_months: num("tenure")?,
    };
    input.validate()?;
    Ok(input)
}

fn check(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let input = feasibility_from_args(ledger, sub)?;
    let verdict = assess_goal(&input);
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &verdict)? {
        return Ok(());
    }
    let ccy = ledger.settings.currency.as_str();
    match verdict {
        GoalFeasibility::AlreadyAchieved => {
            println!("Congratulations! You have already achieved this goal.");
        }
        GoalFeasibility::Feasible {
            required_monthly,
            available_monthly,
        } => {
            println!(
                "Yes, this goal is achievable! You need to save {} per month. Your available monthly savings are {}.",
                fmt_amount(required_monthly, ccy),
                fmt_amount(available_monthly, ccy)
            );
        }
        GoalFeasibility::Infeasible {
            required_monthly,
            available_monthly,
            suggested_tenure_months,
            suggested_monthly_savings,
        } => {
            println!(
                "This goal is not achievable with your current savings plan. You need to save {} per month, but you only have {} available.",
                fmt_amount(required_monthly, ccy),
                fmt_amount(available_monthly, ccy)
            );
            println!("\nSuggestions:");
            match suggested_tenure_months {
                Some(m) => println!("- Increase your tenure to {} months.", m),
                None => println!("- Reduce your monthly expenses; nothing is left over to save."),
            }
            println!(
                "- Increase your monthly savings to {}.",
                fmt_amount(suggested_monthly_savings, ccy)
            );
        }
    }
    Ok(())
}

pub fn plan_input_from_args(sub: &clap::ArgMatches) -> Result<MultiGoalInput> {
    let goals = sub
        .get_many::<String>("goal")
        .context("at least one --goal is required")?
        .map(|raw| raw.parse::<PlannedGoal>().map_err(anyhow::Error::from))
        .collect::<Result<Vec<_>>>()?;
    let input = MultiGoalInput {
        goals,
        mode: sub
            .get_one::<String>("mode")
            .map(|s| s.parse::<PlanningMode>())
            .transpose()?
            .unwrap_or(PlanningMode::Simultaneous),
        monthly_savings: parse_f64(
            sub.get_one::<String>("savings")
                .context("--savings is required")?,
        )?,
    };
    input.validate()?;
    Ok(input)
}

fn plan(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let input = plan_input_from_args(sub)?;
    let plan = plan_goals(&input);
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &plan)? {
        return Ok(());
    }
    let ccy = ledger.settings.currency.as_str();
    let months = |m: Option<f64>| m.map_or_else(|| "never".to_string(), |v| format!("{:.1}", v));
    let rows = plan
        .steps
        .iter()
        .map(|s| {
            vec![
                s.name.clone(),
                fmt_amount(s.cost, ccy),
                s.priority.to_string(),
                fmt_amount(s.allocated_monthly, ccy),
                months(s.months),
                months(s.cumulative_months),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Goal", "Cost", "Priority", "Per month", "Months", "Done after"],
            rows
        )
    );
    match (plan.mode, plan.total_months) {
        (PlanningMode::Sequential, Some(t)) => {
            println!("Total time to achieve all goals sequentially is {:.1} months.", t)
        }
        (PlanningMode::Simultaneous, Some(t)) => {
            println!("All goals will be achieved in approximately {:.1} months.", t)
        }
        (_, None) => println!("Not every goal is achievable with these savings."),
    }
    Ok(())
}
