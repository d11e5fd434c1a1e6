// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use agrifin::calc::{LivestockInvestment, evaluate_livestock};
use agrifin::ledger::Ledger;
use agrifin::planner::{
    GoalFeasibility, GoalFeasibilityInput, Horizon, Location, MultiGoalInput, PlannedGoal,
    PlanningMode, Risk, assess_goal, plan_goals, recommend,
};
use agrifin::{cli, commands::goals, commands::livestock};
use proptest::prelude::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

fn goal(name: &str, cost: f64, priority: u8) -> PlannedGoal {
    PlannedGoal {
        name: name.to_string(),
        cost,
        priority,
    }
}

#[test]
fn livestock_batch_breaks_even_at_ten_animals() {
    let res = evaluate_livestock(&LivestockInvestment::default());
    assert!(close(res.total_investment, 11_000.0));
    assert!(close(res.total_sale_value, 12_000.0));
    assert!(close(res.profit_or_loss, 1000.0));
    assert!((res.break_even_units - 9.17).abs() < 0.01);
    assert_eq!(res.break_even_units_whole(), 10);
    assert!(res.is_profitable());
}

#[test]
fn livestock_with_zero_sale_value_has_no_break_even() {
    let res = evaluate_livestock(&LivestockInvestment {
        sale_value_per_unit: 0.0,
        ..LivestockInvestment::default()
    });
    assert_eq!(res.break_even_units, 0.0);
    assert!(!res.is_profitable());
}

#[test]
fn livestock_args_round_trip_defaults() {
    let matches =
        cli::build_cli().get_matches_from(["agrifin", "livestock", "--count", "4", "--json"]);
    let Some(("livestock", sub)) = matches.subcommand() else {
        panic!("no livestock subcommand");
    };
    let input = livestock::investment_from_args(sub).unwrap();
    assert_eq!(input.unit_count, 4);
    assert_eq!(input.purchase_cost_per_unit, 500.0);
}

#[test]
fn goal_already_covered_by_savings() {
    let verdict = assess_goal(&GoalFeasibilityInput {
        current_savings: 10_000.0,
        ..GoalFeasibilityInput::default()
    });
    assert_eq!(verdict, GoalFeasibility::AlreadyAchieved);
    assert!(verdict.is_achievable());
}

#[test]
fn default_goal_is_feasible() {
    match assess_goal(&GoalFeasibilityInput::default()) {
        GoalFeasibility::Feasible {
            required_monthly,
            available_monthly,
        } => {
            assert!(close(required_monthly, 750.0));
            assert!(close(available_monthly, 2000.0));
        }
        other => panic!("unexpected verdict {other:?}"),
    }
}

#[test]
fn infeasible_goal_suggests_longer_tenure() {
    let verdict = assess_goal(&GoalFeasibilityInput {
        goal_cost: 10_000.0,
        current_savings: 0.0,
        monthly_income: 3000.0,
        monthly_expenses: 1000.0,
        tenure_months: 2.0,
    });
    assert_eq!(
        verdict,
        GoalFeasibility::Infeasible {
            required_monthly: 5000.0,
            available_monthly: 2000.0,
            suggested_tenure_months: Some(5),
            suggested_monthly_savings: 5000.0,
        }
    );
}

#[test]
fn no_surplus_means_no_tenure_suggestion() {
    let verdict = assess_goal(&GoalFeasibilityInput {
        monthly_income: 2000.0,
        monthly_expenses: 2500.0,
        ..GoalFeasibilityInput::default()
    });
    let GoalFeasibility::Infeasible {
        suggested_tenure_months,
        ..
    } = verdict
    else {
        panic!("expected infeasible, got {verdict:?}");
    };
    assert_eq!(suggested_tenure_months, None);
}

#[test]
fn goal_check_can_use_stored_goal() {
    let ledger = Ledger::seeded();
    let laptop = ledger.goals.iter().find(|g| g.name == "New Laptop").unwrap();
    let id = laptop.id.to_string();
    let matches =
        cli::build_cli().get_matches_from(["agrifin", "goal", "check", "--goal-id", &id]);
    let Some(("goal", goal_m)) = matches.subcommand() else {
        panic!("no goal subcommand");
    };
    let Some(("check", check_m)) = goal_m.subcommand() else {
        panic!("no check subcommand");
    };
    let input = goals::feasibility_from_args(&ledger, check_m).unwrap();
    assert_eq!(input.goal_cost, 1800.0);
}

#[test]
fn sequential_plan_orders_by_priority() {
    let plan = plan_goals(&MultiGoalInput {
        goals: vec![goal("Tractor", 1000.0, 2), goal("Seeds", 500.0, 1)],
        mode: PlanningMode::Sequential,
        monthly_savings: 100.0,
    });
    let names: Vec<_> = plan.steps.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Seeds", "Tractor"]);
    assert_eq!(plan.steps[0].cumulative_months, Some(5.0));
    assert_eq!(plan.steps[1].cumulative_months, Some(15.0));
    assert_eq!(plan.total_months, Some(15.0));
}

#[test]
fn simultaneous_plan_weights_by_priority() {
    let plan = plan_goals(&MultiGoalInput {
        goals: vec![goal("Tractor", 1000.0, 2), goal("Seeds", 500.0, 1)],
        mode: PlanningMode::Simultaneous,
        monthly_savings: 300.0,
    });
    assert!(close(plan.steps[0].allocated_monthly, 200.0));
    assert!(close(plan.steps[1].allocated_monthly, 100.0));
    assert!(close(plan.total_months.unwrap(), 5.0));
}

#[test]
fn zero_savings_is_never_achievable() {
    for mode in [PlanningMode::Sequential, PlanningMode::Simultaneous] {
        let plan = plan_goals(&MultiGoalInput {
            goals: vec![goal("Well", 800.0, 3)],
            mode,
            monthly_savings: 0.0,
        });
        assert_eq!(plan.total_months, None);
        assert!(!plan.is_achievable());
        assert!(plan.total_months.is_none_or(f64::is_finite));
    }
}

#[test]
fn planned_goal_parses_and_validates() {
    let g: PlannedGoal = "Borewell:45000:2".parse().unwrap();
    assert_eq!(g, goal("Borewell", 45_000.0, 2));
    assert!(goal("X", 10.0, 6).validate().is_err());
    assert!(goal("X", 10.0, 0).validate().is_err());
    assert!("Borewell:45000".parse::<PlannedGoal>().is_err());
}

#[test]
fn plan_args_need_positive_savings() {
    let matches = cli::build_cli().get_matches_from([
        "agrifin", "goal", "plan", "--goal", "Seeds:500:1", "--savings", "0",
    ]);
    let Some(("goal", goal_m)) = matches.subcommand() else {
        panic!("no goal subcommand");
    };
    let Some(("plan", plan_m)) = goal_m.subcommand() else {
        panic!("no plan subcommand");
    };
    assert!(goals::plan_input_from_args(plan_m).is_err());
}

#[test]
fn rural_loans_include_kisan_credit_card() {
    let advice = recommend(Location::Rural, Horizon::LongTerm, Risk::Low);
    assert!(advice.loans.iter().any(|p| p.name.contains("Kisan Credit Card")));
    assert!(!advice.savings.is_empty());
}

proptest! {
    #[test]
    fn break_even_recovers_investment(
        cost in 1.0f64..10_000.0,
        count in 1u32..500,
        feed in 0.0f64..500.0,
        months in 0u32..60,
        sale in 1.0f64..20_000.0,
    ) {
        let res = evaluate_livestock(&LivestockInvestment {
            purchase_cost_per_unit: cost,
            unit_count: count,
            monthly_feed_cost_per_unit: feed,
            duration_months: months,
            sale_value_per_unit: sale,
        });
        let recovered = res.break_even_units * sale;
        prop_assert!((recovered - res.total_investment).abs() <= 1e-6 * res.total_investment.max(1.0));
    }

    #[test]
    fn simultaneous_total_is_slowest_goal(
        costs in prop::collection::vec(1.0f64..100_000.0, 1..6),
        savings in 1.0f64..10_000.0,
    ) {
        let goals = costs
            .iter()
            .enumerate()
            .map(|(i, c)| goal(&format!("g{i}"), *c, (i % 5) as u8 + 1))
            .collect();
        let plan = plan_goals(&MultiGoalInput { goals, mode: PlanningMode::Simultaneous, monthly_savings: savings });
        let slowest = plan.steps.iter().filter_map(|s| s.months).fold(0.0, f64::max);
        prop_assert_eq!(plan.total_months, Some(slowest));
    }
}
