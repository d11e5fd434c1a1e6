// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON object per line"),
    )
}

fn opt(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).long(name).help(help)
}

fn req(name: &'static str, help: &'static str) -> Arg {
    opt(name, help).required(true)
}

fn loan_args(cmd: Command) -> Command {
    cmd.arg(opt("principal", "Loan amount").default_value("100000"))
        .arg(opt("rate", "Annual interest rate in percent").default_value("10"))
        .arg(opt("tenure", "Loan tenure").default_value("2"))
        .arg(
            opt("unit", "Tenure unit")
                .value_parser(["months", "years"])
                .default_value("years"),
        )
}

fn loan_cmd() -> Command {
    Command::new("loan")
        .about("Loan and EMI calculators")
        .subcommand_required(true)
        .subcommand(json_flags(
            loan_args(Command::new("emi").about("Equated installment for a loan")).arg(
                opt("frequency", "Repayment frequency")
                    .value_parser(["monthly", "weekly"])
                    .default_value("monthly"),
            ),
        ))
        .subcommand(json_flags(
            Command::new("crop")
                .about("Seasonal crop loan with a grace period")
                .arg(opt("principal", "Loan amount").default_value("50000"))
                .arg(opt("rate", "Annual interest rate in percent").default_value("7"))
                .arg(opt("tenure", "Loan tenure").default_value("12"))
                .arg(
                    opt("unit", "Tenure unit")
                        .value_parser(["months", "years"])
                        .default_value("months"),
                )
                .arg(opt("grace", "Grace period in months").default_value("6"))
                .arg(opt("start", "Date the grace period starts (YYYY-MM-DD), today if omitted")),
        ))
        .subcommand(json_flags(
            Command::new("compare")
                .about("Compare loan offers by monthly installment")
                .arg(
                    req("offer", "Offer as label:principal:rate:tenure[y|m]")
                        .action(ArgAction::Append),
                ),
        ))
}

fn livestock_cmd() -> Command {
    json_flags(
        Command::new("livestock")
            .about("Livestock investment profit and break-even")
            .arg(opt("purchase-cost", "Purchase cost per animal").default_value("500"))
            .arg(
                opt("count", "Number of animals")
                    .value_parser(value_parser!(u32))
                    .default_value("10"),
            )
            .arg(opt("feed-cost", "Monthly feed cost per animal").default_value("50"))
            .arg(
                opt("months", "Holding period in months")
                    .value_parser(value_parser!(u32))
                    .default_value("12"),
            )
            .arg(opt("sale-value", "Expected sale value per animal").default_value("1200")),
    )
}

fn goal_cmd() -> Command {
    Command::new("goal")
        .about("Savings goals and goal planning")
        .subcommand_required(true)
        .subcommand(
            Command::new("add")
                .arg(req("name", "Goal name"))
                .arg(req("target", "Target amount")),
        )
        .subcommand(json_flags(Command::new("list")))
        .subcommand(
            Command::new("update")
                .arg(req("id", "Goal id"))
                .arg(opt("name", "New name"))
                .arg(opt("target", "New target amount")),
        )
        .subcommand(Command::new("rm").arg(req("id", "Goal id")))
        .subcommand(json_flags(
            Command::new("check")
                .about("Can a single goal be reached in time?")
                .arg(opt("goal-id", "Take the cost from a stored goal"))
                .arg(opt("cost", "Goal cost").default_value("10000"))
                .arg(opt("saved", "Savings already set aside").default_value("1000"))
                .arg(opt("income", "Monthly income").default_value("5000"))
                .arg(opt("expenses", "Monthly expenses").default_value("3000"))
                .arg(opt("tenure", "Months available").default_value("12")),
        ))
        .subcommand(json_flags(
            Command::new("plan")
                .about("Plan several goals from one monthly savings amount")
                .arg(req("goal", "Goal as name:cost:priority").action(ArgAction::Append))
                .arg(
                    opt("mode", "Planning mode")
                        .value_parser(["sequential", "simultaneous"])
                        .default_value("simultaneous"),
                )
                .arg(opt("savings", "Monthly savings").default_value("1000")),
        ))
}

fn funds_cmd() -> Command {
    json_flags(
        Command::new("funds")
            .about("Static savings and loan product suggestions")
            .arg(
                opt("location", "Where you live")
                    .value_parser(["rural", "urban"])
                    .default_value("rural"),
            )
            .arg(
                opt("horizon", "Time horizon")
                    .value_parser(["short-term", "medium-term", "long-term"])
                    .default_value("medium-term"),
            )
            .arg(
                opt("risk", "Risk appetite")
                    .value_parser(["low", "medium", "high"])
                    .default_value("medium"),
            ),
    )
}

fn category_cmd() -> Command {
    Command::new("category")
        .about("Manage transaction categories")
        .subcommand_required(true)
        .subcommand(
            Command::new("add")
                .arg(req("name", "Category name"))
                .arg(
                    req("kind", "income or expense").value_parser(["income", "expense"]),
                ),
        )
        .subcommand(
            Command::new("list").arg(
                opt("kind", "Only this kind").value_parser(["income", "expense"]),
            ),
        )
        .subcommand(Command::new("rm").arg(req("name", "Category name")))
}

fn tx_cmd() -> Command {
    Command::new("tx")
        .about("Record and list transactions")
        .subcommand_required(true)
        .subcommand(
            Command::new("add")
                .arg(req("kind", "income or expense").value_parser(["income", "expense"]))
                .arg(req("category", "Category name"))
                .arg(req("amount", "Amount (positive)"))
                .arg(req("date", "YYYY-MM-DD"))
                .arg(req("description", "What it was for")),
        )
        .subcommand(json_flags(
            Command::new("list")
                .arg(opt("month", "YYYY-MM"))
                .arg(opt("category", "Category name"))
                .arg(opt("kind", "income or expense").value_parser(["income", "expense"]))
                .arg(
                    opt("limit", "Maximum rows")
                        .value_parser(value_parser!(usize)),
                ),
        ))
        .subcommand(
            Command::new("update")
                .arg(req("id", "Transaction id"))
                .arg(opt("kind", "income or expense").value_parser(["income", "expense"]))
                .arg(opt("category", "Category name"))
                .arg(opt("amount", "Amount (positive)"))
                .arg(opt("date", "YYYY-MM-DD"))
                .arg(opt("description", "What it was for")),
        )
        .subcommand(Command::new("rm").arg(req("id", "Transaction id")))
}

fn budget_cmd() -> Command {
    Command::new("budget")
        .about("Monthly budget")
        .subcommand_required(true)
        .subcommand(Command::new("set").arg(req("amount", "Monthly budget")))
        .subcommand(json_flags(Command::new("show")))
}

fn report_cmd() -> Command {
    Command::new("report")
        .about("Summaries of recorded transactions")
        .subcommand_required(true)
        .subcommand(json_flags(Command::new("summary")))
        .subcommand(json_flags(Command::new("budget")))
        .subcommand(json_flags(Command::new("spend-by-category")))
        .subcommand(json_flags(
            Command::new("cashflow").arg(
                opt("months", "Number of months")
                    .value_parser(value_parser!(usize))
                    .default_value("12"),
            ),
        ))
        .subcommand(json_flags(
            Command::new("recent").arg(
                opt("limit", "Number of transactions")
                    .value_parser(value_parser!(usize))
                    .default_value("5"),
            ),
        ))
}

fn export_cmd() -> Command {
    Command::new("export")
        .about("Export data")
        .subcommand_required(true)
        .subcommand(
            Command::new("transactions")
                .arg(req("format", "csv or json"))
                .arg(req("out", "Output path")),
        )
}

fn settings_cmd() -> Command {
    Command::new("settings")
        .about("Session settings")
        .subcommand_required(true)
        .subcommand(json_flags(Command::new("show")))
        .subcommand(Command::new("currency").arg(req("code", "Three-letter currency code")))
}

pub fn build_cli() -> Command {
    Command::new("agrifin")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Loan calculators, goal planning and budget tracking for farms and households")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .global(true)
                .help("More log output (repeat for more)"),
        )
        .arg(
            Arg::new("session")
                .long("session")
                .global(true)
                .help("Session file to use instead of the default"),
        )
        .subcommand(Command::new("init").about("Create the session file with demo data"))
        .subcommand(loan_cmd())
        .subcommand(livestock_cmd())
        .subcommand(goal_cmd())
        .subcommand(funds_cmd())
        .subcommand(category_cmd())
        .subcommand(tx_cmd())
        .subcommand(budget_cmd())
        .subcommand(report_cmd())
        .subcommand(export_cmd())
        .subcommand(
            Command::new("advice")
                .about("Ask the configured advice service for recommendations")
                .arg(
                    Arg::new("dry-run")
                        .long("dry-run")
                        .action(ArgAction::SetTrue)
                        .help("Print the prompt instead of sending it"),
                ),
        )
        .subcommand(settings_cmd())
        .subcommand(Command::new("doctor").about("Check the session for inconsistencies"))
}

#[cfg(test)]
mod tests {
    use super::build_cli;

    #[test]
    fn cli_definition_is_consistent() {
        build_cli().debug_assert();
    }
}
