// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flag(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print output as pretty JSON"),
    )
}

fn jsonl_flag(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print output as JSON lines"),
    )
}

fn range_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("from")
            .long("from")
            .value_name("YYYY-MM-DD")
            .help("Range start date (inclusive)"),
    )
    .arg(
        Arg::new("to")
            .long("to")
            .value_name("YYYY-MM-DD")
            .help("Range end date (inclusive)"),
    )
}

pub fn build_cli() -> Command {
    Command::new("fintrack")
        .about("Expense tracking with AI-powered spending analysis")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand(
            Command::new("login")
                .about("Authenticate and store the session")
                .arg(Arg::new("username").required(true).help("Account username"))
                .arg(
                    Arg::new("password")
                        .long("password")
                        .help("Password (prompted when omitted)"),
                ),
        )
        .subcommand(
            Command::new("register")
                .about("Create an account and store the session")
                .arg(
                    Arg::new("username")
                        .long("username")
                        .required(true)
                        .help("Account username"),
                )
                .arg(
                    Arg::new("email")
                        .long("email")
                        .required(true)
                        .help("Email address"),
                )
                .arg(
                    Arg::new("full-name")
                        .long("full-name")
                        .required(true)
                        .help("Full name"),
                )
                .arg(
                    Arg::new("password")
                        .long("password")
                        .help("Password, minimum 6 characters (prompted when omitted)"),
                ),
        )
        .subcommand(Command::new("logout").about("Clear the stored session"))
        .subcommand(json_flag(
            Command::new("whoami").about("Show the current session identity"),
        ))
        .subcommand(
            Command::new("expense")
                .about("Manage expense records")
                .subcommand(
                    Command::new("add")
                        .about("Record a new expense")
                        .arg(Arg::new("title").long("title").required(true))
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .required(true)
                                .help("Amount, greater than 0"),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .required(true)
                                .help("Expense category, e.g. FOOD"),
                        )
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .value_name("YYYY-MM-DD")
                                .help("Expense date (defaults to today)"),
                        )
                        .arg(
                            Arg::new("payment")
                                .long("payment")
                                .help("Payment method, e.g. CASH (default)"),
                        )
                        .arg(Arg::new("description").long("description"))
                        .arg(Arg::new("vendor").long("vendor")),
                )
                .subcommand(jsonl_flag(json_flag(range_args(
                    Command::new("list")
                        .about("List expenses, optionally filtered")
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .conflicts_with_all(["from", "to"])
                                .help("Only expenses in this category"),
                        ),
                ))))
                .subcommand(json_flag(
                    Command::new("show")
                        .about("Show one expense")
                        .arg(
                            Arg::new("id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        ),
                ))
                .subcommand(
                    Command::new("edit")
                        .about("Update fields of an expense")
                        .arg(
                            Arg::new("id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(Arg::new("title").long("title"))
                        .arg(Arg::new("amount").long("amount"))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("date").long("date").value_name("YYYY-MM-DD"))
                        .arg(Arg::new("payment").long("payment"))
                        .arg(Arg::new("description").long("description"))
                        .arg(Arg::new("vendor").long("vendor")),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete an expense")
                        .arg(
                            Arg::new("id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(
                            Arg::new("yes")
                                .long("yes")
                                .short('y')
                                .action(ArgAction::SetTrue)
                                .help("Skip the confirmation prompt"),
                        ),
                )
                .subcommand(json_flag(range_args(
                    Command::new("total").about("Total spend, overall or for a date range"),
                ))),
        )
        .subcommand(json_flag(
            Command::new("dashboard").about("Current-month spending overview"),
        ))
        .subcommand(json_flag(
            range_args(Command::new("analysis").about("AI-powered spending analysis")).arg(
                Arg::new("last")
                    .long("last")
                    .value_name("MONTHS")
                    .value_parser(value_parser!(u32))
                    .conflicts_with_all(["from", "to"])
                    .help("Analyze the last N months instead of --from/--to"),
            ),
        ))
        .subcommand(
            Command::new("config")
                .about("Show or change client settings")
                .subcommand(Command::new("show").about("Print current settings"))
                .subcommand(
                    Command::new("set-url")
                        .about("Set the API base URL")
                        .arg(Arg::new("url").required(true)),
                )
                .subcommand(
                    Command::new("set-currency")
                        .about("Set the display currency symbol")
                        .arg(Arg::new("symbol").required(true)),
                ),
        )
}
