// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, value_parser, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("fintrack")
        .version(crate_version!())
        .about("Phone-keyed personal finance vaults, budget alerts, and spending stats")
        .subcommand(Command::new("init").about("Initialize the local database"))
        .subcommand(
            Command::new("login")
                .about("Verify the mock OTP and open a session for a phone number")
                .arg(Arg::new("phone").required(true).help("Mobile number (at least 10 digits)"))
                .arg(
                    Arg::new("code")
                        .long("code")
                        .required(true)
                        .help("6-digit one-time code (mock verifier)"),
                ),
        )
        .subcommand(Command::new("logout").about("Clear the active session"))
        .subcommand(Command::new("whoami").about("Show the active session identity"))
        .subcommand(
            Command::new("tx")
                .about("Record and list transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction in the active vault")
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_parser(["income", "expense"])
                                .default_value("expense"),
                        )
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .default_value("Food")
                                .help("Expense category (free-form labels allowed)"),
                        )
                        .arg(Arg::new("date").long("date").help("YYYY-MM-DD, defaults to today"))
                        .arg(
                            Arg::new("note")
                                .long("note")
                                .help("Annotation; required for 'Other' expenses"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions, newest first")
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                )),
        )
        .subcommand(json_flags(
            Command::new("dashboard").about("Balance, totals, budget alert, recent activity"),
        ))
        .subcommand(
            Command::new("stats")
                .about("Aggregated views of the ledger")
                .subcommand(json_flags(
                    Command::new("categories").about("Expense distribution by category"),
                ))
                .subcommand(json_flags(
                    Command::new("monthly").about("Income/expense trend, last six months"),
                )),
        )
        .subcommand(
            Command::new("settings")
                .about("Per-user preferences")
                .subcommand(json_flags(Command::new("show").about("Show current settings")))
                .subcommand(
                    Command::new("currency")
                        .about("Select display currency by ISO code")
                        .arg(Arg::new("code").required(true)),
                )
                .subcommand(
                    Command::new("currencies")
                        .about("List the supported currencies")
                        .arg(Arg::new("query").help("Filter by code or name")),
                )
                .subcommand(
                    Command::new("dark-mode")
                        .about("Toggle the dark display preference")
                        .arg(Arg::new("state").required(true).value_parser(["on", "off"])),
                )
                .subcommand(
                    Command::new("budget")
                        .about("Set the monthly expense budget limit")
                        .arg(Arg::new("amount").required(true)),
                )
                .subcommand(
                    Command::new("name")
                        .about("Set the display name (omit to clear)")
                        .arg(Arg::new("name")),
                )
                .subcommand(
                    Command::new("reset")
                        .about("Clear all transactions and restore the default budget limit"),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Export the ledger as CSV")
                .arg(Arg::new("out").long("out").help("Output path (defaults to fin_track_export_<date>.csv)")),
        )
        .subcommand(Command::new("demo").about("Load sample data into the active vault"))
}
