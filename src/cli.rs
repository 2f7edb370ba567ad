// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version};

use crate::config::BASE_URL_ENV;

fn json_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    )
}

pub fn build_cli() -> Command {
    Command::new("expenseclip")
        .version(crate_version!())
        .about("Month-grouped expense tracker over a remote REST store")
        .arg(
            Arg::new("base-url")
                .long("base-url")
                .global(true)
                .env(BASE_URL_ENV)
                .help("Base URL of the expense API"),
        )
        .subcommand(
            json_args(Command::new("list").about("Show expenses grouped by month"))
                .arg(
                    Arg::new("month")
                        .long("month")
                        .help("Only this month, e.g. \"March 2024\""),
                )
                .arg(
                    Arg::new("current")
                        .long("current")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("month")
                        .help("Only the current calendar month"),
                )
                .arg(
                    Arg::new("sort")
                        .long("sort")
                        .value_parser(["spent-on", "reason", "amount"])
                        .help("Sort each month by this column"),
                )
                .arg(
                    Arg::new("desc")
                        .long("desc")
                        .action(ArgAction::SetTrue)
                        .requires("sort")
                        .help("Sort descending"),
                )
                .arg(
                    Arg::new("exclude")
                        .long("exclude")
                        .action(ArgAction::Append)
                        .help("Leave this expense id out of its month's total"),
                ),
        )
        .subcommand(json_args(
            Command::new("months").about("One line per month with its total"),
        ))
        .subcommand(
            Command::new("add")
                .about("Record a new expense")
                .arg(
                    Arg::new("date")
                        .long("date")
                        .required(true)
                        .help("YYYY-MM-DD or \"05 March 2024 (Tue)\""),
                )
                .arg(Arg::new("amount").long("amount").required(true))
                .arg(Arg::new("reason").long("reason").required(true)),
        )
        .subcommand(
            Command::new("edit")
                .about("Change an existing expense")
                .arg(Arg::new("id").required(true))
                .arg(Arg::new("date").long("date"))
                .arg(Arg::new("amount").long("amount"))
                .arg(Arg::new("reason").long("reason")),
        )
        .subcommand(
            Command::new("rm")
                .about("Delete an expense")
                .arg(Arg::new("id").required(true)),
        )
        .subcommand(
            Command::new("export")
                .about("Write all expenses to a file")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("csv")
                        .help("csv|json"),
                )
                .arg(Arg::new("out").long("out").required(true)),
        )
        .subcommand(
            Command::new("config")
                .about("Show or change stored settings")
                .subcommand(Command::new("show"))
                .subcommand(
                    Command::new("set-base-url").arg(Arg::new("url").required(true)),
                )
                .subcommand(
                    Command::new("set-currency-prefix").arg(Arg::new("prefix").required(true)),
                ),
        )
}
