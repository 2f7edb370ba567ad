// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use expenseclip::api::ApiClient;
use expenseclip::book::ExpenseBook;
use expenseclip::config::Settings;
use expenseclip::{cli, commands, logging};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();
    logging::init();

    match matches.subcommand() {
        None => {
            cli::build_cli().print_help()?;
            println!();
            return Ok(());
        }
        Some(("config", sub)) => return commands::settings::handle(sub),
        Some(_) => {}
    }

    let settings = Settings::load()?;
    let base_url =
        settings.resolve_base_url(matches.get_one::<String>("base-url").map(String::as_str))?;
    let mut book = ExpenseBook::new(ApiClient::new(base_url)?);

    match matches.subcommand() {
        Some(("list", sub)) => commands::list::handle(&mut book, &settings, sub)?,
        Some(("months", sub)) => commands::months::handle(&mut book, &settings, sub)?,
        Some(("add", sub)) => commands::expenses::add(&mut book, &settings, sub)?,
        Some(("edit", sub)) => commands::expenses::edit(&mut book, &settings, sub)?,
        Some(("rm", sub)) => commands::expenses::remove(&mut book, &settings, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&mut book, sub)?,
        _ => {}
    }
    Ok(())
}
