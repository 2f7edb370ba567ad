// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};

use crate::api::ExpenseStore;
use crate::book::ExpenseBook;
use crate::commands::months::print_table;
use crate::config::Settings;
use crate::validation::{ExpenseDraft, ExpensePatch};

pub fn add<S: ExpenseStore>(
    book: &mut ExpenseBook<S>,
    settings: &Settings,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let draft = ExpenseDraft {
        date: arg(sub, "date").unwrap_or_default(),
        amount: arg(sub, "amount").unwrap_or_default(),
        reason: arg(sub, "reason").unwrap_or_default(),
    };
    book.add(&draft)?;
    println!("Added");
    print_table(book.grouping(), settings);
    Ok(())
}

pub fn edit<S: ExpenseStore>(
    book: &mut ExpenseBook<S>,
    settings: &Settings,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let id = arg(sub, "id").unwrap_or_default();
    let patch = ExpensePatch {
        date: arg(sub, "date"),
        amount: arg(sub, "amount"),
        reason: arg(sub, "reason"),
    };
    if patch.is_empty() {
        bail!("Nothing to change; pass --date, --amount or --reason");
    }
    book.refresh()?;
    book.edit(&id, &patch)?;
    println!("Edited {}", id);
    print_table(book.grouping(), settings);
    Ok(())
}

pub fn remove<S: ExpenseStore>(
    book: &mut ExpenseBook<S>,
    settings: &Settings,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let id = arg(sub, "id").unwrap_or_default();
    book.delete(&id)?;
    println!("Deleted {}", id);
    print_table(book.grouping(), settings);
    Ok(())
}

fn arg(sub: &clap::ArgMatches, name: &str) -> Option<String> {
    sub.get_one::<String>(name).cloned()
}
