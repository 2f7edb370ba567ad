// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use crate::api::ExpenseStore;
use crate::book::ExpenseBook;
use crate::config::Settings;
use crate::grouping::Grouping;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};

#[derive(Debug, Serialize)]
pub struct MonthSummary {
    pub month: String,
    pub entries: usize,
    pub total: String,
}

pub fn handle<S: ExpenseStore>(
    book: &mut ExpenseBook<S>,
    settings: &Settings,
    sub: &clap::ArgMatches,
) -> Result<()> {
    book.refresh()?;
    let data = summaries(book.grouping());
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        print_table(book.grouping(), settings);
    }
    Ok(())
}

pub fn summaries(grouping: &Grouping) -> Vec<MonthSummary> {
    grouping
        .buckets()
        .iter()
        .map(|b| MonthSummary {
            month: b.key().to_string(),
            entries: b.len(),
            total: b.total().to_string(),
        })
        .collect()
}

pub fn print_table(grouping: &Grouping, settings: &Settings) {
    let rows: Vec<Vec<String>> = grouping
        .buckets()
        .iter()
        .map(|b| {
            vec![
                b.key().to_string(),
                b.len().to_string(),
                fmt_money(&b.total(), &settings.currency_prefix),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Month", "Entries", "Total"], rows));
}
