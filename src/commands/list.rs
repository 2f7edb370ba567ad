// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::api::ExpenseStore;
use crate::book::ExpenseBook;
use crate::config::Settings;
use crate::grouping::BucketState;
use crate::models::MonthKey;
use crate::sorting::{SortColumn, SortState};
use crate::utils::{fmt_money, maybe_print_json, pretty_table};

#[derive(Debug, Serialize)]
pub struct EntryView {
    pub id: String,
    pub spent_on: String,
    pub reason: String,
    pub amount: Decimal,
    pub included: bool,
}

#[derive(Debug, Serialize)]
pub struct MonthView {
    pub month: String,
    pub total: Decimal,
    pub state: BucketState,
    pub current: bool,
    pub sort: Option<SortState>,
    pub expenses: Vec<EntryView>,
}

pub fn handle<S: ExpenseStore>(
    book: &mut ExpenseBook<S>,
    settings: &Settings,
    sub: &clap::ArgMatches,
) -> Result<()> {
    book.refresh()?;
    let today = chrono::Local::now().date_naive();
    let views = month_views(book, sub, today)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &views)? {
        return Ok(());
    }
    if views.is_empty() {
        println!("No expenses.");
        return Ok(());
    }
    for v in &views {
        let marker = if v.current { " (current)" } else { "" };
        println!(
            "{} - Total: {}{}",
            v.month,
            fmt_money(&v.total, &settings.currency_prefix),
            marker
        );
        let rows: Vec<Vec<String>> = v
            .expenses
            .iter()
            .map(|e| {
                vec![
                    if e.included { "x".into() } else { String::new() },
                    e.spent_on.clone(),
                    e.reason.clone(),
                    fmt_money(&e.amount, &settings.currency_prefix),
                    e.id.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["In", "Spent On", "Reason", "Amount", "Id"], rows)
        );
    }
    Ok(())
}

/// Applies the list flags to an already refreshed book and returns the
/// months to show, most recent first.
pub fn month_views<S: ExpenseStore>(
    book: &mut ExpenseBook<S>,
    sub: &clap::ArgMatches,
    today: NaiveDate,
) -> Result<Vec<MonthView>> {
    let only: Option<MonthKey> = if sub.get_flag("current") {
        Some(MonthKey::of(today))
    } else {
        sub.get_one::<String>("month")
            .map(|m| m.parse::<MonthKey>())
            .transpose()
            .context("Invalid --month")?
    };

    let excluded: Vec<String> = sub
        .get_many::<String>("exclude")
        .map(|vals| vals.cloned().collect())
        .unwrap_or_default();
    if !excluded.is_empty() {
        book.exclude(&excluded)?;
    }

    let column = sub
        .get_one::<String>("sort")
        .map(|s| s.parse::<SortColumn>())
        .transpose()
        .map_err(anyhow::Error::msg)?;
    let current = book.current_month_position(today);

    let mut views = Vec::new();
    for (pos, key) in book.grouping().keys().into_iter().enumerate() {
        if only.is_some_and(|k| k != key) {
            continue;
        }
        if let Some(col) = column {
            book.click_sort(key, col)?;
            if sub.get_flag("desc") {
                book.click_sort(key, col)?;
            }
        }
        let bucket = book.bucket(key)?;
        let total = bucket.total();
        let state = bucket.state();
        let expenses = book
            .sorted_entries(key)?
            .into_iter()
            .map(|e| EntryView {
                id: e.expense.id,
                spent_on: e.expense.spent_on.to_string(),
                reason: e.expense.reason,
                amount: e.expense.amount,
                included: e.included,
            })
            .collect();
        views.push(MonthView {
            month: key.to_string(),
            total,
            state,
            current: current == Some(pos),
            sort: book.sort_state(key),
            expenses,
        });
    }

    if let Some(k) = only {
        if views.is_empty() {
            anyhow::bail!("No expenses recorded for {}", k);
        }
    }
    Ok(views)
}
