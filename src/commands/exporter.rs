// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};
use serde_json::json;

use crate::api::ExpenseStore;
use crate::book::ExpenseBook;

pub fn handle<S: ExpenseStore>(book: &mut ExpenseBook<S>, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub
        .get_one::<String>("format")
        .map(|s| s.to_lowercase())
        .unwrap_or_else(|| "csv".into());
    let Some(out) = sub.get_one::<String>("out") else {
        bail!("--out is required");
    };
    if fmt != "csv" && fmt != "json" {
        bail!("Unknown format: {} (use csv|json)", fmt);
    }

    book.refresh()?;
    let mut rows = Vec::new();
    for b in book.grouping().buckets() {
        for e in b.entries() {
            rows.push((
                b.key().to_string(),
                e.expense.id.clone(),
                e.expense.spent_on.to_string(),
                e.expense.reason.clone(),
                e.expense.amount.to_string(),
            ));
        }
    }

    if fmt == "csv" {
        let mut wtr = csv::Writer::from_path(out)?;
        wtr.write_record(["month", "id", "spentOn", "reason", "amount"])?;
        for (month, id, spent_on, reason, amount) in rows {
            wtr.write_record([month, id, spent_on, reason, amount])?;
        }
        wtr.flush()?;
    } else {
        let items: Vec<_> = rows
            .into_iter()
            .map(|(month, id, spent_on, reason, amount)| {
                json!({
                    "month": month, "id": id, "spentOn": spent_on, "reason": reason, "amount": amount
                })
            })
            .collect();
        std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
    }
    println!("Exported expenses to {}", out);
    Ok(())
}
