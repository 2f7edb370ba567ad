// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Month grouping of the remote expense collection.
//!
//! Records are bucketed by the calendar month of their `spentOn` date, in
//! input order, and buckets come out most recent month first. Records that
//! cannot be decoded, whose date cannot be read, or whose amount would push
//! a month total out of range are set aside in [`Grouping::rejected`]
//! instead of failing the whole pass.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseList, ExpenseRecord, MonthKey};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BucketEntry {
    pub expense: Expense,
    pub included: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BucketState {
    /// Fresh from grouping: every entry counts.
    Grouped,
    /// At least one inclusion toggle has been applied since grouping.
    Filtered,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthBucket {
    key: MonthKey,
    entries: Vec<BucketEntry>,
    total: Decimal,
    state: BucketState,
}

impl MonthBucket {
    fn new(key: MonthKey) -> Self {
        Self {
            key,
            entries: Vec::new(),
            total: Decimal::ZERO,
            state: BucketState::Grouped,
        }
    }

    /// Leaves the bucket untouched and returns false when the amount would
    /// overflow the running total.
    fn push(&mut self, expense: Expense) -> bool {
        let Some(total) = self.total.checked_add(expense.amount) else {
            return false;
        };
        self.total = total;
        self.entries.push(BucketEntry {
            expense,
            included: true,
        });
        true
    }

    pub(crate) fn filtered(key: MonthKey, entries: Vec<BucketEntry>) -> ExpenseResult<Self> {
        let total =
            included_total(&entries).ok_or_else(|| ExpenseError::TotalOverflow(key.to_string()))?;
        Ok(Self {
            key,
            entries,
            total,
            state: BucketState::Filtered,
        })
    }

    pub fn key(&self) -> MonthKey {
        self.key
    }

    pub fn entries(&self) -> &[BucketEntry] {
        &self.entries
    }

    pub fn total(&self) -> Decimal {
        self.total
    }

    pub fn state(&self) -> BucketState {
        self.state
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.expense.id == id)
    }
}

/// Sum of amounts over entries whose inclusion flag is set, or `None` if it
/// does not fit in a `Decimal`.
pub fn included_total(entries: &[BucketEntry]) -> Option<Decimal> {
    entries
        .iter()
        .filter(|e| e.included)
        .try_fold(Decimal::ZERO, |acc, e| acc.checked_add(e.expense.amount))
}

#[derive(Debug)]
pub struct Rejected {
    pub id: String,
    pub spent_on: String,
    pub error: ExpenseError,
    /// The decoded record, when decoding got that far. Kept so it can still
    /// be edited.
    pub record: Option<ExpenseRecord>,
}

#[derive(Debug, Default)]
pub struct Grouping {
    buckets: Vec<MonthBucket>,
    rejected: Vec<Rejected>,
}

impl Grouping {
    pub fn buckets(&self) -> &[MonthBucket] {
        &self.buckets
    }

    pub fn rejected(&self) -> &[Rejected] {
        &self.rejected
    }

    pub fn keys(&self) -> Vec<MonthKey> {
        self.buckets.iter().map(|b| b.key).collect()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn position(&self, key: MonthKey) -> Option<usize> {
        self.buckets.iter().position(|b| b.key == key)
    }

    pub fn bucket(&self, key: MonthKey) -> Option<&MonthBucket> {
        self.buckets.iter().find(|b| b.key == key)
    }

    pub fn expense(&self, id: &str) -> Option<&Expense> {
        self.buckets
            .iter()
            .flat_map(|b| b.entries.iter())
            .map(|e| &e.expense)
            .find(|e| e.id == id)
    }

    /// Wire form of an expense by id, whether it was grouped or set aside.
    pub fn record(&self, id: &str) -> Option<ExpenseRecord> {
        self.expense(id).map(Expense::to_record).or_else(|| {
            self.rejected
                .iter()
                .filter(|r| r.id == id)
                .find_map(|r| r.record.clone())
        })
    }

    pub fn expense_count(&self) -> usize {
        self.buckets.iter().map(MonthBucket::len).sum()
    }

    /// Swaps in a new snapshot of an existing bucket, keeping its position.
    pub(crate) fn replace_bucket(&mut self, bucket: MonthBucket) -> bool {
        match self.buckets.iter_mut().find(|b| b.key == bucket.key) {
            Some(slot) => {
                *slot = bucket;
                true
            }
            None => false,
        }
    }
}

pub fn group_by_month(records: &[ExpenseRecord]) -> Grouping {
    group_decoded(records.iter().cloned().map(Ok))
}

/// Groups a raw listing, decoding each entry on its own so a bad one is set
/// aside rather than failing the rest.
pub fn group_listing(list: &ExpenseList) -> Grouping {
    group_decoded(list.expenses.iter().map(decode))
}

fn decode(value: &serde_json::Value) -> Result<ExpenseRecord, Rejected> {
    serde_json::from_value(value.clone()).map_err(|e| {
        let field = |name: &str| {
            value
                .get(name)
                .and_then(serde_json::Value::as_str)
                .unwrap_or_default()
                .to_string()
        };
        Rejected {
            id: field("_id"),
            spent_on: field("spentOn"),
            error: ExpenseError::Json(e),
            record: None,
        }
    })
}

fn group_decoded(records: impl Iterator<Item = Result<ExpenseRecord, Rejected>>) -> Grouping {
    let mut by_key: BTreeMap<MonthKey, MonthBucket> = BTreeMap::new();
    let mut rejected = Vec::new();

    for decoded in records {
        let record = match decoded {
            Ok(record) => record,
            Err(r) => {
                rejected.push(r);
                continue;
            }
        };
        match Expense::from_record(&record) {
            Ok(expense) => {
                let key = expense.spent_on.month_key();
                let pushed = by_key
                    .entry(key)
                    .or_insert_with(|| MonthBucket::new(key))
                    .push(expense);
                if !pushed {
                    rejected.push(Rejected {
                        id: record.id.clone(),
                        spent_on: record.spent_on.clone(),
                        error: ExpenseError::AmountOverflow {
                            id: record.id.clone(),
                            month: key.to_string(),
                        },
                        record: Some(record),
                    });
                }
            }
            Err(error) => rejected.push(Rejected {
                id: record.id.clone(),
                spent_on: record.spent_on.clone(),
                error,
                record: Some(record),
            }),
        }
    }

    Grouping {
        buckets: by_key.into_values().rev().collect(),
        rejected,
    }
}
