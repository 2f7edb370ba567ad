// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::grouping::BucketEntry;
use crate::models::{Expense, MonthKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SortColumn {
    SpentOn,
    Reason,
    Amount,
}

impl FromStr for SortColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "spent-on" | "spenton" | "date" => Ok(Self::SpentOn),
            "reason" => Ok(Self::Reason),
            "amount" => Ok(Self::Amount),
            other => Err(format!(
                "Unknown sort column '{}' (use spent-on|reason|amount)",
                other
            )),
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::SpentOn => "spent-on",
            Self::Reason => "reason",
            Self::Amount => "amount",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortState {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortState {
    pub fn ascending(column: SortColumn) -> Self {
        Self {
            column,
            direction: SortDirection::Ascending,
        }
    }

    /// State after a click on `column`: the same column flips direction, a
    /// different one starts ascending.
    pub fn after_click(current: Option<SortState>, column: SortColumn) -> Self {
        match current {
            Some(s) if s.column == column => Self {
                column,
                direction: s.direction.toggled(),
            },
            _ => Self::ascending(column),
        }
    }
}

pub fn compare(a: &Expense, b: &Expense, column: SortColumn) -> Ordering {
    match column {
        SortColumn::SpentOn => a.spent_on.cmp(&b.spent_on),
        SortColumn::Reason => a.reason.cmp(&b.reason),
        SortColumn::Amount => a.amount.cmp(&b.amount),
    }
}

/// Returns the entries reordered per `state`; `None` keeps grouping order.
/// Equal keys stay in input order whichever the direction.
pub fn sort_entries(entries: &[BucketEntry], state: Option<SortState>) -> Vec<BucketEntry> {
    let mut out = entries.to_vec();
    if let Some(SortState { column, direction }) = state {
        out.sort_by(|a, b| {
            let ord = compare(&a.expense, &b.expense, column);
            match direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
    }
    out
}

/// Per-bucket sort selections.
#[derive(Debug, Clone, Default)]
pub struct SortConfig {
    states: BTreeMap<MonthKey, SortState>,
}

impl SortConfig {
    pub fn get(&self, key: MonthKey) -> Option<SortState> {
        self.states.get(&key).copied()
    }

    pub fn click(&mut self, key: MonthKey, column: SortColumn) -> SortState {
        let next = SortState::after_click(self.get(key), column);
        self.states.insert(key, next);
        next
    }

    pub fn clear(&mut self, key: MonthKey) {
        self.states.remove(&key);
    }

    pub fn retain_keys(&mut self, keys: &[MonthKey]) {
        self.states.retain(|k, _| keys.contains(k));
    }
}
