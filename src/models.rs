// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Month, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{ExpenseError, ExpenseResult};

/// Expense as served by the remote store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub spent_on: String,
    pub reason: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

/// Body of the list endpoint. Entries stay raw so that one undecodable
/// record does not sink the rest; see [`crate::grouping::group_listing`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpenseList {
    #[serde(default)]
    pub expenses: Vec<serde_json::Value>,
}

impl ExpenseList {
    pub fn from_records(records: &[ExpenseRecord]) -> ExpenseResult<Self> {
        let expenses = records
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { expenses })
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

/// Calendar day an expense was made on.
///
/// Displays as `"05 March 2024 (Tue)"`. Parsing takes the day, month and
/// year from the first three whitespace tokens; the weekday suffix is
/// ignored. Month names may be full or abbreviated, in any case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpentOn(NaiveDate);

impl SpentOn {
    pub const DISPLAY_FORMAT: &'static str = "%d %B %Y (%a)";

    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn month_key(&self) -> MonthKey {
        MonthKey {
            year: self.0.year(),
            month: self.0.month(),
        }
    }

    pub fn parse(input: &str) -> ExpenseResult<Self> {
        let tokens: Vec<&str> = input.split_whitespace().collect();
        if tokens.len() < 3 {
            return Err(ExpenseError::MalformedDate(input.to_string()));
        }
        let month = parse_month_name(tokens[1]).ok_or_else(|| ExpenseError::InvalidMonthName {
            name: tokens[1].to_string(),
            input: input.to_string(),
        })?;
        let malformed = || ExpenseError::MalformedDate(input.to_string());
        let year: i32 = tokens[2].parse().map_err(|_| malformed())?;
        let day: u32 = tokens[0].parse().map_err(|_| malformed())?;
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(malformed)
    }
}

impl fmt::Display for SpentOn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::DISPLAY_FORMAT))
    }
}

impl FromStr for SpentOn {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for SpentOn {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

fn parse_month_name(token: &str) -> Option<u32> {
    token.parse::<Month>().ok().map(|m| m.number_from_month())
}

/// Calendar month and year a bucket covers. Ordered by (year, month).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        SpentOn::new(date).month_key()
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn month_name(&self) -> &'static str {
        u8::try_from(self.month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map(|m| m.name())
            .unwrap_or("Unknown")
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month_name(), self.year)
    }
}

impl FromStr for MonthKey {
    type Err = ExpenseError;

    /// Accepts `"March 2024"` or `"Mar 2024"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        if tokens.len() != 2 {
            return Err(ExpenseError::MalformedDate(s.to_string()));
        }
        let month = parse_month_name(tokens[0]).ok_or_else(|| ExpenseError::InvalidMonthName {
            name: tokens[0].to_string(),
            input: s.to_string(),
        })?;
        let year: i32 = tokens[1]
            .parse()
            .map_err(|_| ExpenseError::MalformedDate(s.to_string()))?;
        Ok(Self { year, month })
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Expense after ingestion, with its date parsed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Expense {
    pub id: String,
    pub spent_on: SpentOn,
    pub reason: String,
    pub amount: Decimal,
}

impl Expense {
    pub fn from_record(record: &ExpenseRecord) -> ExpenseResult<Self> {
        Ok(Self {
            id: record.id.clone(),
            spent_on: SpentOn::parse(&record.spent_on)?,
            reason: record.reason.clone(),
            amount: record.amount,
        })
    }

    pub fn to_record(&self) -> ExpenseRecord {
        ExpenseRecord {
            id: self.id.clone(),
            spent_on: self.spent_on.to_string(),
            reason: self.reason.clone(),
            amount: self.amount,
        }
    }
}
