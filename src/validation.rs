// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseRecord, SpentOn};

/// Raw form input for a new expense.
#[derive(Debug, Clone, Default)]
pub struct ExpenseDraft {
    pub date: String,
    pub amount: String,
    pub reason: String,
}

/// Body of a create call, only obtainable through [`ExpenseDraft::validate`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    spent_on: SpentOn,
    #[serde(with = "rust_decimal::serde::float")]
    amount: Decimal,
    reason: String,
}

impl NewExpense {
    pub fn spent_on(&self) -> SpentOn {
        self.spent_on
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl ExpenseDraft {
    pub fn new(
        date: impl Into<String>,
        amount: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            amount: amount.into(),
            reason: reason.into(),
        }
    }

    pub fn validate(&self) -> ExpenseResult<NewExpense> {
        let amount = parse_amount(&self.amount)?;
        let reason = parse_reason(&self.reason)?;
        let spent_on = parse_input_date(&self.date)?;
        Ok(NewExpense {
            spent_on,
            amount,
            reason,
        })
    }
}

/// Partial update of an existing expense; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct ExpensePatch {
    pub date: Option<String>,
    pub amount: Option<String>,
    pub reason: Option<String>,
}

impl ExpensePatch {
    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.amount.is_none() && self.reason.is_none()
    }

    /// Merges the patch over a stored record and validates the result. The
    /// stored date may be unreadable as long as the patch replaces it.
    pub fn apply(&self, existing: &ExpenseRecord) -> ExpenseResult<Expense> {
        let draft = ExpenseDraft {
            date: self
                .date
                .clone()
                .unwrap_or_else(|| existing.spent_on.clone()),
            amount: self
                .amount
                .clone()
                .unwrap_or_else(|| existing.amount.to_string()),
            reason: self
                .reason
                .clone()
                .unwrap_or_else(|| existing.reason.clone()),
        };
        let valid = draft.validate()?;
        Ok(Expense {
            id: existing.id.clone(),
            spent_on: valid.spent_on,
            reason: valid.reason,
            amount: valid.amount,
        })
    }
}

pub fn parse_amount(input: &str) -> ExpenseResult<Decimal> {
    let s = input.trim();
    if s.is_empty() {
        return Err(ExpenseError::validation("amount", "is required"));
    }
    let d = s
        .parse::<Decimal>()
        .map_err(|_| ExpenseError::validation("amount", format!("'{}' is not a number", s)))?;
    if d.is_zero() {
        return Err(ExpenseError::validation("amount", "must not be zero"));
    }
    if d.is_sign_negative() {
        return Err(ExpenseError::validation("amount", "must be positive"));
    }
    Ok(d)
}

pub fn parse_reason(input: &str) -> ExpenseResult<String> {
    let s = input.trim();
    if s.is_empty() {
        return Err(ExpenseError::validation("reason", "is required"));
    }
    Ok(s.to_string())
}

/// Accepts `YYYY-MM-DD` or the display form `DD Month YYYY (Day)`.
pub fn parse_input_date(input: &str) -> ExpenseResult<SpentOn> {
    let s = input.trim();
    if s.is_empty() {
        return Err(ExpenseError::validation("date", "is required"));
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(SpentOn::new(d));
    }
    SpentOn::parse(s).map_err(|e| ExpenseError::validation("date", e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_of(err: ExpenseError) -> &'static str {
        match err {
            ExpenseError::Validation { field, .. } => field,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn valid_draft_is_canonicalised() {
        let n = ExpenseDraft::new("2024-03-05", "15", "  Lunch ").validate().unwrap();
        assert_eq!(n.spent_on().to_string(), "05 March 2024 (Tue)");
        assert_eq!(n.amount(), Decimal::from(15));
        assert_eq!(n.reason(), "Lunch");
    }

    #[test]
    fn empty_reason_is_rejected() {
        let err = ExpenseDraft::new("2024-03-05", "15", "").validate().unwrap_err();
        assert_eq!(field_of(err), "reason");
    }

    #[test]
    fn amount_rules() {
        for bad in ["", "abc", "0", "0.00", "-4"] {
            let err = ExpenseDraft::new("2024-03-05", bad, "x").validate().unwrap_err();
            assert_eq!(field_of(err), "amount", "input {bad:?}");
        }
        assert!(ExpenseDraft::new("2024-03-05", "0.01", "x").validate().is_ok());
    }

    #[test]
    fn date_rules() {
        let err = ExpenseDraft::new(" ", "1", "x").validate().unwrap_err();
        assert_eq!(field_of(err), "date");
        let err = ExpenseDraft::new("yesterday", "1", "x").validate().unwrap_err();
        assert_eq!(field_of(err), "date");
        let n = ExpenseDraft::new("09 Feb 2024 (Fri)", "1", "x").validate().unwrap();
        assert_eq!(n.spent_on().to_string(), "09 February 2024 (Fri)");
    }

    #[test]
    fn create_body_matches_remote_shape() {
        let n = ExpenseDraft::new("2024-03-05", "12.5", "Tea").validate().unwrap();
        let v = serde_json::to_value(&n).unwrap();
        assert_eq!(
            v,
            serde_json::json!({"spentOn": "05 March 2024 (Tue)", "amount": 12.5, "reason": "Tea"})
        );
    }

    #[test]
    fn patch_keeps_unset_fields() {
        let existing = Expense {
            id: "a1".into(),
            spent_on: SpentOn::parse("05 March 2024 (Tue)").unwrap(),
            reason: "Tea".into(),
            amount: Decimal::from(3),
        }
        .to_record();
        let patch = ExpensePatch {
            amount: Some("4.50".into()),
            ..Default::default()
        };
        let updated = patch.apply(&existing).unwrap();
        assert_eq!(updated.id, "a1");
        assert_eq!(updated.reason, "Tea");
        assert_eq!(updated.spent_on.to_string(), existing.spent_on);
        assert_eq!(updated.amount, "4.50".parse::<Decimal>().unwrap());

        let bad = ExpensePatch {
            reason: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(field_of(bad.apply(&existing).unwrap_err()), "reason");
    }

    #[test]
    fn patch_can_repair_unreadable_date() {
        let existing = ExpenseRecord {
            id: "f".into(),
            spent_on: "bad date".into(),
            reason: "Ghost".into(),
            amount: Decimal::ONE,
        };
        let keep = ExpensePatch {
            reason: Some("Still ghost".into()),
            ..Default::default()
        };
        assert_eq!(field_of(keep.apply(&existing).unwrap_err()), "date");

        let fix = ExpensePatch {
            date: Some("2024-03-21".into()),
            ..Default::default()
        };
        let updated = fix.apply(&existing).unwrap();
        assert_eq!(updated.spent_on.to_string(), "21 March 2024 (Thu)");
        assert_eq!(updated.reason, "Ghost");
    }
}
