// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Inclusion toggles over a single month bucket.
//!
//! Every function here returns a fresh [`MonthBucket`]; the input bucket is
//! left as it was. Totals are recomputed from the included entries with
//! decimal arithmetic, so toggling back and forth never drifts.

use crate::error::{ExpenseError, ExpenseResult};
use crate::grouping::MonthBucket;

pub fn toggle_included(bucket: &MonthBucket, id: &str) -> ExpenseResult<MonthBucket> {
    if !bucket.contains(id) {
        return Err(ExpenseError::UnknownExpense {
            id: id.to_string(),
            month: bucket.key().to_string(),
        });
    }
    let entries = bucket
        .entries()
        .iter()
        .cloned()
        .map(|mut e| {
            if e.expense.id == id {
                e.included = !e.included;
            }
            e
        })
        .collect();
    MonthBucket::filtered(bucket.key(), entries)
}

/// Marks every id in `excluded` that belongs to this bucket as not included.
/// Ids from other buckets are ignored. Returns `None` when nothing matched.
pub fn exclude(bucket: &MonthBucket, excluded: &[String]) -> ExpenseResult<Option<MonthBucket>> {
    if !excluded.iter().any(|id| bucket.contains(id)) {
        return Ok(None);
    }
    let entries = bucket
        .entries()
        .iter()
        .cloned()
        .map(|mut e| {
            if excluded.contains(&e.expense.id) {
                e.included = false;
            }
            e
        })
        .collect();
    MonthBucket::filtered(bucket.key(), entries).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grouping::{BucketState, group_by_month};
    use crate::models::ExpenseRecord;
    use rust_decimal::Decimal;

    fn bucket(amounts: &[&str]) -> MonthBucket {
        let records: Vec<ExpenseRecord> = amounts
            .iter()
            .enumerate()
            .map(|(i, a)| ExpenseRecord {
                id: format!("e{i}"),
                spent_on: format!("{:02} March 2024 (Fri)", i + 1),
                reason: "r".into(),
                amount: a.parse().unwrap(),
            })
            .collect();
        group_by_month(&records).buckets()[0].clone()
    }

    #[test]
    fn toggle_off_and_on_restores_total() {
        let b = bucket(&["10", "20", "30"]);
        assert_eq!(b.total(), Decimal::from(60));

        let off = toggle_included(&b, "e1").unwrap();
        assert_eq!(off.total(), Decimal::from(40));
        assert_eq!(off.state(), BucketState::Filtered);

        let on = toggle_included(&off, "e1").unwrap();
        assert_eq!(on.total(), Decimal::from(60));
        // Still filtered: only a fresh grouping returns to Grouped.
        assert_eq!(on.state(), BucketState::Filtered);
    }

    #[test]
    fn toggling_leaves_source_untouched() {
        let b = bucket(&["10", "20"]);
        let _ = toggle_included(&b, "e0").unwrap();
        assert_eq!(b.total(), Decimal::from(30));
        assert!(b.entries().iter().all(|e| e.included));
        assert_eq!(b.state(), BucketState::Grouped);
    }

    #[test]
    fn repeated_toggles_do_not_drift() {
        let b = bucket(&["0.1", "0.2", "0.3"]);
        let mut cur = b.clone();
        for _ in 0..1000 {
            cur = toggle_included(&cur, "e1").unwrap();
        }
        assert_eq!(cur.total(), "0.6".parse::<Decimal>().unwrap());
    }

    #[test]
    fn unknown_id_is_an_error() {
        let b = bucket(&["10"]);
        let err = toggle_included(&b, "nope").unwrap_err();
        assert!(matches!(err, ExpenseError::UnknownExpense { .. }));
    }

    #[test]
    fn exclude_only_touches_matching_ids() {
        let b = bucket(&["10", "20", "30"]);
        assert!(exclude(&b, &["elsewhere".to_string()]).unwrap().is_none());
        let out = exclude(&b, &["e0".to_string(), "e2".to_string()])
            .unwrap()
            .unwrap();
        assert_eq!(out.total(), Decimal::from(20));
    }

    #[test]
    fn total_out_of_range_is_an_error() {
        let b = bucket(&["79228162514264337593543950335", "-1", "1"]);
        assert_eq!(b.total(), Decimal::MAX);

        let err = exclude(&b, &["e1".to_string()]).unwrap_err();
        assert!(matches!(err, ExpenseError::TotalOverflow(_)));
        let err = toggle_included(&b, "e1").unwrap_err();
        assert!(matches!(err, ExpenseError::TotalOverflow(_)));
        assert_eq!(b.total(), Decimal::MAX);
    }
}
