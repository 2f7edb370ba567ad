// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Session view of the remote expense collection.
//!
//! Every mutation goes to the remote store first and is followed by a full
//! refresh. The grouped snapshot is only replaced once a refresh succeeds, so
//! any failure leaves the previous snapshot, sort states and inclusion flags
//! exactly as they were.

use chrono::NaiveDate;
use tracing::{error, warn};

use crate::api::ExpenseStore;
use crate::error::{ExpenseError, ExpenseResult};
use crate::grouping::{BucketEntry, Grouping, MonthBucket, group_listing};
use crate::models::MonthKey;
use crate::sorting::{SortColumn, SortConfig, SortState, sort_entries};
use crate::totals;
use crate::validation::{ExpenseDraft, ExpensePatch};

pub struct ExpenseBook<S: ExpenseStore> {
    store: S,
    grouping: Grouping,
    sorts: SortConfig,
}

impl<S: ExpenseStore> ExpenseBook<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            grouping: Grouping::default(),
            sorts: SortConfig::default(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn grouping(&self) -> &Grouping {
        &self.grouping
    }

    pub fn refresh(&mut self) -> ExpenseResult<&Grouping> {
        let listing = self.store.fetch_all().inspect_err(|e| {
            error!("Error fetching expenses: {e}");
        })?;
        let grouping = group_listing(&listing);
        for r in grouping.rejected() {
            warn!(id = %r.id, spent_on = %r.spent_on, "skipping expense: {}", r.error);
        }
        self.sorts.retain_keys(&grouping.keys());
        self.grouping = grouping;
        Ok(&self.grouping)
    }

    pub fn add(&mut self, draft: &ExpenseDraft) -> ExpenseResult<()> {
        let expense = draft.validate()?;
        self.store.create(&expense).inspect_err(|e| {
            error!("Error adding expense: {e}");
        })?;
        self.refresh()?;
        Ok(())
    }

    /// Edits a grouped expense, or one set aside at the last refresh so a bad
    /// date can be corrected.
    pub fn edit(&mut self, id: &str, patch: &ExpensePatch) -> ExpenseResult<()> {
        let existing = self
            .grouping
            .record(id)
            .ok_or_else(|| ExpenseError::NotFound(id.to_string()))?;
        let updated = patch.apply(&existing)?;
        self.store.update(&updated.to_record()).inspect_err(|e| {
            error!(%id, "Error updating expense: {e}");
        })?;
        self.refresh()?;
        Ok(())
    }

    pub fn delete(&mut self, id: &str) -> ExpenseResult<()> {
        self.store.delete(id).inspect_err(|e| {
            error!(%id, "Error deleting expense: {e}");
        })?;
        self.refresh()?;
        Ok(())
    }

    pub fn bucket(&self, key: MonthKey) -> ExpenseResult<&MonthBucket> {
        self.grouping
            .bucket(key)
            .ok_or_else(|| ExpenseError::UnknownMonth(key.to_string()))
    }

    pub fn sort_state(&self, key: MonthKey) -> Option<SortState> {
        self.sorts.get(key)
    }

    pub fn click_sort(&mut self, key: MonthKey, column: SortColumn) -> ExpenseResult<SortState> {
        self.bucket(key)?;
        Ok(self.sorts.click(key, column))
    }

    pub fn clear_sort(&mut self, key: MonthKey) {
        self.sorts.clear(key);
    }

    pub fn sorted_entries(&self, key: MonthKey) -> ExpenseResult<Vec<BucketEntry>> {
        let bucket = self.bucket(key)?;
        Ok(sort_entries(bucket.entries(), self.sorts.get(key)))
    }

    pub fn toggle_included(&mut self, key: MonthKey, id: &str) -> ExpenseResult<&MonthBucket> {
        let next = totals::toggle_included(self.bucket(key)?, id)?;
        self.grouping.replace_bucket(next);
        self.bucket(key)
    }

    /// Unchecks the given ids in whichever buckets hold them. Nothing changes
    /// if any resulting total is out of range.
    pub fn exclude(&mut self, ids: &[String]) -> ExpenseResult<()> {
        let updated = self
            .grouping
            .buckets()
            .iter()
            .filter_map(|b| totals::exclude(b, ids).transpose())
            .collect::<ExpenseResult<Vec<MonthBucket>>>()?;
        for b in updated {
            self.grouping.replace_bucket(b);
        }
        Ok(())
    }

    /// Position of the bucket holding `today`'s month, if it has any expenses.
    pub fn current_month_position(&self, today: NaiveDate) -> Option<usize> {
        self.grouping.position(MonthKey::of(today))
    }
}
