// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use expenseclip::api::ExpenseStore;
use expenseclip::error::{ExpenseError, ExpenseResult};
use expenseclip::models::{ExpenseList, ExpenseRecord};
use expenseclip::validation::NewExpense;

/// In-process stand-in for the remote store that records every call.
#[derive(Default)]
pub struct MemoryStore {
    pub records: RefCell<Vec<ExpenseRecord>>,
    pub calls: RefCell<Vec<String>>,
    pub fail_on: Cell<Option<&'static str>>,
    next_id: Cell<u32>,
}

impl MemoryStore {
    pub fn with(records: Vec<ExpenseRecord>) -> Self {
        Self {
            records: RefCell::new(records),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn enter(&self, op: &'static str) -> ExpenseResult<()> {
        self.calls.borrow_mut().push(op.to_string());
        if self.fail_on.get() == Some(op) {
            return Err(ExpenseError::Io(std::io::Error::other(format!(
                "{op} refused"
            ))));
        }
        Ok(())
    }
}

impl ExpenseStore for MemoryStore {
    fn fetch_all(&self) -> ExpenseResult<ExpenseList> {
        self.enter("fetch")?;
        ExpenseList::from_records(&self.records.borrow())
    }

    fn create(&self, expense: &NewExpense) -> ExpenseResult<()> {
        self.enter("create")?;
        let n = self.next_id.get() + 1;
        self.next_id.set(n);
        self.records.borrow_mut().push(ExpenseRecord {
            id: format!("new{n}"),
            spent_on: expense.spent_on().to_string(),
            reason: expense.reason().to_string(),
            amount: expense.amount(),
        });
        Ok(())
    }

    fn update(&self, record: &ExpenseRecord) -> ExpenseResult<()> {
        self.enter("update")?;
        let mut records = self.records.borrow_mut();
        let slot = records
            .iter_mut()
            .find(|r| r.id == record.id)
            .ok_or_else(|| ExpenseError::NotFound(record.id.clone()))?;
        *slot = record.clone();
        Ok(())
    }

    fn delete(&self, id: &str) -> ExpenseResult<()> {
        self.enter("delete")?;
        let mut records = self.records.borrow_mut();
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Err(ExpenseError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

pub fn rec(id: &str, spent_on: &str, reason: &str, amount: &str) -> ExpenseRecord {
    ExpenseRecord {
        id: id.into(),
        spent_on: spent_on.into(),
        reason: reason.into(),
        amount: amount.parse().unwrap(),
    }
}

pub fn sample_records() -> Vec<ExpenseRecord> {
    vec![
        rec("a", "05 March 2024 (Tue)", "Groceries", "50"),
        rec("b", "12 January 2024 (Fri)", "Bus pass", "20"),
        rec("c", "09 March 2024 (Sat)", "Coffee", "5"),
        rec("d", "28 December 2023 (Thu)", "Gift", "30"),
        rec("e", "17 March 2024 (Sun)", "Books", "100"),
        rec("f", "bad date", "Ghost", "1"),
    ]
}
