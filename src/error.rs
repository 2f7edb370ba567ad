// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Error type shared by the grouping core, the remote client and the book.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExpenseError {
    /// A user-supplied field failed the pre-submit checks; nothing was sent.
    #[error("Validation error: {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error("Malformed date '{0}', expected 'DD Month YYYY (Day)'")]
    MalformedDate(String),

    #[error("Invalid month name '{name}' in '{input}'")]
    InvalidMonthName { name: String, input: String },

    #[error("Expense {id} pushes the {month} total out of range")]
    AmountOverflow { id: String, month: String },

    #[error("Total for {0} is out of range")]
    TotalOverflow(String),

    /// Any failed call to the remote store: transport, status or body.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Expense not found: {0}")]
    NotFound(String),

    #[error("Expense {id} is not part of {month}")]
    UnknownExpense { id: String, month: String },

    #[error("No expenses recorded for {0}")]
    UnknownMonth(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ExpenseResult<T> = Result<T, ExpenseError>;

impl ExpenseError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}
