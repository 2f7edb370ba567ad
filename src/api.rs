// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use reqwest::Url;
use tracing::{debug, info};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{ExpenseList, ExpenseRecord};
use crate::utils::http_client;
use crate::validation::NewExpense;

/// The remote collection of expense records.
///
/// Create, update and delete only report success; callers re-read the
/// collection with [`ExpenseStore::fetch_all`] to see the result. The listing
/// is returned undecoded; [`crate::grouping::group_listing`] takes it apart.
pub trait ExpenseStore {
    fn fetch_all(&self) -> ExpenseResult<ExpenseList>;
    fn create(&self, expense: &NewExpense) -> ExpenseResult<()>;
    fn update(&self, record: &ExpenseRecord) -> ExpenseResult<()>;
    fn delete(&self, id: &str) -> ExpenseResult<()>;
}

pub struct ApiClient {
    base: Url,
    http: reqwest::blocking::Client,
}

impl ApiClient {
    pub fn new(base_url: impl AsRef<str>) -> ExpenseResult<Self> {
        let base_url = base_url.as_ref();
        let base = Url::parse(base_url)
            .map_err(|e| ExpenseError::Config(format!("invalid base URL '{base_url}': {e}")))?;
        if base.cannot_be_a_base() {
            return Err(ExpenseError::Config(format!(
                "base URL '{base_url}' cannot take a path"
            )));
        }
        Ok(Self {
            base,
            http: http_client()?,
        })
    }

    /// Base URL with `segments` appended, each percent-encoded as a single
    /// path segment.
    fn endpoint(&self, segments: &[&str]) -> ExpenseResult<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| ExpenseError::Config(format!("base URL '{}' cannot take a path", self.base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

impl ExpenseStore for ApiClient {
    fn fetch_all(&self) -> ExpenseResult<ExpenseList> {
        let url = self.endpoint(&["get"])?;
        debug!(%url, "fetching expenses");
        let list: ExpenseList = self.http.get(url).send()?.error_for_status()?.json()?;
        info!(count = list.len(), "fetched expenses");
        Ok(list)
    }

    fn create(&self, expense: &NewExpense) -> ExpenseResult<()> {
        let url = self.endpoint(&["add"])?;
        self.http
            .post(url)
            .json(expense)
            .send()?
            .error_for_status()?;
        info!(spent_on = %expense.spent_on(), amount = %expense.amount(), "created expense");
        Ok(())
    }

    fn update(&self, record: &ExpenseRecord) -> ExpenseResult<()> {
        let url = self.endpoint(&[record.id.as_str(), "edit"])?;
        self.http
            .patch(url)
            .json(record)
            .send()?
            .error_for_status()?;
        info!(id = %record.id, "updated expense");
        Ok(())
    }

    fn delete(&self, id: &str) -> ExpenseResult<()> {
        let url = self.endpoint(&[id, "delete"])?;
        self.http.delete(url).send()?.error_for_status()?;
        info!(%id, "deleted expense");
        Ok(())
    }
}
