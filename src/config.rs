// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ExpenseError, ExpenseResult};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Expenseclip", "expenseclip"));

pub const BASE_URL_ENV: &str = "EXPENSECLIP_BASE_URL";
pub const LOG_ENV: &str = "EXPENSECLIP_LOG";

pub fn settings_path() -> ExpenseResult<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2).ok_or_else(|| {
        ExpenseError::Config("Could not determine platform-specific config dir".into())
    })?;
    Ok(proj.config_dir().join("settings.json"))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Prefix put in front of every displayed amount.
    #[serde(default = "default_currency_prefix")]
    pub currency_prefix: String,
}

fn default_currency_prefix() -> String {
    "Rs.".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: None,
            currency_prefix: default_currency_prefix(),
        }
    }
}

impl Settings {
    pub fn load() -> ExpenseResult<Self> {
        Self::load_from(&settings_path()?)
    }

    pub fn save(&self) -> ExpenseResult<PathBuf> {
        let path = settings_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn load_from(path: &Path) -> ExpenseResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn save_to(&self, path: &Path) -> ExpenseResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Picks the flag/env value over the stored one.
    pub fn resolve_base_url(&self, flag: Option<&str>) -> ExpenseResult<String> {
        match flag.or(self.base_url.as_deref()) {
            Some(url) => normalize_base_url(url),
            None => Err(ExpenseError::Config(format!(
                "No API base URL; pass --base-url, set {} or run `expenseclip config set-base-url`",
                BASE_URL_ENV
            ))),
        }
    }
}

pub fn normalize_base_url(input: &str) -> ExpenseResult<String> {
    let s = input.trim().trim_end_matches('/');
    if !(s.starts_with("http://") || s.starts_with("https://")) {
        return Err(ExpenseError::Config(format!(
            "Invalid base URL '{}', expected http:// or https://",
            input
        )));
    }
    Ok(s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let s = Settings::load_from(&dir.path().join("nope.json")).unwrap();
        assert_eq!(s, Settings::default());
        assert_eq!(s.currency_prefix, "Rs.");
    }

    #[test]
    fn save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let s = Settings {
            base_url: Some("https://api.example.com".into()),
            ..Default::default()
        };
        s.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path).unwrap(), s);
    }

    #[test]
    fn flag_wins_over_file() {
        let s = Settings {
            base_url: Some("https://stored.example.com/".into()),
            ..Default::default()
        };
        assert_eq!(s.resolve_base_url(None).unwrap(), "https://stored.example.com");
        assert_eq!(
            s.resolve_base_url(Some("http://localhost:8080//")).unwrap(),
            "http://localhost:8080"
        );
    }

    #[test]
    fn missing_or_bad_url_is_config_error() {
        let s = Settings::default();
        assert!(matches!(s.resolve_base_url(None), Err(ExpenseError::Config(_))));
        assert!(matches!(normalize_base_url("ftp://x"), Err(ExpenseError::Config(_))));
    }
}
