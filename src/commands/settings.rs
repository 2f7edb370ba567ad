// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::Path;

use anyhow::Result;

use crate::config::{Settings, normalize_base_url, settings_path};
use crate::utils::pretty_table;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    handle_at(&settings_path()?, m)
}

pub fn handle_at(path: &Path, m: &clap::ArgMatches) -> Result<()> {
    let mut settings = Settings::load_from(path)?;
    match m.subcommand() {
        Some(("set-base-url", sub)) => {
            let url = sub.get_one::<String>("url").map(String::as_str).unwrap_or("");
            settings.base_url = Some(normalize_base_url(url)?);
            settings.save_to(path)?;
            println!("Base URL set to {}", settings.base_url.as_deref().unwrap_or(""));
        }
        Some(("set-currency-prefix", sub)) => {
            if let Some(prefix) = sub.get_one::<String>("prefix") {
                settings.currency_prefix = prefix.clone();
                settings.save_to(path)?;
                println!("Currency prefix set to {}", prefix);
            }
        }
        _ => {
            let rows = vec![
                vec!["settings file".into(), path.display().to_string()],
                vec![
                    "base_url".into(),
                    settings.base_url.clone().unwrap_or_else(|| "(unset)".into()),
                ],
                vec!["currency_prefix".into(), settings.currency_prefix.clone()],
            ];
            println!("{}", pretty_table(&["Setting", "Value"], rows));
        }
    }
    Ok(())
}
