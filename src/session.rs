// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::ledger::Ledger;
use crate::models::Settings;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.alphavelocity", "Agrifin", "agrifin"));

pub fn default_session_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    Ok(proj.data_dir().join("session.json"))
}

pub fn session_path(cfg: &Config) -> Result<PathBuf> {
    match &cfg.session_path {
        Some(p) => Ok(p.clone()),
        None => default_session_path(),
    }
}

/// Read the session at `path`, seeding demo data when no file exists yet.
pub fn load(path: &Path) -> Result<Ledger> {
    if !path.exists() {
        debug!(path = %path.display(), "no session file, starting from seed data");
        return Ok(Ledger::seeded());
    }
    let raw =
        fs::read_to_string(path).with_context(|| format!("Read session at {}", path.display()))?;
    let ledger = serde_json::from_str(&raw)
        .with_context(|| format!("Session file {} is not valid JSON", path.display()))?;
    Ok(ledger)
}

pub fn save(path: &Path, ledger: &Ledger) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create data dir {}", dir.display()))?;
    }
    let body = serde_json::to_string_pretty(ledger)?;
    fs::write(path, body).with_context(|| format!("Write session to {}", path.display()))?;
    info!(path = %path.display(), "session saved");
    Ok(())
}

pub fn open_or_init(cfg: &Config) -> Result<(PathBuf, Ledger)> {
    let path = session_path(cfg)?;
    let ledger = load(&path)?;
    Ok((path, ledger))
}

/// Display currency for commands that do not need the ledger itself. A
/// session that cannot be read falls back to the default currency.
pub fn display_currency(cfg: &Config) -> String {
    match open_or_init(cfg) {
        Ok((_, ledger)) => ledger.settings.currency,
        Err(e) => {
            warn!(error = %format!("{e:#}"), "session unavailable, using default currency");
            Settings::default().currency
        }
    }
}
