// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Process-level configuration read from the environment.
//!
//! Per-session settings such as the display currency and the monthly budget
//! live in the ledger instead, so they travel with the session file.

use std::path::PathBuf;
use std::time::Duration;

pub const ENV_SESSION: &str = "AGRIFIN_SESSION";
pub const ENV_ADVICE_URL: &str = "AGRIFIN_ADVICE_URL";
pub const ENV_ADVICE_KEY: &str = "AGRIFIN_ADVICE_KEY";
pub const ENV_ADVICE_TIMEOUT: &str = "AGRIFIN_ADVICE_TIMEOUT_SECS";

const DEFAULT_ADVICE_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub session_path: Option<PathBuf>,
    pub advice_url: Option<String>,
    pub advice_key: Option<String>,
    pub advice_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            session_path: None,
            advice_url: None,
            advice_key: None,
            advice_timeout: DEFAULT_ADVICE_TIMEOUT,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    /// Build from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |k: &str| {
            lookup(k)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let advice_timeout = get(ENV_ADVICE_TIMEOUT)
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|s| *s > 0)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_ADVICE_TIMEOUT);
        Self {
            session_path: get(ENV_SESSION).map(PathBuf::from),
            advice_url: get(ENV_ADVICE_URL),
            advice_key: get(ENV_ADVICE_KEY),
            advice_timeout,
        }
    }
}
