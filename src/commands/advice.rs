// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::advice::{AdviceClient, AdviceRequest};
use crate::config::Config;
use crate::ledger::Ledger;
use anyhow::Result;
use tracing::warn;

pub const ADVICE_FAILED: &str = "Could not generate financial advice. Please try again later.";

/// Never fails on the remote side; a failed call becomes a notice.
pub fn handle(ledger: &Ledger, cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let req = AdviceRequest::from_ledger(ledger);
    if sub.get_flag("dry-run") {
        println!("{}", req.prompt());
        return Ok(());
    }
    match AdviceClient::from_config(cfg).and_then(|c| c.generate(&req)) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            warn!(error = %e, "advice request failed");
            println!("{}", ADVICE_FAILED);
        }
    }
    Ok(())
}
