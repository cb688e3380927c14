// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::active_vault;
use crate::export::{export_file_name, render_csv};
use crate::store::Store;
use anyhow::{Context, Result};
use std::fs;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    let (_, profile) = active_vault(store)?;
    let out = match m.get_one::<String>("out") {
        Some(p) => p.clone(),
        None => export_file_name(chrono::Utc::now().date_naive()),
    };
    let csv = render_csv(&profile.transactions)?;
    fs::write(&out, csv).with_context(|| format!("Write export to {}", out))?;
    println!(
        "Exported {} transactions to {}",
        profile.transactions.len(),
        out
    );
    Ok(())
}
