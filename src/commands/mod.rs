// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod dashboard;
pub mod demo;
pub mod exporter;
pub mod session;
pub mod settings;
pub mod stats;
pub mod transactions;

use crate::models::UserProfile;
use crate::store::Store;
use anyhow::{Context, Result};

/// Resolves the active identity and loads (or lazily creates) its vault.
pub fn active_vault(store: &Store) -> Result<(String, UserProfile)> {
    let phone = store
        .current_user()?
        .context("No active session. Run 'fintrack login <phone> --code 123456' first")?;
    let profile = store.vault(&phone)?;
    Ok((phone, profile))
}
