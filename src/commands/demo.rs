// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::active_vault;
use crate::store::{Store, VaultPatch};
use crate::vault::demo_profile_data;
use anyhow::Result;

/// Replaces the active vault's ledger with the sample dataset.
pub fn handle(store: &Store) -> Result<()> {
    let (phone, profile) = active_vault(store)?;
    let today = chrono::Utc::now().date_naive();
    let (transactions, name, budget_limit) = demo_profile_data(today);
    let mut settings = profile.settings.clone();
    settings.budget_limit = budget_limit;
    store.update_active_data(
        &phone,
        VaultPatch {
            name: Some(Some(name)),
            settings: Some(settings),
            transactions: Some(transactions),
        },
    )?;
    println!("Demo data loaded into vault {}", phone);
    Ok(())
}
