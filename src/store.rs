// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db;
use crate::models::UserProfile;
use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

const SESSION_KEY: &str = "current_user";

/// Session + vault persistence over the key-value schema in `db`.
///
/// Every mutation goes through `update_active_data`, which re-reads the
/// latest persisted record before merging. With a single logical writer
/// per session that is enough; there is no cross-process locking.
pub struct Store {
    conn: Connection,
}

/// Field subset for a shallow merge over a vault. Absent fields are
/// left unchanged.
#[derive(Debug, Default, Clone)]
pub struct VaultPatch {
    pub name: Option<Option<String>>,
    pub settings: Option<crate::models::UserSettings>,
    pub transactions: Option<Vec<crate::models::Transaction>>,
}

impl Store {
    pub fn open() -> Result<Self> {
        let conn = db::open_or_init()?;
        Ok(Self { conn })
    }

    /// Wrap an existing connection (tests use in-memory SQLite).
    pub fn new(mut conn: Connection) -> Result<Self> {
        db::init_schema(&mut conn)?;
        Ok(Self { conn })
    }

    // Session management

    pub fn current_user(&self) -> Result<Option<String>> {
        let v: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM session WHERE key=?1",
                params![SESSION_KEY],
                |r| r.get(0),
            )
            .optional()?;
        Ok(v)
    }

    pub fn set_current_user(&self, phone: Option<&str>) -> Result<()> {
        match phone {
            Some(p) => {
                self.conn.execute(
                    "INSERT INTO session(key, value) VALUES(?1, ?2)
                     ON CONFLICT(key) DO UPDATE SET value=excluded.value",
                    params![SESSION_KEY, p],
                )?;
            }
            None => {
                self.conn
                    .execute("DELETE FROM session WHERE key=?1", params![SESSION_KEY])?;
            }
        }
        Ok(())
    }

    // Scoped vault access

    /// Get-or-create: a brand-new identity gets an empty ledger and
    /// default settings, persisted before being returned. A stored
    /// record that no longer deserializes is replaced with a fresh
    /// default profile rather than aborting the session.
    pub fn vault(&self, phone: &str) -> Result<UserProfile> {
        let raw: Option<String> = self
            .conn
            .query_row(
                "SELECT profile FROM vaults WHERE phone=?1",
                params![phone],
                |r| r.get(0),
            )
            .optional()?;
        if let Some(json) = raw {
            match serde_json::from_str::<UserProfile>(&json) {
                Ok(profile) => return Ok(profile),
                Err(e) => {
                    eprintln!("Warning: corrupt vault record for {phone} ({e}); resetting to defaults");
                }
            }
        }
        let profile = UserProfile::new(phone);
        self.save_vault(phone, &profile)?;
        Ok(profile)
    }

    /// Full-record replace; there are no partial writes.
    pub fn save_vault(&self, phone: &str, profile: &UserProfile) -> Result<()> {
        let json = serde_json::to_string(profile)
            .with_context(|| format!("Serialize vault for {phone}"))?;
        self.conn.execute(
            "INSERT INTO vaults(phone, profile, updated_at) VALUES(?1, ?2, datetime('now'))
             ON CONFLICT(phone) DO UPDATE SET profile=excluded.profile, updated_at=excluded.updated_at",
            params![phone, json],
        )?;
        Ok(())
    }

    /// Read-modify-write against the latest persisted vault. Sole write
    /// path for all higher-level mutation commands.
    pub fn update_active_data(&self, phone: &str, patch: VaultPatch) -> Result<UserProfile> {
        let mut profile = self.vault(phone)?;
        if let Some(name) = patch.name {
            profile.name = name;
        }
        if let Some(settings) = patch.settings {
            profile.settings = settings;
        }
        if let Some(transactions) = patch.transactions {
            profile.transactions = transactions;
        }
        self.save_vault(phone, &profile)?;
        Ok(profile)
    }
}
