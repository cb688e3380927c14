// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::ValidationError;
use crate::models::{
    CurrencyInfo, Transaction, TxKind, UserProfile, UserSettings, DEFAULT_BUDGET_LIMIT,
};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Input for a new ledger entry, before validation.
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    pub kind: TxKind,
    pub amount: Decimal,
    pub category: String,
    pub date: NaiveDate,
    pub note: Option<String>,
}

static ID_COUNTER: Lazy<AtomicU64> = Lazy::new(|| {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1);
    AtomicU64::new(nanos)
});

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut buf = Vec::new();
    loop {
        buf.push(DIGITS[(n % 36) as usize]);
        n /= 36;
        if n == 0 {
            break;
        }
    }
    buf.reverse();
    String::from_utf8(buf).unwrap_or_default()
}

/// Opaque id, unique within the process, stable after creation.
pub fn new_tx_id() -> String {
    to_base36(ID_COUNTER.fetch_add(1, Ordering::Relaxed))
}

/// Validates a draft and prepends the resulting transaction to the
/// ledger (newest first). Income entries always get category "Income";
/// a blank note is stored as absent. The caller persists the updated
/// profile before treating the entry as committed.
pub fn add_transaction(
    profile: &mut UserProfile,
    draft: TransactionDraft,
) -> Result<(), ValidationError> {
    if draft.amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount);
    }
    let note = draft
        .note
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string);
    if draft.kind == TxKind::Expense && draft.category == "Other" && note.is_none() {
        return Err(ValidationError::NoteRequired);
    }
    let category = if draft.kind == TxKind::Income {
        "Income".to_string()
    } else {
        draft.category
    };
    profile.transactions.insert(
        0,
        Transaction {
            id: new_tx_id(),
            kind: draft.kind,
            amount: draft.amount,
            category,
            date: draft.date,
            note,
        },
    );
    Ok(())
}

/// Full settings replacement. The budget limit is clamped to be
/// non-negative; pairing of symbol and code is the caller's concern
/// (see `select_currency`).
pub fn update_settings(profile: &mut UserProfile, mut settings: UserSettings) {
    settings.budget_limit = settings.budget_limit.max(0);
    profile.settings = settings;
}

/// A non-numeric budget input is treated as 0, not an error.
pub fn coerce_budget_limit(raw: &str) -> i64 {
    raw.trim().parse::<i64>().unwrap_or(0).max(0)
}

/// Trims the name; an empty result means "no name set".
pub fn update_name(profile: &mut UserProfile, raw: &str) {
    let trimmed = raw.trim();
    profile.name = if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    };
}

/// Clears the ledger and restores the default budget limit. Currency
/// pair, dark mode, and name survive.
pub fn reset_vault(profile: &mut UserProfile) {
    profile.transactions.clear();
    profile.settings.budget_limit = DEFAULT_BUDGET_LIMIT;
}

/// Sets symbol and code together; the pair is never written
/// independently anywhere else.
pub fn select_currency(profile: &mut UserProfile, entry: &CurrencyInfo) {
    profile.settings.currency = entry.symbol.to_string();
    profile.settings.currency_code = entry.code.to_string();
}

/// Sample ledger for screenshots and demos: replaces the current
/// transactions, sets the display name, and lowers the budget so the
/// alert state is easy to reach.
pub fn demo_profile_data(today: NaiveDate) -> (Vec<Transaction>, String, i64) {
    let rows: &[(&str, TxKind, i64, &str, &str)] = &[
        ("1", TxKind::Income, 85_000, "Salary", "Monthly Salary"),
        ("2", TxKind::Expense, 12_500, "Rent", "Apartment Rent"),
        ("3", TxKind::Expense, 4_500, "Food", "Grocery Shopping"),
        ("4", TxKind::Expense, 1_200, "Transport", "Fuel"),
        ("5", TxKind::Expense, 3_500, "Shopping", "New Shoes"),
        ("6", TxKind::Expense, 850, "Utilities", "Electricity Bill"),
    ];
    let transactions = rows
        .iter()
        .map(|(id, kind, amount, category, note)| Transaction {
            id: (*id).to_string(),
            kind: *kind,
            amount: Decimal::from(*amount),
            category: (*category).to_string(),
            date: today,
            note: Some((*note).to_string()),
        })
        .collect();
    (transactions, "John Doe".to_string(), 25_000)
}
