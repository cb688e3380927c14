// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::active_vault;
use crate::models::{Transaction, TxKind};
use crate::store::{Store, VaultPatch};
use crate::utils::{fmt_money, maybe_print_json, parse_date, parse_decimal, pretty_table};
use crate::vault::{add_transaction, TransactionDraft};
use anyhow::Result;
use serde::Serialize;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        _ => {}
    }
    Ok(())
}

/// Builds a draft from parsed CLI arguments. Split out so the arg
/// surface can be tested without touching a store.
pub fn draft_from_matches(sub: &clap::ArgMatches) -> Result<TransactionDraft> {
    let kind: TxKind = sub
        .get_one::<String>("type")
        .unwrap()
        .parse()
        .map_err(anyhow::Error::msg)?;
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let category = sub.get_one::<String>("category").unwrap().to_string();
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => chrono::Utc::now().date_naive(),
    };
    let note = sub.get_one::<String>("note").map(|s| s.to_string());
    Ok(TransactionDraft {
        kind,
        amount,
        category,
        date,
        note,
    })
}

fn add(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let (phone, mut profile) = active_vault(store)?;
    let draft = draft_from_matches(sub)?;
    add_transaction(&mut profile, draft)?;
    store.update_active_data(
        &phone,
        VaultPatch {
            transactions: Some(profile.transactions.clone()),
            ..Default::default()
        },
    )?;
    let t = &profile.transactions[0];
    println!(
        "Recorded {} {} ({}) on {}",
        t.kind,
        fmt_money(&t.amount, &profile.settings.currency),
        t.category,
        t.date
    );
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub category: String,
    pub amount: String,
    pub note: String,
}

pub fn rows_for(transactions: &[Transaction], limit: Option<usize>) -> Vec<TransactionRow> {
    let n = limit.unwrap_or(transactions.len());
    transactions
        .iter()
        .take(n)
        .map(|t| TransactionRow {
            id: t.id.clone(),
            date: t.date.to_string(),
            kind: t.kind.to_string(),
            category: t.category.clone(),
            amount: t.amount.to_string(),
            note: t.note.clone().unwrap_or_default(),
        })
        .collect()
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let (_, profile) = active_vault(store)?;
    let data = rows_for(&profile.transactions, sub.get_one::<usize>("limit").copied());
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    r.kind.clone(),
                    r.category.clone(),
                    r.amount.clone(),
                    r.note.clone(),
                ]
            })
            .collect();
        if rows.is_empty() {
            println!("No transactions yet.");
        } else {
            println!(
                "{}",
                pretty_table(&["Date", "Type", "Category", "Amount", "Note"], rows)
            );
        }
    }
    Ok(())
}
