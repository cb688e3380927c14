// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::active_vault;
use crate::models::{currency_by_code, CURRENCIES};
use crate::store::{Store, VaultPatch};
use crate::utils::{maybe_print_json, pretty_table};
use crate::vault;
use anyhow::{anyhow, Result};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", sub)) => show(store, sub)?,
        Some(("currency", sub)) => currency(store, sub)?,
        Some(("currencies", sub)) => currencies(sub)?,
        Some(("dark-mode", sub)) => dark_mode(store, sub)?,
        Some(("budget", sub)) => budget(store, sub)?,
        Some(("name", sub)) => name(store, sub)?,
        Some(("reset", _)) => reset(store)?,
        _ => {}
    }
    Ok(())
}

fn show(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let (phone, profile) = active_vault(store)?;
    if maybe_print_json(json_flag, jsonl_flag, &profile.settings)? {
        return Ok(());
    }
    let s = &profile.settings;
    let rows = vec![
        vec!["Phone".to_string(), phone],
        vec![
            "Name".to_string(),
            profile.name.clone().unwrap_or_else(|| "(not set)".into()),
        ],
        vec![
            "Currency".to_string(),
            format!("{} ({})", s.currency, s.currency_code),
        ],
        vec![
            "Dark mode".to_string(),
            if s.dark_mode { "on" } else { "off" }.to_string(),
        ],
        vec!["Budget limit".to_string(), s.budget_limit.to_string()],
        vec![
            "Transactions".to_string(),
            profile.transactions.len().to_string(),
        ],
    ];
    println!("{}", pretty_table(&["Setting", "Value"], rows));
    Ok(())
}

fn persist_settings(store: &Store, phone: &str, profile: crate::models::UserProfile) -> Result<()> {
    store.update_active_data(
        phone,
        VaultPatch {
            settings: Some(profile.settings),
            ..Default::default()
        },
    )?;
    Ok(())
}

fn currency(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let code = sub.get_one::<String>("code").unwrap();
    let entry = currency_by_code(code)
        .ok_or_else(|| anyhow!("Unknown currency code '{}'. See 'fintrack settings currencies'", code))?;
    let (phone, mut profile) = active_vault(store)?;
    vault::select_currency(&mut profile, entry);
    println!("Currency set to {} {} ({})", entry.symbol, entry.code, entry.name);
    persist_settings(store, &phone, profile)
}

fn currencies(sub: &clap::ArgMatches) -> Result<()> {
    let query = sub
        .get_one::<String>("query")
        .map(|q| q.to_lowercase())
        .unwrap_or_default();
    let rows: Vec<Vec<String>> = CURRENCIES
        .iter()
        .filter(|c| {
            c.name.to_lowercase().contains(&query) || c.code.to_lowercase().contains(&query)
        })
        .map(|c| {
            vec![
                c.code.to_string(),
                c.symbol.to_string(),
                c.name.to_string(),
            ]
        })
        .collect();
    if rows.is_empty() {
        println!("No currencies match '{}'", query);
    } else {
        println!("{}", pretty_table(&["Code", "Symbol", "Name"], rows));
    }
    Ok(())
}

fn dark_mode(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let on = sub.get_one::<String>("state").unwrap().as_str() == "on";
    let (phone, mut profile) = active_vault(store)?;
    let mut settings = profile.settings.clone();
    settings.dark_mode = on;
    vault::update_settings(&mut profile, settings);
    println!("Dark mode {}", if on { "enabled" } else { "disabled" });
    persist_settings(store, &phone, profile)
}

fn budget(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let raw = sub.get_one::<String>("amount").unwrap();
    let limit = vault::coerce_budget_limit(raw);
    let (phone, mut profile) = active_vault(store)?;
    let mut settings = profile.settings.clone();
    settings.budget_limit = limit;
    vault::update_settings(&mut profile, settings);
    println!("Budget limit set to {}{}", profile.settings.currency, limit);
    persist_settings(store, &phone, profile)
}

fn name(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let raw = sub
        .get_one::<String>("name")
        .map(|s| s.as_str())
        .unwrap_or("");
    let (phone, mut profile) = active_vault(store)?;
    vault::update_name(&mut profile, raw);
    match &profile.name {
        Some(n) => println!("Name set to {}", n),
        None => println!("Name cleared"),
    }
    store.update_active_data(
        &phone,
        VaultPatch {
            name: Some(profile.name),
            ..Default::default()
        },
    )?;
    Ok(())
}

fn reset(store: &Store) -> Result<()> {
    let (phone, mut profile) = active_vault(store)?;
    vault::reset_vault(&mut profile);
    store.update_active_data(
        &phone,
        VaultPatch {
            settings: Some(profile.settings),
            transactions: Some(profile.transactions),
            ..Default::default()
        },
    )?;
    println!("Vault reset: transactions cleared, budget limit restored");
    Ok(())
}
