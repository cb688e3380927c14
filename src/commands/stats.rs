// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::active_vault;
use crate::models::category_info;
use crate::stats::{category_breakdown, monthly_series};
use crate::store::Store;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("categories", sub)) => categories(store, sub)?,
        Some(("monthly", sub)) => monthly(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn categories(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let (_, profile) = active_vault(store)?;
    let data = category_breakdown(&profile.transactions);
    if maybe_print_json(json_flag, jsonl_flag, &data)? {
        return Ok(());
    }
    if data.is_empty() {
        println!("No expense data to visualize");
        return Ok(());
    }
    let ccy = &profile.settings.currency;
    let rows: Vec<Vec<String>> = data
        .iter()
        .map(|c| {
            vec![
                c.category.clone(),
                fmt_money(&c.amount, ccy),
                category_info(&c.category).color.to_string(),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Category", "Spent", "Color"], rows));
    Ok(())
}

fn monthly(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let (_, profile) = active_vault(store)?;
    let data = monthly_series(&profile.transactions);
    if maybe_print_json(json_flag, jsonl_flag, &data)? {
        return Ok(());
    }
    if data.is_empty() {
        println!("Insufficient data for monthly comparison");
        return Ok(());
    }
    let ccy = &profile.settings.currency;
    let rows: Vec<Vec<String>> = data
        .iter()
        .map(|f| {
            vec![
                f.month.clone(),
                fmt_money(&f.income, ccy),
                fmt_money(&f.expense, ccy),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Month", "Income", "Expense"], rows));
    Ok(())
}
