// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::active_vault;
use crate::stats;
use crate::store::Store;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;

const RECENT_SHOWN: usize = 5;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let (_, profile) = active_vault(store)?;
    let summary = stats::summarize(&profile.transactions, &profile.settings);

    if maybe_print_json(json_flag, jsonl_flag, &summary)? {
        return Ok(());
    }

    match &profile.name {
        Some(name) => println!("Hi, {}! Here is your financial summary.", name),
        None => println!("Overview of your finances"),
    }
    let ccy = &profile.settings.currency;
    println!(
        "{}",
        pretty_table(
            &["Total Balance", "Income", "Expense"],
            vec![vec![
                fmt_money(&summary.balance, ccy),
                fmt_money(&summary.total_income, ccy),
                fmt_money(&summary.total_expense, ccy),
            ]],
        )
    );
    if summary.over_budget {
        println!(
            "Budget Alert! You've exceeded your limit of {}{}.",
            ccy, profile.settings.budget_limit
        );
    }

    if profile.transactions.is_empty() {
        println!("No transactions yet. Use 'fintrack tx add' to start tracking.");
        return Ok(());
    }
    println!("Recent Transactions");
    let rows: Vec<Vec<String>> = profile
        .transactions
        .iter()
        .take(RECENT_SHOWN)
        .map(|t| {
            vec![
                t.date.to_string(),
                t.kind.to_string(),
                t.category.clone(),
                fmt_money(&t.amount, ccy),
                t.note.clone().unwrap_or_default(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Date", "Type", "Category", "Amount", "Note"], rows)
    );
    Ok(())
}
