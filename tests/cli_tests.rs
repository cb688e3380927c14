// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use fintrack::commands::transactions::{draft_from_matches, rows_for};
use fintrack::models::{Transaction, TxKind};
use fintrack::{cli, vault};
use rust_decimal::Decimal;

#[test]
fn tx_add_arguments_build_a_draft() {
    let cli = cli::build_cli();
    let matches = cli.get_matches_from([
        "fintrack", "tx", "add", "--type", "expense", "--amount", "450", "--category", "Food",
        "--date", "2025-08-10", "--note", "Lunch",
    ]);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    let Some(("add", add_m)) = tx_m.subcommand() else {
        panic!("no add subcommand");
    };
    let draft = draft_from_matches(add_m).unwrap();
    assert_eq!(draft.kind, TxKind::Expense);
    assert_eq!(draft.amount, Decimal::from(450));
    assert_eq!(draft.category, "Food");
    assert_eq!(draft.date.to_string(), "2025-08-10");
    assert_eq!(draft.note.as_deref(), Some("Lunch"));
}

#[test]
fn tx_add_defaults_to_expense_and_today() {
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["fintrack", "tx", "add", "--amount", "100"]);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    let Some(("add", add_m)) = tx_m.subcommand() else {
        panic!("no add subcommand");
    };
    let draft = draft_from_matches(add_m).unwrap();
    assert_eq!(draft.kind, TxKind::Expense);
    assert_eq!(draft.category, "Food");
    assert_eq!(draft.date, chrono::Utc::now().date_naive());
    assert_eq!(draft.note, None);
}

#[test]
fn tx_add_rejects_bad_amount_string() {
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["fintrack", "tx", "add", "--amount", "lots"]);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    let Some(("add", add_m)) = tx_m.subcommand() else {
        panic!("no add subcommand");
    };
    assert!(draft_from_matches(add_m).is_err());
}

#[test]
fn list_limit_respected() {
    let today = chrono::Utc::now().date_naive();
    let (transactions, _, _) = vault::demo_profile_data(today);
    let rows = rows_for(&transactions, Some(2));
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].kind, "income");
    assert_eq!(rows[1].category, "Rent");

    let all: Vec<Transaction> = transactions;
    assert_eq!(rows_for(&all, None).len(), 6);
}
