// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use fintrack::export::{export_file_name, render_csv};
use fintrack::models::{Transaction, TxKind};
use rust_decimal::Decimal;

fn tx(id: &str, kind: TxKind, amount: i64, category: &str, date: &str, note: Option<&str>) -> Transaction {
    Transaction {
        id: id.to_string(),
        kind,
        amount: Decimal::from(amount),
        category: category.to_string(),
        date: date.parse::<NaiveDate>().unwrap(),
        note: note.map(|s| s.to_string()),
    }
}

#[test]
fn header_only_for_empty_ledger() {
    let csv = render_csv(&[]).unwrap();
    assert_eq!(csv, "ID,Type,Amount,Category,Date,Note\n");
}

#[test]
fn rows_follow_ledger_order() {
    let txs = vec![
        tx("a1", TxKind::Income, 85_000, "Income", "2025-08-01", Some("Monthly Salary")),
        tx("a2", TxKind::Expense, 12_500, "Rent", "2025-08-02", None),
    ];
    let csv = render_csv(&txs).unwrap();
    let expected = "ID,Type,Amount,Category,Date,Note\n\
                    a1,income,85000,Income,2025-08-01,Monthly Salary\n\
                    a2,expense,12500,Rent,2025-08-02,\n";
    assert_eq!(csv, expected);
}

#[test]
fn embedded_commas_are_not_escaped() {
    // Known format defect kept for wire compatibility: the note is
    // written verbatim and shifts the row's columns.
    let txs = vec![tx(
        "a1",
        TxKind::Expense,
        100,
        "Food",
        "2025-08-02",
        Some("bread, milk"),
    )];
    let csv = render_csv(&txs).unwrap();
    assert!(csv.contains("a1,expense,100,Food,2025-08-02,bread, milk\n"));
    assert!(!csv.contains('"'));
}

#[test]
fn file_name_uses_export_date() {
    let date = NaiveDate::from_ymd_opt(2025, 8, 29).unwrap();
    assert_eq!(export_file_name(date), "fin_track_export_2025-08-29.csv");
}

#[test]
fn export_writes_readable_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(export_file_name(
        NaiveDate::from_ymd_opt(2025, 8, 29).unwrap(),
    ));
    let txs = vec![tx("a1", TxKind::Expense, 450, "Food", "2025-08-10", Some("Lunch"))];
    std::fs::write(&path, render_csv(&txs).unwrap()).unwrap();
    let back = std::fs::read_to_string(&path).unwrap();
    assert!(back.starts_with("ID,Type,Amount,Category,Date,Note\n"));
    assert!(back.contains("a1,expense,450,Food,2025-08-10,Lunch"));
}
