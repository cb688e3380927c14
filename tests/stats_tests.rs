// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use fintrack::models::{Transaction, TxKind, UserSettings};
use fintrack::stats::{
    balance, category_breakdown, is_over_budget, monthly_series, summarize, total_expense,
    total_income,
};
use rust_decimal::Decimal;

fn tx(kind: TxKind, amount: i64, category: &str, date: &str) -> Transaction {
    Transaction {
        id: format!("{}-{}-{}", kind, category, amount),
        kind,
        amount: Decimal::from(amount),
        category: category.to_string(),
        date: date.parse::<NaiveDate>().unwrap(),
        note: None,
    }
}

fn settings_with_budget(limit: i64) -> UserSettings {
    UserSettings {
        budget_limit: limit,
        ..UserSettings::default()
    }
}

#[test]
fn empty_ledger_is_all_zero_and_under_budget() {
    let txs: Vec<Transaction> = vec![];
    assert_eq!(total_income(&txs), Decimal::ZERO);
    assert_eq!(total_expense(&txs), Decimal::ZERO);
    assert_eq!(balance(&txs), Decimal::ZERO);
    assert!(!is_over_budget(&txs, &settings_with_budget(0)));
    assert!(category_breakdown(&txs).is_empty());
    assert!(monthly_series(&txs).is_empty());
}

#[test]
fn salary_and_rent_scenario() {
    let txs = vec![
        tx(TxKind::Income, 85_000, "Salary", "2025-08-01"),
        tx(TxKind::Expense, 12_500, "Rent", "2025-08-02"),
    ];
    let s = summarize(&txs, &settings_with_budget(25_000));
    assert_eq!(s.total_income, Decimal::from(85_000));
    assert_eq!(s.total_expense, Decimal::from(12_500));
    assert_eq!(s.balance, Decimal::from(72_500));
    assert!(!s.over_budget);
}

#[test]
fn category_breakdown_scenario() {
    let txs = vec![
        tx(TxKind::Expense, 4_500, "Food", "2025-08-03"),
        tx(TxKind::Expense, 3_500, "Shopping", "2025-08-04"),
        tx(TxKind::Expense, 850, "Utilities", "2025-08-05"),
    ];
    assert_eq!(total_expense(&txs), Decimal::from(8_850));
    assert!(!is_over_budget(&txs, &settings_with_budget(25_000)));
    let breakdown = category_breakdown(&txs);
    assert_eq!(breakdown.len(), 3);
    let get = |cat: &str| {
        breakdown
            .iter()
            .find(|c| c.category == cat)
            .map(|c| c.amount)
            .unwrap()
    };
    assert_eq!(get("Food"), Decimal::from(4_500));
    assert_eq!(get("Shopping"), Decimal::from(3_500));
    assert_eq!(get("Utilities"), Decimal::from(850));
}

#[test]
fn breakdown_ignores_income_and_sums_to_total_expense() {
    let txs = vec![
        tx(TxKind::Income, 1_000, "Salary", "2025-01-01"),
        tx(TxKind::Expense, 300, "Food", "2025-01-02"),
        tx(TxKind::Expense, 200, "Food", "2025-01-03"),
        tx(TxKind::Expense, 150, "Transport", "2025-01-04"),
    ];
    let breakdown = category_breakdown(&txs);
    assert!(breakdown.iter().all(|c| c.category != "Salary"));
    assert!(breakdown.iter().all(|c| c.amount > Decimal::ZERO));
    let sum: Decimal = breakdown.iter().map(|c| c.amount).sum();
    assert_eq!(sum, total_expense(&txs));
}

#[test]
fn budget_boundary_is_strict() {
    let txs = vec![tx(TxKind::Expense, 500, "Food", "2025-03-01")];
    assert!(!is_over_budget(&txs, &settings_with_budget(500)));
    assert!(is_over_budget(&txs, &settings_with_budget(499)));
}

#[test]
fn balance_identity_holds() {
    let txs = vec![
        tx(TxKind::Income, 10, "Salary", "2025-01-01"),
        tx(TxKind::Expense, 3, "Food", "2025-01-05"),
        tx(TxKind::Income, 7, "Bonus", "2025-02-01"),
        tx(TxKind::Expense, 20, "Rent", "2025-02-02"),
    ];
    assert_eq!(balance(&txs), total_income(&txs) - total_expense(&txs));
    // Net overspend goes negative.
    assert_eq!(balance(&txs), Decimal::from(-6));
}

#[test]
fn monthly_series_merges_same_month_across_years() {
    let txs = vec![
        tx(TxKind::Expense, 100, "Food", "2024-03-10"),
        tx(TxKind::Expense, 50, "Food", "2025-03-12"),
        tx(TxKind::Income, 70, "Salary", "2025-04-01"),
    ];
    let series = monthly_series(&txs);
    assert_eq!(series.len(), 2);
    assert_eq!(series[0].month, "Mar");
    assert_eq!(series[0].expense, Decimal::from(150));
    assert_eq!(series[0].income, Decimal::ZERO);
    assert_eq!(series[1].month, "Apr");
    assert_eq!(series[1].income, Decimal::from(70));
}

#[test]
fn monthly_series_caps_at_six_buckets() {
    let dates = [
        "2025-01-01", "2025-02-01", "2025-03-01", "2025-04-01", "2025-05-01", "2025-06-01",
        "2025-07-01", "2025-08-01",
    ];
    let txs: Vec<Transaction> = dates
        .iter()
        .map(|d| tx(TxKind::Expense, 10, "Food", d))
        .collect();
    let series = monthly_series(&txs);
    assert_eq!(series.len(), 6);
    // The first two encountered buckets fall off.
    assert_eq!(series[0].month, "Mar");
    assert_eq!(series[5].month, "Aug");
}

#[test]
fn aggregation_does_not_mutate_input() {
    let txs = vec![
        tx(TxKind::Income, 10, "Salary", "2025-01-01"),
        tx(TxKind::Expense, 5, "Food", "2025-01-02"),
    ];
    let before = txs.clone();
    let _ = summarize(&txs, &UserSettings::default());
    let _ = category_breakdown(&txs);
    let _ = monthly_series(&txs);
    assert_eq!(txs, before);
}
