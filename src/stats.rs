// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure aggregation over a ledger. Nothing here mutates its inputs or
//! caches anything; views are recomputed from scratch on every read.

use crate::models::{Transaction, TxKind, UserSettings};
use rust_decimal::Decimal;
use serde::Serialize;

/// Number of month buckets shown in the trend series.
const SERIES_MONTHS: usize = 6;

pub fn total_income(transactions: &[Transaction]) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.kind == TxKind::Income)
        .map(|t| t.amount)
        .sum()
}

pub fn total_expense(transactions: &[Transaction]) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.kind == TxKind::Expense)
        .map(|t| t.amount)
        .sum()
}

pub fn balance(transactions: &[Transaction]) -> Decimal {
    total_income(transactions) - total_expense(transactions)
}

/// Strict comparison: spending exactly the limit is not over budget.
pub fn is_over_budget(transactions: &[Transaction], settings: &UserSettings) -> bool {
    total_expense(transactions) > Decimal::from(settings.budget_limit)
}

#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub balance: Decimal,
    pub over_budget: bool,
}

pub fn summarize(transactions: &[Transaction], settings: &UserSettings) -> Summary {
    let total_income = total_income(transactions);
    let total_expense = total_expense(transactions);
    Summary {
        total_income,
        total_expense,
        balance: total_income - total_expense,
        over_budget: total_expense > Decimal::from(settings.budget_limit),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySpend {
    pub category: String,
    pub amount: Decimal,
}

/// Expense totals per category label, in first-encounter order. Only
/// categories that actually occur appear; there are no zero entries.
pub fn category_breakdown(transactions: &[Transaction]) -> Vec<CategorySpend> {
    let mut out: Vec<CategorySpend> = Vec::new();
    for t in transactions.iter().filter(|t| t.kind == TxKind::Expense) {
        match out.iter_mut().find(|c| c.category == t.category) {
            Some(entry) => entry.amount += t.amount,
            None => out.push(CategorySpend {
                category: t.category.clone(),
                amount: t.amount,
            }),
        }
    }
    out
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthFlow {
    pub month: String,
    pub income: Decimal,
    pub expense: Decimal,
}

/// Income/expense sums bucketed by month-of-year name ("Jan".."Dec").
/// Buckets are keyed by month number only, so the same month from
/// different years merges. At most the last six buckets (in
/// first-encounter order) are returned.
pub fn monthly_series(transactions: &[Transaction]) -> Vec<MonthFlow> {
    let mut out: Vec<MonthFlow> = Vec::new();
    for t in transactions {
        let month = t.date.format("%b").to_string();
        let idx = match out.iter().position(|m| m.month == month) {
            Some(i) => i,
            None => {
                out.push(MonthFlow {
                    month,
                    income: Decimal::ZERO,
                    expense: Decimal::ZERO,
                });
                out.len() - 1
            }
        };
        let entry = &mut out[idx];
        match t.kind {
            TxKind::Income => entry.income += t.amount,
            TxKind::Expense => entry.expense += t.amount,
        }
    }
    if out.len() > SERIES_MONTHS {
        out.split_off(out.len() - SERIES_MONTHS)
    } else {
        out
    }
}
