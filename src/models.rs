// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_BUDGET_LIMIT: i64 = 50_000;
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";
pub const DEFAULT_CURRENCY_CODE: &str = "INR";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Income,
    Expense,
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TxKind::Income => write!(f, "income"),
            TxKind::Expense => write!(f, "expense"),
        }
    }
}

impl FromStr for TxKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "income" => Ok(TxKind::Income),
            "expense" => Ok(TxKind::Expense),
            other => Err(format!("Unknown transaction type '{}'", other)),
        }
    }
}

/// A single financial event. Immutable once created; there is no
/// edit or delete operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TxKind,
    pub amount: Decimal,
    pub category: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    /// Display symbol; always paired with `currency_code`.
    pub currency: String,
    pub currency_code: String,
    pub dark_mode: bool,
    pub budget_limit: i64,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY_SYMBOL.to_string(),
            currency_code: DEFAULT_CURRENCY_CODE.to_string(),
            dark_mode: false,
            budget_limit: DEFAULT_BUDGET_LIMIT,
        }
    }
}

/// The vault: root aggregate for one phone-number identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub phone_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub settings: UserSettings,
    pub transactions: Vec<Transaction>,
}

impl UserProfile {
    pub fn new(phone: &str) -> Self {
        Self {
            phone_number: phone.to_string(),
            name: None,
            created_at: Utc::now(),
            settings: UserSettings::default(),
            transactions: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CategoryInfo {
    pub name: &'static str,
    pub color: &'static str,
}

/// Fixed expense category set. Free-form labels are still accepted;
/// this list only drives display colors.
pub const CATEGORIES: &[CategoryInfo] = &[
    CategoryInfo { name: "Food", color: "#F87171" },
    CategoryInfo { name: "Rent", color: "#60A5FA" },
    CategoryInfo { name: "Transport", color: "#FBBF24" },
    CategoryInfo { name: "Shopping", color: "#A78BFA" },
    CategoryInfo { name: "Entertainment", color: "#F472B6" },
    CategoryInfo { name: "Utilities", color: "#34D399" },
    CategoryInfo { name: "Other", color: "#94A3B8" },
];

/// Lookup with a defined fallback: unknown labels render as "Other".
pub fn category_info(name: &str) -> &'static CategoryInfo {
    CATEGORIES
        .iter()
        .find(|c| c.name == name)
        .unwrap_or(&CATEGORIES[CATEGORIES.len() - 1])
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CurrencyInfo {
    pub symbol: &'static str,
    pub code: &'static str,
    pub name: &'static str,
}

const CURRENCY_TABLE: &[CurrencyInfo] = &[
    CurrencyInfo { symbol: "$", code: "USD", name: "US Dollar" },
    CurrencyInfo { symbol: "₹", code: "INR", name: "Indian Rupee" },
    CurrencyInfo { symbol: "€", code: "EUR", name: "Euro" },
    CurrencyInfo { symbol: "£", code: "GBP", name: "British Pound" },
    CurrencyInfo { symbol: "¥", code: "JPY", name: "Japanese Yen" },
    CurrencyInfo { symbol: "$", code: "AUD", name: "Australian Dollar" },
    CurrencyInfo { symbol: "$", code: "CAD", name: "Canadian Dollar" },
    CurrencyInfo { symbol: "Fr", code: "CHF", name: "Swiss Franc" },
    CurrencyInfo { symbol: "元", code: "CNY", name: "Chinese Yuan" },
    CurrencyInfo { symbol: "kr", code: "SEK", name: "Swedish Krona" },
    CurrencyInfo { symbol: "$", code: "NZD", name: "New Zealand Dollar" },
    CurrencyInfo { symbol: "₩", code: "KRW", name: "South Korean Won" },
    CurrencyInfo { symbol: "$", code: "SGD", name: "Singapore Dollar" },
    CurrencyInfo { symbol: "R$", code: "BRL", name: "Brazilian Real" },
    CurrencyInfo { symbol: "₽", code: "RUB", name: "Russian Ruble" },
    CurrencyInfo { symbol: "R", code: "ZAR", name: "South African Rand" },
    CurrencyInfo { symbol: "$", code: "MXN", name: "Mexican Peso" },
    CurrencyInfo { symbol: "$", code: "HKD", name: "Hong Kong Dollar" },
    CurrencyInfo { symbol: "₪", code: "ILS", name: "Israeli Shekel" },
    CurrencyInfo { symbol: "kr", code: "NOK", name: "Norwegian Krone" },
    CurrencyInfo { symbol: "₺", code: "TRY", name: "Turkish Lira" },
    CurrencyInfo { symbol: "₫", code: "VND", name: "Vietnamese Dong" },
    CurrencyInfo { symbol: "฿", code: "THB", name: "Thai Baht" },
    CurrencyInfo { symbol: "₱", code: "PHP", name: "Philippine Peso" },
    CurrencyInfo { symbol: "RM", code: "MYR", name: "Malaysian Ringgit" },
    CurrencyInfo { symbol: "Rp", code: "IDR", name: "Indonesian Rupiah" },
    CurrencyInfo { symbol: "د.إ", code: "AED", name: "UAE Dirham" },
    CurrencyInfo { symbol: "﷼", code: "SAR", name: "Saudi Riyal" },
    CurrencyInfo { symbol: "zł", code: "PLN", name: "Polish Zloty" },
    CurrencyInfo { symbol: "Kč", code: "CZK", name: "Czech Koruna" },
    CurrencyInfo { symbol: "Ft", code: "HUF", name: "Hungarian Forint" },
    CurrencyInfo { symbol: "kr", code: "DKK", name: "Danish Krone" },
];

/// ISO-4217-style reference list, sorted by display name.
pub static CURRENCIES: Lazy<Vec<CurrencyInfo>> = Lazy::new(|| {
    let mut list = CURRENCY_TABLE.to_vec();
    list.sort_by(|a, b| a.name.cmp(b.name));
    list
});

pub fn currency_by_code(code: &str) -> Option<&'static CurrencyInfo> {
    let code = code.to_ascii_uppercase();
    CURRENCY_TABLE.iter().find(|c| c.code == code)
}
