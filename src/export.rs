// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Transaction;
use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use csv::{QuoteStyle, WriterBuilder};

/// Renders the ledger as `ID,Type,Amount,Category,Date,Note` rows in
/// ledger order. Fields are written verbatim with no quoting: a comma
/// inside a note or category shifts that row's columns. That matches
/// the format existing consumers already parse.
pub fn render_csv(transactions: &[Transaction]) -> Result<String> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .from_writer(Vec::new());
    wtr.write_record(["ID", "Type", "Amount", "Category", "Date", "Note"])?;
    for t in transactions {
        let kind = t.kind.to_string();
        let amount = t.amount.to_string();
        let date = t.date.to_string();
        wtr.write_record([
            t.id.as_str(),
            kind.as_str(),
            amount.as_str(),
            t.category.as_str(),
            date.as_str(),
            t.note.as_deref().unwrap_or(""),
        ])?;
    }
    let buf = wtr
        .into_inner()
        .map_err(|e| anyhow!("Flush CSV buffer: {e}"))?;
    Ok(String::from_utf8(buf)?)
}

/// File name convention: `fin_track_export_<YYYY-MM-DD>.csv`, dated at
/// the moment of export.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("fin_track_export_{}.csv", date.format("%Y-%m-%d"))
}
