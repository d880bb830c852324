// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rust_decimal::Decimal;

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

/// Parses and validates an expense amount; the API rejects non-positive
/// amounts, so catch them before the round trip.
pub fn parse_amount(s: &str) -> Result<Decimal> {
    let d = parse_decimal(s)?;
    if d <= Decimal::ZERO {
        anyhow::bail!("Amount must be greater than 0, got '{}'", s);
    }
    Ok(d)
}

pub fn fmt_money(d: &Decimal, symbol: &str) -> String {
    format!("{}{:.2}", symbol, d.round_dp(2))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

/// First and last day of the month containing `date`.
pub fn month_bounds(date: NaiveDate) -> Result<(NaiveDate, NaiveDate)> {
    let (y, m) = (date.year(), date.month());
    let start = NaiveDate::from_ymd_opt(y, m, 1)
        .ok_or_else(|| anyhow::anyhow!("Invalid month {}-{:02}", y, m))?;
    let last_day = match m {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if NaiveDate::from_ymd_opt(y, 2, 29).is_some() {
                29
            } else {
                28
            }
        }
        _ => return Err(anyhow::anyhow!("Invalid month number {}", m)),
    };
    let end = NaiveDate::from_ymd_opt(y, m, last_day)
        .ok_or_else(|| anyhow::anyhow!("Invalid month {}-{:02}", y, m))?;
    Ok((start, end))
}

/// `date` moved back by `months` calendar months, clamping the day to the
/// target month's length (2025-03-31 minus 1 month is 2025-02-28).
pub fn months_back(date: NaiveDate, months: u32) -> Result<NaiveDate> {
    let total = date.year() * 12 + date.month0() as i32 - months as i32;
    let (y, m) = (total.div_euclid(12), total.rem_euclid(12) as u32 + 1);
    let probe = NaiveDate::from_ymd_opt(y, m, 1)
        .ok_or_else(|| anyhow::anyhow!("Date out of range going back {} months", months))?;
    let (_, month_last) = month_bounds(probe)?;
    let day = date.day().min(month_last.day());
    NaiveDate::from_ymd_opt(y, m, day)
        .ok_or_else(|| anyhow::anyhow!("Date out of range going back {} months", months))
}
