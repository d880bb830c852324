// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Utc;
use rust_decimal::Decimal;

use crate::client::ApiClient;
use crate::config::Config;
use crate::session::SessionStore;
use crate::summary;
use crate::utils::{fmt_money, maybe_print_json, month_bounds, pretty_table};

use super::expenses::expense_rows;

const RECENT_LIMIT: usize = 5;

/// Current-month overview: total, transaction count, average, per-category
/// breakdown with percentages, and the most recent records.
pub fn handle(config: &Config, session: &SessionStore, m: &clap::ArgMatches) -> Result<()> {
    let api = ApiClient::new(config, session.token())?;
    let (start, end) = month_bounds(Utc::now().date_naive())?;

    let expenses = api.expenses_by_date_range(start, end)?;
    let total = api.total_by_date_range(start, end)?.total;
    let breakdown = api.category_summary(start, end)?;

    // Count and average derive from the returned list, not a server field.
    let count = expenses.len();
    let average = if count == 0 {
        Decimal::ZERO
    } else {
        (total / Decimal::from(count as u64)).round_dp(2)
    };

    if m.get_flag("json") {
        let payload = serde_json::json!({
            "startDate": start,
            "endDate": end,
            "total": total,
            "count": count,
            "average": average,
            "categoryBreakdown": breakdown,
            "recent": expenses.iter().take(RECENT_LIMIT).collect::<Vec<_>>(),
        });
        maybe_print_json(true, false, &payload)?;
        return Ok(());
    }

    println!("Dashboard {} to {}", start, end);
    println!(
        "{}",
        pretty_table(
            &["Total This Month", "Transactions", "Average"],
            vec![vec![
                fmt_money(&total, &config.currency),
                count.to_string(),
                fmt_money(&average, &config.currency),
            ]],
        )
    );

    if !breakdown.is_empty() {
        println!("\nSpending by Category");
        let rows: Vec<Vec<String>> = summary::sorted_breakdown(&breakdown)
            .into_iter()
            .map(|(category, amount)| {
                vec![
                    category.to_string(),
                    fmt_money(&amount, &config.currency),
                    format!("{}%", summary::percentage(amount, total)),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Category", "Amount", "Share"], rows));
    }

    println!("\nRecent Expenses");
    if expenses.is_empty() {
        println!("No expenses yet this month");
        return Ok(());
    }
    let recent: Vec<_> = expenses.iter().take(RECENT_LIMIT).cloned().collect();
    let rows: Vec<Vec<String>> = expense_rows(&recent, &config.currency)
        .iter()
        .map(|r| {
            vec![
                r.date.clone(),
                r.title.clone(),
                r.category.clone(),
                r.amount.clone(),
                r.payment.clone(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Date", "Title", "Category", "Amount", "Payment"], rows)
    );
    Ok(())
}
