// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Utc;

use crate::client::ApiClient;
use crate::config::Config;
use crate::session::SessionStore;
use crate::summary;
use crate::utils::{fmt_money, maybe_print_json, month_bounds, months_back, parse_date, pretty_table};

const WRAP_WIDTH: usize = 80;

pub fn handle(config: &Config, session: &SessionStore, m: &clap::ArgMatches) -> Result<()> {
    let today = Utc::now().date_naive();
    let (start, end) = if let Some(months) = m.get_one::<u32>("last") {
        (months_back(today, *months)?, today)
    } else {
        match (m.get_one::<String>("from"), m.get_one::<String>("to")) {
            (Some(from), Some(to)) => (parse_date(from)?, parse_date(to)?),
            (None, None) => month_bounds(today)?,
            _ => anyhow::bail!("A date range needs both --from and --to"),
        }
    };

    let api = ApiClient::new(config, session.token())?;
    let analysis = api.analysis(start, end)?;

    if maybe_print_json(m.get_flag("json"), false, &analysis)? {
        return Ok(());
    }

    println!("Spending Analysis {} to {}", start, end);
    println!(
        "{}",
        pretty_table(
            &["Total Expenses", "Transactions", "Average per Transaction"],
            vec![vec![
                fmt_money(&analysis.total_expenses, &config.currency),
                analysis.expense_count.to_string(),
                fmt_money(&analysis.average_expense, &config.currency),
            ]],
        )
    );

    if !analysis.category_breakdown.is_empty() {
        println!("\nSpending Distribution");
        let rows: Vec<Vec<String>> = summary::sorted_breakdown(&analysis.category_breakdown)
            .into_iter()
            .map(|(category, amount)| {
                vec![
                    category.to_string(),
                    fmt_money(&amount, &config.currency),
                    format!(
                        "{}%",
                        summary::percentage(amount, analysis.total_expenses)
                    ),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Category", "Amount", "Percentage"], rows)
        );
        if let Some(top) = &analysis.top_category {
            println!("Top Category: {}", top);
        }
    } else {
        println!("\nNo expenses in this range");
    }

    if !analysis.ai_insights.is_empty() {
        println!("\nAI Insights");
        println!("{}", textwrap::fill(&analysis.ai_insights, WRAP_WIDTH));
    }
    Ok(())
}
