// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::{self, Write};

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;

use crate::client::ApiClient;
use crate::config::Config;
use crate::models::{Category, Expense, ExpenseRequest, PaymentMethod};
use crate::session::SessionStore;
use crate::utils::{fmt_money, maybe_print_json, parse_amount, parse_date, pretty_table};

pub fn handle(config: &Config, session: &SessionStore, m: &clap::ArgMatches) -> Result<()> {
    let api = ApiClient::new(config, session.token())?;
    match m.subcommand() {
        Some(("add", sub)) => add(config, &api, sub)?,
        Some(("list", sub)) => list(config, &api, sub)?,
        Some(("show", sub)) => show(config, &api, sub)?,
        Some(("edit", sub)) => edit(&api, sub)?,
        Some(("rm", sub)) => rm(&api, sub)?,
        Some(("total", sub)) => total(config, &api, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(config: &Config, api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let title = sub.get_one::<String>("title").unwrap();
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let category: Category = sub.get_one::<String>("category").unwrap().parse()?;
    let expense_date = match sub.get_one::<String>("date") {
        Some(d) => parse_date(d)?,
        None => Utc::now().date_naive(),
    };
    let payment_method: PaymentMethod = match sub.get_one::<String>("payment") {
        Some(p) => p.parse()?,
        None => PaymentMethod::Cash,
    };
    let req = ExpenseRequest {
        title: title.clone(),
        description: sub.get_one::<String>("description").cloned(),
        amount,
        category,
        expense_date,
        payment_method,
        vendor: sub.get_one::<String>("vendor").cloned(),
    };
    let created = api.create_expense(&req)?;
    println!(
        "Recorded '{}' {} on {} (id: {})",
        created.title,
        fmt_money(&created.amount, &config.currency),
        created.expense_date,
        created.id
    );
    Ok(())
}

fn list(config: &Config, api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    let expenses = if let Some(cat) = sub.get_one::<String>("category") {
        api.expenses_by_category(cat.parse()?)?
    } else {
        match (sub.get_one::<String>("from"), sub.get_one::<String>("to")) {
            (Some(from), Some(to)) => {
                api.expenses_by_date_range(parse_date(from)?, parse_date(to)?)?
            }
            (None, None) => api.list_expenses()?,
            _ => anyhow::bail!("A date range needs both --from and --to"),
        }
    };

    let data = expense_rows(&expenses, &config.currency);
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        if data.is_empty() {
            println!("No expenses found");
            return Ok(());
        }
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.date.clone(),
                    r.title.clone(),
                    r.category.clone(),
                    r.amount.clone(),
                    r.payment.clone(),
                    r.vendor.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["ID", "Date", "Title", "Category", "Amount", "Payment", "Vendor"],
                rows,
            )
        );
    }
    Ok(())
}

fn show(config: &Config, api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let e = api.get_expense(id)?;
    if maybe_print_json(sub.get_flag("json"), false, &e)? {
        return Ok(());
    }
    let mut rows = vec![
        vec!["ID".to_string(), e.id.to_string()],
        vec!["Title".to_string(), e.title.clone()],
        vec!["Amount".to_string(), fmt_money(&e.amount, &config.currency)],
        vec!["Category".to_string(), e.category.to_string()],
        vec!["Date".to_string(), e.expense_date.to_string()],
        vec!["Payment".to_string(), e.payment_method.to_string()],
    ];
    if let Some(desc) = &e.description {
        rows.push(vec!["Description".to_string(), desc.clone()]);
    }
    if let Some(vendor) = &e.vendor {
        rows.push(vec!["Vendor".to_string(), vendor.clone()]);
    }
    if let Some(created) = &e.created_at {
        rows.push(vec!["Created".to_string(), created.to_string()]);
    }
    if let Some(updated) = &e.updated_at {
        rows.push(vec!["Updated".to_string(), updated.to_string()]);
    }
    println!("{}", pretty_table(&["Field", "Value"], rows));
    Ok(())
}

fn edit(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    // Start from the server's current record and overlay the given fields.
    let current = api.get_expense(id)?;
    let mut req = ExpenseRequest::from(&current);
    if let Some(title) = sub.get_one::<String>("title") {
        req.title = title.clone();
    }
    if let Some(amount) = sub.get_one::<String>("amount") {
        req.amount = parse_amount(amount)?;
    }
    if let Some(cat) = sub.get_one::<String>("category") {
        req.category = cat.parse()?;
    }
    if let Some(date) = sub.get_one::<String>("date") {
        req.expense_date = parse_date(date)?;
    }
    if let Some(payment) = sub.get_one::<String>("payment") {
        req.payment_method = payment.parse()?;
    }
    if let Some(desc) = sub.get_one::<String>("description") {
        req.description = Some(desc.clone());
    }
    if let Some(vendor) = sub.get_one::<String>("vendor") {
        req.vendor = Some(vendor.clone());
    }
    let updated = api.update_expense(id, &req)?;
    println!("Updated expense {} ('{}')", updated.id, updated.title);
    Ok(())
}

fn rm(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    if !sub.get_flag("yes") {
        print!("Delete expense {}? [y/N] ", id);
        io::stdout().flush()?;
        let mut line = String::new();
        io::stdin().read_line(&mut line)?;
        if !matches!(line.trim(), "y" | "Y" | "yes") {
            println!("Aborted.");
            return Ok(());
        }
    }
    api.delete_expense(id)?;
    println!("Deleted expense {}", id);
    Ok(())
}

fn total(config: &Config, api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let total = match (sub.get_one::<String>("from"), sub.get_one::<String>("to")) {
        (Some(from), Some(to)) => api.total_by_date_range(parse_date(from)?, parse_date(to)?)?,
        (None, None) => api.total_expenses()?,
        _ => anyhow::bail!("A date range needs both --from and --to"),
    };
    if !maybe_print_json(sub.get_flag("json"), false, &total)? {
        println!("Total: {}", fmt_money(&total.total, &config.currency));
    }
    Ok(())
}

#[derive(Serialize)]
pub struct ExpenseRow {
    pub id: i64,
    pub date: String,
    pub title: String,
    pub category: String,
    pub amount: String,
    pub payment: String,
    pub vendor: String,
}

pub fn expense_rows(expenses: &[Expense], symbol: &str) -> Vec<ExpenseRow> {
    expenses
        .iter()
        .map(|e| ExpenseRow {
            id: e.id,
            date: e.expense_date.to_string(),
            title: e.title.clone(),
            category: e.category.to_string(),
            amount: fmt_money(&e.amount, symbol),
            payment: e.payment_method.to_string(),
            vendor: e.vendor.clone().unwrap_or_default(),
        })
        .collect()
}
