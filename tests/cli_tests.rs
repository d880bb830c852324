// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use fintrack::cli;
use fintrack::commands::expenses;
use fintrack::models::{Category, Expense, PaymentMethod};

#[test]
fn expense_list_flags_parse() {
    let cli = cli::build_cli();
    let matches = cli.get_matches_from([
        "fintrack", "expense", "list", "--category", "FOOD", "--json",
    ]);
    if let Some(("expense", exp_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = exp_m.subcommand() {
            assert_eq!(list_m.get_one::<String>("category").unwrap(), "FOOD");
            assert!(list_m.get_flag("json"));
            assert!(!list_m.get_flag("jsonl"));
        } else {
            panic!("no list subcommand");
        }
    } else {
        panic!("no expense subcommand");
    }
}

#[test]
fn expense_rm_takes_an_id_and_yes_flag() {
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["fintrack", "expense", "rm", "42", "--yes"]);
    if let Some(("expense", exp_m)) = matches.subcommand() {
        if let Some(("rm", rm_m)) = exp_m.subcommand() {
            assert_eq!(*rm_m.get_one::<i64>("id").unwrap(), 42);
            assert!(rm_m.get_flag("yes"));
        } else {
            panic!("no rm subcommand");
        }
    } else {
        panic!("no expense subcommand");
    }
}

#[test]
fn analysis_accepts_a_months_preset() {
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["fintrack", "analysis", "--last", "3"]);
    if let Some(("analysis", a_m)) = matches.subcommand() {
        assert_eq!(*a_m.get_one::<u32>("last").unwrap(), 3);
    } else {
        panic!("no analysis subcommand");
    }
}

#[test]
fn expense_rows_format_for_display() {
    let expenses = vec![Expense {
        id: 3,
        title: "Taxi".to_string(),
        description: None,
        amount: "19.5".parse::<Decimal>().unwrap(),
        category: Category::Transportation,
        expense_date: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
        payment_method: PaymentMethod::DigitalWallet,
        vendor: None,
        created_at: None,
        updated_at: None,
    }];
    let rows = expenses::expense_rows(&expenses, "₹");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, 3);
    assert_eq!(rows[0].date, "2024-03-09");
    assert_eq!(rows[0].category, "TRANSPORTATION");
    assert_eq!(rows[0].amount, "₹19.50");
    assert_eq!(rows[0].payment, "DIGITAL_WALLET");
    assert_eq!(rows[0].vendor, "");
}
