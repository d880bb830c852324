// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use fintrack::models::{Category, Expense, PaymentMethod};
use fintrack::summary;

fn expense(id: i64, category: Category, amount: &str, date: &str) -> Expense {
    Expense {
        id,
        title: format!("expense-{}", id),
        description: None,
        amount: amount.parse::<Decimal>().unwrap(),
        category,
        expense_date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        payment_method: PaymentMethod::Cash,
        vendor: None,
        created_at: None,
        updated_at: None,
    }
}

#[test]
fn empty_list_yields_zeros_without_division_errors() {
    let s = summary::summarize(&[]);
    assert_eq!(s.total, Decimal::ZERO);
    assert_eq!(s.count, 0);
    assert_eq!(s.average, Decimal::ZERO);
    assert!(s.by_category.is_empty());
    // Zero total must yield 0%, not a division error
    assert_eq!(
        summary::percentage("50".parse().unwrap(), Decimal::ZERO),
        Decimal::ZERO
    );
}

#[test]
fn totals_count_and_average() {
    let expenses = vec![
        expense(1, Category::Food, "100", "2024-03-01"),
        expense(2, Category::Food, "200", "2024-03-02"),
        expense(3, Category::Travel, "700", "2024-03-03"),
    ];
    let s = summary::summarize(&expenses);
    assert_eq!(s.total, "1000".parse::<Decimal>().unwrap());
    assert_eq!(s.count, 3);
    assert_eq!(format!("{:.2}", s.average), "333.33");
    assert_eq!(
        s.by_category.get(&Category::Food).copied().unwrap(),
        "300".parse::<Decimal>().unwrap()
    );
    assert_eq!(
        s.by_category.get(&Category::Travel).copied().unwrap(),
        "700".parse::<Decimal>().unwrap()
    );
}

#[test]
fn category_sums_add_up_to_total() {
    let expenses = vec![
        expense(1, Category::Food, "12.35", "2024-03-01"),
        expense(2, Category::Housing, "950.00", "2024-03-02"),
        expense(3, Category::Food, "7.65", "2024-03-04"),
        expense(4, Category::Shopping, "30.00", "2024-03-09"),
    ];
    let s = summary::summarize(&expenses);
    let sum: Decimal = s.by_category.values().copied().sum();
    assert_eq!(sum, s.total);
}

#[test]
fn breakdown_sorted_descending_with_display_percentages() {
    // {FOOD: 300, TRAVEL: 700} with total 1000 -> [TRAVEL 70.0%, FOOD 30.0%]
    let mut breakdown: BTreeMap<Category, Decimal> = BTreeMap::new();
    breakdown.insert(Category::Food, "300".parse().unwrap());
    breakdown.insert(Category::Travel, "700".parse().unwrap());
    let total: Decimal = "1000".parse().unwrap();

    let sorted = summary::sorted_breakdown(&breakdown);
    assert_eq!(sorted[0].0, Category::Travel);
    assert_eq!(sorted[1].0, Category::Food);
    assert_eq!(
        format!("{:.1}", summary::percentage(sorted[0].1, total)),
        "70.0"
    );
    assert_eq!(
        format!("{:.1}", summary::percentage(sorted[1].1, total)),
        "30.0"
    );
}

#[test]
fn equal_amounts_keep_map_iteration_order() {
    let mut breakdown: BTreeMap<Category, Decimal> = BTreeMap::new();
    breakdown.insert(Category::Travel, "50".parse().unwrap());
    breakdown.insert(Category::Food, "50".parse().unwrap());
    breakdown.insert(Category::Housing, "50".parse().unwrap());

    // Stable sort over a BTreeMap: ties stay in category order
    let sorted = summary::sorted_breakdown(&breakdown);
    let order: Vec<Category> = sorted.into_iter().map(|(c, _)| c).collect();
    assert_eq!(
        order,
        vec![Category::Food, Category::Travel, Category::Housing]
    );
}

#[test]
fn percentages_sum_to_one_hundred_within_rounding() {
    let expenses = vec![
        expense(1, Category::Food, "33.34", "2024-03-01"),
        expense(2, Category::Travel, "33.33", "2024-03-02"),
        expense(3, Category::Housing, "33.33", "2024-03-03"),
    ];
    let s = summary::summarize(&expenses);
    let sum: Decimal = s
        .by_category
        .values()
        .map(|amount| summary::percentage(*amount, s.total))
        .sum();
    // One rounding step of up to 0.1 per category
    let tolerance = Decimal::new(1, 1) * Decimal::from(s.by_category.len() as u64);
    assert!((Decimal::ONE_HUNDRED - sum).abs() <= tolerance);
}
