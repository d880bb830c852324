// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Display-side aggregation over a list of expense records. The server
//! scopes the list (date range, category); these helpers only derive the
//! presentation numbers from what came back.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Category, Expense};

#[derive(Debug, Clone, Serialize)]
pub struct SpendingSummary {
    pub total: Decimal,
    pub count: usize,
    pub average: Decimal,
    pub by_category: BTreeMap<Category, Decimal>,
}

/// Running total, count, average, and per-category sums for a record list.
/// An empty list yields zeros throughout.
pub fn summarize(expenses: &[Expense]) -> SpendingSummary {
    let mut total = Decimal::ZERO;
    let mut by_category: BTreeMap<Category, Decimal> = BTreeMap::new();
    for e in expenses {
        total += e.amount;
        *by_category.entry(e.category).or_insert(Decimal::ZERO) += e.amount;
    }
    let count = expenses.len();
    let average = if count == 0 {
        Decimal::ZERO
    } else {
        (total / Decimal::from(count as u64)).round_dp(2)
    };
    SpendingSummary {
        total,
        count,
        average,
        by_category,
    }
}

/// Share of `total` that `amount` represents, in percent rounded to one
/// decimal place. A zero total yields 0 rather than a division error.
pub fn percentage(amount: Decimal, total: Decimal) -> Decimal {
    if total.is_zero() {
        return Decimal::ZERO;
    }
    (amount / total * Decimal::ONE_HUNDRED).round_dp(1)
}

/// Breakdown entries sorted descending by amount. The sort is stable, so
/// equal amounts keep the map's iteration order.
pub fn sorted_breakdown(breakdown: &BTreeMap<Category, Decimal>) -> Vec<(Category, Decimal)> {
    let mut items: Vec<(Category, Decimal)> = breakdown.iter().map(|(c, a)| (*c, *a)).collect();
    items.sort_by(|a, b| b.1.cmp(&a.1));
    items
}
