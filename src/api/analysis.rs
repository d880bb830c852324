// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Spending analysis endpoint. The whole payload is produced server-side
//! (including the AI insight text); the client only renders it.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::client::{ApiClient, ApiError};
use crate::models::Category;

/// `GET /analysis` payload. `top_category` is the category name, or `"N/A"`
/// when the range is empty; `start_date`/`end_date` echo the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    #[serde(default)]
    pub total_expenses: Decimal,
    #[serde(default)]
    pub expense_count: u64,
    #[serde(default)]
    pub average_expense: Decimal,
    #[serde(default)]
    pub category_breakdown: BTreeMap<Category, Decimal>,
    #[serde(default)]
    pub top_category: Option<String>,
    #[serde(default)]
    pub ai_insights: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl ApiClient {
    pub fn analysis(&self, start: NaiveDate, end: NaiveDate) -> Result<Analysis, ApiError> {
        self.get_with(
            "/analysis",
            &[
                ("startDate", start.to_string()),
                ("endDate", end.to_string()),
            ],
        )
    }
}
