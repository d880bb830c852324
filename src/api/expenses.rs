// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Expense endpoints, one method per remote operation. Date ranges are
//! inclusive and filtered by the server; the client renders what it gets.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::client::{ApiClient, ApiError};
use crate::models::{Category, Expense, ExpenseRequest, Total};

fn range_query(start: NaiveDate, end: NaiveDate) -> [(&'static str, String); 2] {
    [
        ("startDate", start.to_string()),
        ("endDate", end.to_string()),
    ]
}

impl ApiClient {
    pub fn list_expenses(&self) -> Result<Vec<Expense>, ApiError> {
        self.get("/expenses")
    }

    pub fn get_expense(&self, id: i64) -> Result<Expense, ApiError> {
        self.get(&format!("/expenses/{}", id))
    }

    pub fn create_expense(&self, req: &ExpenseRequest) -> Result<Expense, ApiError> {
        self.post("/expenses", req)
    }

    pub fn update_expense(&self, id: i64, req: &ExpenseRequest) -> Result<Expense, ApiError> {
        self.put(&format!("/expenses/{}", id), req)
    }

    pub fn delete_expense(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/expenses/{}", id))
    }

    pub fn expenses_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Expense>, ApiError> {
        self.get_with("/expenses/date-range", &range_query(start, end))
    }

    pub fn expenses_by_category(&self, category: Category) -> Result<Vec<Expense>, ApiError> {
        self.get(&format!("/expenses/category/{}", category))
    }

    pub fn total_expenses(&self) -> Result<Total, ApiError> {
        self.get("/expenses/total")
    }

    pub fn total_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Total, ApiError> {
        self.get_with("/expenses/total/date-range", &range_query(start, end))
    }

    pub fn category_summary(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<BTreeMap<Category, Decimal>, ApiError> {
        self.get_with("/expenses/category-summary", &range_query(start, end))
    }
}
