// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Expense categories as the API enumerates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Food,
    Transportation,
    Utilities,
    Entertainment,
    Healthcare,
    Shopping,
    Education,
    Travel,
    Housing,
    Insurance,
    Savings,
    Other,
}

impl Category {
    pub const ALL: [Category; 12] = [
        Category::Food,
        Category::Transportation,
        Category::Utilities,
        Category::Entertainment,
        Category::Healthcare,
        Category::Shopping,
        Category::Education,
        Category::Travel,
        Category::Housing,
        Category::Insurance,
        Category::Savings,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "FOOD",
            Category::Transportation => "TRANSPORTATION",
            Category::Utilities => "UTILITIES",
            Category::Entertainment => "ENTERTAINMENT",
            Category::Healthcare => "HEALTHCARE",
            Category::Shopping => "SHOPPING",
            Category::Education => "EDUCATION",
            Category::Travel => "TRAVEL",
            Category::Housing => "HOUSING",
            Category::Insurance => "INSURANCE",
            Category::Savings => "SAVINGS",
            Category::Other => "OTHER",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == upper)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Invalid category '{}', expected one of: {}",
                    s,
                    Category::ALL.map(|c| c.as_str()).join(", ")
                )
            })
    }
}

/// Payment methods as the API enumerates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cash,
    CreditCard,
    DebitCard,
    BankTransfer,
    DigitalWallet,
    Other,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 6] = [
        PaymentMethod::Cash,
        PaymentMethod::CreditCard,
        PaymentMethod::DebitCard,
        PaymentMethod::BankTransfer,
        PaymentMethod::DigitalWallet,
        PaymentMethod::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "CASH",
            PaymentMethod::CreditCard => "CREDIT_CARD",
            PaymentMethod::DebitCard => "DEBIT_CARD",
            PaymentMethod::BankTransfer => "BANK_TRANSFER",
            PaymentMethod::DigitalWallet => "DIGITAL_WALLET",
            PaymentMethod::Other => "OTHER",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        PaymentMethod::ALL
            .into_iter()
            .find(|p| p.as_str() == upper)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Invalid payment method '{}', expected one of: {}",
                    s,
                    PaymentMethod::ALL.map(|p| p.as_str()).join(", ")
                )
            })
    }
}

/// An expense record as returned by the API. Records are owned by the
/// server; the client only holds transient copies fetched per command.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub amount: Decimal,
    pub category: Category,
    pub expense_date: NaiveDate,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

/// Create/update payload for an expense record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRequest {
    pub title: String,
    pub description: Option<String>,
    pub amount: Decimal,
    pub category: Category,
    pub expense_date: NaiveDate,
    pub payment_method: PaymentMethod,
    pub vendor: Option<String>,
}

impl From<&Expense> for ExpenseRequest {
    fn from(e: &Expense) -> Self {
        ExpenseRequest {
            title: e.title.clone(),
            description: e.description.clone(),
            amount: e.amount,
            category: e.category,
            expense_date: e.expense_date,
            payment_method: e.payment_method,
            vendor: e.vendor.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
}

/// The authenticated identity: the auth response payload minus the token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    #[serde(default)]
    pub id: Option<i64>,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
}

/// Login/register response: an opaque bearer token plus identity fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(flatten)]
    pub identity: Identity,
}

/// Payload of `GET /expenses/total` and `GET /expenses/total/date-range`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Total {
    pub total: Decimal,
}
