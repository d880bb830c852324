// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use fintrack::utils;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn parse_date_accepts_iso_and_rejects_garbage() {
    assert_eq!(utils::parse_date("2024-03-31").unwrap(), date("2024-03-31"));
    assert!(utils::parse_date("31/03/2024").is_err());
    assert!(utils::parse_date("2024-13-01").is_err());
}

#[test]
fn parse_amount_requires_positive() {
    assert_eq!(
        utils::parse_amount("12.50").unwrap(),
        "12.50".parse().unwrap()
    );
    assert!(utils::parse_amount("0").is_err());
    assert!(utils::parse_amount("-3").is_err());
    assert!(utils::parse_amount("abc").is_err());
}

#[test]
fn month_bounds_handles_lengths_and_leap_years() {
    assert_eq!(
        utils::month_bounds(date("2024-02-10")).unwrap(),
        (date("2024-02-01"), date("2024-02-29"))
    );
    assert_eq!(
        utils::month_bounds(date("2025-02-10")).unwrap(),
        (date("2025-02-01"), date("2025-02-28"))
    );
    assert_eq!(
        utils::month_bounds(date("2024-12-31")).unwrap(),
        (date("2024-12-01"), date("2024-12-31"))
    );
    assert_eq!(
        utils::month_bounds(date("2024-04-01")).unwrap(),
        (date("2024-04-01"), date("2024-04-30"))
    );
}

#[test]
fn months_back_clamps_day_and_crosses_years() {
    assert_eq!(
        utils::months_back(date("2025-03-31"), 1).unwrap(),
        date("2025-02-28")
    );
    assert_eq!(
        utils::months_back(date("2025-01-15"), 2).unwrap(),
        date("2024-11-15")
    );
    assert_eq!(
        utils::months_back(date("2024-03-31"), 12).unwrap(),
        date("2023-03-31")
    );
}

#[test]
fn fmt_money_uses_the_configured_symbol() {
    assert_eq!(utils::fmt_money(&"5".parse().unwrap(), "$"), "$5.00");
    assert_eq!(
        utils::fmt_money(&"1234.5".parse().unwrap(), "₹"),
        "₹1234.50"
    );
}
