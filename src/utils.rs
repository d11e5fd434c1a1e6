// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::time::Duration;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::Decimal;

const UA: &str = concat!("agrifin/", env!("CARGO_PKG_VERSION"));

pub fn http_client(timeout: Duration) -> reqwest::Result<reqwest::blocking::Client> {
    reqwest::blocking::Client::builder()
        .timeout(timeout)
        .user_agent(UA)
        .build()
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    let s = s.trim();
    s.parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

pub fn parse_f64(s: &str) -> Result<f64> {
    let s = s.trim();
    let v = s
        .parse::<f64>()
        .with_context(|| format!("Invalid number '{}'", s))?;
    anyhow::ensure!(v.is_finite(), "Invalid number '{}'", s);
    Ok(v)
}

fn currency_symbol(ccy: &str) -> Option<&'static str> {
    match ccy {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "INR" => Some("₹"),
        _ => None,
    }
}

fn group_thousands(int_part: &str) -> String {
    let mut out = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn render_money(negative: bool, fixed: &str, ccy: &str) -> String {
    let (int_part, frac) = fixed.split_once('.').unwrap_or((fixed, "00"));
    let sign = if negative { "-" } else { "" };
    let body = format!("{}.{}", group_thousands(int_part), frac);
    match currency_symbol(ccy) {
        Some(sym) => format!("{sign}{sym}{body}"),
        None => format!("{sign}{ccy} {body}"),
    }
}

/// `$3,000.00` style rendering; unknown codes are prefixed with the code.
pub fn fmt_money(d: &Decimal, ccy: &str) -> String {
    let fixed = format!("{:.2}", d.abs().round_dp(2));
    let negative = d.is_sign_negative() && !d.round_dp(2).is_zero();
    render_money(negative, &fixed, ccy)
}

/// Same as [`fmt_money`] for calculator outputs, which are plain floats.
/// Values beyond `Decimal`'s range are rendered from the float directly;
/// non-finite values show as zero.
pub fn fmt_amount(v: f64, ccy: &str) -> String {
    if !v.is_finite() {
        return fmt_money(&Decimal::ZERO, ccy);
    }
    match Decimal::try_from(v) {
        Ok(d) => fmt_money(&d, ccy),
        Err(_) => render_money(v < 0.0, &format!("{:.2}", v.abs()), ccy),
    }
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // Arrays stream one element per line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_groups_thousands() {
        assert_eq!(fmt_money(&Decimal::new(300000, 2), "USD"), "$3,000.00");
        assert_eq!(fmt_money(&Decimal::new(35, 0), "USD"), "$35.00");
        assert_eq!(fmt_money(&Decimal::new(-1234567, 1), "INR"), "-₹123,456.70");
        assert_eq!(fmt_money(&Decimal::new(100, 0), "KES"), "KES 100.00");
    }

    #[test]
    fn amount_rounds_floats() {
        assert_eq!(fmt_amount(4614.493_6, "USD"), "$4,614.49");
        assert_eq!(fmt_amount(f64::NAN, "USD"), "$0.00");
    }

    #[test]
    fn amount_beyond_decimal_range_keeps_its_magnitude() {
        let shown = fmt_amount(1e30, "USD");
        assert!(shown.starts_with("$1,000,000,"), "{shown}");
        assert!(shown.ends_with(".00"), "{shown}");
        assert_eq!(shown.matches(',').count(), 10);
        assert!(fmt_amount(-1e30, "KES").starts_with("-KES 1,000,"));
    }

    #[test]
    fn parse_f64_rejects_non_finite() {
        assert!(parse_f64("inf").is_err());
        assert_eq!(parse_f64(" 12.5 ").unwrap(), 12.5);
    }
}
