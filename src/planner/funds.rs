// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Static savings and loan product suggestions. This is a lookup table, not
//! an investment model.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InputError;

pub const DISCLAIMER: &str = "Disclaimer: This is not real financial advice. Please consult with a certified financial advisor before making any investment or loan decisions.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Rural,
    Urban,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Horizon {
    ShortTerm,
    MediumTerm,
    LongTerm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Risk {
    Low,
    Medium,
    High,
}

impl FromStr for Location {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rural" => Ok(Location::Rural),
            "urban" => Ok(Location::Urban),
            other => Err(InputError::parse("location", other, "expected rural or urban")),
        }
    }
}

impl FromStr for Horizon {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "short" | "short-term" => Ok(Horizon::ShortTerm),
            "medium" | "medium-term" => Ok(Horizon::MediumTerm),
            "long" | "long-term" => Ok(Horizon::LongTerm),
            other => Err(InputError::parse(
                "time horizon",
                other,
                "expected short-term, medium-term or long-term",
            )),
        }
    }
}

impl FromStr for Risk {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Risk::Low),
            "medium" => Ok(Risk::Medium),
            "high" => Ok(Risk::High),
            other => Err(InputError::parse(
                "risk appetite",
                other,
                "expected low, medium or high",
            )),
        }
    }
}

impl Horizon {
    pub fn heading(self) -> &'static str {
        match self {
            Horizon::ShortTerm => "For Savings (1-3 Years)",
            Horizon::MediumTerm => "For Investments (3-5 Years)",
            Horizon::LongTerm => "For Long-Term Growth (5+ Years)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Product {
    pub name: &'static str,
    pub detail: &'static str,
}

const fn p(name: &'static str, detail: &'static str) -> Product {
    Product { name, detail }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FundAdvice {
    pub location: Location,
    pub heading: &'static str,
    pub savings: Vec<Product>,
    pub loans: Vec<Product>,
    pub disclaimer: &'static str,
}

pub fn recommend(location: Location, horizon: Horizon, risk: Risk) -> FundAdvice {
    FundAdvice {
        location,
        heading: horizon.heading(),
        savings: savings_products(location, horizon, risk),
        loans: loan_products(location),
        disclaimer: DISCLAIMER,
    }
}

fn savings_products(location: Location, horizon: Horizon, risk: Risk) -> Vec<Product> {
    use Horizon::*;
    use Location::*;
    use Risk::*;

    match (location, horizon, risk) {
        (Rural, ShortTerm, Low) => vec![
            p(
                "Cooperative Bank Fixed Deposits (FDs)",
                "Very safe, predictable returns, supports local community.",
            ),
            p("Post Office Time Deposit", "Government-backed security."),
        ],
        (Rural, ShortTerm, Medium) => vec![
            p(
                "Kisan Vikas Patra (KVP)",
                "A government savings scheme that doubles the investment over a certain period.",
            ),
            p("Balanced Mutual Funds", "A mix of equity and debt for moderate growth."),
        ],
        (Rural, ShortTerm, High) => vec![
            p(
                "High-yield Savings Account in a Rural Bank",
                "Safe and offers better returns than traditional savings.",
            ),
            p(
                "Equity Linked Savings Scheme (ELSS)",
                "Higher risk with tax benefits, suitable for those with some risk capacity.",
            ),
        ],
        (Rural, MediumTerm, Low) => vec![
            p(
                "National Savings Certificates (NSC)",
                "Government-backed, fixed return, tax benefits.",
            ),
            p("Debt Mutual Funds", "Investing in government and corporate bonds."),
        ],
        (Rural, MediumTerm, Medium) => vec![
            p(
                "Large-Cap Equity Funds",
                "Investing in top, stable companies. Lower risk within equities.",
            ),
            p("Hybrid Funds", "A balanced mix of stocks and bonds."),
        ],
        (Rural, MediumTerm, High) => vec![
            p(
                "Flexi-Cap/Multi-Cap Equity Funds",
                "Diversified across different-sized companies, higher risk-return potential.",
            ),
            p(
                "Real Estate Investment in Farmland",
                "Can provide rental income and capital appreciation.",
            ),
        ],
        (Rural, LongTerm, Low) => vec![
            p("Public Provident Fund (PPF)", "Long-term, government-backed, tax-free returns."),
            p(
                "Sukanya Samriddhi Yojana",
                "For a girl child's future education and marriage expenses.",
            ),
        ],
        (Rural, LongTerm, Medium) => vec![
            p(
                "Index Funds (e.g., Nifty 50)",
                "Invests in the market index, diversified and relatively safe for long-term equity exposure.",
            ),
            p("Gold Bonds", "An alternative to physical gold, offering interest income."),
        ],
        (Rural, LongTerm, High) => vec![
            p(
                "Mid-Cap/Small-Cap Equity Funds",
                "Higher risk with the potential for high returns from growing companies.",
            ),
            p("Direct Equity", "Investing directly in stocks, requires knowledge and research."),
        ],
        (Urban, ShortTerm, Low) => vec![
            p("Bank Fixed Deposits (FDs)", "Safe, predictable returns."),
            p("Liquid Mutual Funds", "Low risk, higher liquidity than FDs."),
        ],
        (Urban, ShortTerm, Medium | High) => vec![
            p(
                "Arbitrage Funds",
                "Low-risk funds that leverage price differences in different markets.",
            ),
            p("Short-Term Debt Funds", "Invest in debt instruments with short maturities."),
        ],
        (Urban, MediumTerm, Low) => vec![
            p("Corporate Bond Funds", "Investing in bonds issued by companies."),
            p("National Savings Certificates (NSC)", "Government-backed, fixed return."),
        ],
        (Urban, MediumTerm, Medium) => vec![
            p("Balanced Advantage Funds", "Dynamically allocate between equity and debt."),
            p("Large-Cap Equity Funds", "Investing in top, stable blue-chip companies."),
        ],
        (Urban, MediumTerm, High) => vec![
            p(
                "Real Estate Investment Trusts (REITs)",
                "Invest in a portfolio of income-generating real estate.",
            ),
        ],
        (Urban, LongTerm, Low) => vec![
            p("Public Provident Fund (PPF)", "Long-term, tax-free returns, government-backed."),
            p(
                "Voluntary Provident Fund (VPF)",
                "Higher contribution than EPF, with same benefits.",
            ),
        ],
        (Urban, LongTerm, Medium) => vec![
            p("Index Funds (Nifty 50, Sensex)", "Diversified, market-linked returns."),
            p("ELSS Mutual Funds", "Tax-saving funds with a 3-year lock-in, equity exposure."),
        ],
        (Urban, LongTerm, High) => vec![
            p("Mid-Cap/Small-Cap Equity Funds", "Higher risk, high growth potential."),
            p("Direct Equity/Stocks", "Requires significant research and risk tolerance."),
        ],
    }
}

fn loan_products(location: Location) -> Vec<Product> {
    match location {
        Location::Rural => vec![
            p(
                "Kisan Credit Card (KCC)",
                "For short-term credit for farming needs like seeds, fertilizers, and pesticides.",
            ),
            p(
                "Tractor and Equipment Loans",
                "Offered by most rural and commercial banks to finance machinery purchase.",
            ),
            p(
                "Microfinance Loans",
                "Small loans from Microfinance Institutions (MFIs) for various needs, including small business or livestock.",
            ),
        ],
        Location::Urban => vec![
            p("Home Loans", "For purchasing property."),
            p("Car Loans", "For purchasing a vehicle."),
            p("Personal Loans", "Unsecured loans for various personal needs."),
        ],
    }
}
