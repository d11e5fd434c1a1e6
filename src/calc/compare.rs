// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::loan::{LoanResult, LoanTerms, TenureUnit, compute_emi};
use crate::error::{InputError, require_positive};

/// One candidate loan. Always repaid monthly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanOffer {
    pub label: String,
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub tenure_value: f64,
    pub tenure_unit: TenureUnit,
}

impl LoanOffer {
    pub fn terms(&self) -> LoanTerms {
        LoanTerms::new(
            self.principal,
            self.annual_rate_percent,
            self.tenure_unit.to_months(self.tenure_value),
            TenureUnit::Months,
        )
    }

    pub fn validate(&self) -> Result<(), InputError> {
        require_positive("principal", self.principal)?;
        require_positive("interest rate", self.annual_rate_percent)?;
        require_positive("tenure", self.tenure_value)?;
        Ok(())
    }
}

/// Parses `label:principal:rate:tenure`, where tenure takes an optional
/// `y` or `m` suffix (months when omitted).
impl FromStr for LoanOffer {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').map(str::trim).collect();
        let [label, principal, rate, tenure] = parts.as_slice() else {
            return Err(InputError::parse(
                "loan offer",
                s,
                "expected label:principal:rate:tenure",
            ));
        };
        let number = |raw: &str| {
            raw.parse::<f64>()
                .map_err(|e| InputError::parse("loan offer", s, e.to_string()))
        };
        let (tenure_raw, tenure_unit) = if let Some(v) = tenure.strip_suffix(['y', 'Y']) {
            (v, TenureUnit::Years)
        } else if let Some(v) = tenure.strip_suffix(['m', 'M']) {
            (v, TenureUnit::Months)
        } else {
            (*tenure, TenureUnit::Months)
        };
        Ok(LoanOffer {
            label: label.to_string(),
            principal: number(*principal)?,
            annual_rate_percent: number(*rate)?,
            tenure_value: number(tenure_raw)?,
            tenure_unit,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    /// Position of the offer in the caller's input.
    pub index: usize,
    pub label: String,
    pub result: LoanResult,
    pub cheapest: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoanComparison {
    pub rows: Vec<ComparisonRow>,
}

impl LoanComparison {
    pub fn cheapest(&self) -> Option<&ComparisonRow> {
        self.rows.iter().find(|r| r.cheapest)
    }
}

/// Rank offers by monthly installment, lowest first, and flag the lowest.
pub fn compare_loans(offers: &[LoanOffer]) -> LoanComparison {
    let mut rows: Vec<ComparisonRow> = offers
        .iter()
        .enumerate()
        .map(|(index, offer)| ComparisonRow {
            index,
            label: offer.label.clone(),
            result: compute_emi(&offer.terms()),
            cheapest: false,
        })
        .collect();
    rows.sort_by(|a, b| {
        a.result
            .periodic_payment
            .total_cmp(&b.result.periodic_payment)
    });
    if let Some(first) = rows.first_mut() {
        first.cheapest = true;
    }
    LoanComparison { rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_offer_with_year_suffix() {
        let offer: LoanOffer = "SBI:200000:8.5:3y".parse().unwrap();
        assert_eq!(offer.label, "SBI");
        assert_eq!(offer.tenure_unit, TenureUnit::Years);
        assert_eq!(offer.terms().tenure_value, 36.0);
    }

    #[test]
    fn rejects_short_offer() {
        assert!("SBI:200000:8.5".parse::<LoanOffer>().is_err());
        assert!("SBI:abc:8.5:12".parse::<LoanOffer>().is_err());
    }
}
