//! Coerces raw form input into typed records at write time.

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::{AdCost, Currency, Origin, Package, Sale};

/// Fixed Dólar→Real conversion rate, applied exactly once at creation.
pub const USD_TO_BRL: f64 = 5.0;

/// Raw sale fields as submitted by the presentation layer. The amount
/// arrives as free text; the categorical fields have already been parsed
/// at the input boundary.
#[derive(Debug, Clone)]
pub struct SaleInput {
    pub date: NaiveDate,
    pub amount: String,
    pub package: Package,
    pub origin: Origin,
    pub currency: Currency,
    pub client_name: String,
}

/// Raw ad-cost fields as submitted by the presentation layer.
#[derive(Debug, Clone)]
pub struct AdCostInput {
    pub date: NaiveDate,
    pub amount: String,
}

/// Permissive numeric parsing: anything that is not a finite non-negative
/// number becomes `0.0`. Malformed amounts never fail a write.
pub fn parse_amount(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value,
        _ => 0.0,
    }
}

/// Builds a stored [`Sale`] from raw input. Amounts entered in Dólar are
/// converted to the base currency here; `time` and `timestamp` derive from
/// `now`, never from the caller's fields.
pub fn normalize_sale(input: SaleInput, now: DateTime<Utc>) -> Sale {
    let entered = parse_amount(&input.amount);
    let amount = match input.currency {
        Currency::Dolar => entered * USD_TO_BRL,
        Currency::Real => entered,
    };
    Sale {
        id: None,
        date: input.date,
        time: now.format("%H:%M").to_string(),
        amount,
        package: input.package,
        origin: input.origin,
        currency: input.currency,
        client_name: input.client_name,
        timestamp: now,
    }
}

/// Builds a stored [`AdCost`] from raw input. No currency conversion: ad
/// costs are always entered in the base currency.
pub fn normalize_ad_cost(input: AdCostInput, now: DateTime<Utc>) -> AdCost {
    AdCost {
        id: None,
        date: input.date,
        amount: parse_amount(&input.amount),
        timestamp: now,
    }
}
