//! Scalar financial aggregates for a filtered period and for the calendar
//! month of a reference date.

use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::domain::{AdCost, Amounted, Sale};

/// Return on investment for a period. Zero ad spend makes the ratio
/// meaningless, so that case is a distinguished value rather than a
/// division result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Roi {
    NotApplicable,
    Ratio(f64),
}

impl Roi {
    /// Revenue over cost rounded to two decimals; `NotApplicable` when
    /// `ad_cost` is zero.
    pub fn compute(revenue: f64, ad_cost: f64) -> Self {
        if ad_cost > 0.0 {
            Roi::Ratio(round2(revenue / ad_cost))
        } else {
            Roi::NotApplicable
        }
    }
}

impl fmt::Display for Roi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Roi::NotApplicable => f.write_str("N/A"),
            Roi::Ratio(value) => write!(f, "{value:.2}"),
        }
    }
}

/// Totals for an arbitrary filtered period.
#[derive(Debug, Clone, PartialEq)]
pub struct Totals {
    pub revenue: f64,
    pub ad_cost: f64,
    /// Revenue minus ad cost; may be negative.
    pub profit: f64,
    pub roi: Roi,
}

/// Totals restricted to a single calendar month. No ROI for this view.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyTotals {
    pub revenue: f64,
    pub ad_cost: f64,
    pub profit: f64,
}

/// Reduces the filtered collections to scalar totals.
pub fn summarize(sales: &[&Sale], ad_costs: &[&AdCost]) -> Totals {
    let revenue = sum_amounts(sales);
    let ad_cost = sum_amounts(ad_costs);
    Totals {
        revenue,
        ad_cost,
        profit: revenue - ad_cost,
        roi: Roi::compute(revenue, ad_cost),
    }
}

/// Sums the calendar month and year of `reference` over the *unfiltered*
/// collections, independent of any user-selected date range.
pub fn monthly_summary(sales: &[Sale], ad_costs: &[AdCost], reference: NaiveDate) -> MonthlyTotals {
    let in_month =
        |date: NaiveDate| date.year() == reference.year() && date.month() == reference.month();
    let revenue: f64 = sales
        .iter()
        .filter(|sale| in_month(sale.date))
        .map(|sale| sale.amount)
        .sum();
    let ad_cost: f64 = ad_costs
        .iter()
        .filter(|cost| in_month(cost.date))
        .map(|cost| cost.amount)
        .sum();
    MonthlyTotals {
        revenue,
        ad_cost,
        profit: revenue - ad_cost,
    }
}

fn sum_amounts<T: Amounted>(records: &[&T]) -> f64 {
    records.iter().map(|record| record.amount()).sum()
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
