//! Chart-shaped projections of the filtered collections.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::domain::{AdCost, Origin, Package, Sale};

/// Daily revenue versus ad-cost series. Both value vectors are aligned by
/// index to `dates`; a date with only one kind of record carries `0.0` in
/// the other series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailySeries {
    /// Strictly ascending union of every distinct date in either collection.
    pub dates: Vec<NaiveDate>,
    pub revenue: Vec<f64>,
    pub ad_cost: Vec<f64>,
}

/// Builds the daily time series over the filtered collections.
pub fn daily_series(sales: &[&Sale], ad_costs: &[&AdCost]) -> DailySeries {
    let mut by_date: BTreeMap<NaiveDate, (f64, f64)> = BTreeMap::new();
    for sale in sales {
        by_date.entry(sale.date).or_default().0 += sale.amount;
    }
    for cost in ad_costs {
        by_date.entry(cost.date).or_default().1 += cost.amount;
    }
    let mut series = DailySeries::default();
    for (date, (revenue, ad_cost)) in by_date {
        series.dates.push(date);
        series.revenue.push(revenue);
        series.ad_cost.push(ad_cost);
    }
    series
}

/// Revenue grouped by package, keyed in order of first appearance.
///
/// Only packages actually present appear; absent categories are not
/// zero-filled. First-seen ordering is part of the contract.
pub fn revenue_by_package(sales: &[&Sale]) -> Vec<(Package, f64)> {
    let mut grouped: Vec<(Package, f64)> = Vec::new();
    for sale in sales {
        match grouped.iter_mut().find(|(package, _)| *package == sale.package) {
            Some((_, total)) => *total += sale.amount,
            None => grouped.push((sale.package, sale.amount)),
        }
    }
    grouped
}

/// Lead counts grouped by origin, same presence and ordering policy as
/// [`revenue_by_package`].
pub fn count_by_origin(sales: &[&Sale]) -> Vec<(Origin, usize)> {
    let mut grouped: Vec<(Origin, usize)> = Vec::new();
    for sale in sales {
        match grouped.iter_mut().find(|(origin, _)| *origin == sale.origin) {
            Some((_, count)) => *count += 1,
            None => grouped.push((sale.origin, 1)),
        }
    }
    grouped
}
