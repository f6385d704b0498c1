//! Semicolon-delimited export documents derived from the filtered
//! collections.
//!
//! Every document uses `;` as the field delimiter, `.` as the decimal
//! separator, and exactly two decimal places for monetary values. File
//! names are fixed strings, never derived from data. An export over an
//! empty filtered set is a recoverable no-data condition: the error is
//! returned to the caller and no document is produced.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::domain::{AdCost, Sale};
use crate::errors::DashboardError;
use crate::report::summary::Roi;

pub const CLIENT_LIST_FILE: &str = "clients.csv";
pub const AD_COST_LIST_FILE: &str = "ad_costs.csv";
pub const PERIOD_SUMMARY_FILE: &str = "period_summary.csv";

/// A generated export: its fixed file name plus the full text content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    pub file_name: &'static str,
    pub content: String,
}

/// One row per filtered sale.
pub fn client_list(sales: &[&Sale]) -> Result<ExportDocument, DashboardError> {
    if sales.is_empty() {
        return Err(DashboardError::NoData("no clients in the selected period"));
    }
    let mut lines = vec!["ClientName;Package;Origin;Currency;Amount;Date;Time".to_string()];
    for sale in sales {
        lines.push(format!(
            "{};{};{};{};{};{};{}",
            sale.client_name,
            sale.package,
            sale.origin,
            sale.currency,
            money(sale.amount),
            sale.date,
            sale.time,
        ));
    }
    Ok(ExportDocument {
        file_name: CLIENT_LIST_FILE,
        content: lines.join("\n"),
    })
}

/// One row per filtered ad cost.
pub fn ad_cost_list(ad_costs: &[&AdCost]) -> Result<ExportDocument, DashboardError> {
    if ad_costs.is_empty() {
        return Err(DashboardError::NoData("no ad costs in the selected period"));
    }
    let mut lines = vec!["Amount;Date".to_string()];
    for cost in ad_costs {
        lines.push(format!("{};{}", money(cost.amount), cost.date));
    }
    Ok(ExportDocument {
        file_name: AD_COST_LIST_FILE,
        content: lines.join("\n"),
    })
}

/// Two stacked tables in one document: a daily table over every distinct
/// date across both collections, then a monthly table over every distinct
/// `YYYY-MM`, both sorted ascending and zero-filled where a kind has no
/// record. Monthly ROI follows the same not-applicable-on-zero-cost policy
/// as the period totals.
pub fn period_summary(
    sales: &[&Sale],
    ad_costs: &[&AdCost],
) -> Result<ExportDocument, DashboardError> {
    if sales.is_empty() && ad_costs.is_empty() {
        return Err(DashboardError::NoData("no records in the selected period"));
    }

    let mut daily: BTreeMap<NaiveDate, (f64, f64)> = BTreeMap::new();
    let mut monthly: BTreeMap<String, (f64, f64)> = BTreeMap::new();
    for sale in sales {
        daily.entry(sale.date).or_default().0 += sale.amount;
        monthly.entry(month_key(sale.date)).or_default().0 += sale.amount;
    }
    for cost in ad_costs {
        daily.entry(cost.date).or_default().1 += cost.amount;
        monthly.entry(month_key(cost.date)).or_default().1 += cost.amount;
    }

    let mut lines = vec![
        "Daily Summary".to_string(),
        "Date;Revenue;AdCost".to_string(),
    ];
    for (date, (revenue, ad_cost)) in &daily {
        lines.push(format!("{date};{};{}", money(*revenue), money(*ad_cost)));
    }
    lines.push(String::new());
    lines.push("Monthly Summary".to_string());
    lines.push("Month;Revenue;AdCost;Profit;ROI".to_string());
    for (month, (revenue, ad_cost)) in &monthly {
        lines.push(format!(
            "{month};{};{};{};{}",
            money(*revenue),
            money(*ad_cost),
            money(revenue - ad_cost),
            Roi::compute(*revenue, *ad_cost),
        ));
    }
    Ok(ExportDocument {
        file_name: PERIOD_SUMMARY_FILE,
        content: lines.join("\n"),
    })
}

/// Renders a monetary value with two fixed decimals and a `.` separator.
fn money(value: f64) -> String {
    format!("{value:.2}")
}

fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Currency, Origin, Package};
    use chrono::{TimeZone, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sale(day: NaiveDate, amount: f64) -> Sale {
        Sale {
            id: None,
            date: day,
            time: "14:05".into(),
            amount,
            package: Package::Ouro,
            origin: Origin::BR,
            currency: Currency::Real,
            client_name: "Maria".into(),
            timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 14, 5, 0).unwrap(),
        }
    }

    fn cost(day: NaiveDate, amount: f64) -> AdCost {
        AdCost {
            id: None,
            date: day,
            amount,
            timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 14, 5, 0).unwrap(),
        }
    }

    #[test]
    fn client_list_renders_two_fixed_decimals() {
        let sales = [sale(date(2024, 1, 10), 123.4)];
        let doc = client_list(&sales.iter().collect::<Vec<_>>()).unwrap();
        assert_eq!(doc.file_name, CLIENT_LIST_FILE);
        let mut lines = doc.content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "ClientName;Package;Origin;Currency;Amount;Date;Time"
        );
        assert_eq!(
            lines.next().unwrap(),
            "Maria;Ouro;BR;Real;123.40;2024-01-10;14:05"
        );
        assert!(lines.next().is_none());
    }

    #[test]
    fn client_list_reports_no_data_when_empty() {
        let err = client_list(&[]).expect_err("no document for empty input");
        assert!(matches!(err, DashboardError::NoData(_)));
    }

    #[test]
    fn ad_cost_list_has_amount_then_date() {
        let costs = [cost(date(2024, 1, 11), 40.0)];
        let doc = ad_cost_list(&costs.iter().collect::<Vec<_>>()).unwrap();
        assert_eq!(doc.content, "Amount;Date\n40.00;2024-01-11");
    }

    #[test]
    fn period_summary_stacks_daily_and_monthly_tables() {
        let sales = [sale(date(2024, 1, 10), 100.0), sale(date(2024, 2, 3), 50.0)];
        let costs = [cost(date(2024, 1, 11), 40.0)];
        let doc = period_summary(
            &sales.iter().collect::<Vec<_>>(),
            &costs.iter().collect::<Vec<_>>(),
        )
        .unwrap();
        let expected = "Daily Summary\n\
                        Date;Revenue;AdCost\n\
                        2024-01-10;100.00;0.00\n\
                        2024-01-11;0.00;40.00\n\
                        2024-02-03;50.00;0.00\n\
                        \n\
                        Monthly Summary\n\
                        Month;Revenue;AdCost;Profit;ROI\n\
                        2024-01;100.00;40.00;60.00;2.50\n\
                        2024-02;50.00;0.00;50.00;N/A";
        assert_eq!(doc.content, expected);
    }

    #[test]
    fn period_summary_reports_no_data_when_both_inputs_are_empty() {
        let err = period_summary(&[], &[]).expect_err("no document for empty period");
        assert!(matches!(err, DashboardError::NoData(_)));
    }
}
