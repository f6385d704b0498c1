//! In-memory dashboard state: the latest collection snapshots plus the
//! user-selected date range, with every derived view recomputed on read.
//!
//! Snapshots arrive from the record store as complete collections and
//! replace the previous one wholesale; deltas are never merged. Derived
//! values are never cached, so the snapshots stay the only source of truth.

use chrono::NaiveDate;

use crate::domain::{AdCost, DateRange, Origin, Package, Sale};
use crate::errors::DashboardError;
use crate::export::{self, ExportDocument};
use crate::report::filter::filter_by_range;
use crate::report::series::{self, DailySeries};
use crate::report::summary::{self, MonthlyTotals, Totals};

#[derive(Debug, Default)]
pub struct Dashboard {
    sales: Vec<Sale>,
    ad_costs: Vec<AdCost>,
    range: DateRange,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the sales snapshot wholesale.
    pub fn replace_sales(&mut self, snapshot: Vec<Sale>) {
        tracing::debug!(count = snapshot.len(), "sales snapshot replaced");
        self.sales = snapshot;
    }

    /// Replaces the ad-cost snapshot wholesale.
    pub fn replace_ad_costs(&mut self, snapshot: Vec<AdCost>) {
        tracing::debug!(count = snapshot.len(), "ad-cost snapshot replaced");
        self.ad_costs = snapshot;
    }

    pub fn set_range(&mut self, range: DateRange) {
        self.range = range;
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn sales(&self) -> &[Sale] {
        &self.sales
    }

    pub fn ad_costs(&self) -> &[AdCost] {
        &self.ad_costs
    }

    pub fn filtered_sales(&self) -> Vec<&Sale> {
        filter_by_range(&self.sales, &self.range)
    }

    pub fn filtered_ad_costs(&self) -> Vec<&AdCost> {
        filter_by_range(&self.ad_costs, &self.range)
    }

    /// Scalar totals for the selected range.
    pub fn totals(&self) -> Totals {
        summary::summarize(&self.filtered_sales(), &self.filtered_ad_costs())
    }

    /// Totals for the calendar month of `reference`, computed over the full
    /// collections regardless of the selected range.
    pub fn monthly_totals(&self, reference: NaiveDate) -> MonthlyTotals {
        summary::monthly_summary(&self.sales, &self.ad_costs, reference)
    }

    pub fn daily_series(&self) -> DailySeries {
        series::daily_series(&self.filtered_sales(), &self.filtered_ad_costs())
    }

    pub fn revenue_by_package(&self) -> Vec<(Package, f64)> {
        series::revenue_by_package(&self.filtered_sales())
    }

    pub fn count_by_origin(&self) -> Vec<(Origin, usize)> {
        series::count_by_origin(&self.filtered_sales())
    }

    pub fn export_client_list(&self) -> Result<ExportDocument, DashboardError> {
        export::client_list(&self.filtered_sales())
    }

    pub fn export_ad_cost_list(&self) -> Result<ExportDocument, DashboardError> {
        export::ad_cost_list(&self.filtered_ad_costs())
    }

    pub fn export_period_summary(&self) -> Result<ExportDocument, DashboardError> {
        export::period_summary(&self.filtered_sales(), &self.filtered_ad_costs())
    }
}
