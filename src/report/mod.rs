pub mod dashboard;
pub mod filter;
pub mod normalizer;
pub mod series;
pub mod summary;

pub use dashboard::Dashboard;
pub use filter::filter_by_range;
pub use normalizer::{normalize_ad_cost, normalize_sale, AdCostInput, SaleInput, USD_TO_BRL};
pub use series::{count_by_origin, daily_series, revenue_by_package, DailySeries};
pub use summary::{monthly_summary, summarize, MonthlyTotals, Roi, Totals};
