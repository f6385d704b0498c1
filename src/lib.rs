#![doc(test(attr(deny(warnings))))]

//! Dashboard Core offers the reporting and aggregation primitives behind a
//! small personal sales dashboard: typed sale and ad-cost records, date-range
//! filtering, period and calendar-month totals, chart-ready series, and
//! delimited text exports.

pub mod config;
pub mod domain;
pub mod errors;
pub mod export;
pub mod report;
pub mod store;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Dashboard Core tracing initialized.");
    });
}
