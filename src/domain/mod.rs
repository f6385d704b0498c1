pub mod ad_cost;
pub mod common;
pub mod range;
pub mod sale;

pub use ad_cost::AdCost;
pub use common::{Amounted, Dated, Identifiable};
pub use range::DateRange;
pub use sale::{Currency, Origin, Package, Sale};
