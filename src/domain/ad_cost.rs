//! Domain model for advertising expenditures.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Amounted, Dated, Identifiable};

/// A single advertising expenditure. Ad costs are always entered in the
/// base currency, so no conversion applies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdCost {
    /// Store-assigned identifier, absent until the record is persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub date: NaiveDate,
    pub amount: f64,
    /// Creation instant, for audit ordering only.
    pub timestamp: DateTime<Utc>,
}

impl Identifiable for AdCost {
    fn id(&self) -> Option<Uuid> {
        self.id
    }
}

impl Dated for AdCost {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Amounted for AdCost {
    fn amount(&self) -> f64 {
        self.amount
    }
}
