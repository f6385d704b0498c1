use chrono::NaiveDate;
use uuid::Uuid;

/// Exposes the store-assigned identifier once a record has been persisted.
pub trait Identifiable {
    fn id(&self) -> Option<Uuid>;
}

/// Exposes the calendar date a record belongs to.
///
/// The date-range filter is generic over this trait, so every record kind
/// carrying a calendar date is filtered the same way.
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

/// Supplies a common contract for retrieving monetary amounts.
pub trait Amounted {
    fn amount(&self) -> f64;
}
