//! Date-range selection over record collections.

use crate::domain::{Dated, DateRange};

/// Returns the records whose date falls inside `range`, bounds inclusive on
/// both ends.
///
/// A fully unset range selects every record. Comparison is by calendar-date
/// value; ISO strings happen to sort the same way, but the typed comparison
/// is the guaranteed contract, not an accident of string ordering.
pub fn filter_by_range<'a, T: Dated>(records: &'a [T], range: &DateRange) -> Vec<&'a T> {
    if range.is_unbounded() {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|record| range.contains(record.date()))
        .collect()
}
