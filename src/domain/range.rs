//! User-selected date window for filtering dashboard records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An inclusive calendar-date window. An unset bound is unbounded on that
/// side; a fully unset range means no filtering at all.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Convenience constructor for a window bounded on both sides.
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// True when neither bound is set.
    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Inclusive containment on both ends, comparing calendar-date values.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |start| date >= start) && self.end.map_or(true, |end| date <= end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn bounds_are_inclusive() {
        let range = DateRange::between(date(2024, 1, 10), date(2024, 1, 20));
        assert!(range.contains(date(2024, 1, 10)));
        assert!(range.contains(date(2024, 1, 20)));
        assert!(!range.contains(date(2024, 1, 9)));
        assert!(!range.contains(date(2024, 1, 21)));
    }

    #[test]
    fn unset_bound_is_unbounded_on_that_side() {
        let open_start = DateRange::new(None, Some(date(2024, 1, 20)));
        assert!(open_start.contains(date(1970, 1, 1)));
        assert!(!open_start.contains(date(2024, 1, 21)));

        let open_end = DateRange::new(Some(date(2024, 1, 10)), None);
        assert!(open_end.contains(date(2999, 12, 31)));
        assert!(!open_end.contains(date(2024, 1, 9)));
    }

    #[test]
    fn default_range_is_unbounded() {
        let range = DateRange::default();
        assert!(range.is_unbounded());
        assert!(range.contains(date(2024, 6, 15)));
    }
}
