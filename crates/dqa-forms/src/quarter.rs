//! Quarter-end resolution for the fiscal reporting calendar.
//!
//! Reporting quarters follow a fiscal year that starts in October, so the
//! mapping is fixed and is not the calendar one.

use jiff::civil::{self, Date};

use dqa_core::models::common::Quarter;

const MIN_YEAR: i16 = -9999;
const MAX_YEAR: i16 = 9999;

/// Last day of `quarter` within `year`.
///
/// Q1 → Dec 31, Q2 → Mar 31, Q3 → Jun 30, Q4 → Sep 30, all of the same
/// reference year. Years outside the civil calendar range saturate.
pub fn quarter_end(quarter: Quarter, year: i16) -> Date {
    let year = year.clamp(MIN_YEAR, MAX_YEAR);
    let (month, day) = match quarter {
        Quarter::Q1 => (12, 31),
        Quarter::Q2 => (3, 31),
        Quarter::Q3 => (6, 30),
        Quarter::Q4 => (9, 30),
    };
    civil::date(year, month, day)
}

/// Year the quarter end is computed in: the expected visit's year, else the
/// evaluation date's, else today's.
pub fn resolve_reference_year(
    expected_visit_date: Option<Date>,
    evaluation_date: Option<Date>,
    today: Date,
) -> i16 {
    expected_visit_date
        .or(evaluation_date)
        .unwrap_or(today)
        .year()
}
