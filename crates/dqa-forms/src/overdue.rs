use jiff::civil::Date;

/// Whole days from `from` to `to`. Negative when `to` is earlier.
pub fn days_between(from: Date, to: Date) -> i64 {
    to.duration_since(from).as_hours() / 24
}

/// Days a patient is past the expected visit.
///
/// Counted up to the recovery date when there is one, otherwise up to
/// `today`. `None` when there is no expected visit to count from.
pub fn days_overdue(
    expected_visit_date: Option<Date>,
    recovery_date: Option<Date>,
    today: Date,
) -> Option<i64> {
    let expected = expected_visit_date?;
    Some(days_between(expected, recovery_date.unwrap_or(today)))
}
