//! TX_ML / TX_RTT visit-status classification.
//!
//! Rules are evaluated in order and the first match wins:
//!
//! 1. no expected visit date → undetermined
//! 2. recovery before the expected visit → error
//! 3. fewer than 28 days overdue → active
//! 4. 28 to 89 days → lost to follow-up
//! 5. 90 days or more → abandonment
//!
//! Lost and abandoned patients are further split on whether and when they
//! recovered relative to the quarter end.

use jiff::civil::Date;

use dqa_core::models::visit::{
    ClassificationResult, Recovery, VisitInput, VisitRecord, VisitStatus,
};

use crate::overdue::{days_between, days_overdue};
use crate::quarter::{quarter_end, resolve_reference_year};

/// First day count that makes a patient lost to follow-up.
pub const LOST_TO_FOLLOW_UP_DAYS: i64 = 28;

/// First day count that makes a patient count as abandoned.
pub const ABANDONMENT_DAYS: i64 = 90;

/// Classify a patient. Total over every combination of optional dates.
pub fn classify(
    expected_visit_date: Option<Date>,
    recovery_date: Option<Date>,
    quarter_end: Date,
    today: Date,
) -> ClassificationResult {
    let status = visit_status(expected_visit_date, recovery_date, quarter_end, today);
    let days = days_overdue(expected_visit_date, recovery_date, today);
    ClassificationResult::from_status(status, days)
}

/// Fix the reference year of form input, falling back from the expected
/// visit to the evaluation date to today.
pub fn build_record(input: VisitInput, evaluation_date: Option<Date>, today: Date) -> VisitRecord {
    VisitRecord {
        last_visit_date: input.last_visit_date,
        expected_visit_date: input.expected_visit_date,
        recovery_date: input.recovery_date,
        quarter: input.quarter,
        reference_year: resolve_reference_year(input.expected_visit_date, evaluation_date, today),
    }
}

/// Classify a full record, resolving its quarter end first.
pub fn evaluate(record: &VisitRecord, today: Date) -> ClassificationResult {
    classify(
        record.expected_visit_date,
        record.recovery_date,
        quarter_end(record.quarter, record.reference_year),
        today,
    )
}

pub fn visit_status(
    expected_visit_date: Option<Date>,
    recovery_date: Option<Date>,
    quarter_end: Date,
    today: Date,
) -> VisitStatus {
    let Some(expected) = expected_visit_date else {
        return VisitStatus::Undetermined;
    };

    if let Some(recovered) = recovery_date
        && recovered < expected
    {
        return VisitStatus::Error;
    }

    let days = days_between(expected, recovery_date.unwrap_or(today));
    if days < LOST_TO_FOLLOW_UP_DAYS {
        return VisitStatus::Active;
    }

    let recovery = match recovery_date {
        Some(recovered) if recovered <= quarter_end => Recovery::RecoveredInQuarter,
        Some(_) => Recovery::RecoveredOtherQuarter,
        None => Recovery::NotRecovered,
    };

    if days < ABANDONMENT_DAYS {
        VisitStatus::LostToFollowUp(recovery)
    } else {
        VisitStatus::Abandonment(recovery)
    }
}
