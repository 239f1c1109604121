use jiff::civil::{date, Date};

use dqa_core::models::common::Quarter;
use dqa_core::models::visit::{
    CohortState, Recovery, TxCurrAction, TxMlFlag, VisitRecord, VisitStatus,
};
use dqa_forms::overdue::days_overdue;
use dqa_forms::quarter::quarter_end;
use dqa_forms::visit_status::{classify, evaluate, visit_status};

const EXPECTED: Date = date(2025, 1, 1);

fn q2_end() -> Date {
    quarter_end(Quarter::Q2, 2025)
}

#[test]
fn scenario_a_recent_miss_is_active() {
    let result = classify(Some(EXPECTED), None, q2_end(), date(2025, 1, 20));
    assert_eq!(result.days_overdue, Some(19));
    assert_eq!(result.cohort_state, Some(CohortState::ActiveInCohort));
    assert_eq!(result.recovery_message, "—");
    assert_eq!(result.counts_as_tx_ml, TxMlFlag::No);
    assert_eq!(result.tx_curr_action, TxCurrAction::None);
}

#[test]
fn scenario_b_unrecovered_patient_is_subtracted() {
    let result = classify(Some(EXPECTED), None, q2_end(), date(2025, 3, 1));
    assert_eq!(result.days_overdue, Some(59));
    assert_eq!(result.cohort_state, Some(CohortState::LostToFollowUp));
    assert_eq!(result.recovery_message, "not recovered within the quarter");
    assert_eq!(result.counts_as_tx_ml, TxMlFlag::Yes);
    assert_eq!(result.tx_curr_action, TxCurrAction::Subtract);
}

#[test]
fn scenario_c_recovery_inside_quarter_is_not_counted() {
    let result = classify(
        Some(EXPECTED),
        Some(date(2025, 2, 1)),
        q2_end(),
        date(2025, 9, 1),
    );
    assert_eq!(result.days_overdue, Some(31));
    assert_eq!(result.cohort_state, Some(CohortState::LostToFollowUp));
    assert_eq!(result.recovery_message, "recovered within the quarter");
    assert_eq!(result.counts_as_tx_ml, TxMlFlag::No);
    assert_eq!(result.tx_curr_action, TxCurrAction::None);
}

#[test]
fn scenario_d_recovery_before_expected_is_error_for_any_quarter() {
    for quarter in Quarter::ALL {
        let result = classify(
            Some(EXPECTED),
            Some(date(2024, 12, 1)),
            quarter_end(quarter, 2025),
            date(2025, 6, 1),
        );
        assert_eq!(result.counts_as_tx_ml, TxMlFlag::Error);
        assert_eq!(result.tx_curr_action, TxCurrAction::ErrorLabel);
        assert_eq!(result.cohort_state, None);
        assert!(result.blocks_submission());
    }
}

#[test]
fn scenario_e_missing_expected_is_not_applicable() {
    for recovery in [None, Some(date(2025, 2, 1))] {
        let result = classify(None, recovery, q2_end(), date(2025, 3, 1));
        assert_eq!(result.days_overdue, None);
        assert_eq!(result.cohort_state, Some(CohortState::InsufficientInformation));
        assert_eq!(
            result.recovery_message,
            "cannot compute without expected visit date"
        );
        assert_eq!(result.counts_as_tx_ml, TxMlFlag::NotApplicable);
        assert_eq!(result.tx_curr_action, TxCurrAction::NotApplicable);
        assert!(result.blocks_submission());
    }
}

#[test]
fn error_wins_regardless_of_gap_size() {
    for gap in [1, 27, 28, 90, 400] {
        let recovery = EXPECTED.checked_sub(jiff::Span::new().days(gap)).unwrap();
        let status = visit_status(Some(EXPECTED), Some(recovery), q2_end(), date(2030, 1, 1));
        assert_eq!(status, VisitStatus::Error);
    }
}

#[test]
fn day_count_boundaries() {
    let today = |days: i64| EXPECTED.checked_add(jiff::Span::new().days(days)).unwrap();
    let end = date(2025, 12, 31);

    assert_eq!(visit_status(Some(EXPECTED), None, end, today(27)), VisitStatus::Active);
    assert_eq!(
        visit_status(Some(EXPECTED), None, end, today(28)),
        VisitStatus::LostToFollowUp(Recovery::NotRecovered)
    );
    assert_eq!(
        visit_status(Some(EXPECTED), None, end, today(89)),
        VisitStatus::LostToFollowUp(Recovery::NotRecovered)
    );
    assert_eq!(
        visit_status(Some(EXPECTED), None, end, today(90)),
        VisitStatus::Abandonment(Recovery::NotRecovered)
    );
}

#[test]
fn recovery_after_quarter_end_is_counted() {
    let result = classify(
        Some(EXPECTED),
        Some(date(2025, 4, 15)),
        q2_end(),
        date(2025, 9, 1),
    );
    assert_eq!(result.days_overdue, Some(104));
    assert_eq!(result.cohort_state, Some(CohortState::InAbandonment));
    assert_eq!(result.recovery_message, "recovered in a different quarter");
    assert_eq!(result.counts_as_tx_ml, TxMlFlag::Yes);
    assert_eq!(result.tx_curr_action, TxCurrAction::Subtract);
}

#[test]
fn recovery_on_quarter_end_is_inside_the_quarter() {
    let status = visit_status(Some(EXPECTED), Some(date(2025, 3, 31)), q2_end(), date(2026, 1, 1));
    assert_eq!(status, VisitStatus::LostToFollowUp(Recovery::RecoveredInQuarter));
}

#[test]
fn recovery_date_anchors_the_day_count() {
    // Same recovery, very different "today": the count must not move.
    let a = days_overdue(Some(EXPECTED), Some(date(2025, 2, 1)), date(2025, 2, 1));
    let b = days_overdue(Some(EXPECTED), Some(date(2025, 2, 1)), date(2027, 8, 9));
    assert_eq!(a, Some(31));
    assert_eq!(a, b);
}

#[test]
fn negative_day_count_is_kept_in_error_branch() {
    let result = classify(Some(EXPECTED), Some(date(2024, 12, 1)), q2_end(), date(2025, 6, 1));
    assert_eq!(result.days_overdue, Some(-31));
}

#[test]
fn classification_is_idempotent_with_a_fixed_clock() {
    let today = date(2025, 5, 5);
    let first = classify(Some(EXPECTED), None, q2_end(), today);
    let second = classify(Some(EXPECTED), None, q2_end(), today);
    assert_eq!(first, second);
}

#[test]
fn tx_ml_yes_iff_subtract() {
    let recoveries = [None, Some(date(2025, 1, 10)), Some(date(2025, 3, 1)), Some(date(2025, 7, 1))];
    let todays = [date(2025, 1, 5), date(2025, 2, 20), date(2025, 8, 1)];
    for recovery in recoveries {
        for today in todays {
            let r = classify(Some(EXPECTED), recovery, q2_end(), today);
            assert_eq!(
                r.counts_as_tx_ml == TxMlFlag::Yes,
                r.tx_curr_action == TxCurrAction::Subtract
            );
            assert!(!r.blocks_submission());
        }
    }
}

#[test]
fn evaluate_resolves_quarter_from_record() {
    let record = VisitRecord {
        last_visit_date: Some(date(2024, 12, 1)),
        expected_visit_date: Some(EXPECTED),
        recovery_date: Some(date(2025, 2, 1)),
        quarter: Quarter::Q2,
        reference_year: 2025,
    };
    let result = evaluate(&record, date(2025, 9, 1));
    assert_eq!(result.recovery_message, "recovered within the quarter");

    // Q1 of the same year ends in December, so February is still inside.
    let q1 = VisitRecord {
        quarter: Quarter::Q1,
        ..record
    };
    assert_eq!(evaluate(&q1, date(2025, 9, 1)).counts_as_tx_ml, TxMlFlag::No);

    // Q4 of the previous year ended before the recovery.
    let old = VisitRecord {
        quarter: Quarter::Q4,
        reference_year: 2024,
        ..record
    };
    assert_eq!(evaluate(&old, date(2025, 9, 1)).counts_as_tx_ml, TxMlFlag::Yes);
}

#[test]
fn build_record_falls_back_to_evaluation_year() {
    use dqa_core::models::visit::VisitInput;
    use dqa_forms::visit_status::build_record;

    let input = VisitInput {
        last_visit_date: None,
        expected_visit_date: None,
        recovery_date: None,
        quarter: Quarter::Q3,
    };
    let record = build_record(input, Some(date(2023, 8, 1)), date(2026, 1, 1));
    assert_eq!(record.reference_year, 2023);
    assert_eq!(quarter_end(record.quarter, record.reference_year), date(2023, 6, 30));

    let with_expected = VisitInput {
        expected_visit_date: Some(EXPECTED),
        ..input
    };
    assert_eq!(build_record(with_expected, None, date(2026, 1, 1)).reference_year, 2025);
}
