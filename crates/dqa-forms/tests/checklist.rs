use jiff::civil::date;

use dqa_core::models::checklist::{HtsTstHeader, HtsTstSubmission};
use dqa_core::models::common::{Country, ReportMonth};
use dqa_forms::checklist::{tally, validate_submission};
use dqa_forms::error::FormError;
use dqa_forms::forms::hts_tst::{blank_criteria, CRITERIA};
use dqa_forms::{all_forms, get_form};

fn submission() -> HtsTstSubmission {
    HtsTstSubmission {
        header: HtsTstHeader {
            country: Country::Honduras,
            report_month: ReportMonth::March,
            unit_name: "CAI San Pedro Sula".to_string(),
            receipt_date: date(2025, 4, 2),
            records_reviewed: 40,
            reviewer_name: "M. López".to_string(),
        },
        criteria: blank_criteria(),
    }
}

#[test]
fn blank_checklist_is_fully_compliant() {
    let t = tally(&blank_criteria());
    assert_eq!(t.total, 10);
    assert_eq!(t.compliant, 10);
    assert_eq!(t.non_compliant, 0);
    assert_eq!(t.corrective_actions, 10);
}

#[test]
fn tally_counts_failures_and_actions() {
    let mut criteria = blank_criteria();
    criteria[2].compliant = false;
    criteria[7].compliant = false;
    criteria[7].corrective_action_taken = false;

    let t = tally(&criteria);
    assert_eq!(t.compliant, 8);
    assert_eq!(t.non_compliant, 2);
    assert_eq!(t.corrective_actions, 9);
}

#[test]
fn complete_submission_validates() {
    assert!(validate_submission(&submission()).is_ok());
}

#[test]
fn missing_criterion_is_rejected() {
    let mut s = submission();
    s.criteria.pop();
    assert!(matches!(
        validate_submission(&s),
        Err(FormError::CriteriaCount { expected: 10, actual: 9 })
    ));
}

#[test]
fn reordered_criteria_are_rejected() {
    let mut s = submission();
    s.criteria.swap(0, 1);
    match validate_submission(&s) {
        Err(FormError::CriterionMismatch { position, expected, .. }) => {
            assert_eq!(position, 1);
            assert_eq!(expected, CRITERIA[0]);
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn zero_records_reviewed_is_rejected() {
    let mut s = submission();
    s.header.records_reviewed = 0;
    assert!(matches!(
        validate_submission(&s),
        Err(FormError::NoRecordsReviewed)
    ));
}

#[test]
fn registry_lists_both_forms() {
    let ids: Vec<_> = all_forms().iter().map(|f| f.id().to_string()).collect();
    assert_eq!(ids, ["hts_tst", "tx_ml"]);

    let hts = get_form("hts_tst").unwrap();
    assert_eq!(hts.criteria().len(), 10);
    assert_eq!(hts.header_row().len(), 10);

    let tx = get_form("tx_ml").unwrap();
    assert!(tx.criteria().is_empty());
    assert_eq!(tx.header_row()[0], "last_visit_date");
    assert_eq!(tx.history_rows(), 10);

    assert!(get_form("pmtct").is_none());
}

#[test]
fn padded_criterion_text_is_rejected() {
    let mut s = submission();
    s.criteria[0].text = format!("  {}  ", CRITERIA[0]);
    match validate_submission(&s) {
        Err(FormError::CriterionMismatch { position, actual, .. }) => {
            assert_eq!(position, 1);
            assert_eq!(actual, format!("  {}  ", CRITERIA[0]));
        }
        other => panic!("unexpected: {other:?}"),
    }
}
