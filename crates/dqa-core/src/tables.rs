//! Sheet layouts.
//!
//! Pure functions that flatten submissions into store rows. Dates are written
//! as `YYYY-MM-DD`, absent dates as the empty string.

use jiff::civil::Date;

use crate::models::checklist::{ChecklistCriterion, HtsTstHeader};
use crate::models::common::YesNo;
use crate::models::visit::{ClassificationResult, TxMlHeader, VisitRecord};

pub const DEFAULT_HTS_TST_TABLE: &str = "HTS_TST";
pub const DEFAULT_TX_ML_TABLE: &str = "TX_ML";

pub const HTS_TST_COLUMNS: [&str; 10] = [
    "country",
    "report_month",
    "unit_name",
    "receipt_date",
    "records_reviewed_count",
    "reviewer_name",
    "criterion_text",
    "compliant",
    "corrective_action",
    "observation",
];

pub const TX_ML_COLUMNS: [&str; 12] = [
    "last_visit_date",
    "expected_visit_date",
    "recovery_date",
    "quarter",
    "cohort_state",
    "recovery_message",
    "tx_ml_flag",
    "tx_curr_action",
    "country",
    "unit_name",
    "reviewer_name",
    "evaluation_date",
];

pub fn header_row(columns: &[&str]) -> Vec<String> {
    columns.iter().map(|c| c.to_string()).collect()
}

pub fn date_cell(date: Option<Date>) -> String {
    date.map(|d| d.to_string()).unwrap_or_default()
}

/// One row per criterion, each repeating the review metadata.
pub fn hts_tst_rows(header: &HtsTstHeader, criteria: &[ChecklistCriterion]) -> Vec<Vec<String>> {
    criteria
        .iter()
        .map(|c| {
            vec![
                header.country.label().to_string(),
                header.report_month.label().to_string(),
                header.unit_name.clone(),
                date_cell(Some(header.receipt_date)),
                header.records_reviewed.to_string(),
                header.reviewer_name.clone(),
                c.text.clone(),
                YesNo::from(c.compliant).label().to_string(),
                YesNo::from(c.corrective_action_taken).label().to_string(),
                c.note.clone(),
            ]
        })
        .collect()
}

pub fn tx_ml_row(
    header: &TxMlHeader,
    visit: &VisitRecord,
    result: &ClassificationResult,
) -> Vec<String> {
    vec![
        date_cell(visit.last_visit_date),
        date_cell(visit.expected_visit_date),
        date_cell(visit.recovery_date),
        visit.quarter.label().to_string(),
        result
            .cohort_state
            .map(|s| s.label().to_string())
            .unwrap_or_default(),
        result.recovery_message.clone(),
        result.counts_as_tx_ml.label().to_string(),
        result.tx_curr_action.label().to_string(),
        header.country.label().to_string(),
        header.unit_name.clone(),
        header.reviewer_name.clone(),
        date_cell(Some(header.evaluation_date)),
    ]
}
