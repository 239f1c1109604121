use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::common::{Country, ReportMonth};

/// One answered line of the HTS_TST checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChecklistCriterion {
    pub text: String,
    pub compliant: bool,
    pub corrective_action_taken: bool,
    #[serde(default)]
    pub note: String,
}

/// Metadata shared by every row of one HTS_TST review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HtsTstHeader {
    pub country: Country,
    pub report_month: ReportMonth,
    pub unit_name: String,
    pub receipt_date: jiff::civil::Date,
    pub records_reviewed: u32,
    pub reviewer_name: String,
}

/// A complete HTS_TST review as posted by the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HtsTstSubmission {
    pub header: HtsTstHeader,
    pub criteria: Vec<ChecklistCriterion>,
}

/// Pass/fail counts over a checklist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChecklistTally {
    pub total: u32,
    pub compliant: u32,
    pub non_compliant: u32,
    pub corrective_actions: u32,
}
