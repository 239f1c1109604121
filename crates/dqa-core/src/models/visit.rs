use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::common::{Country, Quarter};

/// Patient dates for one TX_ML/TX_RTT evaluation. Built fresh per submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VisitRecord {
    pub last_visit_date: Option<jiff::civil::Date>,
    pub expected_visit_date: Option<jiff::civil::Date>,
    pub recovery_date: Option<jiff::civil::Date>,
    pub quarter: Quarter,
    pub reference_year: i16,
}

/// Dates and quarter as entered on the form, before the reference year is
/// resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VisitInput {
    #[serde(default)]
    pub last_visit_date: Option<jiff::civil::Date>,
    #[serde(default)]
    pub expected_visit_date: Option<jiff::civil::Date>,
    #[serde(default)]
    pub recovery_date: Option<jiff::civil::Date>,
    pub quarter: Quarter,
}

/// Reviewer metadata attached to a TX_ML row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TxMlHeader {
    pub country: Country,
    pub unit_name: String,
    pub reviewer_name: String,
    pub evaluation_date: jiff::civil::Date,
}

/// A complete TX_ML evaluation as posted by the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TxMlSubmission {
    pub header: TxMlHeader,
    pub visit: VisitInput,
}

/// Patient follow-up status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CohortState {
    InsufficientInformation,
    ActiveInCohort,
    LostToFollowUp,
    InAbandonment,
}

impl CohortState {
    pub fn label(&self) -> &'static str {
        match self {
            CohortState::InsufficientInformation => "insufficient information",
            CohortState::ActiveInCohort => "active in cohort",
            CohortState::LostToFollowUp => "lost to follow-up",
            CohortState::InAbandonment => "in abandonment",
        }
    }
}

/// Whether the patient counts against the TX_ML indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum TxMlFlag {
    No,
    Yes,
    Error,
    NotApplicable,
}

impl TxMlFlag {
    pub fn label(&self) -> &'static str {
        match self {
            TxMlFlag::No => "NO",
            TxMlFlag::Yes => "YES",
            TxMlFlag::Error => "ERROR",
            TxMlFlag::NotApplicable => "NOT_APPLICABLE",
        }
    }
}

/// Adjustment the reviewer must apply to TX_CURR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum TxCurrAction {
    None,
    Subtract,
    ErrorLabel,
    NotApplicable,
}

impl TxCurrAction {
    pub fn label(&self) -> &'static str {
        match self {
            TxCurrAction::None => "NONE",
            TxCurrAction::Subtract => "SUBTRACT",
            TxCurrAction::ErrorLabel => "recovery date precedes expected date",
            TxCurrAction::NotApplicable => "NOT_APPLICABLE",
        }
    }
}

/// Recovery outcome for a patient who fell out of the active window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Recovery {
    RecoveredInQuarter,
    RecoveredOtherQuarter,
    NotRecovered,
}

impl Recovery {
    pub fn message(&self) -> &'static str {
        match self {
            Recovery::RecoveredInQuarter => "recovered within the quarter",
            Recovery::RecoveredOtherQuarter => "recovered in a different quarter",
            Recovery::NotRecovered => "not recovered within the quarter",
        }
    }

    /// A patient recovered inside the reporting quarter is not counted as
    /// missed.
    pub fn counts_as_tx_ml(&self) -> bool {
        !matches!(self, Recovery::RecoveredInQuarter)
    }
}

/// Terminal state of one classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "state", content = "recovery", rename_all = "snake_case")]
#[ts(export)]
pub enum VisitStatus {
    Undetermined,
    Error,
    Active,
    LostToFollowUp(Recovery),
    Abandonment(Recovery),
}

pub const PLACEHOLDER_MESSAGE: &str = "—";
pub const MISSING_EXPECTED_MESSAGE: &str = "cannot compute without expected visit date";

/// Flattened outcome of classifying a [`VisitRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClassificationResult {
    #[ts(type = "number | null")]
    pub days_overdue: Option<i64>,
    pub cohort_state: Option<CohortState>,
    pub recovery_message: String,
    pub counts_as_tx_ml: TxMlFlag,
    pub tx_curr_action: TxCurrAction,
}

impl ClassificationResult {
    pub fn from_status(status: VisitStatus, days_overdue: Option<i64>) -> Self {
        let (cohort_state, recovery_message, counts_as_tx_ml, tx_curr_action) = match status {
            VisitStatus::Undetermined => (
                Some(CohortState::InsufficientInformation),
                MISSING_EXPECTED_MESSAGE.to_string(),
                TxMlFlag::NotApplicable,
                TxCurrAction::NotApplicable,
            ),
            VisitStatus::Error => (None, String::new(), TxMlFlag::Error, TxCurrAction::ErrorLabel),
            VisitStatus::Active => (
                Some(CohortState::ActiveInCohort),
                PLACEHOLDER_MESSAGE.to_string(),
                TxMlFlag::No,
                TxCurrAction::None,
            ),
            VisitStatus::LostToFollowUp(recovery) => {
                recovered(CohortState::LostToFollowUp, recovery)
            }
            VisitStatus::Abandonment(recovery) => recovered(CohortState::InAbandonment, recovery),
        };

        Self {
            days_overdue,
            cohort_state,
            recovery_message,
            counts_as_tx_ml,
            tx_curr_action,
        }
    }

    /// Incomplete or inconsistent inputs must be fixed before saving.
    pub fn blocks_submission(&self) -> bool {
        matches!(
            self.counts_as_tx_ml,
            TxMlFlag::NotApplicable | TxMlFlag::Error
        )
    }

    /// User-facing explanation for a blocked submission.
    pub fn blocking_reason(&self) -> Option<&'static str> {
        match self.counts_as_tx_ml {
            TxMlFlag::NotApplicable => Some(MISSING_EXPECTED_MESSAGE),
            TxMlFlag::Error => Some(TxCurrAction::ErrorLabel.label()),
            TxMlFlag::No | TxMlFlag::Yes => None,
        }
    }

    /// One-line status summary shown under the form.
    pub fn summary(&self) -> String {
        let state = self
            .cohort_state
            .map(|s| s.label())
            .unwrap_or("error");
        format!(
            "Patient status: {state} | {} | TX_ML: {} | TX_CURR action: {}",
            self.recovery_message,
            self.counts_as_tx_ml.label(),
            self.tx_curr_action.label(),
        )
    }
}

fn recovered(
    state: CohortState,
    recovery: Recovery,
) -> (Option<CohortState>, String, TxMlFlag, TxCurrAction) {
    let (flag, action) = if recovery.counts_as_tx_ml() {
        (TxMlFlag::Yes, TxCurrAction::Subtract)
    } else {
        (TxMlFlag::No, TxCurrAction::None)
    };
    (Some(state), recovery.message().to_string(), flag, action)
}
