use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

use dqa_core::models::checklist::{ChecklistCriterion, ChecklistTally, HtsTstSubmission};
use dqa_core::models::table::Table;
use dqa_core::tables;
use dqa_forms::checklist;
use dqa_forms::forms::hts_tst::HtsTst;
use dqa_forms::EvaluationForm;
use dqa_storage::records;

use crate::audit::AuditEvent;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct HtsTstSaved {
    submission_id: Uuid,
    tally: ChecklistTally,
    rows_appended: usize,
    /// `None` when the rows were saved but reading them back failed.
    recent: Option<Table>,
}

/// Counts for a checklist in progress. Nothing is saved.
pub async fn tally_checklist(Json(criteria): Json<Vec<ChecklistCriterion>>) -> Json<ChecklistTally> {
    Json(checklist::tally(&criteria))
}

pub async fn submit_evaluation(
    State(state): State<AppState>,
    Json(submission): Json<HtsTstSubmission>,
) -> Result<Json<HtsTstSaved>, ApiError> {
    checklist::validate_submission(&submission)?;

    let form = HtsTst;
    let table = state.tables.hts_tst.as_str();
    let submission_id = Uuid::new_v4();
    let rows = tables::hts_tst_rows(&submission.header, &submission.criteria);

    let rows_appended =
        records::append_with_header(state.store.as_ref(), table, form.header_row(), rows).await?;
    let tally = checklist::tally(&submission.criteria);

    AuditEvent::new(
        "submit_evaluation",
        form.id(),
        submission_id,
        &submission.header.reviewer_name,
        &submission.header.unit_name,
    )
    .with_details(json!({
        "country": submission.header.country,
        "report_month": submission.header.report_month,
        "rows": rows_appended,
        "non_compliant": tally.non_compliant,
    }))
    .emit();

    let recent = match records::recent_records(state.store.as_ref(), table, form.recent_rows()).await
    {
        Ok(recent) => Some(recent),
        Err(e) => {
            tracing::warn!(error = %e, %submission_id, "saved evaluation but could not reload recent rows");
            None
        }
    };

    Ok(Json(HtsTstSaved {
        submission_id,
        tally,
        rows_appended,
        recent,
    }))
}
