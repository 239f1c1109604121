use axum::extract::State;
use axum::Json;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use dqa_core::models::table::Table;
use dqa_core::models::visit::{ClassificationResult, TxMlSubmission, VisitInput, VisitRecord};
use dqa_core::tables;
use dqa_forms::forms::tx_ml::TxMl;
use dqa_forms::quarter::quarter_end;
use dqa_forms::visit_status::{build_record, evaluate};
use dqa_forms::EvaluationForm;
use dqa_storage::records;

use crate::audit::AuditEvent;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ClassifyRequest {
    #[serde(flatten)]
    visit: VisitInput,
    #[serde(default)]
    evaluation_date: Option<Date>,
}

#[derive(Serialize)]
pub struct ClassifyResponse {
    record: VisitRecord,
    quarter_end: Date,
    result: ClassificationResult,
    summary: String,
    blocking_reason: Option<&'static str>,
}

#[derive(Serialize)]
pub struct TxMlSaved {
    submission_id: Uuid,
    result: ClassificationResult,
    /// `None` when the row was saved but reading it back failed.
    recent: Option<Table>,
}

/// Live classification for the dates currently on the form.
pub async fn classify_visit(
    State(state): State<AppState>,
    Json(req): Json<ClassifyRequest>,
) -> Json<ClassifyResponse> {
    let today = state.clock.today();
    let record = build_record(req.visit, req.evaluation_date, today);
    let result = evaluate(&record, today);

    Json(ClassifyResponse {
        quarter_end: quarter_end(record.quarter, record.reference_year),
        summary: result.summary(),
        blocking_reason: result.blocking_reason(),
        record,
        result,
    })
}

pub async fn submit_evaluation(
    State(state): State<AppState>,
    Json(submission): Json<TxMlSubmission>,
) -> Result<Json<TxMlSaved>, ApiError> {
    let today = state.clock.today();
    let record = build_record(
        submission.visit,
        Some(submission.header.evaluation_date),
        today,
    );
    let result = evaluate(&record, today);

    if let Some(reason) = result.blocking_reason() {
        tracing::info!(
            flag = result.counts_as_tx_ml.label(),
            "tx_ml submission blocked"
        );
        return Err(ApiError::Blocked(reason.to_string()));
    }

    let form = TxMl;
    let table = state.tables.tx_ml.as_str();
    let submission_id = Uuid::new_v4();
    let row = tables::tx_ml_row(&submission.header, &record, &result);

    records::append_with_header(state.store.as_ref(), table, form.header_row(), vec![row])
        .await?;

    AuditEvent::new(
        "submit_evaluation",
        form.id(),
        submission_id,
        &submission.header.reviewer_name,
        &submission.header.unit_name,
    )
    .with_details(json!({
        "country": submission.header.country,
        "quarter": record.quarter,
        "tx_ml": result.counts_as_tx_ml,
        "tx_curr_action": result.tx_curr_action,
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

    Ok(Json(TxMlSaved {
        submission_id,
        result,
        recent,
    }))
}
