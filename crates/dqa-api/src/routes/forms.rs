use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use dqa_core::models::checklist::ChecklistCriterion;
use dqa_core::models::common::{Country, Quarter, ReportMonth};
use dqa_core::models::table::Table;
use dqa_forms::error::FormError;
use dqa_forms::forms::hts_tst;
use dqa_forms::{all_forms, get_form};
use dqa_storage::records;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct FormSummary {
    id: String,
    name: String,
}

/// Everything the browser needs to render a form.
#[derive(Serialize)]
pub struct FormDetail {
    id: String,
    name: String,
    columns: Vec<String>,
    criteria: Vec<ChecklistCriterion>,
    countries: Vec<Country>,
    report_months: Vec<ReportMonth>,
    quarters: Vec<Quarter>,
    recent_rows: usize,
    history_rows: usize,
}

#[derive(Deserialize)]
pub struct HistoryQuery {
    limit: Option<usize>,
}

pub async fn list_forms() -> Json<Vec<FormSummary>> {
    let forms = all_forms()
        .iter()
        .map(|f| FormSummary {
            id: f.id().to_string(),
            name: f.name().to_string(),
        })
        .collect();
    Json(forms)
}

pub async fn get_form_detail(Path(id): Path<String>) -> Result<Json<FormDetail>, ApiError> {
    let form = get_form(&id).ok_or(FormError::UnknownForm(id))?;

    let criteria = if form.criteria().is_empty() {
        Vec::new()
    } else {
        hts_tst::blank_criteria()
    };

    Ok(Json(FormDetail {
        id: form.id().to_string(),
        name: form.name().to_string(),
        columns: form.header_row(),
        criteria,
        countries: Country::ALL.to_vec(),
        report_months: ReportMonth::ALL.to_vec(),
        quarters: Quarter::ALL.to_vec(),
        recent_rows: form.recent_rows(),
        history_rows: form.history_rows(),
    }))
}

/// Most recent rows of a form's table, oldest first.
pub async fn get_history(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Table>, ApiError> {
    let form = get_form(&id).ok_or_else(|| FormError::UnknownForm(id.clone()))?;
    let table = state
        .tables
        .for_form(form.id())
        .ok_or(FormError::UnknownForm(id))?;

    let limit = query.limit.unwrap_or(form.history_rows());
    let history = records::recent_records(state.store.as_ref(), table, limit).await?;
    Ok(Json(history))
}
