use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::middleware::request_log::request_log;
use crate::routes;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    // The form UI is served from a different origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/forms", get(routes::forms::list_forms))
        .route("/forms/{id}", get(routes::forms::get_form_detail))
        .route("/forms/{id}/history", get(routes::forms::get_history))
        .route("/hts-tst/tally", post(routes::hts_tst::tally_checklist))
        .route(
            "/hts-tst/evaluations",
            post(routes::hts_tst::submit_evaluation),
        )
        .route("/tx-ml/classify", post(routes::tx_ml::classify_visit))
        .route(
            "/tx-ml/evaluations",
            post(routes::tx_ml::submit_evaluation),
        )
        .layer(axum_mw::from_fn(request_log))
        .layer(cors)
        .with_state(state)
}
