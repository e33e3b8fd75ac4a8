pub mod form;

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::dto::HealthResponse;
use crate::state::AppState;

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        options: state.options.len(),
    })
}
