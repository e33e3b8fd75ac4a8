use std::sync::Arc;

use axum::{extract::State, response::Html, Json};
use selkit_core::{render_to_string, DecodeOutcome, GroupControl, RequestParams};
use tracing::info;

use crate::dto::SelectionResponse;
use crate::error::AppError;
use crate::state::AppState;

fn page(
    state: &AppState,
    control: &GroupControl,
    status: Option<&str>,
) -> Result<Html<String>, AppError> {
    let styles = state.styles();
    let group = render_to_string(control, styles.as_ref())?;
    let status = status
        .map(|s| format!("<p class=\"selkit-status\">{}</p>", s))
        .unwrap_or_default();
    Ok(Html(format!(
        "<!DOCTYPE html><html><head><title>selkit</title></head><body>{}\
         <form method=\"post\" action=\"/\">{}<button type=\"submit\">Save</button></form>\
         </body></html>",
        status, group
    )))
}

pub async fn show_form(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let control = state.control.read().await;
    page(&state, &control, None)
}

pub async fn submit_form(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Result<Html<String>, AppError> {
    let params = RequestParams::parse_urlencoded(&body)?;

    // One write guard for decode, commit and store; the copy is dropped if
    // the commit fails.
    let mut guard = state.control.write().await;
    let mut control = guard.clone();
    let outcome = control.decode(&params);
    control.commit()?;

    let selected = control.model.as_ref().map_or(0, |m| m.values().len());
    info!(outcome = ?outcome, selected, "form submitted");

    let status = match outcome {
        DecodeOutcome::Skipped => "Control is disabled or read-only; nothing changed".to_string(),
        DecodeOutcome::Absent | DecodeOutcome::Decoded => {
            format!("Saved {} selection(s)", selected)
        }
    };
    let response = page(&state, &control, Some(&status))?;
    *guard = control;
    Ok(response)
}

pub async fn selection(State(state): State<Arc<AppState>>) -> Json<SelectionResponse> {
    let control = state.control.read().await;
    let checked = control
        .options
        .rendered()
        .into_iter()
        .filter(|o| control.is_checked(o))
        .map(|o| o.element_id)
        .collect();
    Json(SelectionResponse {
        group: control.id().to_string(),
        cardinality: control.cardinality,
        model: control.model.clone(),
        checked,
    })
}
