use selkit_core::{Cardinality, SelectedValues};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SelectionResponse {
    pub group: String,
    pub cardinality: Cardinality,
    pub model: Option<SelectedValues>,
    /// Element ids of the options currently rendered as checked.
    pub checked: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub options: usize,
}
