//! Home-screen highlights.

use atadiesel_core::HighlightId;
use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;
use tracing::instrument;
use uuid::Uuid;

use crate::db::HighlightRepository;
use crate::error::Result;
use crate::models::{Highlight, HighlightForm};
use crate::state::AppState;

/// GET /highlights
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Json<Vec<Highlight>> {
    Json(HighlightRepository::new(state.db()).list_all().await)
}

/// Publish a highlight.
///
/// POST /highlights
///
/// # Errors
///
/// Returns 400 "title and image are required" if either is blank.
#[instrument(skip(state, form))]
pub async fn create(
    State(state): State<AppState>,
    Json(form): Json<HighlightForm>,
) -> Result<(StatusCode, Json<Highlight>)> {
    let highlight =
        form.into_highlight(HighlightId::new(Uuid::new_v4().to_string()), Utc::now())?;
    let highlight = HighlightRepository::new(state.db()).create(highlight).await;

    tracing::info!(highlight_id = %highlight.id, "Highlight published");

    Ok((StatusCode::CREATED, Json(highlight)))
}
