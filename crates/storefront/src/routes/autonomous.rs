//! Autonomous store check-in.
//!
//! Leaving the store credits the visit bonus to the loyalty balance.

use atadiesel_core::VisitStatus;
use axum::{Json, extract::State};
use chrono::Utc;
use serde::Serialize;
use tracing::instrument;

use crate::error::Result;
use crate::state::AppState;

/// Visit status plus any points credited by the action.
#[derive(Debug, Serialize)]
pub struct VisitResponse {
    #[serde(flatten)]
    pub status: VisitStatus,
    pub points_earned: u32,
}

impl From<VisitStatus> for VisitResponse {
    fn from(status: VisitStatus) -> Self {
        Self {
            status,
            points_earned: 0,
        }
    }
}

/// Current visit status.
///
/// GET /autonomous
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Json<VisitResponse> {
    let visit = state.visit().read().await;
    Json(visit.status(Utc::now()).into())
}

/// Issue a QR code for the door.
///
/// POST /autonomous/qrcode
///
/// # Errors
///
/// Returns 409 while a visit or its summary is in progress.
#[instrument(skip(state))]
pub async fn issue_qr(State(state): State<AppState>) -> Result<Json<VisitResponse>> {
    let now = Utc::now();
    let mut visit = state.visit().write().await;
    visit.issue_qr(now)?;
    Ok(Json(visit.status(now).into()))
}

/// Scan the QR code and enter.
///
/// POST /autonomous/enter
///
/// # Errors
///
/// Returns 409 if there is no valid QR code. An expired code also resets the
/// visit.
#[instrument(skip(state))]
pub async fn enter(State(state): State<AppState>) -> Result<Json<VisitResponse>> {
    let now = Utc::now();
    let mut visit = state.visit().write().await;
    visit.enter(now)?;
    tracing::info!("Customer entered autonomous store");
    Ok(Json(visit.status(now).into()))
}

/// Leave the store.
///
/// POST /autonomous/exit
///
/// # Errors
///
/// Returns 409 unless the customer is inside.
#[instrument(skip(state))]
pub async fn exit(State(state): State<AppState>) -> Result<Json<VisitResponse>> {
    let now = Utc::now();
    let mut visit = state.visit().write().await;
    let summary = visit.exit(now)?;
    let points_earned = state.loyalty().write().await.earn_autonomous_visit();

    tracing::info!(
        duration_secs = summary.duration_secs,
        points_earned,
        "Customer left autonomous store"
    );

    Ok(Json(VisitResponse {
        status: visit.status(now),
        points_earned,
    }))
}

/// Back to the start screen.
///
/// POST /autonomous/reset
#[instrument(skip(state))]
pub async fn reset(State(state): State<AppState>) -> Json<VisitResponse> {
    let now = Utc::now();
    let mut visit = state.visit().write().await;
    visit.reset();
    Json(visit.status(now).into())
}
