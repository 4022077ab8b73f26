//! Dashboard route handler.

use axum::{
    Json,
    extract::{Query, State},
};
use chrono::Utc;
use serde::Deserialize;
use tracing::instrument;

use crate::db::{DeliveryRepository, UserRepository};
use crate::services::{DashboardReport, Period, build_report};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    #[serde(default)]
    pub period: Period,
}

/// Totals, best sellers and the revenue chart.
///
/// GET /dashboard?period=daily|weekly|monthly
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Json<DashboardReport> {
    let orders = DeliveryRepository::new(state.db()).list_all().await;
    let users = UserRepository::new(state.db()).count().await;

    Json(build_report(query.period, Utc::now(), users, &orders))
}
