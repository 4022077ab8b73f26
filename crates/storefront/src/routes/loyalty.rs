//! Loyalty programme route handlers.

use atadiesel_core::{LoyaltySummary, REWARDS, Reward};
use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use tracing::instrument;

use crate::error::Result;
use crate::state::AppState;

/// Reward with affordability for the current balance.
#[derive(Debug, Serialize)]
pub struct RewardView {
    #[serde(flatten)]
    pub reward: Reward,
    pub affordable: bool,
}

/// Loyalty screen payload.
#[derive(Debug, Serialize)]
pub struct LoyaltyView {
    #[serde(flatten)]
    pub summary: LoyaltySummary,
    pub rewards: Vec<RewardView>,
}

impl From<LoyaltySummary> for LoyaltyView {
    fn from(summary: LoyaltySummary) -> Self {
        let rewards = REWARDS
            .iter()
            .map(|reward| RewardView {
                reward: *reward,
                affordable: reward.cost <= summary.points,
            })
            .collect();
        Self { summary, rewards }
    }
}

/// Credit or debit applied by an action.
#[derive(Debug, Serialize)]
pub struct LoyaltyActionResponse {
    pub points_delta: i64,
    pub loyalty: LoyaltyView,
}

/// Points, tier and rewards.
///
/// GET /loyalty
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Json<LoyaltyView> {
    let summary = state.loyalty().read().await.summary();
    Json(LoyaltyView::from(summary))
}

/// Credit a referral.
///
/// POST /loyalty/referrals
#[instrument(skip(state))]
pub async fn refer(State(state): State<AppState>) -> Json<LoyaltyActionResponse> {
    let mut loyalty = state.loyalty().write().await;
    let credited = loyalty.earn_referral();

    Json(LoyaltyActionResponse {
        points_delta: i64::from(credited),
        loyalty: LoyaltyView::from(loyalty.summary()),
    })
}

/// Exchange points for a reward.
///
/// POST /loyalty/rewards/{id}/redeem
///
/// # Errors
///
/// Returns 404 for unknown rewards and 409 when the balance is short.
#[instrument(skip(state))]
pub async fn redeem(
    State(state): State<AppState>,
    Path(reward_id): Path<String>,
) -> Result<Json<LoyaltyActionResponse>> {
    let mut loyalty = state.loyalty().write().await;
    let reward = loyalty.redeem(&reward_id)?;

    tracing::info!(reward = reward.id, cost = reward.cost, "Reward redeemed");

    Ok(Json(LoyaltyActionResponse {
        points_delta: -i64::from(reward.cost),
        loyalty: LoyaltyView::from(loyalty.summary()),
    }))
}
