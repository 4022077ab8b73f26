//! Loyalty programme: tiers, point earning and reward redemption.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Points per full R$ 10 spent.
pub const POINTS_PER_TEN_REAIS: u32 = 10;
/// Bonus for every completed autonomous-store visit.
pub const AUTONOMOUS_VISIT_BONUS: u32 = 5;
/// Bonus for referring a friend.
pub const REFERRAL_BONUS: u32 = 50;

/// Loyalty tier, derived from the point balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoyaltyTier {
    Bronze,
    Silver,
    Gold,
}

impl LoyaltyTier {
    /// Tier for a point balance.
    #[must_use]
    pub const fn for_points(points: u32) -> Self {
        match points {
            0..500 => Self::Bronze,
            500..1000 => Self::Silver,
            _ => Self::Gold,
        }
    }

    /// Lowest balance in this tier.
    #[must_use]
    pub const fn min_points(self) -> u32 {
        match self {
            Self::Bronze => 0,
            Self::Silver => 500,
            Self::Gold => 1000,
        }
    }

    /// The tier above this one.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Bronze => Some(Self::Silver),
            Self::Silver => Some(Self::Gold),
            Self::Gold => None,
        }
    }

    /// Display name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bronze => "Bronze",
            Self::Silver => "Prata",
            Self::Gold => "Ouro",
        }
    }
}

/// A reward that can be exchanged for points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Reward {
    pub id: &'static str,
    pub name: &'static str,
    pub cost: u32,
}

/// Rewards currently on offer.
pub const REWARDS: [Reward; 4] = [
    Reward {
        id: "agua-mineral-500ml",
        name: "Água Mineral 500ml",
        cost: 50,
    },
    Reward {
        id: "cafe-espresso",
        name: "Café Espresso",
        cost: 100,
    },
    Reward {
        id: "cerveja-premium",
        name: "Cerveja Premium",
        cost: 150,
    },
    Reward {
        id: "oleo-motor",
        name: "Óleo Motor",
        cost: 500,
    },
];

/// Errors raised by loyalty operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoyaltyError {
    #[error("unknown reward: {0}")]
    UnknownReward(String),
    #[error("not enough points: need {needed}, have {available}")]
    InsufficientPoints { needed: u32, available: u32 },
}

/// Points earned for a purchase total: ten per full R$ 10.
#[must_use]
pub fn points_for_purchase(total: Decimal) -> u32 {
    if total <= Decimal::ZERO {
        return 0;
    }
    let tens = (total / Decimal::TEN).floor().to_u32().unwrap_or(u32::MAX);
    tens.saturating_mul(POINTS_PER_TEN_REAIS)
}

/// Point balance of a customer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoyaltyAccount {
    points: u32,
}

/// Read model for the loyalty screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoyaltySummary {
    pub points: u32,
    pub tier: LoyaltyTier,
    pub tier_label: &'static str,
    pub next_tier: Option<LoyaltyTier>,
    pub points_to_next: Option<u32>,
    /// Progress through the current tier, 0..=100.
    pub progress_percent: u32,
}

impl LoyaltyAccount {
    /// Account with an opening balance.
    #[must_use]
    pub const fn with_points(points: u32) -> Self {
        Self { points }
    }

    /// Current balance.
    #[must_use]
    pub const fn points(&self) -> u32 {
        self.points
    }

    /// Credit points for a purchase. Returns the points credited.
    pub fn earn_purchase(&mut self, total: Decimal) -> u32 {
        self.credit(points_for_purchase(total))
    }

    /// Credit the autonomous-store visit bonus.
    pub fn earn_autonomous_visit(&mut self) -> u32 {
        self.credit(AUTONOMOUS_VISIT_BONUS)
    }

    /// Credit the referral bonus.
    pub fn earn_referral(&mut self) -> u32 {
        self.credit(REFERRAL_BONUS)
    }

    /// Exchange points for a reward.
    ///
    /// # Errors
    ///
    /// Returns an error if the reward doesn't exist or the balance is short.
    pub fn redeem(&mut self, reward_id: &str) -> Result<Reward, LoyaltyError> {
        let reward = REWARDS
            .iter()
            .find(|r| r.id == reward_id)
            .copied()
            .ok_or_else(|| LoyaltyError::UnknownReward(reward_id.to_string()))?;

        if reward.cost > self.points {
            return Err(LoyaltyError::InsufficientPoints {
                needed: reward.cost,
                available: self.points,
            });
        }

        self.points -= reward.cost;
        Ok(reward)
    }

    /// Tier and progress for display.
    #[must_use]
    pub fn summary(&self) -> LoyaltySummary {
        let tier = LoyaltyTier::for_points(self.points);
        let next_tier = tier.next();
        let points_to_next = next_tier.map(|next| next.min_points() - self.points);
        let progress_percent = next_tier.map_or(100, |next| {
            let span = next.min_points() - tier.min_points();
            (self.points - tier.min_points()) * 100 / span
        });

        LoyaltySummary {
            points: self.points,
            tier,
            tier_label: tier.label(),
            next_tier,
            points_to_next,
            progress_percent,
        }
    }

    fn credit(&mut self, points: u32) -> u32 {
        self.points = self.points.saturating_add(points);
        points
    }
}
