//! Points-ledger rules shared by mission completion and reward redemption.
//!
//! The storage layer applies every balance change inside a single write
//! transaction and reports what happened as one of the outcome enums below.
//! Handlers turn an outcome into a domain result with `into_result`.

use crate::error::CoreError;
use crate::types::{DbId, Points};

/// The player every request acts on unless configured otherwise.
pub const DEFAULT_PLAYER_ID: DbId = 1;

/// Balance a new player starts with.
pub const STARTING_POINTS: Points = 0;

pub const PLAYER_ENTITY: &str = "Player";
pub const MISSION_ENTITY: &str = "Mission";
pub const REWARD_ENTITY: &str = "Reward";

/// Balance after crediting `amount`.
///
/// Returns `None` if the result would overflow or drop below zero (a mission
/// may carry a negative reward).
pub fn credited_balance(balance: Points, amount: Points) -> Option<Points> {
    balance.checked_add(amount).filter(|total| *total >= 0)
}

// ---------------------------------------------------------------------------
// Completion
// ---------------------------------------------------------------------------

/// Result of completing a mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// Mission consumed and its reward credited.
    Completed {
        reward_points: Points,
        total_points: Points,
    },
    MissionNotFound { mission_id: DbId },
    PlayerNotFound { player_id: DbId },
    /// The credit would leave the balance negative; nothing was applied.
    Rejected {
        balance: Points,
        reward_points: Points,
    },
}

impl CompletionOutcome {
    /// The player's new balance, or the error to report.
    pub fn into_result(self) -> Result<Points, CoreError> {
        match self {
            Self::Completed { total_points, .. } => Ok(total_points),
            Self::MissionNotFound { mission_id } => Err(CoreError::NotFound {
                entity: MISSION_ENTITY,
                id: mission_id,
            }),
            Self::PlayerNotFound { player_id } => Err(CoreError::NotFound {
                entity: PLAYER_ENTITY,
                id: player_id,
            }),
            Self::Rejected {
                balance,
                reward_points,
            } => Err(CoreError::InsufficientPoints {
                balance,
                required: reward_points.saturating_neg(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Redemption
// ---------------------------------------------------------------------------

/// Result of redeeming a reward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedemptionOutcome {
    /// Points debited. The reward itself is untouched.
    Redeemed {
        points_required: Points,
        total_points: Points,
    },
    RewardNotFound { reward_id: DbId },
    PlayerNotFound { player_id: DbId },
    InsufficientPoints {
        balance: Points,
        points_required: Points,
    },
}

impl RedemptionOutcome {
    /// The player's new balance, or the error to report.
    pub fn into_result(self) -> Result<Points, CoreError> {
        match self {
            Self::Redeemed { total_points, .. } => Ok(total_points),
            Self::RewardNotFound { reward_id } => Err(CoreError::NotFound {
                entity: REWARD_ENTITY,
                id: reward_id,
            }),
            Self::PlayerNotFound { player_id } => Err(CoreError::NotFound {
                entity: PLAYER_ENTITY,
                id: player_id,
            }),
            Self::InsufficientPoints {
                balance,
                points_required,
            } => Err(CoreError::InsufficientPoints {
                balance,
                required: points_required,
            }),
        }
    }
}
