//! Repository for the `rewards` table.

use questboard_core::ledger::RedemptionOutcome;
use questboard_core::types::{DbId, Points};
use sqlx::SqlitePool;

use crate::models::reward::{CreateReward, Reward};
use crate::repositories::PlayerRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, description, points_required";

/// Provides CRUD operations and redemption for rewards.
pub struct RewardRepo;

impl RewardRepo {
    /// Insert a new reward, returning the created row.
    #[tracing::instrument(skip(pool), err)]
    pub async fn create(pool: &SqlitePool, input: &CreateReward) -> Result<Reward, sqlx::Error> {
        let query = format!(
            "INSERT INTO rewards (description, points_required) \
             VALUES (?1, ?2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reward>(&query)
            .bind(&input.description)
            .bind(input.points_required)
            .fetch_one(pool)
            .await
    }

    /// Find a reward by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Reward>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rewards WHERE id = ?1");
        sqlx::query_as::<_, Reward>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all rewards in insertion order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Reward>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rewards ORDER BY id");
        sqlx::query_as::<_, Reward>(&query).fetch_all(pool).await
    }

    /// Spend the reward's cost from the player's balance.
    ///
    /// The debit is a single compare-and-decrement, so concurrent
    /// redemptions can never take the balance below zero. A negative cost
    /// that would push the balance past `i64::MAX` is refused the same way.
    /// The reward row is left in place and can be redeemed again.
    #[tracing::instrument(skip(pool), err)]
    pub async fn redeem(
        pool: &SqlitePool,
        id: DbId,
        player_id: DbId,
    ) -> Result<RedemptionOutcome, sqlx::Error> {
        let Some(reward) = Self::find_by_id(pool, id).await? else {
            return Ok(RedemptionOutcome::RewardNotFound { reward_id: id });
        };
        let points_required = reward.points_required;

        // The update is the first statement so the transaction owns the
        // write lock before the balance is re-read below.
        let mut tx = pool.begin().await?;

        let debited = sqlx::query_scalar::<_, Points>(
            "UPDATE players SET total_points = total_points - ?2 \
             WHERE id = ?1 AND total_points >= ?2 \
               AND (?2 >= 0 OR total_points <= 9223372036854775807 + ?2) \
             RETURNING total_points",
        )
        .bind(player_id)
        .bind(points_required)
        .fetch_optional(&mut *tx)
        .await?;

        let outcome = match debited {
            Some(total_points) => RedemptionOutcome::Redeemed {
                points_required,
                total_points,
            },
            None => match PlayerRepo::balance(&mut *tx, player_id).await? {
                None => RedemptionOutcome::PlayerNotFound { player_id },
                Some(balance) => RedemptionOutcome::InsufficientPoints {
                    balance,
                    points_required,
                },
            },
        };

        tx.commit().await?;
        Ok(outcome)
    }
}
