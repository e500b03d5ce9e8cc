//! Repository for the `missions` table.

use questboard_core::ledger::{self, CompletionOutcome};
use questboard_core::types::{DbId, Points};
use sqlx::SqlitePool;

use crate::models::mission::{CreateMission, Mission};
use crate::repositories::PlayerRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, difficulty, reward_points";

/// Provides CRUD operations and completion for missions.
pub struct MissionRepo;

impl MissionRepo {
    /// Insert a new mission, returning the created row.
    #[tracing::instrument(skip(pool), err)]
    pub async fn create(pool: &SqlitePool, input: &CreateMission) -> Result<Mission, sqlx::Error> {
        let query = format!(
            "INSERT INTO missions (title, difficulty, reward_points) \
             VALUES (?1, ?2, ?3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Mission>(&query)
            .bind(&input.title)
            .bind(&input.difficulty)
            .bind(input.reward_points)
            .fetch_one(pool)
            .await
    }

    /// Find a mission by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Mission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM missions WHERE id = ?1");
        sqlx::query_as::<_, Mission>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all missions in insertion order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Mission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM missions ORDER BY id");
        sqlx::query_as::<_, Mission>(&query).fetch_all(pool).await
    }

    /// Consume a mission and credit its reward to the player.
    ///
    /// Both steps run in one transaction: either the mission is gone and the
    /// balance credited, or nothing changes. The delete runs first so the
    /// transaction holds the write lock before the balance is read.
    #[tracing::instrument(skip(pool), err)]
    pub async fn complete(
        pool: &SqlitePool,
        id: DbId,
        player_id: DbId,
    ) -> Result<CompletionOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let reward_points = sqlx::query_scalar::<_, Points>(
            "DELETE FROM missions WHERE id = ?1 RETURNING reward_points",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(reward_points) = reward_points else {
            tx.rollback().await?;
            return Ok(CompletionOutcome::MissionNotFound { mission_id: id });
        };

        let Some(balance) = PlayerRepo::balance(&mut *tx, player_id).await? else {
            tx.rollback().await?;
            return Ok(CompletionOutcome::PlayerNotFound { player_id });
        };

        let Some(total_points) = ledger::credited_balance(balance, reward_points) else {
            tx.rollback().await?;
            return Ok(CompletionOutcome::Rejected {
                balance,
                reward_points,
            });
        };

        sqlx::query("UPDATE players SET total_points = ?2 WHERE id = ?1")
            .bind(player_id)
            .bind(total_points)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(CompletionOutcome::Completed {
            reward_points,
            total_points,
        })
    }
}
