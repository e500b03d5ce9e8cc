//! Board-wide reset across `missions`, `rewards` and `players`.

use questboard_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::board::ResetSummary;

/// Operations that span every table.
pub struct BoardRepo;

impl BoardRepo {
    /// Delete every mission and reward and zero the player's balance.
    ///
    /// All three statements commit together or not at all.
    #[tracing::instrument(skip(pool), err)]
    pub async fn reset(pool: &SqlitePool, player_id: DbId) -> Result<ResetSummary, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let missions = sqlx::query("DELETE FROM missions")
            .execute(&mut *tx)
            .await?;

        let rewards = sqlx::query("DELETE FROM rewards")
            .execute(&mut *tx)
            .await?;

        let player = sqlx::query("UPDATE players SET total_points = 0 WHERE id = ?1")
            .bind(player_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(ResetSummary {
            missions_removed: missions.rows_affected(),
            rewards_removed: rewards.rows_affected(),
            points_reset: player.rows_affected() > 0,
        })
    }
}
