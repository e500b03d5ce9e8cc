//! Idempotent seeding of the default catalogue.
//!
//! Each table is checked independently and only written when it has nothing
//! in it, so seeding is safe to run on every start and never overwrites
//! existing data. The player table is checked for the configured player id
//! rather than for any row at all.

use questboard_core::ledger::STARTING_POINTS;
use questboard_core::seed::{DEFAULT_MISSIONS, DEFAULT_REWARDS};
use questboard_core::types::DbId;
use sqlx::SqliteConnection;

use crate::repositories::PlayerRepo;
use crate::DbPool;

/// What a seeding run wrote.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub player_created: bool,
    pub missions_inserted: usize,
    pub rewards_inserted: usize,
}

impl SeedReport {
    /// Whether the run wrote anything.
    pub fn is_empty(&self) -> bool {
        !self.player_created && self.missions_inserted == 0 && self.rewards_inserted == 0
    }
}

/// Seed the player row and the default missions and rewards where missing.
#[tracing::instrument(skip(pool), err)]
pub async fn seed_defaults(pool: &DbPool, player_id: DbId) -> Result<SeedReport, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let mut report = SeedReport::default();

    let player_rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM players WHERE id = ?1")
        .bind(player_id)
        .fetch_one(&mut *tx)
        .await?;
    if player_rows == 0 {
        PlayerRepo::insert(&mut *tx, player_id, STARTING_POINTS).await?;
        report.player_created = true;
    }

    if count_rows(&mut *tx, "missions").await? == 0 {
        for mission in &DEFAULT_MISSIONS {
            sqlx::query(
                "INSERT INTO missions (title, difficulty, reward_points) VALUES (?1, ?2, ?3)",
            )
            .bind(mission.title)
            .bind(mission.difficulty)
            .bind(mission.reward_points)
            .execute(&mut *tx)
            .await?;
        }
        report.missions_inserted = DEFAULT_MISSIONS.len();
    }

    if count_rows(&mut *tx, "rewards").await? == 0 {
        for reward in &DEFAULT_REWARDS {
            sqlx::query("INSERT INTO rewards (description, points_required) VALUES (?1, ?2)")
                .bind(reward.description)
                .bind(reward.points_required)
                .execute(&mut *tx)
                .await?;
        }
        report.rewards_inserted = DEFAULT_REWARDS.len();
    }

    tx.commit().await?;

    tracing::debug!(
        player_id,
        player_created = report.player_created,
        missions_inserted = report.missions_inserted,
        rewards_inserted = report.rewards_inserted,
        "Seeding finished",
    );

    Ok(report)
}

/// Row count for one of the catalogue tables.
async fn count_rows(conn: &mut SqliteConnection, table: &'static str) -> Result<i64, sqlx::Error> {
    let query = format!("SELECT COUNT(*) FROM {table}");
    sqlx::query_scalar::<_, i64>(&query).fetch_one(conn).await
}
