//! Repository for the `players` table.

use questboard_core::types::{DbId, Points};
use sqlx::{SqliteConnection, SqlitePool};

use crate::models::player::Player;

/// Column list for players queries.
const COLUMNS: &str = "id, total_points";

/// Provides reads and inserts for players. Balance changes go through
/// [`MissionRepo::complete`](super::MissionRepo::complete),
/// [`RewardRepo::redeem`](super::RewardRepo::redeem) and
/// [`BoardRepo::reset`](super::BoardRepo::reset).
pub struct PlayerRepo;

impl PlayerRepo {
    /// Find a player by ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Player>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM players WHERE id = ?1");
        sqlx::query_as::<_, Player>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a player with an explicit ID and starting balance.
    pub async fn create(
        pool: &SqlitePool,
        id: DbId,
        total_points: Points,
    ) -> Result<Player, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        Self::insert(&mut conn, id, total_points).await
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// Insert a player on an open connection, e.g. inside the seeding
    /// transaction.
    pub(crate) async fn insert(
        conn: &mut SqliteConnection,
        id: DbId,
        total_points: Points,
    ) -> Result<Player, sqlx::Error> {
        let query = format!(
            "INSERT INTO players (id, total_points) VALUES (?1, ?2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Player>(&query)
            .bind(id)
            .bind(total_points)
            .fetch_one(conn)
            .await
    }

    /// Current balance, read on an open connection so callers can use it
    /// inside their own transaction.
    pub(crate) async fn balance(
        conn: &mut SqliteConnection,
        id: DbId,
    ) -> Result<Option<Points>, sqlx::Error> {
        sqlx::query_scalar::<_, Points>("SELECT total_points FROM players WHERE id = ?1")
            .bind(id)
            .fetch_optional(conn)
            .await
    }
}
