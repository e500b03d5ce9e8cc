use questboard_core::seed::{DEFAULT_MISSIONS, DEFAULT_REWARDS};
use questboard_db::models::mission::CreateMission;
use questboard_db::repositories::{MissionRepo, PlayerRepo, RewardRepo};
use questboard_db::seed::seed_defaults;
use sqlx::SqlitePool;

/// Full bootstrap: health check, migrations already applied, seed, verify.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: SqlitePool) {
    questboard_db::health_check(&pool).await.unwrap();

    let report = seed_defaults(&pool, 1).await.unwrap();
    assert!(report.player_created);
    assert_eq!(report.missions_inserted, 3);
    assert_eq!(report.rewards_inserted, 3);

    let player = PlayerRepo::find_by_id(&pool, 1).await.unwrap().unwrap();
    assert_eq!(player.total_points, 0);

    let missions = MissionRepo::list(&pool).await.unwrap();
    let titles: Vec<_> = missions.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, ["Clean the bathroom", "Wash dishes", "Buy groceries"]);
    assert_eq!(missions[2].difficulty, "Normal");
    assert_eq!(missions[2].reward_points, 40);

    let rewards = RewardRepo::list(&pool).await.unwrap();
    assert_eq!(rewards.len(), DEFAULT_REWARDS.len());
    assert_eq!(rewards[1].description, "Movie trip");
    assert_eq!(rewards[1].points_required, 200);
}

/// Running the seed twice must not duplicate anything.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seed_is_idempotent(pool: SqlitePool) {
    seed_defaults(&pool, 1).await.unwrap();
    let second = seed_defaults(&pool, 1).await.unwrap();

    assert!(second.is_empty(), "second run should write nothing: {second:?}");
    assert_eq!(
        MissionRepo::list(&pool).await.unwrap().len(),
        DEFAULT_MISSIONS.len()
    );
    assert_eq!(
        RewardRepo::list(&pool).await.unwrap().len(),
        DEFAULT_REWARDS.len()
    );
}

/// A table that already has rows is left alone, the others are still seeded.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seed_skips_populated_tables(pool: SqlitePool) {
    PlayerRepo::create(&pool, 1, 120).await.unwrap();
    MissionRepo::create(
        &pool,
        &CreateMission {
            title: "Feed the cat".to_string(),
            difficulty: "Easy".to_string(),
            reward_points: 10,
        },
    )
    .await
    .unwrap();

    let report = seed_defaults(&pool, 1).await.unwrap();

    assert!(!report.player_created);
    assert_eq!(report.missions_inserted, 0);
    assert_eq!(report.rewards_inserted, DEFAULT_REWARDS.len());

    let player = PlayerRepo::find_by_id(&pool, 1).await.unwrap().unwrap();
    assert_eq!(player.total_points, 120, "existing balance must survive");
    assert_eq!(MissionRepo::list(&pool).await.unwrap().len(), 1);
}

/// The configured player id is the one created.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seed_creates_configured_player(pool: SqlitePool) {
    seed_defaults(&pool, 7).await.unwrap();

    assert!(PlayerRepo::find_by_id(&pool, 7).await.unwrap().is_some());
    assert!(PlayerRepo::find_by_id(&pool, 1).await.unwrap().is_none());
}
