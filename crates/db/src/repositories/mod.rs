//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&SqlitePool` as the first argument. Multi-statement mutations run
//! inside a single transaction and report their result as an outcome enum
//! from `questboard_core::ledger`.

pub mod board_repo;
pub mod mission_repo;
pub mod player_repo;
pub mod reward_repo;

pub use board_repo::BoardRepo;
pub use mission_repo::MissionRepo;
pub use player_repo::PlayerRepo;
pub use reward_repo::RewardRepo;
