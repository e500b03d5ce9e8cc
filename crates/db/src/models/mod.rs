//! Row structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts, where the resource accepts them

pub mod board;
pub mod mission;
pub mod player;
pub mod reward;
