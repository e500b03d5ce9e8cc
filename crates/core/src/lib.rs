//! Domain layer for the quest board: identifiers, errors, points-ledger
//! rules and the default catalogue. Contains no I/O.

pub mod error;
pub mod ledger;
pub mod seed;
pub mod types;
