use crate::types::{DbId, Points};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Insufficient points: balance {balance}, required {required}")]
    InsufficientPoints { balance: Points, required: Points },
}
