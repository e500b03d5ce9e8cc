//! Whole-board operations that span every table.

/// Rows touched by a board reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetSummary {
    pub missions_removed: u64,
    pub rewards_removed: u64,
    /// `false` when the player row did not exist.
    pub points_reset: bool,
}
