//! Default catalogue written into empty tables on first start.

use crate::types::Points;

/// A mission in the default catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultMission {
    pub title: &'static str,
    pub difficulty: &'static str,
    pub reward_points: Points,
}

/// A reward in the default catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultReward {
    pub description: &'static str,
    pub points_required: Points,
}

pub const DEFAULT_MISSIONS: [DefaultMission; 3] = [
    DefaultMission {
        title: "Clean the bathroom",
        difficulty: "Easy",
        reward_points: 50,
    },
    DefaultMission {
        title: "Wash dishes",
        difficulty: "Easy",
        reward_points: 30,
    },
    DefaultMission {
        title: "Buy groceries",
        difficulty: "Normal",
        reward_points: 40,
    },
];

pub const DEFAULT_REWARDS: [DefaultReward; 3] = [
    DefaultReward {
        description: "Walk in the park",
        points_required: 50,
    },
    DefaultReward {
        description: "Movie trip",
        points_required: 200,
    },
    DefaultReward {
        description: "Buy ice cream",
        points_required: 100,
    },
];
