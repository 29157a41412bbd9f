use serde::{Deserialize, Serialize};

use crate::search::Cell;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadBarMoved {
    pub from: usize,
    pub to: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadPointPlaced {
    pub pos: [f32; 2],
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadPointMoved {
    pub idx: usize,
    pub pos: [f32; 2],
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadWallToggled {
    pub cell: Cell,
    pub added: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadStartMoved {
    pub cell: Cell,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadGoalMoved {
    pub cell: Cell,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadPlaybackFinished {
    pub generation: u64,
    pub steps: usize,
}

/// Interaction and playback events published on the crossbeam channel when
/// the `events` feature is enabled.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    BarMoved(PayloadBarMoved),
    PointPlaced(PayloadPointPlaced),
    PointMoved(PayloadPointMoved),
    WallToggled(PayloadWallToggled),
    StartMoved(PayloadStartMoved),
    GoalMoved(PayloadGoalMoved),
    PlaybackFinished(PayloadPlaybackFinished),
}
