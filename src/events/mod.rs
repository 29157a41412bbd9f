mod event;

pub use event::{
    Event, PayloadBarMoved, PayloadGoalMoved, PayloadPlaybackFinished, PayloadPointMoved,
    PayloadPointPlaced, PayloadStartMoved, PayloadWallToggled,
};
