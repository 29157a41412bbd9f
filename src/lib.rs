#[cfg(feature = "events")]
pub mod events;
pub mod hull;
mod player;
pub mod search;
mod settings;
pub mod sort;
mod trace;
mod views;

pub use self::player::{StepPlayer, MAX_DELAY_MS};
pub use self::settings::{
    SettingsInteraction, SettingsPlayback, SettingsStyle, SPEED_MAX, SPEED_MIN,
};
pub use self::trace::{Projection, Trace};
pub use self::views::{GridState, GridView, HullState, HullView, SortState, SortView};

pub use self::hull::{graham_scan, HullEvent, HullProjection, HullScan};
pub use self::search::{
    manhattan, random_maze, rebuild_path, Cell, GridSpec, SearchAlgorithm, SearchEvent,
    SearchOutcome, SearchProjection,
};
pub use self::sort::{SortAlgorithm, SortEvent, SortProjection};
