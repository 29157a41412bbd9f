use crate::player::MAX_DELAY_MS;

/// Speed slider bounds of the demo UI; mapped to a per-step delay as
/// `MAX_DELAY_MS - speed`.
pub const SPEED_MIN: u64 = 10;
pub const SPEED_MAX: u64 = 200;

#[derive(Debug, Clone)]
pub struct SettingsPlayback {
    /// Steps per delay unit; higher is faster.
    pub speed: u64,
}

impl Default for SettingsPlayback {
    fn default() -> Self {
        Self { speed: 50 }
    }
}

impl SettingsPlayback {
    /// Per-step delay in milliseconds derived from the speed slider.
    pub fn delay_ms(&self) -> u64 {
        MAX_DELAY_MS.saturating_sub(self.speed.clamp(SPEED_MIN, SPEED_MAX))
    }
}

#[derive(Debug, Clone)]
pub struct SettingsInteraction {
    /// Drag a bar onto another slot to reorder the sort input.
    pub bar_drag: bool,

    /// Click to add hull points while in placing mode.
    pub point_place: bool,

    /// Drag individual hull points.
    pub point_drag: bool,

    /// Toggle and paint walls, move start and goal.
    pub grid_edit: bool,
}

impl Default for SettingsInteraction {
    fn default() -> Self {
        Self {
            bar_drag: true,
            point_place: true,
            point_drag: true,
            grid_edit: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SettingsStyle {
    /// Bar width in points, including per-bar spacing.
    pub bar_width: f32,
    /// Point radius of hull vertices.
    pub point_radius: f32,
    /// Side length of one grid cell in points.
    pub cell_size: f32,
}

impl Default for SettingsStyle {
    fn default() -> Self {
        Self {
            bar_width: 10.,
            point_radius: 5.,
            cell_size: 16.,
        }
    }
}
