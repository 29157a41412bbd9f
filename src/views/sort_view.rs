use std::time::Duration;

use egui::{Color32, Id, Painter, Pos2, Rect, Response, Sense, Ui, Vec2, Widget};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::player::StepPlayer;
use crate::settings::{SettingsInteraction, SettingsStyle};
use crate::sort::{SortAlgorithm, SortProjection};

#[cfg(feature = "events")]
use crate::events::{Event, PayloadBarMoved, PayloadPlaybackFinished};
#[cfg(feature = "events")]
use crossbeam::channel::Sender;

const CONTAINER_HEIGHT: f32 = 400.;
const PADDING: f32 = 4.;
const BAR_GAP: f32 = 2.;
const KEY_DRAG: &str = "egui_algos_sort_drag";

const COLOR_BAR: Color32 = Color32::from_rgb(0x3b, 0x82, 0xf6);
const COLOR_BAR_ACTIVE: Color32 = Color32::from_rgb(0xec, 0x48, 0x99);

/// Host-owned sort input plus its playback. The bar values are the snapshot
/// producers run against; while a run plays, the projection is displayed
/// instead and the final sorted array is committed back on completion.
#[derive(Debug)]
pub struct SortState {
    values: Vec<u32>,
    selected: Option<SortAlgorithm>,
    player: StepPlayer<SortProjection>,
    committed_generation: u64,
}

impl Default for SortState {
    fn default() -> Self {
        Self::new(50)
    }
}

impl SortState {
    /// Bars `1..=count`, in order; call [`SortState::shuffle`] to randomize.
    pub fn new(count: usize) -> Self {
        Self {
            values: (1..=count as u32).collect(),
            selected: None,
            player: StepPlayer::default(),
            committed_generation: 0,
        }
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn selected(&self) -> Option<SortAlgorithm> {
        self.selected
    }

    pub fn select(&mut self, algo: SortAlgorithm) {
        self.selected = Some(algo);
    }

    /// True while a trace is mid-playback; input mutation is rejected then.
    pub fn busy(&self) -> bool {
        self.player.is_playing()
    }

    pub fn set_delay(&mut self, delay: Duration) {
        self.player.set_delay(delay);
    }

    pub fn player(&self) -> &StepPlayer<SortProjection> {
        &self.player
    }

    pub fn shuffle(&mut self, rng: &mut impl rand::Rng) {
        if self.busy() {
            return;
        }
        self.values.shuffle(rng);
    }

    /// Splices the bar at `from` out and reinserts it at `to`.
    pub fn move_bar(&mut self, from: usize, to: usize) {
        if self.busy() || from >= self.values.len() || to >= self.values.len() || from == to {
            return;
        }
        let moved = self.values.remove(from);
        self.values.insert(to, moved);
    }

    /// Runs the selected producer against the current values and starts
    /// playback, superseding any previous run. Returns false when nothing is
    /// selected or a run is in flight.
    pub fn visualize(&mut self) -> bool {
        if self.busy() {
            return false;
        }
        let Some(algo) = self.selected else {
            return false;
        };
        let trace = algo.trace(&self.values);
        self.player
            .play(trace, SortProjection::new(self.values.clone()));
        true
    }

    /// Values and highlight indices to render this frame.
    pub fn display(&self) -> (&[u32], &[usize]) {
        if self.busy() {
            if let Some(projection) = self.player.projection() {
                return (projection.values(), projection.active());
            }
        }
        (&self.values, &[])
    }

    /// Advances playback; returns true the frame a run completes, at which
    /// point the sorted projection has been committed back into the values.
    pub fn tick_playback(&mut self) -> bool {
        self.player.tick();
        if self.player.is_finished() && self.committed_generation != self.player.generation() {
            if let Some(projection) = self.player.projection() {
                self.values = projection.values().to_vec();
            }
            self.committed_generation = self.player.generation();
            return true;
        }
        false
    }
}

/// Drag-in-progress source index, persisted in egui memory across frames.
#[derive(Clone, Default, Serialize, Deserialize)]
struct DragState {
    from: Option<usize>,
}

impl DragState {
    fn load(ui: &Ui) -> Self {
        ui.data_mut(|data| data.get_persisted(Id::new(KEY_DRAG)).unwrap_or_default())
    }

    fn save(self, ui: &Ui) {
        ui.data_mut(|data| data.insert_persisted(Id::new(KEY_DRAG), self));
    }
}

/// Bar-array widget: renders the current projection and lets the user drag a
/// bar onto another slot to reorder the input between runs.
pub struct SortView<'a> {
    state: &'a mut SortState,
    settings_interaction: SettingsInteraction,
    settings_style: SettingsStyle,
    #[cfg(feature = "events")]
    events_publisher: Option<&'a Sender<Event>>,
}

impl<'a> SortView<'a> {
    pub fn new(state: &'a mut SortState) -> Self {
        Self {
            state,
            settings_interaction: SettingsInteraction::default(),
            settings_style: SettingsStyle::default(),
            #[cfg(feature = "events")]
            events_publisher: None,
        }
    }

    pub fn with_interactions(mut self, settings: &SettingsInteraction) -> Self {
        self.settings_interaction = settings.clone();
        self
    }

    pub fn with_styles(mut self, settings: &SettingsStyle) -> Self {
        self.settings_style = settings.clone();
        self
    }

    #[cfg(feature = "events")]
    pub fn with_events(mut self, publisher: &'a Sender<Event>) -> Self {
        self.events_publisher = Some(publisher);
        self
    }

    #[cfg(feature = "events")]
    fn publish(&self, event: Event) {
        if let Some(publisher) = self.events_publisher {
            publisher.send(event).ok();
        }
    }

    fn bar_at(&self, rect: &Rect, pos: Pos2) -> usize {
        let idx = ((pos.x - rect.left()) / self.settings_style.bar_width).floor();
        (idx.max(0.) as usize).min(self.state.len().saturating_sub(1))
    }

    fn draw_bars(&self, rect: &Rect, painter: &Painter) {
        let (values, active) = self.state.display();
        let max = values.iter().copied().max().unwrap_or(1).max(1) as f32;
        let scale = (rect.height() - PADDING * 2.) / max;

        for (idx, value) in values.iter().enumerate() {
            let x = rect.left() + idx as f32 * self.settings_style.bar_width;
            let height = *value as f32 * scale;
            let bar = Rect::from_min_max(
                Pos2::new(x + BAR_GAP / 2., rect.bottom() - PADDING - height),
                Pos2::new(
                    x + self.settings_style.bar_width - BAR_GAP / 2.,
                    rect.bottom() - PADDING,
                ),
            );
            let color = if active.contains(&idx) {
                COLOR_BAR_ACTIVE
            } else {
                COLOR_BAR
            };
            painter.rect_filled(bar, 2., color);
        }
    }

    fn handle_drag(&mut self, ui: &Ui, response: &Response) {
        if !self.settings_interaction.bar_drag || self.state.busy() {
            return;
        }

        let mut drag = DragState::load(ui);
        if response.drag_started() {
            if let Some(pos) = response.interact_pointer_pos() {
                drag.from = Some(self.bar_at(&response.rect, pos));
            }
        }
        if response.drag_stopped() {
            if let (Some(from), Some(pos)) = (drag.from.take(), response.interact_pointer_pos()) {
                let to = self.bar_at(&response.rect, pos);
                if from != to {
                    self.state.move_bar(from, to);
                    #[cfg(feature = "events")]
                    self.publish(Event::BarMoved(PayloadBarMoved { from, to }));
                }
            }
        }
        drag.save(ui);
    }
}

impl Widget for &mut SortView<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let width = self.settings_style.bar_width * self.state.len().max(1) as f32;
        let (response, painter) =
            ui.allocate_painter(Vec2::new(width, CONTAINER_HEIGHT), Sense::click_and_drag());

        let finished = self.state.tick_playback();
        #[cfg(feature = "events")]
        if finished {
            self.publish(Event::PlaybackFinished(PayloadPlaybackFinished {
                generation: self.state.player().generation(),
                steps: self.state.player().cursor(),
            }));
        }
        #[cfg(not(feature = "events"))]
        let _ = finished;

        if self.state.busy() {
            ui.ctx().request_repaint();
        }

        self.draw_bars(&response.rect, &painter);
        self.handle_drag(ui, &response);

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visualize_requires_a_selection() {
        let mut state = SortState::new(10);
        assert!(!state.visualize());
        state.select(SortAlgorithm::Bubble);
        assert!(state.visualize());
        assert!(state.busy() || state.player().is_finished());
    }

    #[test]
    fn move_bar_splices() {
        let mut state = SortState::new(5);
        state.move_bar(0, 3);
        assert_eq!(state.values(), &[2, 3, 4, 1, 5]);
        state.move_bar(3, 0);
        assert_eq!(state.values(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn mutation_is_rejected_while_busy() {
        let mut state = SortState::new(5);
        state.move_bar(4, 0); // make it unsorted so the trace is non-empty
        state.select(SortAlgorithm::Bubble);
        assert!(state.visualize());
        assert!(state.busy());

        let before = state.values().to_vec();
        state.move_bar(0, 2);
        assert_eq!(state.values(), before);
        assert!(!state.visualize());
    }

    #[test]
    fn finished_run_commits_sorted_values() {
        let mut state = SortState::new(6);
        state.set_delay(Duration::ZERO);
        state.move_bar(5, 0);
        state.select(SortAlgorithm::Quick);
        assert!(state.visualize());

        let mut finished = false;
        for _ in 0..10_000 {
            if state.tick_playback() {
                finished = true;
                break;
            }
        }
        assert!(finished);
        assert_eq!(state.values(), &[1, 2, 3, 4, 5, 6]);
        let multiset: Vec<u32> = (1..=6).collect();
        assert_eq!(state.values(), multiset.as_slice());
    }
}
