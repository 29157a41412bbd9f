use std::time::Duration;

use egui::{Color32, Id, Painter, Pos2, Rect, Response, Sense, Stroke, Ui, Vec2, Widget};
use serde::{Deserialize, Serialize};

use crate::hull::{dist2, graham_scan, HullProjection};
use crate::player::StepPlayer;
use crate::settings::{SettingsInteraction, SettingsStyle};

#[cfg(feature = "events")]
use crate::events::{Event, PayloadPlaybackFinished, PayloadPointMoved, PayloadPointPlaced};
#[cfg(feature = "events")]
use crossbeam::channel::Sender;

const BOX_SIZE: f32 = 400.;
const KEY_DRAG: &str = "egui_algos_hull_drag";

const COLOR_POINT: Color32 = Color32::from_rgb(0x11, 0x11, 0x11);
const COLOR_STACK: Color32 = Color32::from_rgb(0x3b, 0x82, 0xf6);
const COLOR_INSPECT: Color32 = Color32::from_rgb(0xf4, 0x3f, 0x5e);

/// Host-owned point set plus hull playback. Points live in widget-local
/// coordinates; producers read a snapshot on visualize. Once a run has
/// completed, dragging a point re-derives the hull as a pure re-projection
/// (the freeze-frame mode).
#[derive(Debug, Default)]
pub struct HullState {
    points: Vec<Pos2>,
    placing: bool,
    hull: Vec<Pos2>,
    player: StepPlayer<HullProjection>,
    has_visualized: bool,
    finished_generation: u64,
}

impl HullState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn hull(&self) -> &[Pos2] {
        &self.hull
    }

    pub fn placing(&self) -> bool {
        self.placing
    }

    /// Entering placing mode discards any previous run; leaving it keeps the
    /// state.
    pub fn set_placing(&mut self, placing: bool) {
        self.placing = placing;
        if placing {
            self.hull.clear();
            self.player.reset();
            self.has_visualized = false;
        }
    }

    pub fn busy(&self) -> bool {
        self.player.is_playing()
    }

    pub fn has_visualized(&self) -> bool {
        self.has_visualized
    }

    pub fn can_visualize(&self) -> bool {
        self.points.len() >= 3 && !self.busy()
    }

    pub fn set_delay(&mut self, delay: Duration) {
        self.player.set_delay(delay);
    }

    pub fn player(&self) -> &StepPlayer<HullProjection> {
        &self.player
    }

    pub fn add_point(&mut self, pos: Pos2) {
        if !self.busy() {
            self.points.push(pos);
        }
    }

    pub fn move_point(&mut self, idx: usize, pos: Pos2) {
        if self.busy() || idx >= self.points.len() {
            return;
        }
        self.points[idx] = pos;
        self.refresh_hull();
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.hull.clear();
        self.placing = false;
        self.has_visualized = false;
        self.player.reset();
    }

    /// Index of the point under `pos`, if any; the hit radius is slightly
    /// larger than the drawn circle.
    pub fn point_at(&self, pos: Pos2, radius: f32) -> Option<usize> {
        self.points
            .iter()
            .position(|p| dist2(*p, pos) <= (radius + 2.).powi(2))
    }

    /// Runs the Graham scan against a snapshot of the points and starts
    /// playback. Requires at least three points.
    pub fn visualize(&mut self) -> bool {
        if !self.can_visualize() {
            return false;
        }
        let scan = graham_scan(&self.points);
        self.hull = scan.hull;
        self.has_visualized = false;
        self.player.play(scan.trace, HullProjection::new());
        true
    }

    /// Freeze-frame re-derivation of the final hull from the live points.
    fn refresh_hull(&mut self) {
        if self.has_visualized && !self.busy() && self.points.len() >= 3 {
            self.hull = graham_scan(&self.points).hull;
        }
    }

    /// Advances playback; returns true the frame the trace is exhausted and
    /// the static final hull takes over.
    pub fn tick_playback(&mut self) -> bool {
        self.player.tick();
        if self.player.is_finished() && self.finished_generation != self.player.generation() {
            self.finished_generation = self.player.generation();
            self.has_visualized = true;
            return true;
        }
        false
    }
}

#[derive(Clone, Default, Serialize, Deserialize)]
struct DragState {
    point: Option<usize>,
}

impl DragState {
    fn load(ui: &Ui) -> Self {
        ui.data_mut(|data| data.get_persisted(Id::new(KEY_DRAG)).unwrap_or_default())
    }

    fn save(self, ui: &Ui) {
        ui.data_mut(|data| data.insert_persisted(Id::new(KEY_DRAG), self));
    }
}

/// Point-canvas widget: click to place points, drag to move them, and watch
/// the monotonic stack sweep during playback.
pub struct HullView<'a> {
    state: &'a mut HullState,
    settings_interaction: SettingsInteraction,
    settings_style: SettingsStyle,
    #[cfg(feature = "events")]
    events_publisher: Option<&'a Sender<Event>>,
}

impl<'a> HullView<'a> {
    pub fn new(state: &'a mut HullState) -> Self {
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

    fn draw(&self, rect: &Rect, painter: &Painter) {
        let origin = rect.min.to_vec2();
        let stroke = Stroke::new(2., COLOR_STACK);

        for point in self.state.points() {
            painter.circle_filled(*point + origin, self.settings_style.point_radius, COLOR_POINT);
        }

        if self.state.busy() {
            if let Some(projection) = self.state.player().projection() {
                let stack = projection.stack();
                for pair in stack.windows(2) {
                    painter.line_segment([pair[0] + origin, pair[1] + origin], stroke);
                }
                if let Some((from, to)) = projection.inspect_edge() {
                    painter.line_segment(
                        [from + origin, to + origin],
                        Stroke::new(2., COLOR_INSPECT),
                    );
                }
            }
        } else if self.state.has_visualized() {
            let hull = self.state.hull();
            for i in 0..hull.len() {
                let a = hull[i];
                let b = hull[(i + 1) % hull.len()];
                painter.line_segment([a + origin, b + origin], stroke);
            }
        }
    }

    fn handle_input(&mut self, ui: &Ui, response: &Response) {
        if self.state.busy() {
            return;
        }
        let Some(pos) = response.interact_pointer_pos() else {
            return;
        };
        let local = pos - response.rect.min.to_vec2();

        let mut drag = DragState::load(ui);
        if response.drag_started() && self.settings_interaction.point_drag {
            drag.point = self
                .state
                .point_at(local, self.settings_style.point_radius);
        }
        if response.dragged() {
            if let Some(idx) = drag.point {
                self.state.move_point(idx, local);
                #[cfg(feature = "events")]
                self.publish(Event::PointMoved(PayloadPointMoved {
                    idx,
                    pos: [local.x, local.y],
                }));
            }
        }
        if response.drag_stopped() {
            drag.point = None;
        }

        if response.clicked()
            && drag.point.is_none()
            && self.settings_interaction.point_place
            && self.state.placing()
            && self
                .state
                .point_at(local, self.settings_style.point_radius)
                .is_none()
        {
            self.state.add_point(local);
            #[cfg(feature = "events")]
            self.publish(Event::PointPlaced(PayloadPointPlaced {
                pos: [local.x, local.y],
            }));
        }

        drag.save(ui);
    }
}

impl Widget for &mut HullView<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let (response, painter) =
            ui.allocate_painter(Vec2::splat(BOX_SIZE), Sense::click_and_drag());

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

        self.draw(&response.rect, &painter);
        self.handle_input(ui, &response);

        response
    }
}
