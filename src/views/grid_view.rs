use std::collections::HashSet;
use std::time::Duration;

use egui::{
    Align2, Color32, FontId, Id, Painter, Pos2, Rect, Response, Sense, Stroke, Ui, Vec2, Widget,
};
use serde::{Deserialize, Serialize};

use crate::player::StepPlayer;
use crate::search::{random_maze, Cell, GridSpec, SearchAlgorithm, SearchProjection};
use crate::settings::{SettingsInteraction, SettingsStyle};

#[cfg(feature = "events")]
use crate::events::{
    Event, PayloadGoalMoved, PayloadPlaybackFinished, PayloadStartMoved, PayloadWallToggled,
};
#[cfg(feature = "events")]
use crossbeam::channel::Sender;

const KEY_DRAG: &str = "egui_algos_grid_drag";

const COLOR_WALL: Color32 = Color32::from_rgb(0x11, 0x11, 0x11);
const COLOR_VISITED: Color32 = Color32::from_rgb(0x60, 0xa5, 0xfa);
const COLOR_PATH: Color32 = Color32::from_rgb(0xfd, 0xe0, 0x47);
const COLOR_START: Color32 = Color32::from_rgb(0xdc, 0x26, 0x26);
const COLOR_GRID_LINE: Color32 = Color32::from_rgb(0xd1, 0xd5, 0xdb);
const COLOR_OPEN: Color32 = Color32::WHITE;

/// Host-owned grid: movable start and goal, a wall set, the selected search
/// algorithm and its playback. Start, goal and walls are mutually exclusive;
/// editing is rejected while a run plays.
#[derive(Debug)]
pub struct GridState {
    grid: GridSpec,
    start: Cell,
    goal: Cell,
    walls: HashSet<Cell>,
    selected: Option<SearchAlgorithm>,
    player: StepPlayer<SearchProjection>,
    path: Vec<Cell>,
    finished_generation: u64,
}

impl Default for GridState {
    fn default() -> Self {
        Self::new(32)
    }
}

impl GridState {
    pub fn new(size: usize) -> Self {
        let grid = GridSpec::new(size);
        Self {
            grid,
            start: Cell::new(0, 0),
            goal: Cell::new(size - 1, size - 1),
            walls: HashSet::new(),
            selected: None,
            player: StepPlayer::default(),
            path: Vec::new(),
            finished_generation: 0,
        }
    }

    pub fn grid(&self) -> GridSpec {
        self.grid
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn goal(&self) -> Cell {
        self.goal
    }

    pub fn walls(&self) -> &HashSet<Cell> {
        &self.walls
    }

    pub fn selected(&self) -> Option<SearchAlgorithm> {
        self.selected
    }

    pub fn select(&mut self, algo: SearchAlgorithm) {
        self.selected = Some(algo);
    }

    pub fn busy(&self) -> bool {
        self.player.is_playing()
    }

    pub fn set_delay(&mut self, delay: Duration) {
        self.player.set_delay(delay);
    }

    pub fn player(&self) -> &StepPlayer<SearchProjection> {
        &self.player
    }

    /// The reconstructed path, available once playback has completed; empty
    /// while playing or when the goal is unreachable.
    pub fn path(&self) -> &[Cell] {
        if self.player.is_finished() {
            &self.path
        } else {
            &[]
        }
    }

    pub fn move_start(&mut self, cell: Cell) {
        if !self.busy() && self.grid.contains(cell) && cell != self.goal {
            self.walls.remove(&cell);
            self.start = cell;
        }
    }

    pub fn move_goal(&mut self, cell: Cell) {
        if !self.busy() && self.grid.contains(cell) && cell != self.start {
            self.walls.remove(&cell);
            self.goal = cell;
        }
    }

    /// Toggles a wall; start and goal cells never become walls. Returns
    /// whether the cell is a wall afterwards.
    pub fn toggle_wall(&mut self, cell: Cell) -> bool {
        if self.busy() || !self.grid.contains(cell) || cell == self.start || cell == self.goal {
            return self.walls.contains(&cell);
        }
        if self.walls.contains(&cell) {
            self.walls.remove(&cell);
            false
        } else {
            self.walls.insert(cell);
            true
        }
    }

    /// Wall painting while dragging only ever adds; toggling happens on
    /// press.
    pub fn paint_wall(&mut self, cell: Cell) -> bool {
        if self.busy() || !self.grid.contains(cell) || cell == self.start || cell == self.goal {
            return false;
        }
        self.walls.insert(cell)
    }

    pub fn clear_walls(&mut self) {
        if self.busy() {
            return;
        }
        self.walls.clear();
        self.path.clear();
        self.player.reset();
    }

    /// Marks each non-start, non-goal cell as a wall with fixed probability.
    pub fn randomize_maze(&mut self, rng: &mut impl rand::Rng) {
        if self.busy() {
            return;
        }
        self.walls = random_maze(self.grid, self.start, self.goal, rng);
        self.path.clear();
        self.player.reset();
    }

    /// Runs the selected producer and starts playback of its visit trace; the
    /// path appears once the trace is exhausted.
    pub fn visualize(&mut self) -> bool {
        if self.busy() {
            return false;
        }
        let Some(algo) = self.selected else {
            return false;
        };
        let outcome = algo.trace(self.grid, self.start, self.goal, &self.walls);
        self.path = outcome.path;
        self.player.play(outcome.trace, SearchProjection::new());
        true
    }

    /// Advances playback; returns true the frame a run completes.
    pub fn tick_playback(&mut self) -> bool {
        self.player.tick();
        if self.player.is_finished() && self.finished_generation != self.player.generation() {
            self.finished_generation = self.player.generation();
            return true;
        }
        false
    }
}

/// What a mouse-down grabbed: the start marker, the goal marker, or wall
/// painting. Persisted across frames while the button is held.
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
enum DragTarget {
    Start,
    Goal,
    Wall,
}

#[derive(Clone, Default, Serialize, Deserialize)]
struct DragState {
    target: Option<DragTarget>,
}

impl DragState {
    fn load(ui: &Ui) -> Self {
        ui.data_mut(|data| data.get_persisted(Id::new(KEY_DRAG)).unwrap_or_default())
    }

    fn save(self, ui: &Ui) {
        ui.data_mut(|data| data.insert_persisted(Id::new(KEY_DRAG), self));
    }
}

/// Grid widget: renders walls, the visited frontier and the final path, and
/// lets the user paint walls and drag the start and goal markers.
pub struct GridView<'a> {
    state: &'a mut GridState,
    settings_interaction: SettingsInteraction,
    settings_style: SettingsStyle,
    #[cfg(feature = "events")]
    events_publisher: Option<&'a Sender<Event>>,
}

impl<'a> GridView<'a> {
    pub fn new(state: &'a mut GridState) -> Self {
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

    fn cell_at(&self, rect: &Rect, pos: Pos2) -> Option<Cell> {
        let size = self.settings_style.cell_size;
        let col = ((pos.x - rect.left()) / size).floor();
        let row = ((pos.y - rect.top()) / size).floor();
        if row < 0. || col < 0. {
            return None;
        }
        let cell = Cell::new(row as usize, col as usize);
        self.state.grid().contains(cell).then_some(cell)
    }

    fn cell_rect(&self, rect: &Rect, cell: Cell) -> Rect {
        let size = self.settings_style.cell_size;
        let min = Pos2::new(
            rect.left() + cell.col as f32 * size,
            rect.top() + cell.row as f32 * size,
        );
        Rect::from_min_size(min, Vec2::splat(size))
    }

    fn draw(&self, rect: &Rect, painter: &Painter) {
        let visited = self.state.player().projection().map(SearchProjection::visited);
        let path: HashSet<Cell> = self.state.path().iter().copied().collect();
        let size = self.state.grid().size;

        for row in 0..size {
            for col in 0..size {
                let cell = Cell::new(row, col);
                let fill = if self.state.walls().contains(&cell) {
                    COLOR_WALL
                } else if path.contains(&cell) {
                    COLOR_PATH
                } else if visited.is_some_and(|v| v.contains(&cell)) {
                    COLOR_VISITED
                } else {
                    COLOR_OPEN
                };
                let cell_rect = self.cell_rect(rect, cell);
                painter.rect_filled(cell_rect, 0., fill);
                painter.rect_stroke(
                    cell_rect,
                    0.,
                    Stroke::new(1., COLOR_GRID_LINE),
                    egui::StrokeKind::Inside,
                );
            }
        }

        let start_rect = self.cell_rect(rect, self.state.start());
        painter.circle_filled(
            start_rect.center(),
            self.settings_style.cell_size * 0.4,
            COLOR_START,
        );

        let goal_rect = self.cell_rect(rect, self.state.goal());
        painter.text(
            goal_rect.center(),
            Align2::CENTER_CENTER,
            "X",
            FontId::monospace(self.settings_style.cell_size * 0.7),
            COLOR_WALL,
        );
    }

    fn handle_input(&mut self, ui: &Ui, response: &Response) {
        if !self.settings_interaction.grid_edit || self.state.busy() {
            return;
        }
        let Some(pos) = response.interact_pointer_pos() else {
            return;
        };
        let Some(cell) = self.cell_at(&response.rect, pos) else {
            return;
        };

        let mut drag = DragState::load(ui);
        let pressed = response.drag_started() || response.clicked();
        if pressed {
            drag.target = Some(if cell == self.state.start() {
                DragTarget::Start
            } else if cell == self.state.goal() {
                DragTarget::Goal
            } else {
                let added = self.state.toggle_wall(cell);
                #[cfg(feature = "events")]
                self.publish(Event::WallToggled(PayloadWallToggled { cell, added }));
                #[cfg(not(feature = "events"))]
                let _ = added;
                DragTarget::Wall
            });
        } else if response.dragged() {
            match drag.target {
                Some(DragTarget::Start) => {
                    if cell != self.state.start() {
                        self.state.move_start(cell);
                        #[cfg(feature = "events")]
                        self.publish(Event::StartMoved(PayloadStartMoved { cell }));
                    }
                }
                Some(DragTarget::Goal) => {
                    if cell != self.state.goal() {
                        self.state.move_goal(cell);
                        #[cfg(feature = "events")]
                        self.publish(Event::GoalMoved(PayloadGoalMoved { cell }));
                    }
                }
                Some(DragTarget::Wall) => {
                    if self.state.paint_wall(cell) {
                        #[cfg(feature = "events")]
                        self.publish(Event::WallToggled(PayloadWallToggled {
                            cell,
                            added: true,
                        }));
                    }
                }
                None => {}
            }
        }
        if response.drag_stopped() {
            drag.target = None;
        }
        drag.save(ui);
    }
}

impl Widget for &mut GridView<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let side = self.settings_style.cell_size * self.state.grid().size as f32;
        let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::click_and_drag());

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
