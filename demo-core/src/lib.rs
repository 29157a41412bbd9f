use std::time::Duration;

use eframe::{App, CreationContext};
#[cfg(feature = "events")]
use egui::{CollapsingHeader, ScrollArea};
use egui::{Context, Slider, Ui};
use egui_algos::{
    GridState, GridView, HullState, HullView, SearchAlgorithm, SettingsInteraction,
    SettingsPlayback, SettingsStyle, SortAlgorithm, SortState, SortView, SPEED_MAX, SPEED_MIN,
};

#[cfg(feature = "events")]
pub use crossbeam::channel::{unbounded, Receiver, Sender};
#[cfg(feature = "events")]
pub use egui_algos::events::Event;

#[cfg(feature = "events")]
pub const EVENTS_LIMIT: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Sort,
    Hull,
    Search,
}

pub struct DemoApp {
    pub tab: Tab,
    pub sort: SortState,
    pub hull: HullState,
    pub grid: GridState,
    pub settings_playback: SettingsPlayback,
    pub settings_interaction: SettingsInteraction,
    pub settings_style: SettingsStyle,
    #[cfg(feature = "events")]
    pub last_events: Vec<String>,
    #[cfg(feature = "events")]
    pub event_publisher: Sender<Event>,
    #[cfg(feature = "events")]
    pub event_consumer: Receiver<Event>,
}

impl DemoApp {
    pub fn new(_: &CreationContext<'_>) -> Self {
        let mut sort = SortState::new(50);
        sort.shuffle(&mut rand::rng());

        #[cfg(feature = "events")]
        let (event_publisher, event_consumer) = unbounded();

        Self {
            tab: Tab::Sort,
            sort,
            hull: HullState::new(),
            grid: GridState::new(32),
            settings_playback: SettingsPlayback::default(),
            settings_interaction: SettingsInteraction::default(),
            settings_style: SettingsStyle::default(),
            #[cfg(feature = "events")]
            last_events: Vec::new(),
            #[cfg(feature = "events")]
            event_publisher,
            #[cfg(feature = "events")]
            event_consumer,
        }
    }

    fn sync_delay(&mut self) {
        let delay = Duration::from_millis(self.settings_playback.delay_ms());
        self.sort.set_delay(delay);
        self.hull.set_delay(delay);
        self.grid.set_delay(delay);
    }

    fn draw_speed_slider(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label("Speed");
            ui.add(Slider::new(
                &mut self.settings_playback.speed,
                SPEED_MIN..=SPEED_MAX,
            ));
        });
    }

    fn draw_sort_controls(&mut self, ui: &mut Ui) {
        let busy = self.sort.busy();

        ui.label("Algorithm");
        ui.horizontal_wrapped(|ui| {
            for algo in SortAlgorithm::ALL {
                let selected = self.sort.selected() == Some(algo);
                if ui.selectable_label(selected, algo.name()).clicked() {
                    self.sort.select(algo);
                }
            }
        });

        ui.add_space(8.);
        ui.horizontal(|ui| {
            let can_run = self.sort.selected().is_some() && !busy;
            if ui.add_enabled(can_run, egui::Button::new("Visualize")).clicked() {
                self.sort.visualize();
            }
            if ui.add_enabled(!busy, egui::Button::new("Randomize")).clicked() {
                self.sort.shuffle(&mut rand::rng());
            }
        });

        ui.add_space(8.);
        self.draw_speed_slider(ui);
    }

    fn draw_hull_controls(&mut self, ui: &mut Ui) {
        let placing = self.hull.placing();
        if ui
            .selectable_label(placing, if placing { "Stop Placing" } else { "Place Points" })
            .clicked()
        {
            self.hull.set_placing(!placing);
        }

        ui.add_space(8.);
        ui.horizontal(|ui| {
            if ui
                .add_enabled(self.hull.can_visualize(), egui::Button::new("Visualize"))
                .clicked()
            {
                self.hull.visualize();
            }
            if ui.button("Clear").clicked() {
                self.hull.clear();
            }
        });
        if self.hull.points().len() < 3 {
            ui.small("Place at least 3 points.");
        }

        ui.add_space(8.);
        self.draw_speed_slider(ui);
    }

    fn draw_search_controls(&mut self, ui: &mut Ui) {
        let busy = self.grid.busy();

        ui.label("Algorithm");
        ui.horizontal_wrapped(|ui| {
            for algo in SearchAlgorithm::ALL {
                let selected = self.grid.selected() == Some(algo);
                if ui.selectable_label(selected, algo.name()).clicked() {
                    self.grid.select(algo);
                }
            }
        });

        ui.add_space(8.);
        ui.horizontal(|ui| {
            let can_run = self.grid.selected().is_some() && !busy;
            if ui.add_enabled(can_run, egui::Button::new("Visualize")).clicked() {
                self.grid.visualize();
            }
        });
        ui.horizontal(|ui| {
            if ui.add_enabled(!busy, egui::Button::new("Clear Walls")).clicked() {
                self.grid.clear_walls();
            }
            if ui.add_enabled(!busy, egui::Button::new("Random Maze")).clicked() {
                self.grid.randomize_maze(&mut rand::rng());
            }
        });

        ui.add_space(8.);
        self.draw_speed_slider(ui);
    }

    #[cfg(feature = "events")]
    fn drain_events(&mut self) {
        while let Ok(event) = self.event_consumer.try_recv() {
            if self.last_events.len() >= EVENTS_LIMIT {
                self.last_events.remove(0);
            }
            self.last_events.push(format!("{event:?}"));
        }
    }

    #[cfg(feature = "events")]
    fn draw_events(&mut self, ui: &mut Ui) {
        CollapsingHeader::new("Last events")
            .default_open(false)
            .show(ui, |ui| {
                if ui.button("Clear").clicked() {
                    self.last_events.clear();
                }
                ScrollArea::vertical().show(ui, |ui| {
                    for line in self.last_events.iter().rev() {
                        ui.small(line);
                    }
                });
            });
    }
}

impl App for DemoApp {
    fn update(&mut self, ctx: &Context, _: &mut eframe::Frame) {
        self.sync_delay();
        #[cfg(feature = "events")]
        self.drain_events();

        egui::TopBottomPanel::top("tabs").show(ctx, |ui| {
            ui.horizontal(|ui| {
                for (tab, label) in [
                    (Tab::Sort, "Sorting"),
                    (Tab::Hull, "Convex Hull"),
                    (Tab::Search, "Pathfinding"),
                ] {
                    if ui.selectable_label(self.tab == tab, label).clicked() {
                        self.tab = tab;
                    }
                }
            });
        });

        egui::SidePanel::right("controls")
            .min_width(220.)
            .show(ctx, |ui| {
                ui.add_space(8.);
                match self.tab {
                    Tab::Sort => self.draw_sort_controls(ui),
                    Tab::Hull => self.draw_hull_controls(ui),
                    Tab::Search => self.draw_search_controls(ui),
                }
                #[cfg(feature = "events")]
                {
                    ui.add_space(8.);
                    self.draw_events(ui);
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| match self.tab {
            Tab::Sort => {
                let view = SortView::new(&mut self.sort)
                    .with_interactions(&self.settings_interaction)
                    .with_styles(&self.settings_style);
                #[cfg(feature = "events")]
                let view = view.with_events(&self.event_publisher);
                let mut view = view;
                ui.add(&mut view);
            }
            Tab::Hull => {
                let view = HullView::new(&mut self.hull)
                    .with_interactions(&self.settings_interaction)
                    .with_styles(&self.settings_style);
                #[cfg(feature = "events")]
                let view = view.with_events(&self.event_publisher);
                let mut view = view;
                ui.add(&mut view);
            }
            Tab::Search => {
                let view = GridView::new(&mut self.grid)
                    .with_interactions(&self.settings_interaction)
                    .with_styles(&self.settings_style);
                #[cfg(feature = "events")]
                let view = view.with_events(&self.event_publisher);
                let mut view = view;
                ui.add(&mut view);
            }
        });
    }
}
