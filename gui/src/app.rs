use crate::config::Config;
use crate::palette::cell_color;
use crate::stats::PopulationStats;
use eframe::egui;
use eframe::egui::{Pos2, Rect, ScrollArea, Ui};
use life_engine::{Configuration, Engine, Listener};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Map a pointer position to the `(row, col)` of the cell under it.
pub fn cell_at(board: Rect, pos: Pos2, cell_size: f32) -> Option<(usize, usize)> {
    if !board.contains(pos) {
        return None;
    }
    let offset = pos - board.min;
    Some((
        (offset.y / cell_size) as usize,
        (offset.x / cell_size) as usize,
    ))
}

/// Parse a step interval in milliseconds; zero is not an interval.
pub fn parse_interval(text: &str) -> Option<Duration> {
    match text.trim().parse::<u64>() {
        Ok(ms) if ms > 0 => Some(Duration::from_millis(ms)),
        _ => None,
    }
}

pub struct GuiOfLife {
    engine: Engine,
    stats: Rc<RefCell<PopulationStats>>,
    running: bool,
    step_interval: Duration,
    interval_text: String,
    last_step: Instant,
}

impl GuiOfLife {
    pub fn new(_cc: &eframe::CreationContext<'_>, engine: Engine) -> Self {
        let stats = Rc::new(RefCell::new(PopulationStats::default()));
        let listener: Rc<dyn Listener<Engine>> = {
            let stats = Rc::clone(&stats);
            Rc::new(move |engine: &Engine| {
                stats
                    .borrow_mut()
                    .record(engine.generation(), engine.population())
            })
        };
        engine.subscribe(listener);

        Self {
            engine,
            stats,
            running: false,
            step_interval: Config::STEP_INTERVAL,
            interval_text: Config::STEP_INTERVAL.as_millis().to_string(),
            last_step: Instant::now(),
        }
    }

    fn start_stop(&mut self) {
        self.running = !self.running;
        self.last_step = Instant::now();
        log::info!("{}", if self.running { "started" } else { "stopped" });
    }

    fn step(&mut self) {
        self.engine.advance();
        self.last_step = Instant::now();
    }

    fn clear(&mut self) {
        self.engine.reset();
        self.stats.borrow_mut().reset();
        log::info!("grid cleared");
    }

    fn configure(&mut self, configuration: &Configuration) {
        self.engine.apply_configuration(configuration);
    }

    fn randomize(&mut self) {
        match Configuration::random(Config::RANDOM_DENSITY) {
            Ok(configuration) => self.configure(&configuration),
            Err(err) => log::warn!("{err}"),
        }
    }

    fn toggle(&mut self, row: usize, col: usize) {
        match self.engine.toggle(row, col) {
            Ok(()) => self.engine.refresh_display_classification(),
            Err(err) => log::debug!("click ignored: {err}"),
        }
    }

    fn apply_interval_text(&mut self) {
        match parse_interval(&self.interval_text) {
            Some(interval) => {
                self.step_interval = interval;
                log::info!("step interval changed to {} ms", interval.as_millis());
            }
            None => {
                log::warn!("invalid step interval '{}'", self.interval_text);
                self.interval_text = self.step_interval.as_millis().to_string();
            }
        }
    }

    fn controls(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            let label = if self.running { "Stop" } else { "Start" };
            if ui.button(label).clicked() {
                self.start_stop();
            }
            if ui.button("Step").clicked() {
                self.step();
            }
            if ui.button("Clear").clicked() {
                self.clear();
            }
            if ui.button("Random").clicked() {
                self.randomize();
            }
            if ui.button("Cannon").clicked() {
                self.configure(&Configuration::cannon());
            }

            ui.label("Speed (ms):");
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.interval_text)
                    .desired_width(Config::INTERVAL_FIELD_WIDTH),
            );
            if response.lost_focus() {
                self.apply_interval_text();
            }
        });
    }

    fn create_grid(&mut self, ui: &mut Ui) {
        let grid = self.engine.grid();

        // Calculate the grid starting point
        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(
                Config::CELL_SIZE * grid.width() as f32,
                Config::CELL_SIZE * grid.height() as f32,
            ),
            egui::Sense::click(),
        );

        let painter = ui.painter();
        painter.rect_filled(rect, 0.0, Config::GRID_COLOR);
        for (row, col, cell) in grid.cells() {
            let pos = rect.min
                + egui::vec2(col as f32 * Config::CELL_SIZE, row as f32 * Config::CELL_SIZE);
            let size = Config::CELL_SIZE - Config::CELL_GAP;
            painter.rect_filled(
                Rect::from_min_size(pos, egui::vec2(size, size)),
                0.0,
                cell_color(cell),
            );
        }

        if response.clicked() {
            let clicked = response
                .interact_pointer_pos()
                .and_then(|pos| cell_at(rect, pos, Config::CELL_SIZE));
            if let Some((row, col)) = clicked {
                self.toggle(row, col);
            }
        }
    }

    fn status(&self, ui: &mut Ui) {
        let stats = self.stats.borrow();
        let state = if self.running { "Running" } else { "Paused" };
        ui.label(format!(
            "Generation: {} | {} | Population: {}",
            stats.generation(),
            state,
            stats.population()
        ));
        ui.label(format!(
            "Max: {} | Min: {} | Avg: {:.2} over {} samples",
            stats.max(),
            stats.min(),
            stats.average(),
            stats.history().len()
        ));
    }
}

impl eframe::App for GuiOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.running {
            if self.last_step.elapsed() >= self.step_interval {
                self.step();
            }
            ctx.request_repaint_after(self.step_interval);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::both().show(ui, |ui| {
                ui.heading("Game of Life");
                self.controls(ui);
                self.create_grid(ui);
                self.status(ui);
            });
        });
    }
}
