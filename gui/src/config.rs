use eframe::egui::Color32;
use std::time::Duration;

pub struct Config;

impl Config {
    pub const GRID_WIDTH: usize = 64;
    pub const GRID_HEIGHT: usize = 48;
    pub const WINDOW_SIZE: [f32; 2] = [760.0, 680.0];

    pub const CELL_SIZE: f32 = 10.0;
    pub const CELL_GAP: f32 = 1.0;
    pub const INTERVAL_FIELD_WIDTH: f32 = 60.0;

    pub const RANDOM_DENSITY: f64 = 0.25;
    pub const STEP_INTERVAL: Duration = Duration::from_millis(100);

    pub const GRID_COLOR: Color32 = Color32::GRAY;
    pub const DEAD_COLOR: Color32 = Color32::WHITE;
    pub const INITIAL_COLOR: Color32 = Color32::from_rgb(0x88, 0x88, 0x88);
    pub const BORN_COLOR: Color32 = Color32::from_rgb(0x44, 0xDD, 0x44);
    pub const SURVIVING_COLOR: Color32 = Color32::from_rgb(0x44, 0x44, 0xFF);
    pub const DYING_COLOR: Color32 = Color32::from_rgb(0xFF, 0x44, 0x44);
    pub const EPHEMERAL_COLOR: Color32 = Color32::from_rgb(0xFF, 0xDD, 0x44);
}
