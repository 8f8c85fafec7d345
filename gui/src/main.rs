mod app;
mod config;
mod palette;
mod stats;

use anyhow::Context;
use app::GuiOfLife;
use config::Config;
use eframe::egui;
use eframe::run_native;
use life_engine::Engine;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let engine =
        Engine::new(Config::GRID_WIDTH, Config::GRID_HEIGHT, None).context("create engine")?;
    log::info!("created {}x{} grid", engine.width(), engine.height());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(Config::WINDOW_SIZE),
        ..Default::default()
    };

    run_native(
        "Game of Life GUI",
        options,
        Box::new(move |cc| Ok(Box::new(GuiOfLife::new(cc, engine)))),
    )
    .map_err(|err| anyhow::anyhow!("run native: {err}"))
}
