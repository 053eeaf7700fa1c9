mod app;
mod config;
mod data;
mod state;
mod theme;
mod ui;
mod view;

use anyhow::Context;
use app::LigaDashboardApp;
use config::DashboardConfig;
use eframe::egui;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Everything is loaded before the window opens; a partial dataset never
    // reaches the UI.
    let config = DashboardConfig::load().context("loading dashboard settings")?;
    let dataset = data::loader::load_dir(&config.data_dir, &config)
        .with_context(|| format!("loading league data from {}", config.data_dir.display()))?;
    let state = AppState::new(config, dataset);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Liga Dashboard",
        options,
        Box::new(move |cc| {
            // Install image loaders so egui can decode the PNG logo.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(LigaDashboardApp::new(cc, state)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("running the dashboard window: {e}"))
}
