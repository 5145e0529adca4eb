mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use app::GamesDashboardApp;
use config::DashboardConfig;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = DashboardConfig::from_env();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Best Games Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(GamesDashboardApp::new(config)))),
    )
}
