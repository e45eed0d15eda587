//! Desktop entry point for Sketchdeck.
//! Loads settings, then hands control to the egui application.

mod ui;

use eframe::egui;

use sketchdeck::infra::app_config::{config_path, load_config};

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config();
    log::info!("settings: {}", config_path().display());
    if config.resolved_api_key().is_none() {
        log::warn!("no API key configured; diagram generation will fail until ANTHROPIC_API_KEY is set");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 760.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Sketchdeck"),
        ..Default::default()
    };

    eframe::run_native(
        "Sketchdeck",
        options,
        Box::new(|cc| Ok(Box::new(ui::app::SketchdeckApp::new_egui(cc, config)))),
    )
}
