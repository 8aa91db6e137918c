use egui::ViewportBuilder;

use mapdeck_core::MapDeckApp;
use mapdeck_core::constants::{APPLICATION_NAME, VIEWPORT_X, VIEWPORT_Y};

/// The main function is the entry point of the application.
///
/// It initializes the logger, sets up the native window options,
/// and runs the map layer manager using the `eframe` framework.
fn main() -> eframe::Result<()> {
    // Dock layout chatter is only interesting when something breaks
    env_logger::Builder::from_default_env()
        .filter_module("egui_dock", log::LevelFilter::Warn)
        .init();
    eframe::run_native(
        APPLICATION_NAME,
        eframe::NativeOptions {
            viewport: ViewportBuilder::default().with_inner_size([VIEWPORT_X, VIEWPORT_Y]),
            ..Default::default()
        },
        Box::new(|_cc| Ok(Box::new(MapDeckApp::new()))),
    )
}
