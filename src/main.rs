use eframe::egui;
use tracing::info;

mod app;
mod config;
mod core;
mod logging;
mod state;
mod ui;

use app::CaptionerApp;
use config::AppConfig;
use state::Settings;

fn main() -> Result<(), eframe::Error> {
    let _log_path = logging::setup_logging();

    let config = AppConfig::default();
    let settings = Settings::load();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window_width, settings.window_height])
            .with_title("Kontext Manual Captioning"),
        ..Default::default()
    };

    info!("Launching application window");
    eframe::run_native(
        "Kontext Manual Captioning",
        options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);

            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);

            Ok(Box::new(CaptionerApp::new(config, settings)))
        }),
    )
}
