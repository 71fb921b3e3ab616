use crate::app::CaptionerApp;
use crate::state::StatusKind;
use eframe::egui;
use egui_phosphor::regular as Icon;

/// Render the status bar with the latest message and session counts
pub fn render_bottom_panel(app: &mut CaptionerApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.add_space(5.0);
        ui.horizontal(|ui| {
            if let Some(status) = &app.status {
                let (icon, color) = match status.kind {
                    StatusKind::Info => (Icon::INFO, ui.visuals().text_color()),
                    StatusKind::Warning => (Icon::WARNING, egui::Color32::from_rgb(255, 150, 0)),
                    StatusKind::Saved => (Icon::FLOPPY_DISK, egui::Color32::from_rgb(100, 200, 100)),
                };
                ui.colored_label(color, format!("{} {}", icon, status.text));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if let Some(working_set) = app.session.working_set().filter(|ws| !ws.is_empty()) {
                    let folders = format!(
                        "Target: {}\nControl: {}",
                        app.session.target_dir().map(|p| p.display().to_string()).unwrap_or_default(),
                        app.session.control_dir().map(|p| p.display().to_string()).unwrap_or_default(),
                    );
                    ui.label(format!("{} {} images", Icon::IMAGES, working_set.len()))
                        .on_hover_text(folders);
                }
                let unsaved = app.session.unsaved_count();
                if unsaved > 0 {
                    ui.colored_label(
                        egui::Color32::from_rgb(255, 150, 0),
                        format!("{} unsaved", unsaved),
                    );
                }
            });
        });
        ui.add_space(5.0);
    });
}
