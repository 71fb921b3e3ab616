use crate::app::CaptionerApp;
use eframe::egui;

/// Ask before replacing a non-empty quick tag list with imported tags
pub fn render_import_confirmation(app: &mut CaptionerApp, ctx: &egui::Context) {
    if !app.ui.show_import_confirm {
        return;
    }

    egui::Window::new("Import Tags")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label("Are you sure you wish to overwrite the current quick tags?");
            ui.add_space(5.0);
            ui.label(format!(
                "Current quick tags: {}",
                app.session.quick_tags().len()
            ));
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                if ui.button("✓ Yes").clicked() {
                    app.ui.show_import_confirm = false;
                    app.import_tags(true);
                }

                if ui.button("✗ No").clicked() {
                    app.ui.show_import_confirm = false;
                }
            });
        });
}
