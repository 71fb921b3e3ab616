use crate::app::CaptionerApp;
use eframe::egui;

use super::pagination::render_pagination_bar;
use super::slot::render_slot_row;

/// Render the central panel with the paginated slot rows
pub fn render_central_panel(app: &mut CaptionerApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        if app.page.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.heading("No images loaded. Pick a control and target folder, then click 'Load Images'.");
            });
            return;
        }

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                render_pagination_bar(app, ui, 0);
                ui.add_space(5.0);

                for slot in 0..app.page.slots.len() {
                    if app.page.slots[slot].visible {
                        render_slot_row(app, ui, slot);
                        ui.add_space(5.0);
                    }
                }

                render_pagination_bar(app, ui, 1);
            });
    });
}
