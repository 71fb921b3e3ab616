use crate::app::CaptionerApp;
use eframe::egui;

/// PageUp / PageDown page through the working set while no text field has focus
pub fn handle_keyboard_shortcuts(app: &mut CaptionerApp, ctx: &egui::Context) {
    if ctx.wants_keyboard_input() || !app.session.is_loaded() {
        return;
    }
    if ctx.input(|i| i.key_pressed(egui::Key::PageDown)) {
        tracing::debug!("[KEYBOARD] PageDown pressed");
        app.step_page(1);
    }
    if ctx.input(|i| i.key_pressed(egui::Key::PageUp)) {
        tracing::debug!("[KEYBOARD] PageUp pressed");
        app.step_page(-1);
    }
}
