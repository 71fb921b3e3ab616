use crate::app::CaptionerApp;
use eframe::egui;
use egui_phosphor::regular as Icon;

/// ◀ Prev | Page N / M | go to | Next ▶
///
/// `bar` picks which "go to page" box this bar edits (0 = top, 1 = bottom).
pub fn render_pagination_bar(app: &mut CaptionerApp, ui: &mut egui::Ui, bar: usize) {
    ui.horizontal(|ui| {
        let current = app.page.current_page;
        let total = app.page.total_pages;

        if ui
            .add_enabled(current > 1, egui::Button::new(format!("{} Prev", Icon::CARET_LEFT)))
            .clicked()
        {
            app.step_page(-1);
        }

        ui.label(format!("Page {} / {}", current, total));

        let response = ui.add(
            egui::TextEdit::singleline(&mut app.ui.goto_inputs[bar])
                .hint_text("Go to page...")
                .desired_width(90.0),
        );
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            app.goto_page(bar);
        }

        if ui
            .add_enabled(current < total, egui::Button::new(format!("Next {}", Icon::CARET_RIGHT)))
            .clicked()
        {
            app.step_page(1);
        }
    });
}
