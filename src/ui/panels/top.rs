use crate::app::CaptionerApp;
use crate::config::CAPTION_EXTENSIONS;
use eframe::egui;
use egui_phosphor::regular as Icon;

fn folder_row(ui: &mut egui::Ui, label: &str, input: &mut String) {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(
            egui::TextEdit::singleline(input)
                .hint_text("Folder path")
                .desired_width(420.0),
        );
        if ui.button(Icon::FOLDER_OPEN).clicked() {
            if let Some(path) = rfd::FileDialog::new().pick_folder() {
                *input = path.to_string_lossy().into_owned();
            }
        }
    });
}

/// Render the top panel with folder, caption and quick tag controls
pub fn render_top_panel(app: &mut CaptionerApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
        ui.add_space(5.0);
        ui.heading(format!("{} Kontext Manual Captioning", Icon::TAG));
        ui.label("Quick captioning and tagging of before and after image pairs.");
        ui.add_space(5.0);

        ui.group(|ui| {
            folder_row(ui, "Control image folder", &mut app.ui.control_dir_input);
            folder_row(ui, "Target image folder ", &mut app.ui.target_dir_input);

            ui.horizontal(|ui| {
                egui::ComboBox::from_label("Caption file extension")
                    .selected_text(app.ui.caption_ext_input.clone())
                    .show_ui(ui, |ui| {
                        for ext in CAPTION_EXTENSIONS {
                            ui.selectable_value(&mut app.ui.caption_ext_input, ext.to_string(), *ext);
                        }
                    });
                ui.add(
                    egui::TextEdit::singleline(&mut app.ui.caption_ext_input)
                        .desired_width(80.0),
                );

                ui.add_space(20.0);

                let mut autosave = app.session.autosave();
                if ui.checkbox(&mut autosave, "Autosave").changed() {
                    app.set_autosave(autosave);
                }

                ui.add_space(20.0);

                if ui
                    .button(format!("{} Load Images", Icon::IMAGES))
                    .clicked()
                {
                    app.load_images();
                }
            });
        });

        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.label("Quick Tags");
                let response = ui.add(
                    egui::TextEdit::singleline(&mut app.ui.quick_tags_text)
                        .hint_text("Comma separated list of tags")
                        .desired_width(520.0),
                );
                if response.changed() {
                    app.quick_tags_changed();
                }
                if response.lost_focus() {
                    app.persist_quick_tags();
                }
            });

            ui.horizontal(|ui| {
                let range = app.config.import_word_limit_range.clone();
                let slider = ui.add(
                    egui::Slider::new(&mut app.ui.import_word_limit, range)
                        .text("Ignore Imported Tags Above Word Count"),
                );
                if slider.drag_stopped() || (slider.changed() && !slider.dragged()) {
                    app.word_limit_changed();
                }

                ui.add_space(20.0);

                if ui
                    .button(format!("{} Import tags from captions", Icon::DOWNLOAD_SIMPLE))
                    .clicked()
                {
                    app.request_import();
                }
            });
        });
        ui.add_space(5.0);
    });
}
