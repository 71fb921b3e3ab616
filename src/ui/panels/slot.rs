use crate::app::CaptionerApp;
use eframe::egui;
use egui_phosphor::regular as Icon;

/// What the user did in a slot row this frame
enum SlotAction {
    CaptionEdited,
    TagToggled { tag: String, checked: bool },
    Save,
}

fn preview(ui: &mut egui::Ui, title: &str, path: &std::path::Path, height: f32) {
    ui.vertical(|ui| {
        ui.label(egui::RichText::new(title).small());
        ui.add(
            egui::Image::new(format!("file://{}", path.display()))
                .max_height(height)
                .max_width(height)
                .maintain_aspect_ratio(true),
        );
    });
}

/// Render one slot: control/target previews, caption box and tag checkboxes
pub fn render_slot_row(app: &mut CaptionerApp, ui: &mut egui::Ui, slot: usize) {
    let preview_height = app.config.preview_height;
    let show_save = !app.session.autosave();
    let mut action = None;

    let Some(view) = app.page.slots.get_mut(slot) else {
        return;
    };
    let Some(pair) = view.pair.clone() else {
        return;
    };
    let row_id = view.slot;

    ui.push_id(row_id, |ui| {
        ui.group(|ui| {
            ui.horizontal(|ui| {
                preview(ui, "Control Image", &pair.control_path, preview_height);
                preview(ui, "Target Image", &pair.target_path, preview_height);

                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(format!("{} {}", Icon::FILE_IMAGE, pair.filename));
                        if show_save
                            && ui
                                .button(Icon::FLOPPY_DISK)
                                .on_hover_text("Save caption")
                                .clicked()
                        {
                            action = Some(SlotAction::Save);
                        }
                    });
                    if let Some(err) = &view.load_error {
                        ui.colored_label(egui::Color32::from_rgb(255, 150, 0), err.as_str());
                    }

                    let caption = ui.add(
                        egui::TextEdit::multiline(&mut view.caption)
                            .hint_text("Input captions for target image")
                            .desired_rows(4)
                            .desired_width(f32::INFINITY),
                    );
                    if caption.changed() {
                        action = Some(SlotAction::CaptionEdited);
                    }

                    ui.label(egui::RichText::new("Tags").strong());
                    ui.horizontal_wrapped(|ui| {
                        for option in &view.display.options {
                            let mut checked = view.display.is_selected(option);
                            if ui.checkbox(&mut checked, option.as_str()).changed() {
                                action = Some(SlotAction::TagToggled {
                                    tag: option.clone(),
                                    checked,
                                });
                            }
                        }
                    });
                });
            });
        });
    });

    match action {
        Some(SlotAction::CaptionEdited) => app.caption_edited(slot),
        Some(SlotAction::TagToggled { tag, checked }) => app.tag_toggled(slot, &tag, checked),
        Some(SlotAction::Save) => app.save_slot(slot),
        None => {}
    }
}
