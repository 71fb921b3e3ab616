use eframe::egui;
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::config::{AppConfig, IMAGE_EXTENSIONS};
use crate::core::tags::parse_tags;
use crate::core::{CaptionSession, SaveStatus, Update};
use crate::state::{PageView, Settings, StatusKind, StatusMessage, UIState};
use crate::ui;

const MIN_WINDOW_SIZE: f32 = 200.0;

pub struct CaptionerApp {
    pub session: CaptionSession,
    pub config: AppConfig,
    pub settings: Settings,

    pub ui: UIState,
    pub page: PageView,
    pub status: Option<StatusMessage>,
}

fn path_input(text: &str) -> Option<PathBuf> {
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(PathBuf::from(text))
    }
}

impl CaptionerApp {
    pub fn new(config: AppConfig, settings: Settings) -> Self {
        let mut session = CaptionSession::new(config.page_size);
        session.set_autosave(settings.autosave);

        let mut ui = UIState::from_settings(&settings);
        ui.import_word_limit = config.clamp_word_limit(ui.import_word_limit);
        session.set_quick_tags(&ui.quick_tags_text);

        Self {
            session,
            config,
            settings,
            ui,
            page: PageView::default(),
            status: None,
        }
    }

    fn info(&mut self, text: impl Into<String>) {
        let text = text.into();
        info!("{}", text);
        self.status = Some(StatusMessage::new(StatusKind::Info, text));
    }

    fn warning(&mut self, text: impl Into<String>) {
        let text = text.into();
        warn!("{}", text);
        self.status = Some(StatusMessage::new(StatusKind::Warning, text));
    }

    /// Load the working set from the folder inputs and show page 1
    pub fn load_images(&mut self) {
        let target = path_input(&self.ui.target_dir_input);
        let control = path_input(&self.ui.control_dir_input);
        let caption_ext = self.ui.caption_ext_input.trim().to_string();
        info!("Loading images: target={:?} control={:?} ext={:?}", target, control, caption_ext);

        match self.session.load(
            target.as_deref(),
            control.as_deref(),
            &caption_ext,
            IMAGE_EXTENSIONS,
        ) {
            Ok(summary) => {
                self.info(format!(
                    "Loaded {} shared images. {} pages total.",
                    summary.image_count, summary.total_pages
                ));
                self.settings.last_target_dir = target;
                self.settings.last_control_dir = control;
                self.settings.caption_ext = caption_ext;
                self.settings.save();
                self.show_page(1);
            }
            Err(e) => self.warning(e.to_string()),
        }
    }

    /// Render `page` into the slot views
    pub fn show_page(&mut self, page: usize) {
        match self.session.render_page(page) {
            Ok(slots) => {
                for view in slots.iter().filter(|v| v.load_error.is_some()) {
                    if let (Some(pair), Some(err)) = (&view.pair, &view.load_error) {
                        warn!("Caption for {} could not be read: {}", pair.filename, err);
                    }
                }
                let state = self.session.page_state();
                self.page = PageView {
                    slots,
                    current_page: state.map(|s| s.current).unwrap_or(1),
                    total_pages: state.map(|s| s.total).unwrap_or(1),
                };
                self.ui.goto_inputs = Default::default();
                debug!("Showing page {} / {}", self.page.current_page, self.page.total_pages);
            }
            Err(e) => self.warning(e.to_string()),
        }
    }

    /// ◀ / ▶ buttons and PageUp / PageDown
    pub fn step_page(&mut self, delta: isize) {
        match self.session.step_page(delta) {
            Ok(Update::Set(page)) => self.show_page(page),
            Ok(Update::Unchanged) => {}
            Err(e) => self.warning(e.to_string()),
        }
    }

    /// Submit one of the "go to page" boxes
    pub fn goto_page(&mut self, bar: usize) {
        let requested = self.ui.goto_inputs[bar].clone();
        match self.session.goto_page(&requested) {
            Ok(Update::Set(page)) => self.show_page(page),
            Ok(Update::Unchanged) => self.ui.goto_inputs = Default::default(),
            Err(e) => self.warning(e.to_string()),
        }
    }

    /// Publish the quick tag text box and refresh every slot's checkboxes
    pub fn quick_tags_changed(&mut self) {
        let states = self.session.set_quick_tags(&self.ui.quick_tags_text);
        for (view, display) in self.page.slots.iter_mut().zip(states) {
            if view.visible {
                view.display = display;
            }
        }
    }

    pub fn persist_quick_tags(&mut self) {
        if self.settings.quick_tags != self.ui.quick_tags_text {
            self.settings.quick_tags = self.ui.quick_tags_text.clone();
            self.settings.save();
        }
    }

    pub fn set_autosave(&mut self, autosave: bool) {
        self.session.set_autosave(autosave);
        self.settings.autosave = autosave;
        self.settings.save();
    }

    pub fn word_limit_changed(&mut self) {
        self.settings.import_word_limit = self.ui.import_word_limit;
        self.settings.save();
    }

    fn report_save(&mut self, slot: usize, save: SaveStatus) {
        match save {
            SaveStatus::Saved(path) => debug!("Slot {} autosaved to {:?}", slot, path),
            SaveStatus::Deferred => {}
            SaveStatus::Failed(e) => self.warning(format!("Autosave failed: {}", e)),
        }
    }

    /// Free-text caption edit in a slot
    pub fn caption_edited(&mut self, slot: usize) {
        let Some(caption) = self.page.slots.get(slot).map(|v| v.caption.clone()) else {
            return;
        };
        match self.session.edit_caption(slot, &caption) {
            Ok(outcome) => {
                if let Some(view) = self.page.slots.get_mut(slot) {
                    view.display = outcome.value;
                }
                self.report_save(slot, outcome.save);
            }
            Err(e) => self.warning(e.to_string()),
        }
    }

    /// A tag checkbox in a slot was ticked or unticked
    pub fn tag_toggled(&mut self, slot: usize, tag: &str, checked: bool) {
        let Some(view) = self.page.slots.get(slot) else {
            return;
        };
        let selected: Vec<String> = view
            .display
            .options
            .iter()
            .filter(|option| {
                if option.as_str() == tag {
                    checked
                } else {
                    view.display.is_selected(option)
                }
            })
            .cloned()
            .collect();

        match self.session.edit_tags(slot, &selected) {
            Ok(outcome) => {
                if let Some(view) = self.page.slots.get_mut(slot) {
                    // keep the offered options so an unticked extra can be ticked again
                    view.display.selected = parse_tags(&outcome.value);
                    view.caption = outcome.value;
                }
                self.report_save(slot, outcome.save);
            }
            Err(e) => self.warning(e.to_string()),
        }
    }

    /// Manual save button (shown while autosave is off)
    pub fn save_slot(&mut self, slot: usize) {
        match self.session.save_caption(slot) {
            Ok(Update::Set(path)) => {
                let text = format!("Caption saved to {}", path.display());
                info!("{}", text);
                self.status = Some(StatusMessage::new(StatusKind::Saved, text));
            }
            Ok(Update::Unchanged) => debug!("Slot {} has nothing to save", slot),
            Err(e) => self.warning(e.to_string()),
        }
    }

    /// Record the window's inner size for the next launch.
    ///
    /// Sizes below the minimum usable window are ignored.
    pub fn remember_window_size(&mut self, size: egui::Vec2) {
        if size.x < MIN_WINDOW_SIZE || size.y < MIN_WINDOW_SIZE {
            debug!("Ignoring window size {:?}", size);
            return;
        }
        self.settings.window_width = size.x;
        self.settings.window_height = size.y;
    }

    fn save_on_exit(&mut self, window_size: Option<egui::Vec2>) {
        if let Some(size) = window_size {
            self.remember_window_size(size);
        }
        self.settings.quick_tags = self.ui.quick_tags_text.clone();
        self.settings.import_word_limit = self.ui.import_word_limit;
        info!("Saving settings on exit");
        self.settings.save();
    }

    /// "Import tags from captions" button
    pub fn request_import(&mut self) {
        if self.ui.quick_tags_text.trim().is_empty() {
            self.import_tags(false);
        } else {
            self.ui.show_import_confirm = true;
        }
    }

    pub fn import_tags(&mut self, overwrite_confirmed: bool) {
        let limit = self.config.clamp_word_limit(self.ui.import_word_limit);
        match self
            .session
            .import_tags(limit, overwrite_confirmed, IMAGE_EXTENSIONS)
        {
            Ok(Update::Set(text)) => {
                let count = parse_tags(&text).len();
                self.ui.quick_tags_text = text;
                self.quick_tags_changed();
                self.persist_quick_tags();
                self.info(format!("Imported {} unique tags.", count));
            }
            Ok(Update::Unchanged) => {}
            Err(e) => self.warning(e.to_string()),
        }
    }
}

impl eframe::App for CaptionerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::handle_keyboard_shortcuts(self, ctx);

        ui::render_top_panel(self, ctx);
        ui::render_bottom_panel(self, ctx);
        ui::render_central_panel(self, ctx);

        ui::render_import_confirmation(self, ctx);

        let (closing, inner_rect) =
            ctx.input(|i| (i.viewport().close_requested(), i.viewport().inner_rect));
        if closing {
            self.save_on_exit(inner_rect.map(|rect| rect.size()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn app_with_images(names: &[&str]) -> (CaptionerApp, tempfile::TempDir, tempfile::TempDir) {
        let target = tempfile::tempdir().unwrap();
        let control = tempfile::tempdir().unwrap();
        for name in names {
            fs::write(target.path().join(name), b"").unwrap();
            fs::write(control.path().join(name), b"").unwrap();
        }
        let mut app = CaptionerApp::new(AppConfig::default(), Settings::default());
        app.ui.target_dir_input = target.path().to_string_lossy().into_owned();
        app.ui.control_dir_input = control.path().to_string_lossy().into_owned();
        // load through the session so the real settings file is untouched
        app.session
            .load(
                Some(target.path()),
                Some(control.path()),
                ".txt",
                IMAGE_EXTENSIONS,
            )
            .unwrap();
        app.show_page(1);
        (app, target, control)
    }

    #[test]
    fn test_tag_toggle_keeps_options_and_syncs_caption() {
        let (mut app, target, _control) = app_with_images(&["a.png"]);
        app.ui.quick_tags_text = "a, b".to_string();
        app.quick_tags_changed();

        app.page.slots[0].caption = "z".to_string();
        app.caption_edited(0);
        assert_eq!(app.page.slots[0].display.options, vec!["a", "b", "z"]);

        app.tag_toggled(0, "b", true);
        assert_eq!(app.page.slots[0].caption, "b, z");
        assert_eq!(fs::read_to_string(target.path().join("a.txt")).unwrap(), "b, z");

        app.tag_toggled(0, "z", false);
        assert_eq!(app.page.slots[0].caption, "b");
        assert_eq!(app.page.slots[0].display.options, vec!["a", "b", "z"]);
        assert!(!app.page.slots[0].display.is_selected("z"));
    }

    #[test]
    fn test_invalid_goto_keeps_page() {
        let names: Vec<String> = (0..11).map(|i| format!("{}.png", i)).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let (mut app, _target, _control) = app_with_images(&refs);

        app.ui.goto_inputs[0] = "abc".to_string();
        app.goto_page(0);
        assert_eq!(app.page.current_page, 1);
        assert_eq!(app.status.as_ref().unwrap().kind, StatusKind::Warning);

        app.ui.goto_inputs[1] = "2.5".to_string();
        app.goto_page(1);
        assert_eq!(app.page.current_page, 2);
        assert_eq!(app.page.total_pages, 3);
    }

    #[test]
    fn test_remember_window_size() {
        let mut app = CaptionerApp::new(AppConfig::default(), Settings::default());
        app.remember_window_size(egui::vec2(1280.0, 720.0));
        assert_eq!((app.settings.window_width, app.settings.window_height), (1280.0, 720.0));

        // a minimised window reports a tiny rect; keep the last real size
        app.remember_window_size(egui::vec2(0.0, 0.0));
        assert_eq!((app.settings.window_width, app.settings.window_height), (1280.0, 720.0));
    }
}
