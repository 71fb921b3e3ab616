use crate::core::SlotView;
use crate::state::Settings;

/// Text inputs and dialog flags owned by the UI
#[derive(Default)]
pub struct UIState {
    pub target_dir_input: String,
    pub control_dir_input: String,
    pub caption_ext_input: String,
    /// Quick tag text box content, published to the session on change
    pub quick_tags_text: String,
    pub import_word_limit: usize,
    /// "Go to page" boxes for the top and bottom pagination bars
    pub goto_inputs: [String; 2],
    /// Whether the "overwrite quick tags?" dialog is shown
    pub show_import_confirm: bool,
}

impl UIState {
    /// Seed the inputs from persisted settings
    pub fn from_settings(settings: &Settings) -> Self {
        let path_text = |p: &Option<std::path::PathBuf>| {
            p.as_ref()
                .map(|p| p.to_string_lossy().into_owned())
                .unwrap_or_default()
        };
        Self {
            target_dir_input: path_text(&settings.last_target_dir),
            control_dir_input: path_text(&settings.last_control_dir),
            caption_ext_input: settings.caption_ext.clone(),
            quick_tags_text: settings.quick_tags.clone(),
            import_word_limit: settings.import_word_limit,
            goto_inputs: Default::default(),
            show_import_confirm: false,
        }
    }
}

/// The rendered page: one view per slot, in slot order
#[derive(Default)]
pub struct PageView {
    pub slots: Vec<SlotView>,
    pub current_page: usize,
    pub total_pages: usize,
}

impl PageView {
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|s| !s.visible)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Warning,
    Saved,
}

/// Latest message for the status bar
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn new(kind: StatusKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_ui_state_from_settings() {
        let settings = Settings {
            last_target_dir: Some(PathBuf::from("t")),
            quick_tags: "a, b".to_string(),
            ..Settings::default()
        };
        let ui = UIState::from_settings(&settings);
        assert_eq!(ui.target_dir_input, "t");
        assert_eq!(ui.control_dir_input, "");
        assert_eq!(ui.quick_tags_text, "a, b");
        assert_eq!(ui.caption_ext_input, ".txt");
        assert!(!ui.show_import_confirm);
    }

    #[test]
    fn test_empty_page_view() {
        assert!(PageView::default().is_empty());
    }
}
