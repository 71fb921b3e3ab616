mod app_state;
mod settings;

pub use app_state::{PageView, StatusKind, StatusMessage, UIState};
pub use settings::Settings;
