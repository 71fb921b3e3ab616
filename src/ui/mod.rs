pub mod dialogs;
pub mod keyboard;
pub mod panels;

pub use panels::{render_bottom_panel, render_central_panel, render_top_panel};

pub use keyboard::handle_keyboard_shortcuts;

pub use dialogs::render_import_confirmation;
