mod app_config;

pub use app_config::{AppConfig, CAPTION_EXTENSIONS, IMAGE_EXTENSIONS};
