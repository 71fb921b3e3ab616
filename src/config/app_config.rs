use std::ops::RangeInclusive;

/// Image formats that can be paired and captioned
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "bmp"];

/// Caption extensions offered in the dropdown; any other value can be typed
pub const CAPTION_EXTENSIONS: &[&str] = &[".cap", ".caption", ".txt"];

/// Application configuration containing all hardcoded values
///
/// Values the user can change at runtime live in `Settings` instead.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Number of image rows shown per page
    pub page_size: usize,
    pub default_caption_ext: &'static str,
    pub default_import_word_limit: usize,
    pub import_word_limit_range: RangeInclusive<usize>,
    pub window_width: f32,
    pub window_height: f32,
    pub preview_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            page_size: 5,
            default_caption_ext: ".txt",
            default_import_word_limit: 10,
            import_word_limit_range: 1..=100,
            window_width: 1400.0,
            window_height: 900.0,
            preview_height: 256.0,
        }
    }
}

impl AppConfig {
    /// Clamp a word-count limit into the slider range
    pub fn clamp_word_limit(&self, limit: usize) -> usize {
        limit.clamp(
            *self.import_word_limit_range.start(),
            *self.import_word_limit_range.end(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.page_size, 5);
        assert!(CAPTION_EXTENSIONS.contains(&config.default_caption_ext));
        assert_eq!(config.clamp_word_limit(0), 1);
        assert_eq!(config.clamp_word_limit(500), 100);
        assert_eq!(config.clamp_word_limit(10), 10);
    }
}
