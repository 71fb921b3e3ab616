use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

use super::error::{CaptionError, CaptionResult};

/// Reads and writes the caption file that sits next to each image.
///
/// The caption for `photo.png` in `dir` lives at `dir/photo<caption_ext>`.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionStore {
    images_dir: PathBuf,
    caption_ext: String,
}

impl CaptionStore {
    pub fn new(images_dir: impl Into<PathBuf>, caption_ext: impl Into<String>) -> Self {
        Self {
            images_dir: images_dir.into(),
            caption_ext: caption_ext.into(),
        }
    }

    pub fn images_dir(&self) -> &Path {
        &self.images_dir
    }

    pub fn caption_ext(&self) -> &str {
        &self.caption_ext
    }

    /// Get the caption file path for an image filename.
    ///
    /// Only the last extension of the image name is replaced, so
    /// `a.b.png` maps to `a.b.txt`.
    pub fn caption_path(&self, image_file: &str) -> PathBuf {
        let stem = Path::new(image_file)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| image_file.to_string());
        self.images_dir.join(format!("{}{}", stem, self.caption_ext))
    }

    /// Load the caption text for an image. A missing file is an empty caption.
    pub fn load(&self, image_file: &str) -> CaptionResult<String> {
        let path = self.caption_path(image_file);
        match fs::read_to_string(&path) {
            Ok(caption) => {
                debug!("Read caption from {:?}", path);
                Ok(caption)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
            Err(e) => {
                error!("Failed to read caption {:?}: {}", path, e);
                Err(CaptionError::io(path, e))
            }
        }
    }

    /// Write the caption text for an image, replacing any previous content.
    ///
    /// Returns the path that was written.
    pub fn save(&self, image_file: &str, caption: &str) -> CaptionResult<PathBuf> {
        let path = self.caption_path(image_file);
        if let Err(e) = fs::write(&path, caption) {
            error!("Failed to write caption {:?}: {}", path, e);
            return Err(CaptionError::io(path, e));
        }
        info!("Wrote captions to {:?}", path);
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caption_path_replaces_last_extension() {
        let store = CaptionStore::new("/data/target", ".txt");
        assert_eq!(
            store.caption_path("photo.png"),
            PathBuf::from("/data/target/photo.txt")
        );
        assert_eq!(
            store.caption_path("a.b.jpeg"),
            PathBuf::from("/data/target/a.b.txt")
        );

        let store = CaptionStore::new("/data/target", ".caption");
        assert_eq!(
            store.caption_path("x.webp"),
            PathBuf::from("/data/target/x.caption")
        );
    }

    #[test]
    fn test_missing_caption_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = CaptionStore::new(dir.path(), ".txt");
        assert_eq!(store.load("none.png").unwrap(), "");
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = CaptionStore::new(dir.path(), ".cap");

        let written = store.save("img.png", "red hair, smile").unwrap();
        assert_eq!(written, dir.path().join("img.cap"));
        assert_eq!(store.load("img.png").unwrap(), "red hair, smile");

        store.save("img.png", "").unwrap();
        assert_eq!(store.load("img.png").unwrap(), "");
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = CaptionStore::new(dir.path().join("gone"), ".txt");
        let err = store.save("img.png", "a").unwrap_err();
        assert!(matches!(err, CaptionError::Io { .. }));
    }
}
