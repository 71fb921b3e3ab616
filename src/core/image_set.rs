use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::error::{CaptionError, CaptionResult};

/// A target image and its control counterpart, paired by filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePair {
    pub filename: String,
    pub target_path: PathBuf,
    pub control_path: PathBuf,
}

/// Image pairs eligible for captioning, sorted by filename
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkingSet {
    pairs: Vec<ImagePair>,
}

impl WorkingSet {
    pub fn get(&self, index: usize) -> Option<&ImagePair> {
        self.pairs.get(index)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Whether a filename carries one of the allowed image extensions (case-insensitive)
pub fn has_image_extension(path: &Path, allowed_extensions: &[&str]) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .map(|ext| {
            allowed_extensions
                .iter()
                .any(|allowed| allowed.trim_start_matches('.').eq_ignore_ascii_case(&ext))
        })
        .unwrap_or(false)
}

/// List image filenames directly inside `dir`, sorted.
///
/// Subdirectories and non-UTF-8 names are skipped.
pub fn list_image_files(dir: &Path, allowed_extensions: &[&str]) -> CaptionResult<BTreeSet<String>> {
    let entries = fs::read_dir(dir).map_err(|e| {
        warn!("Failed to read directory: {:?}: {}", dir, e);
        CaptionError::io(dir, e)
    })?;

    let mut files = BTreeSet::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() || !has_image_extension(&path, allowed_extensions) {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            files.insert(name.to_string());
        }
    }
    Ok(files)
}

pub(crate) fn existing_dir<'a>(dir: Option<&'a Path>, role: &'static str) -> CaptionResult<&'a Path> {
    match dir {
        Some(dir) if !dir.as_os_str().is_empty() && dir.is_dir() => Ok(dir),
        _ => Err(CaptionError::MissingDirectory(role)),
    }
}

/// Pair up the images that exist under the same filename in both folders.
///
/// The result is sorted by filename; that order drives pagination.
pub fn resolve(
    target_dir: Option<&Path>,
    control_dir: Option<&Path>,
    allowed_extensions: &[&str],
) -> CaptionResult<WorkingSet> {
    let target_dir = existing_dir(target_dir, "Target")?;
    let control_dir = existing_dir(control_dir, "Control")?;

    let target_files = list_image_files(target_dir, allowed_extensions)?;
    let control_files = list_image_files(control_dir, allowed_extensions)?;
    info!(
        "Found {} target and {} control images",
        target_files.len(),
        control_files.len()
    );

    let pairs: Vec<ImagePair> = target_files
        .intersection(&control_files)
        .map(|filename| ImagePair {
            filename: filename.clone(),
            target_path: target_dir.join(filename),
            control_path: control_dir.join(filename),
        })
        .collect();

    if pairs.is_empty() {
        warn!(
            "No shared images between {:?} and {:?}",
            target_dir, control_dir
        );
        return Err(CaptionError::EmptyIntersection);
    }

    Ok(WorkingSet { pairs })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IMAGE_EXTENSIONS;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"").unwrap();
    }

    #[test]
    fn test_extension_filter_is_case_insensitive() {
        assert!(has_image_extension(Path::new("a.PNG"), IMAGE_EXTENSIONS));
        assert!(has_image_extension(Path::new("a.JpEg"), IMAGE_EXTENSIONS));
        assert!(has_image_extension(Path::new("a.webp"), IMAGE_EXTENSIONS));
        assert!(!has_image_extension(Path::new("a.txt"), IMAGE_EXTENSIONS));
        assert!(!has_image_extension(Path::new("png"), IMAGE_EXTENSIONS));
    }

    #[test]
    fn test_resolve_intersects_by_filename() {
        let target = tempfile::tempdir().unwrap();
        let control = tempfile::tempdir().unwrap();
        touch(target.path(), "a.jpg");
        touch(target.path(), "b.png");
        touch(control.path(), "b.png");
        touch(control.path(), "c.jpg");

        let set = resolve(Some(target.path()), Some(control.path()), IMAGE_EXTENSIONS).unwrap();
        assert_eq!(set.len(), 1);
        let pair = set.get(0).unwrap();
        assert_eq!(pair.filename, "b.png");
        assert_eq!(pair.target_path, target.path().join("b.png"));
        assert_eq!(pair.control_path, control.path().join("b.png"));
    }

    #[test]
    fn test_resolve_sorts_and_ignores_non_images() {
        let target = tempfile::tempdir().unwrap();
        let control = tempfile::tempdir().unwrap();
        for name in ["c.png", "a.png", "b.bmp", "notes.txt", "a.txt"] {
            touch(target.path(), name);
            touch(control.path(), name);
        }

        let set = resolve(Some(target.path()), Some(control.path()), IMAGE_EXTENSIONS).unwrap();
        let names: Vec<&str> = (0..set.len())
            .filter_map(|i| set.get(i))
            .map(|p| p.filename.as_str())
            .collect();
        assert_eq!(names, vec!["a.png", "b.bmp", "c.png"]);

        let again = resolve(Some(target.path()), Some(control.path()), IMAGE_EXTENSIONS).unwrap();
        assert_eq!(set, again);
    }

    #[test]
    fn test_resolve_missing_directory() {
        let control = tempfile::tempdir().unwrap();
        assert!(matches!(
            resolve(None, Some(control.path()), IMAGE_EXTENSIONS),
            Err(CaptionError::MissingDirectory("Target"))
        ));
        let gone = control.path().join("gone");
        assert!(matches!(
            resolve(Some(control.path()), Some(gone.as_path()), IMAGE_EXTENSIONS),
            Err(CaptionError::MissingDirectory("Control"))
        ));
    }

    #[test]
    fn test_resolve_empty_intersection() {
        let target = tempfile::tempdir().unwrap();
        let control = tempfile::tempdir().unwrap();
        touch(target.path(), "a.png");
        touch(control.path(), "b.png");
        assert!(matches!(
            resolve(Some(target.path()), Some(control.path()), IMAGE_EXTENSIONS),
            Err(CaptionError::EmptyIntersection)
        ));
    }
}
