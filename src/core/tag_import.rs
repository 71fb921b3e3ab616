use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

use super::caption_store::CaptionStore;
use super::error::{CaptionError, CaptionResult};
use super::image_set::list_image_files;
use super::tags::{join_tags, parse_tags};

/// Number of words in a tag: whitespace runs + 1
pub fn word_count(tag: &str) -> usize {
    let mut runs = 0;
    let mut in_whitespace = false;
    for c in tag.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                runs += 1;
            }
            in_whitespace = true;
        } else {
            in_whitespace = false;
        }
    }
    runs + 1
}

/// Collect the distinct short tags used across a folder's captions.
///
/// Images are visited in filename order and tags in caption order. Tags are
/// deduplicated case-insensitively and the first spelling seen is kept.
/// Tags with more than `word_count_limit` words are skipped.
pub fn import_tag_list(
    images_dir: &Path,
    caption_ext: &str,
    allowed_extensions: &[&str],
    word_count_limit: usize,
) -> CaptionResult<Vec<String>> {
    if images_dir.as_os_str().is_empty() || !images_dir.is_dir() {
        return Err(CaptionError::MissingDirectory("Image"));
    }
    if caption_ext.trim().is_empty() {
        return Err(CaptionError::MissingExtension);
    }

    let store = CaptionStore::new(images_dir, caption_ext);
    let mut tags = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for image_file in list_image_files(images_dir, allowed_extensions)? {
        let caption = store.load(&image_file)?;
        if caption.is_empty() {
            continue;
        }
        debug!("Scanning caption for {}", image_file);
        for tag in parse_tags(&caption) {
            let key = tag.to_lowercase();
            if seen.contains(&key) || word_count(&tag) > word_count_limit {
                continue;
            }
            seen.insert(key);
            tags.push(tag);
        }
    }

    info!("Imported {} unique tags from {:?}", tags.len(), images_dir);
    Ok(tags)
}

/// Same as [`import_tag_list`], joined into quick-tag text
pub fn import_tags(
    images_dir: &Path,
    caption_ext: &str,
    allowed_extensions: &[&str],
    word_count_limit: usize,
) -> CaptionResult<String> {
    let tags = import_tag_list(images_dir, caption_ext, allowed_extensions, word_count_limit)?;
    Ok(join_tags(&tags))
}
