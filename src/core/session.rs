use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::caption_store::CaptionStore;
use super::error::{CaptionError, CaptionResult};
use super::image_set::{self, ImagePair, WorkingSet};
use super::pagination::{PageManager, PageState};
use super::tag_import;
use super::tags::{compose_from_selection, join_tags, reconcile, DisplayState, QuickTags};
use super::update::Update;

/// Outcome of persisting a caption as a side effect of an edit
#[derive(Debug)]
pub enum SaveStatus {
    /// Written to disk
    Saved(PathBuf),
    /// Autosave is off, the edit is held in memory
    Deferred,
    /// Write failed; the edit is still held in memory
    Failed(CaptionError),
}

/// Value an edit produced for the presentation layer, plus what happened on disk
#[derive(Debug)]
pub struct EditOutcome<T> {
    pub value: T,
    pub save: SaveStatus,
}

/// Everything needed to draw one slot row
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotView {
    pub slot: usize,
    pub visible: bool,
    pub pair: Option<ImagePair>,
    pub caption: String,
    pub display: DisplayState,
    /// Caption file existed but could not be read
    pub load_error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    pub image_count: usize,
    pub total_pages: usize,
}

#[derive(Debug)]
struct Slot {
    pair: ImagePair,
    caption: String,
    dirty: bool,
}

#[derive(Debug)]
struct LoadedSet {
    store: CaptionStore,
    control_dir: PathBuf,
    working_set: WorkingSet,
    page: PageState,
    /// One entry per slot of the rendered page; empty until the first render
    slots: Vec<Option<Slot>>,
}

impl LoadedSet {
    fn unsaved_count(&self) -> usize {
        self.slots.iter().flatten().filter(|s| s.dirty).count()
    }
}

/// Manual captioning session over a pair of target/control image folders.
///
/// Starts unloaded. A successful [`load`](Self::load) replaces any previous
/// working set; a failed one leaves the previous state as it was. Slot
/// operations address the page most recently passed to
/// [`render_page`](Self::render_page).
#[derive(Debug)]
pub struct CaptionSession {
    page_size: usize,
    autosave: bool,
    quick_tags: QuickTags,
    loaded: Option<LoadedSet>,
}

impl CaptionSession {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            autosave: true,
            quick_tags: QuickTags::new(),
            loaded: None,
        }
    }

    pub fn autosave(&self) -> bool {
        self.autosave
    }

    pub fn set_autosave(&mut self, autosave: bool) {
        if self.autosave != autosave {
            info!("Autosave {}", if autosave { "enabled" } else { "disabled" });
        }
        self.autosave = autosave;
    }

    pub fn quick_tags(&self) -> &QuickTags {
        &self.quick_tags
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    pub fn page_state(&self) -> Option<PageState> {
        self.loaded.as_ref().map(|l| l.page)
    }

    pub fn working_set(&self) -> Option<&WorkingSet> {
        self.loaded.as_ref().map(|l| &l.working_set)
    }

    pub fn target_dir(&self) -> Option<&Path> {
        self.loaded.as_ref().map(|l| l.store.images_dir())
    }

    pub fn control_dir(&self) -> Option<&Path> {
        self.loaded.as_ref().map(|l| l.control_dir.as_path())
    }

    /// Number of slots on the rendered page with edits not yet on disk
    pub fn unsaved_count(&self) -> usize {
        self.loaded.as_ref().map(LoadedSet::unsaved_count).unwrap_or(0)
    }

    /// Build a new working set from the two folders and reset to page 1.
    pub fn load(
        &mut self,
        target_dir: Option<&Path>,
        control_dir: Option<&Path>,
        caption_ext: &str,
        allowed_extensions: &[&str],
    ) -> CaptionResult<LoadSummary> {
        let target = image_set::existing_dir(target_dir, "Target")?;
        let control = image_set::existing_dir(control_dir, "Control")?;
        if caption_ext.trim().is_empty() {
            return Err(CaptionError::MissingExtension);
        }

        let working_set = image_set::resolve(Some(target), Some(control), allowed_extensions)?;
        let page = PageState::new(working_set.len(), self.page_size);
        let summary = LoadSummary {
            image_count: working_set.len(),
            total_pages: page.total,
        };

        if let Some(previous) = &self.loaded {
            let discarded = previous.unsaved_count();
            if discarded > 0 {
                warn!("Reload discards {} unsaved caption(s)", discarded);
            }
        }

        self.loaded = Some(LoadedSet {
            store: CaptionStore::new(target, caption_ext.trim()),
            control_dir: control.to_path_buf(),
            working_set,
            page,
            slots: Vec::new(),
        });

        info!(
            "Loaded {} shared images. {} pages total.",
            summary.image_count, summary.total_pages
        );
        Ok(summary)
    }

    /// Read captions for every slot of `page` (clamped into range).
    ///
    /// Always returns exactly `page_size` views; slots past the end of the
    /// working set come back with `visible == false` and no data.
    pub fn render_page(&mut self, page: usize) -> CaptionResult<Vec<SlotView>> {
        let loaded = self.loaded.as_mut().ok_or(CaptionError::NoActiveSession)?;

        let discarded = loaded.unsaved_count();
        if discarded > 0 {
            warn!("Page change discards {} unsaved caption(s)", discarded);
        }

        loaded.page.current = PageManager::step(page, loaded.page.total, 0);
        debug!("Rendering page {} / {}", loaded.page.current, loaded.page.total);

        let mut slots = Vec::with_capacity(self.page_size);
        let mut views = Vec::with_capacity(self.page_size);
        for slot in 0..self.page_size {
            let index = loaded.page.item_index(slot);
            let Some(pair) = loaded.working_set.get(index).cloned() else {
                slots.push(None);
                views.push(SlotView {
                    slot,
                    ..SlotView::default()
                });
                continue;
            };

            let (caption, load_error) = match loaded.store.load(&pair.filename) {
                Ok(caption) => (caption, None),
                Err(e) => {
                    warn!("Showing empty caption for {}: {}", pair.filename, e);
                    (String::new(), Some(e.to_string()))
                }
            };

            views.push(SlotView {
                slot,
                visible: true,
                pair: Some(pair.clone()),
                display: reconcile(&caption, &self.quick_tags),
                caption: caption.clone(),
                load_error,
            });
            slots.push(Some(Slot {
                pair,
                caption,
                dirty: false,
            }));
        }

        loaded.slots = slots;
        Ok(views)
    }

    /// Page to render after stepping by `delta`; `Unchanged` at the edges
    pub fn step_page(&self, delta: isize) -> CaptionResult<Update<usize>> {
        let page = self.page_state().ok_or(CaptionError::NoActiveSession)?;
        let target = PageManager::step(page.current, page.total, delta);
        Ok(if target == page.current {
            Update::Unchanged
        } else {
            Update::Set(target)
        })
    }

    /// Page to render for a typed "go to page" request
    pub fn goto_page(&self, requested: &str) -> CaptionResult<Update<usize>> {
        let page = self.page_state().ok_or(CaptionError::NoActiveSession)?;
        let target = PageManager::goto(requested, page.total)?;
        Ok(if target == page.current {
            Update::Unchanged
        } else {
            Update::Set(target)
        })
    }

    /// Replace the quick-tag vocabulary and re-derive checkbox state for
    /// every slot of the rendered page from its in-memory caption.
    pub fn set_quick_tags(&mut self, text: &str) -> Vec<DisplayState> {
        self.quick_tags = QuickTags::parse(text);
        debug!("Quick tags set to {} entries", self.quick_tags.len());

        let Some(loaded) = &self.loaded else {
            return Vec::new();
        };
        loaded
            .slots
            .iter()
            .map(|slot| match slot {
                Some(slot) => reconcile(&slot.caption, &self.quick_tags),
                None => DisplayState::default(),
            })
            .collect()
    }

    /// Free-text caption edit; returns the refreshed checkbox state.
    pub fn edit_caption(
        &mut self,
        slot: usize,
        caption: &str,
    ) -> CaptionResult<EditOutcome<DisplayState>> {
        let autosave = self.autosave;
        let loaded = self.loaded.as_mut().ok_or(CaptionError::NoActiveSession)?;
        let store = &loaded.store;
        let entry = loaded
            .slots
            .get_mut(slot)
            .and_then(Option::as_mut)
            .ok_or(CaptionError::SlotNotLoaded(slot))?;

        entry.caption = caption.to_string();
        entry.dirty = true;
        let save = persist(store, entry, autosave);

        Ok(EditOutcome {
            value: reconcile(caption, &self.quick_tags),
            save,
        })
    }

    /// Checkbox edit; returns the canonical caption text for the slot.
    pub fn edit_tags<S: AsRef<str>>(
        &mut self,
        slot: usize,
        selected: &[S],
    ) -> CaptionResult<EditOutcome<String>> {
        let autosave = self.autosave;
        let loaded = self.loaded.as_mut().ok_or(CaptionError::NoActiveSession)?;
        let store = &loaded.store;
        let entry = loaded
            .slots
            .get_mut(slot)
            .and_then(Option::as_mut)
            .ok_or(CaptionError::SlotNotLoaded(slot))?;

        let caption = join_tags(&compose_from_selection(selected, &self.quick_tags));
        entry.caption = caption.clone();
        entry.dirty = true;
        let save = persist(store, entry, autosave);

        Ok(EditOutcome {
            value: caption,
            save,
        })
    }

    /// Write a slot's caption regardless of autosave.
    ///
    /// `Unchanged` means the slot is on the page but has no image.
    pub fn save_caption(&mut self, slot: usize) -> CaptionResult<Update<PathBuf>> {
        let loaded = self.loaded.as_mut().ok_or(CaptionError::NoActiveSession)?;
        let store = &loaded.store;
        let entry = match loaded.slots.get_mut(slot) {
            None => return Err(CaptionError::SlotNotLoaded(slot)),
            Some(None) => return Ok(Update::Unchanged),
            Some(Some(entry)) => entry,
        };

        let path = store.save(&entry.pair.filename, &entry.caption)?;
        entry.dirty = false;
        Ok(Update::Set(path))
    }

    /// Build quick-tag text from the loaded target folder's captions.
    ///
    /// Returns `Unchanged` when a vocabulary already exists and the user has
    /// not confirmed overwriting it. The result is not applied; pass it to
    /// [`set_quick_tags`](Self::set_quick_tags).
    pub fn import_tags(
        &self,
        word_count_limit: usize,
        overwrite_confirmed: bool,
        allowed_extensions: &[&str],
    ) -> CaptionResult<Update<String>> {
        let loaded = self
            .loaded
            .as_ref()
            .ok_or(CaptionError::MissingDirectory("Image"))?;

        if !self.quick_tags.is_empty() && !overwrite_confirmed {
            debug!("Import skipped, quick tag overwrite not confirmed");
            return Ok(Update::Unchanged);
        }

        let text = tag_import::import_tags(
            loaded.store.images_dir(),
            loaded.store.caption_ext(),
            allowed_extensions,
            word_count_limit,
        )?;
        Ok(Update::Set(text))
    }
}

fn persist(store: &CaptionStore, slot: &mut Slot, autosave: bool) -> SaveStatus {
    if !autosave {
        return SaveStatus::Deferred;
    }
    match store.save(&slot.pair.filename, &slot.caption) {
        Ok(path) => {
            slot.dirty = false;
            SaveStatus::Saved(path)
        }
        Err(e) => SaveStatus::Failed(e),
    }
}
