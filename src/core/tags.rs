use std::collections::HashSet;

/// Separator used when writing a tag list back out as caption text
pub const TAG_SEPARATOR: &str = ", ";

/// Split caption text on commas, trimming whitespace and dropping empty tags.
pub fn parse_tags(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join tags into caption text ("a, b, c")
pub fn join_tags<S: AsRef<str>>(tags: &[S]) -> String {
    tags.iter()
        .map(|t| t.as_ref())
        .collect::<Vec<_>>()
        .join(TAG_SEPARATOR)
}

/// User-curated tag vocabulary offered as one-click toggles on every slot.
///
/// Order is display order. Membership uses exact string equality; exact
/// duplicates in the source text are dropped, first occurrence wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuickTags {
    tags: Vec<String>,
    members: HashSet<String>,
}

impl QuickTags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the vocabulary from the comma separated quick-tag text box
    pub fn parse(text: &str) -> Self {
        let mut quick_tags = Self::new();
        for tag in parse_tags(text) {
            if quick_tags.members.insert(tag.clone()) {
                quick_tags.tags.push(tag);
            }
        }
        quick_tags
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.members.contains(tag)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// Checkbox state for one caption: every option to show, and which are ticked
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayState {
    pub options: Vec<String>,
    pub selected: Vec<String>,
}

impl DisplayState {
    pub fn is_selected(&self, option: &str) -> bool {
        self.selected.iter().any(|s| s == option)
    }
}

/// Derive the checkbox options and selection for a caption.
///
/// Options are the quick tags followed by caption tags that are not quick
/// tags, in caption order and listed once. Selected is the caption's tags as
/// written.
pub fn reconcile(caption: &str, quick_tags: &QuickTags) -> DisplayState {
    let selected = parse_tags(caption);

    let mut options = quick_tags.tags().to_vec();
    let mut extras_seen: HashSet<&str> = HashSet::new();
    for tag in &selected {
        if !quick_tags.contains(tag) && extras_seen.insert(tag.as_str()) {
            options.push(tag.clone());
        }
    }

    DisplayState { options, selected }
}

/// Canonical tag order for a checkbox selection.
///
/// Selected quick tags come first in vocabulary order; the remaining
/// selected tags follow in the order the caller supplied them. Repeats are
/// written once. The output only depends on the set of selected tags and the
/// caller's order for non-vocabulary tags, never on widget iteration order
/// for vocabulary tags.
pub fn compose_from_selection<S: AsRef<str>>(
    selected: &[S],
    quick_tags: &QuickTags,
) -> Vec<String> {
    let selected_set: HashSet<&str> = selected.iter().map(|s| s.as_ref().trim()).collect();

    let mut composed: Vec<String> = quick_tags
        .tags()
        .iter()
        .filter(|t| selected_set.contains(t.as_str()))
        .cloned()
        .collect();

    let mut extras_seen: HashSet<&str> = HashSet::new();
    for tag in selected.iter().map(|s| s.as_ref().trim()) {
        if tag.is_empty() || quick_tags.contains(tag) {
            continue;
        }
        if extras_seen.insert(tag) {
            composed.push(tag.to_string());
        }
    }

    composed
}
