//! Tag autocomplete input state machine.
//!
//! Drives the multi-value tag control on library item forms: a text buffer
//! with a suggestion dropdown over previously used tags, keyboard
//! navigation, and a committed tag list. The machine is UI-free; the host
//! widget forwards buffer changes, key presses, and clicks as discrete
//! events and re-reads the state after each one. Events are serialized by
//! the host's single-threaded dispatch, so each transition runs to
//! completion before the next.
//!
//! Committed tags are normalized (trimmed, internal whitespace collapsed,
//! truncated to [`MAX_TAG_LEN`] characters) and unique under
//! case-insensitive comparison. Every mutating operation reports whether
//! the committed list changed so the host can persist it.

use serde_json::Value;

/// Maximum length of a committed tag, in characters.
pub const MAX_TAG_LEN: usize = 24;

/// Keyboard events the tag input reacts to. Anything else only edits the
/// buffer and arrives via [`TagInput::on_buffer_change`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagInputKey {
    Enter,
    ArrowDown,
    ArrowUp,
    Escape,
    Backspace,
}

/// State of one tag input widget.
///
/// The suggestion source is fixed per editing session and passed at
/// construction, keyed by the library section being edited (see
/// [`crate::app::library_content::LibraryKind`]).
#[derive(Debug, Clone, Default)]
pub struct TagInput {
    /// Candidate suggestions, as loaded from the library store.
    suggestions: Vec<String>,

    /// Committed tags, normalized and case-insensitively unique.
    tags: Vec<String>,

    /// Current text buffer.
    buffer: String,

    /// Whether the suggestion dropdown is open.
    dropdown_open: bool,

    /// Highlighted option index across filtered candidates plus the
    /// trailing create option.
    highlight: usize,
}

/// Normalize a raw tag: trim, collapse internal whitespace runs to single
/// spaces, truncate to [`MAX_TAG_LEN`] characters. Case is preserved.
pub fn normalize_tag(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .take(MAX_TAG_LEN)
        .collect()
}

impl TagInput {
    /// Create an empty tag input over a suggestion source.
    pub fn new(suggestions: Vec<String>) -> Self {
        Self {
            suggestions,
            ..Default::default()
        }
    }

    /// Create a tag input with pre-existing committed tags, for example when
    /// editing a stored library item. The incoming tags are normalized and
    /// deduplicated so the uniqueness invariant holds from the start.
    pub fn with_tags(suggestions: Vec<String>, tags: Vec<String>) -> Self {
        let mut input = Self::new(suggestions);
        for tag in &tags {
            input.append_tag(tag);
        }
        input
    }

    /// The committed tag list.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// The current text buffer.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Whether the suggestion dropdown is open.
    pub fn dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    /// Currently highlighted option index.
    pub fn highlight(&self) -> usize {
        self.highlight
    }

    /// Suggestions whose lowercase form contains the lowercase buffer,
    /// minus anything already committed, sorted ascending.
    pub fn filtered_suggestions(&self) -> Vec<&str> {
        let needle = self.buffer.to_lowercase();
        let mut filtered: Vec<&str> = self
            .suggestions
            .iter()
            .map(String::as_str)
            .filter(|s| s.to_lowercase().contains(&needle))
            .filter(|s| !self.contains_tag(s))
            .collect();
        filtered.sort_unstable();
        filtered
    }

    /// Whether the synthetic "create new tag" option is shown. It occupies
    /// the slot immediately after the last filtered candidate.
    pub fn show_create_option(&self) -> bool {
        !self.buffer.is_empty()
            && !self
                .suggestions
                .iter()
                .any(|s| eq_ignore_case(s, &self.buffer))
            && !self.contains_tag(&self.buffer)
    }

    /// Replace the buffer text. Opens the dropdown and resets the
    /// highlight; a comma in the new text triggers batch entry of every
    /// comma-separated segment. Returns true if the committed tags changed.
    pub fn on_buffer_change(&mut self, text: &str) -> bool {
        self.buffer = text.to_string();
        self.dropdown_open = true;
        self.highlight = 0;

        if !self.buffer.contains(',') {
            return false;
        }

        // Batch entry: split on commas, keep whatever normalizes to a new
        // unique tag, then discard the buffer either way.
        let segments: Vec<String> = self.buffer.split(',').map(str::to_string).collect();
        let mut changed = false;
        for segment in &segments {
            changed |= self.append_tag(segment);
        }
        if changed {
            log_trace!("Batch tag entry committed, tags now {:?}", self.tags);
        }
        self.buffer.clear();
        self.dropdown_open = false;
        self.highlight = 0;
        changed
    }

    /// Handle a key event. Returns true if the committed tags changed.
    pub fn on_key_event(&mut self, key: TagInputKey) -> bool {
        match key {
            TagInputKey::Enter => self.commit_highlighted(),
            TagInputKey::ArrowDown => {
                self.dropdown_open = true;
                self.highlight = (self.highlight + 1).min(self.option_count().saturating_sub(1));
                false
            }
            TagInputKey::ArrowUp => {
                self.dropdown_open = true;
                self.highlight = self.highlight.saturating_sub(1);
                false
            }
            TagInputKey::Escape => {
                self.dropdown_open = false;
                false
            }
            TagInputKey::Backspace => {
                // Only meaningful on an empty buffer: drop the last tag.
                if self.buffer.is_empty() {
                    if let Some(removed) = self.tags.pop() {
                        log_trace!("Removed trailing tag '{}'", removed);
                        return true;
                    }
                }
                false
            }
        }
    }

    /// Explicitly select the option at `index`, as from a click on a
    /// dropdown row. Returns true if the committed tags changed.
    pub fn on_select_candidate(&mut self, index: usize) -> bool {
        self.commit_option(index)
    }

    /// Remove the committed tag at `index`, as from a chip's remove
    /// affordance. Returns true if a tag was removed.
    pub fn on_remove_tag(&mut self, index: usize) -> bool {
        if index >= self.tags.len() {
            return false;
        }
        let removed = self.tags.remove(index);
        log_trace!("Removed tag '{}'", removed);
        true
    }

    /// Interaction outside the control's bounds: close the dropdown without
    /// touching the buffer or the committed tags.
    pub fn on_dismiss(&mut self) {
        self.dropdown_open = false;
    }

    fn option_count(&self) -> usize {
        self.filtered_suggestions().len() + usize::from(self.show_create_option())
    }

    fn commit_highlighted(&mut self) -> bool {
        self.commit_option(self.highlight)
    }

    /// Commit the option at `index`: the create option appends the
    /// normalized buffer, any other slot appends that filtered candidate.
    /// Commit consumes the buffer and closes the panel whenever a slot was
    /// resolved, even if the normalized tag turns out to be a duplicate; an
    /// index beyond the last slot is a no-op.
    fn commit_option(&mut self, index: usize) -> bool {
        let candidate_count = self.filtered_suggestions().len();
        let raw = if self.show_create_option() && index == candidate_count {
            self.buffer.clone()
        } else {
            match self.filtered_suggestions().get(index) {
                Some(candidate) => (*candidate).to_string(),
                None => return false,
            }
        };

        let changed = self.append_tag(&raw);
        self.buffer.clear();
        self.dropdown_open = false;
        self.highlight = 0;
        changed
    }

    /// Append one tag if its normalized form is non-empty and not already
    /// committed. The uniqueness invariant lives here; every insertion path
    /// funnels through this method.
    fn append_tag(&mut self, raw: &str) -> bool {
        let normalized = normalize_tag(raw);
        if normalized.is_empty() || self.contains_tag(&normalized) {
            return false;
        }
        log_trace!("Committed tag '{}'", normalized);
        self.tags.push(normalized);
        true
    }

    fn contains_tag(&self, candidate: &str) -> bool {
        self.tags.iter().any(|tag| eq_ignore_case(tag, candidate))
    }

    /// The committed tags as a JSON value, ready to store on a library item
    /// row.
    pub fn tags_value(&self) -> Value {
        Value::Array(self.tags.iter().cloned().map(Value::String).collect())
    }
}

/// Unicode-aware case-insensitive comparison, matching how the web UI
/// compares lowercased strings.
fn eq_ignore_case(left: &str, right: &str) -> bool {
    left.to_lowercase() == right.to_lowercase()
}
