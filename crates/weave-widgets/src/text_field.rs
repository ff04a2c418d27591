use unicode_segmentation::UnicodeSegmentation;
use weave_core::{Signal, signal};

/// Headless single-line text input.
///
/// `text` is always defined; an untouched field holds the empty string.
/// Every edit goes through `set_text`, which publishes on `changes()`.
#[derive(Clone)]
pub struct TextField {
    pub placeholder: String,
    text: Signal<String>,
    pub enabled: Signal<bool>,
}

impl TextField {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            text: signal(String::new()),
            enabled: signal(true),
        }
    }

    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.text.set(text.into());
        self
    }

    pub fn text(&self) -> String {
        self.text.get()
    }

    /// Stream of the field's text. `bind` on it starts with the current text.
    pub fn changes(&self) -> Signal<String> {
        self.text.clone()
    }

    /// Replace the whole text, as a paste or programmatic edit would.
    ///
    /// Ignored while the field is disabled; returns whether the edit applied.
    pub fn set_text(&self, text: impl Into<String>) -> bool {
        if !self.enabled.get() {
            log::debug!("text field '{}' is disabled; edit dropped", self.placeholder);
            return false;
        }
        self.text.set(text.into());
        true
    }

    /// Append typed characters.
    pub fn type_str(&self, s: &str) -> bool {
        let mut next = self.text.get();
        next.push_str(s);
        self.set_text(next)
    }

    /// Delete the last user-perceived character.
    pub fn backspace(&self) -> bool {
        let current = self.text.get();
        let cut = current
            .grapheme_indices(true)
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0);
        self.set_text(&current[..cut])
    }

    pub fn clear(&self) -> bool {
        self.set_text(String::new())
    }

    /// Length in user-perceived characters.
    pub fn char_count(&self) -> usize {
        self.text.with(|t| t.graphemes(true).count())
    }
}
