use weave_core::{Signal, signal};

/// Settable display string with a visibility flag.
#[derive(Clone)]
pub struct Label {
    pub text: Signal<String>,
    pub hidden: Signal<bool>,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: signal(text.into()),
            hidden: signal(false),
        }
    }

    pub fn set_text(&self, text: impl Into<String>) {
        self.text.set(text.into());
    }

    pub fn text(&self) -> String {
        self.text.get()
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden.get()
    }
}
