use weave_core::{EventSource, Signal, signal};

/// Button with an enabled flag and a stream of activations.
#[derive(Clone)]
pub struct Button {
    pub title: String,
    pub enabled: Signal<bool>,
    taps: EventSource<()>,
}

impl Button {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            enabled: signal(true),
            taps: EventSource::new(),
        }
    }

    pub fn taps(&self) -> EventSource<()> {
        self.taps.clone()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    /// A user touch. Disabled buttons swallow it; returns whether it fired.
    pub fn tap(&self) -> bool {
        if !self.is_enabled() {
            log::debug!("button '{}' is disabled; tap ignored", self.title);
            return false;
        }
        self.taps.emit(());
        true
    }

    /// Programmatic activation, delivered regardless of `enabled`.
    pub fn send_tap(&self) {
        self.taps.emit(());
    }
}
