use std::rc::Rc;

use weave_core::{Signal, signal};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionStyle {
    Default,
    Cancel,
    Destructive,
}

#[derive(Clone)]
pub struct AlertAction {
    pub title: String,
    pub style: ActionStyle,
    handler: Option<Rc<dyn Fn()>>,
}

impl std::fmt::Debug for AlertAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlertAction")
            .field("title", &self.title)
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

impl AlertAction {
    pub fn new(title: impl Into<String>, style: ActionStyle) -> Self {
        Self {
            title: title.into(),
            style,
            handler: None,
        }
    }

    pub fn on_select(mut self, f: impl Fn() + 'static) -> Self {
        self.handler = Some(Rc::new(f));
        self
    }
}

/// Modal message with one or more dismiss actions.
#[derive(Clone, Debug)]
pub struct Alert {
    pub title: String,
    pub message: String,
    pub actions: Vec<AlertAction>,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            actions: Vec::new(),
        }
    }

    pub fn action(mut self, action: AlertAction) -> Self {
        self.actions.push(action);
        self
    }
}

/// Presents at most one alert at a time.
///
/// While an alert is up the presenter is modal: further `present` calls are
/// rejected. Any action dismisses the alert and then runs that action's
/// handler, if any.
#[derive(Clone)]
pub struct AlertPresenter {
    current: Signal<Option<Alert>>,
    presented: Signal<u64>,
}

impl Default for AlertPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertPresenter {
    pub fn new() -> Self {
        Self {
            current: signal(None),
            presented: signal(0),
        }
    }

    pub fn present(&self, alert: Alert) -> bool {
        if alert.actions.is_empty() {
            log::warn!("alert '{}' has no actions and could never be dismissed", alert.title);
            return false;
        }
        if let Some(shown) = self.current.get() {
            log::warn!(
                "attempt to present '{}' while '{}' is already presented",
                alert.title,
                shown.title
            );
            return false;
        }
        log::debug!("presenting alert '{}'", alert.title);
        self.current.set(Some(alert));
        self.presented.update(|n| *n += 1);
        true
    }

    pub fn current(&self) -> Option<Alert> {
        self.current.get()
    }

    pub fn is_presenting(&self) -> bool {
        self.current.with(Option::is_some)
    }

    /// Number of alerts shown so far.
    pub fn presented_count(&self) -> u64 {
        self.presented.get()
    }

    /// Select the action at `index`. Returns false if nothing is shown or the
    /// index is out of range.
    pub fn dismiss(&self, index: usize) -> bool {
        let Some(action) = self
            .current
            .with(|c| c.as_ref().and_then(|a| a.actions.get(index).cloned()))
        else {
            return false;
        };
        self.current.set(None);
        log::debug!("alert dismissed with '{}'", action.title);
        if let Some(handler) = action.handler {
            handler();
        }
        true
    }
}
