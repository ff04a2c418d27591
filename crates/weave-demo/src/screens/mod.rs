//! Demo screens. Each screen builds its widgets, wires them in its
//! constructor, and registers every subscription on the entry scope it is
//! given, so popping the screen releases all of them.

use std::fmt::Write as _;

use weave_widgets::{Button, Label, TextField};

pub mod home;
pub mod numbers;
pub mod numbers_vm;
pub mod validation;

pub use home::HomeScreen;
pub use numbers::NumbersScreen;
pub use numbers_vm::{NumbersHostedScreen, NumbersViewModel};
pub use validation::SimpleValidationScreen;

/// What the shell needs from a screen: named widgets and a text rendering.
pub trait Screen {
    fn title(&self) -> &str;
    fn fields(&self) -> Vec<(&str, &TextField)> {
        Vec::new()
    }
    fn labels(&self) -> Vec<(&str, &Label)> {
        Vec::new()
    }
    fn buttons(&self) -> Vec<(&str, &Button)> {
        Vec::new()
    }

    fn field(&self, name: &str) -> Option<&TextField> {
        self.fields()
            .into_iter()
            .find(|(n, _)| *n == name)
            .map(|(_, f)| f)
    }

    fn button(&self, name: &str) -> Option<&Button> {
        self.buttons()
            .into_iter()
            .find(|(n, _)| *n == name)
            .map(|(_, b)| b)
    }

    /// One line per widget; hidden labels are left out.
    fn render(&self) -> String {
        let mut out = format!("== {} ==\n", self.title());
        for (name, field) in self.fields() {
            let state = if field.enabled.get() { "" } else { " (disabled)" };
            let _ = writeln!(out, "  {name}: \"{}\"{state}", field.text());
        }
        for (name, label) in self.labels() {
            if !label.is_hidden() {
                let _ = writeln!(out, "  {name}: {}", label.text());
            }
        }
        for (name, button) in self.buttons() {
            let state = if button.is_enabled() { "" } else { " (disabled)" };
            let _ = writeln!(out, "  [{name}] {}{state}", button.title);
        }
        out
    }
}
