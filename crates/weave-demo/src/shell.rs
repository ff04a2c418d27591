//! Line-driven host for the demo.
//!
//! Stands in for a GUI toolkit: each command is one user interaction on the
//! current screen, and the screen is re-rendered after it.

use std::str::FromStr;

use weave_widgets::TextField;

use crate::app::App;
use crate::error::ShellError;

pub const HELP: &str = "\
commands:
  show                     render the current screen
  tap <button>             tap a button
  type <field> <text>      type text at the end of a field
  set <field> <text>       replace a field's text
  erase <field>            delete the last character
  clear <field>            empty a field
  dismiss [index]          pick an alert action (default 0)
  back                     go to the previous screen
  routes                   print the back stack as json
  restore <json>           rebuild the back stack from json
  help                     this text
  quit                     exit";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Show,
    Tap(String),
    Type { field: String, text: String },
    Set { field: String, text: String },
    Erase(String),
    Clear(String),
    Dismiss(usize),
    Back,
    Routes,
    Restore(String),
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = ShellError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim_start();

        let name = |command: &'static str| -> Result<String, ShellError> {
            match rest.split_whitespace().next() {
                Some(n) => Ok(n.to_string()),
                None => Err(ShellError::MissingArgument {
                    command,
                    what: "a name",
                }),
            }
        };
        // field name, then everything after the first space verbatim
        let field_and_text = |command: &'static str| -> Result<(String, String), ShellError> {
            let field = name(command)?;
            let text = rest
                .split_once(' ')
                .map(|(_, t)| t.to_string())
                .unwrap_or_default();
            Ok((field, text))
        };

        Ok(match word {
            "show" | "" => Command::Show,
            "tap" => Command::Tap(name("tap")?),
            "type" => {
                let (field, text) = field_and_text("type")?;
                Command::Type { field, text }
            }
            "set" => {
                let (field, text) = field_and_text("set")?;
                Command::Set { field, text }
            }
            "erase" => Command::Erase(name("erase")?),
            "clear" => Command::Clear(name("clear")?),
            "dismiss" => match rest {
                "" => Command::Dismiss(0),
                n => Command::Dismiss(
                    n.parse()
                        .map_err(|_| ShellError::BadIndex(n.to_string()))?,
                ),
            },
            "back" => Command::Back,
            "routes" => Command::Routes,
            "restore" if rest.is_empty() => {
                return Err(ShellError::MissingArgument {
                    command: "restore",
                    what: "back stack json",
                });
            }
            "restore" => Command::Restore(rest.to_string()),
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(ShellError::UnknownCommand(other.to_string())),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Output(String),
    Quit,
}

pub struct Shell {
    app: App,
}

impl Shell {
    pub fn new(app: App) -> Self {
        Self { app }
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn execute(&self, command: Command) -> Result<Outcome, ShellError> {
        log::debug!("shell: {command:?}");
        let modal = self.app.alerts().is_presenting();
        match command {
            Command::Show => {}
            Command::Help => return Ok(Outcome::Output(HELP.to_string())),
            Command::Quit => return Ok(Outcome::Quit),
            Command::Routes => return Ok(Outcome::Output(self.app.stack().to_json())),
            Command::Dismiss(index) => {
                let alert = self.app.alerts().current().ok_or(ShellError::NoAlert)?;
                if index >= alert.actions.len() {
                    return Err(ShellError::NoSuchAction(index));
                }
                self.app.alerts().dismiss(index);
            }
            _ if modal => return Err(ShellError::AlertPresented),
            Command::Tap(name) => {
                let screen = self.app.current().ok_or(ShellError::NoSuchButton(name.clone()))?;
                let button = screen
                    .button(&name)
                    .ok_or_else(|| ShellError::NoSuchButton(name.clone()))?;
                if !button.tap() {
                    return Err(ShellError::ButtonDisabled(name));
                }
            }
            Command::Type { field, text } => self.edit(&field, |f| f.type_str(&text))?,
            Command::Set { field, text } => self.edit(&field, |f| f.set_text(text.as_str()))?,
            Command::Erase(field) => self.edit(&field, |f| f.backspace())?,
            Command::Clear(field) => self.edit(&field, |f| f.clear())?,
            Command::Back => {
                if !self.app.stack().navigator().pop() {
                    return Err(ShellError::AtRoot);
                }
            }
            Command::Restore(json) => {
                if !self.app.stack().from_json(&json) {
                    return Err(ShellError::BadBackStack);
                }
            }
        }
        Ok(Outcome::Output(self.app.render()))
    }

    fn edit(&self, field: &str, apply: impl FnOnce(&TextField) -> bool) -> Result<(), ShellError> {
        let screen = self
            .app
            .current()
            .ok_or_else(|| ShellError::NoSuchField(field.to_string()))?;
        let target = screen
            .field(field)
            .ok_or_else(|| ShellError::NoSuchField(field.to_string()))?;
        if apply(target) {
            Ok(())
        } else {
            Err(ShellError::FieldDisabled(field.to_string()))
        }
    }
}
