//! Two small reactive demos on top of `weave-core`:
//!
//! - **Numbers**: several text fields parsed as integers and summed live into
//!   a label, either wired directly (`NumbersScreen`) or through a view model
//!   (`NumbersHostedScreen`).
//! - **Simple validation**: username and password length checks that enable
//!   the password field and an action button, which presents an alert.
//!
//! `App` stacks the screens behind a home menu, and `Shell` drives it from
//! text commands in place of a GUI toolkit.

pub mod app;
pub mod config;
pub mod error;
pub mod rules;
pub mod screens;
pub mod shell;
pub mod tests;

pub use app::{App, DemoScreen, Route};
pub use config::DemoConfig;
pub use error::{ConfigError, ShellError};
pub use shell::{Command, Outcome, Shell};
