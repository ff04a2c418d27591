use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("number_fields must be at least 1")]
    NoNumberFields,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShellError {
    #[error("unknown command '{0}' (try 'help')")]
    UnknownCommand(String),
    #[error("'{command}' needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },
    #[error("'{0}' is not an action index")]
    BadIndex(String),
    #[error("no field named '{0}' on this screen")]
    NoSuchField(String),
    #[error("no button named '{0}' on this screen")]
    NoSuchButton(String),
    #[error("field '{0}' is disabled")]
    FieldDisabled(String),
    #[error("button '{0}' is disabled")]
    ButtonDisabled(String),
    #[error("no alert is presented")]
    NoAlert,
    #[error("the alert has no action {0}")]
    NoSuchAction(usize),
    #[error("an alert is presented; dismiss it first")]
    AlertPresented,
    #[error("already at the first screen")]
    AtRoot,
    #[error("could not restore back stack")]
    BadBackStack,
}
