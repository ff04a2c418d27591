use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::rules::LengthRules;

/// Environment variable naming a JSON config file.
pub const CONFIG_ENV: &str = "WEAVE_DEMO_CONFIG";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Inputs on the numbers screen.
    pub number_fields: usize,
    pub min_username_length: usize,
    pub min_password_length: usize,
    pub alert: AlertConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AlertConfig {
    pub title: String,
    pub message: String,
    pub confirm: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        let rules = LengthRules::default();
        Self {
            number_fields: 4,
            min_username_length: rules.min_username,
            min_password_length: rules.min_password,
            alert: AlertConfig::default(),
        }
    }
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            title: "RxExample".into(),
            message: "This is wonderful".into(),
            confirm: "Ok".into(),
        }
    }
}

impl DemoConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = serde_json::from_str(json)?;
        config.checked()
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Config from the file named by `WEAVE_DEMO_CONFIG`, or the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => {
                log::info!("loading config from {}", Path::new(&path).display());
                Self::load(path)
            }
            None => Ok(Self::default()),
        }
    }

    fn checked(self) -> Result<Self, ConfigError> {
        if self.number_fields == 0 {
            return Err(ConfigError::NoNumberFields);
        }
        Ok(self)
    }

    pub fn rules(&self) -> LengthRules {
        LengthRules {
            min_username: self.min_username_length,
            min_password: self.min_password_length,
        }
    }
}
