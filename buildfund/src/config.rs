use config::{Config, ConfigError, File};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// How long a toast stays visible
    #[serde(default = "default_toast_timeout_ms")]
    pub toast_timeout_ms: u64,

    /// Screen id shown at startup (e.g. "dashboard", "loan-matching")
    #[serde(default = "default_start_screen")]
    pub start_screen: String,

    /// Optional JSON file replacing the built-in lenders and budget
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Default tracing filter, overridden by RUST_LOG
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_toast_timeout_ms() -> u64 {
    2200
}

fn default_start_screen() -> String {
    "dashboard".to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            toast_timeout_ms: default_toast_timeout_ms(),
            start_screen: default_start_screen(),
            catalog_path: None,
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var("BUILDFUND_CONFIG").unwrap_or_else(|_| "buildfund.toml".to_string());

        let settings = Config::builder()
            .add_source(File::with_name(&config_path).required(false))
            .add_source(
                config::Environment::with_prefix("BUILDFUND")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.toast_timeout_ms == 0 {
            return Err(ConfigError::Message(
                "toast_timeout_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn toast_timeout(&self) -> Duration {
        Duration::from_millis(self.toast_timeout_ms)
    }
}
