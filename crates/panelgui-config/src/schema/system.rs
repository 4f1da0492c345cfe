//! Logging configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
#[derive(Default)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// `tracing-subscriber` filter directive for the workspace crates.
    pub fn directive(&self) -> &'static str {
        match self {
            LogLevel::Debug => "panelgui=debug",
            LogLevel::Info => "panelgui=info",
            LogLevel::Warning => "panelgui=warn",
            LogLevel::Error => "panelgui=error",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
