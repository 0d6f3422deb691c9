//! Configuration data model.
//!
//! Every field has a default so a missing or partial `config.toml` still
//! produces a usable configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Label shown on the primary button once it has been clicked.
pub const DEFAULT_CLICKED_LABEL: &str = "¡Clickeado!";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub appearance: AppearanceConfig,
    #[serde(default)]
    pub labels: LabelConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Overrides for where the window definition is loaded from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// A `.ui` file on disk. Wins over everything else.
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// A path inside the registered GResource bundle.
    #[serde(default)]
    pub resource_path: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Follow the desktop preference.
    #[default]
    Default,
    Light,
    Dark,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppearanceConfig {
    #[serde(default)]
    pub color_scheme: ColorScheme,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelConfig {
    #[serde(default = "default_clicked")]
    pub clicked: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            clicked: default_clicked(),
        }
    }
}

fn default_clicked() -> String {
    DEFAULT_CLICKED_LABEL.into()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `env_logger` filter used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

fn default_filter() -> String {
    "info".into()
}
