use gtk4::glib;
use gtk4::prelude::*;
use gtk4::Builder;
use std::fmt;
use std::path::PathBuf;

use crate::config::model::UiConfig;
use crate::error::UiError;

/// Window definition shipped with the crate, also compiled into the GResource bundle.
pub const WINDOW_UI: &str = include_str!("../../data/ui/window.ui");

pub const WINDOW_ID: &str = "window";
pub const PRIMARY_BUTTON_ID: &str = "primary_button";
pub const DARK_MODE_SWITCH_ID: &str = "dark_mode_switch";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiSource {
    Resource(String),
    File(PathBuf),
    Inline(&'static str),
}

impl UiSource {
    /// Applies the user overrides on top of an example's built-in source.
    /// A file beats a resource path, which beats the built-in.
    pub fn resolve(builtin: &UiSource, overrides: &UiConfig) -> UiSource {
        if let Some(file) = &overrides.file {
            return UiSource::File(file.clone());
        }
        if let Some(path) = &overrides.resource_path {
            return UiSource::Resource(path.clone());
        }
        builtin.clone()
    }

    pub fn load(&self) -> Result<Builder, UiError> {
        let builder = Builder::new();
        let loaded = match self {
            UiSource::Resource(path) => builder.add_from_resource(path),
            UiSource::File(path) => builder.add_from_file(path),
            UiSource::Inline(xml) => builder.add_from_string(xml),
        };
        loaded.map_err(|error| UiError::Load {
            source_name: self.to_string(),
            error,
        })?;
        Ok(builder)
    }
}

impl fmt::Display for UiSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiSource::Resource(path) => write!(f, "resource {}", path),
            UiSource::File(path) => write!(f, "file {}", path.display()),
            UiSource::Inline(_) => f.write_str("inline definition"),
        }
    }
}

pub fn object<T: IsA<glib::Object>>(builder: &Builder, id: &'static str) -> Result<T, UiError> {
    builder.object::<T>(id).ok_or(UiError::MissingObject { id })
}
