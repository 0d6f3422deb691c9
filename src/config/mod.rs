pub mod model;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub use model::{AppConfig, ColorScheme};

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("obision-example")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    load_from_path(&config_path())
}

/// Reads `path`, or returns the defaults when it does not exist.
pub fn load_from_path(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    parse(&contents).with_context(|| format!("Failed to parse config file {}", path.display()))
}

pub fn parse(contents: &str) -> Result<AppConfig> {
    Ok(toml::from_str(contents)?)
}

#[cfg(test)]
mod tests {
    use super::model::DEFAULT_CLICKED_LABEL;
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("obision-example-{}-{}", name, std::process::id()))
    }

    #[test]
    fn empty_file_gives_defaults() {
        let cfg = parse("").unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.labels.clicked, DEFAULT_CLICKED_LABEL);
        assert_eq!(cfg.logging.filter, "info");
        assert_eq!(cfg.appearance.color_scheme, ColorScheme::Default);
        assert!(cfg.ui.file.is_none());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let cfg = parse(
            r#"
            [appearance]
            color_scheme = "dark"

            [ui]
            resource_path = "/org/example/other.ui"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.appearance.color_scheme, ColorScheme::Dark);
        assert_eq!(cfg.ui.resource_path.as_deref(), Some("/org/example/other.ui"));
        assert_eq!(cfg.labels.clicked, DEFAULT_CLICKED_LABEL);
    }

    #[test]
    fn unknown_color_scheme_is_rejected() {
        assert!(parse("[appearance]\ncolor_scheme = \"sepia\"\n").is_err());
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let path = scratch_dir("missing").join("config.toml");
        assert_eq!(load_from_path(&path).unwrap(), AppConfig::default());
    }

    #[test]
    fn file_on_disk_is_loaded() {
        let dir = scratch_dir("load");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(
            &path,
            "[ui]\nfile = \"/tmp/window.ui\"\n\n[appearance]\ncolor_scheme = \"light\"\n\n[labels]\nclicked = \"Clicked!\"\n",
        )
        .unwrap();

        let loaded = load_from_path(&path).unwrap();
        let _ = std::fs::remove_dir_all(&dir);

        assert_eq!(loaded.ui.file, Some(PathBuf::from("/tmp/window.ui")));
        assert_eq!(loaded.appearance.color_scheme, ColorScheme::Light);
        assert_eq!(loaded.labels.clicked, "Clicked!");
        assert_eq!(loaded.logging.filter, "info");
    }

    #[test]
    fn unreadable_toml_reports_the_path() {
        let dir = scratch_dir("broken");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "[labels\nclicked = 1").unwrap();

        let err = load_from_path(&path).unwrap_err();
        let _ = std::fs::remove_dir_all(&dir);

        assert!(err.to_string().contains("config.toml"));
    }
}
