//! Minimal GTK4/libadwaita examples: a window loaded from a UI definition
//! with one button whose label changes when clicked.
//!
//! The binaries only pick an [`app::Example`] and hand it to [`app::run`].

pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod ui;

pub use app::{run, Example};
pub use error::UiError;
