use gtk4::prelude::*;
use gtk4::{Button, Switch};
use libadwaita as adw;

use crate::config::AppConfig;
use crate::error::UiError;

mod button_event;
pub mod source;
pub mod style;

pub use source::UiSource;
use source::{DARK_MODE_SWITCH_ID, PRIMARY_BUTTON_ID, WINDOW_ID};

pub struct MainWindow {
    pub window: adw::ApplicationWindow,
    pub primary_button: Option<Button>,
    pub dark_mode_switch: Option<Switch>,
}

/// Loads the definition, looks up the widgets and connects their handlers.
/// Only a missing `window` is an error.
pub fn assemble(source: &UiSource, config: &AppConfig) -> Result<MainWindow, UiError> {
    let builder = source.load()?;

    let window: adw::ApplicationWindow = source::object(&builder, WINDOW_ID)?;
    let primary_button = builder.object::<Button>(PRIMARY_BUTTON_ID);
    let dark_mode_switch = builder.object::<Switch>(DARK_MODE_SWITCH_ID);

    // signals
    match &primary_button {
        Some(button) => button_event::setup(button, &config.labels.clicked),
        None => log::warn!(
            "{} has no `{}`, showing the window without it",
            source,
            PRIMARY_BUTTON_ID
        ),
    }
    if let Some(switch) = &dark_mode_switch {
        style::setup_switch(switch, config.appearance.color_scheme);
    }

    Ok(MainWindow {
        window,
        primary_button,
        dark_mode_switch,
    })
}

pub fn build(app: &adw::Application, source: &UiSource, config: &AppConfig) {
    log::debug!("activating with UI from {}", source);

    let main = match assemble(source, config) {
        Ok(main) => main,
        Err(e) => {
            log::error!("{}", e);
            return;
        }
    };

    main.window.set_application(Some(app));
    main.window.present();
}
