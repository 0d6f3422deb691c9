use gtk4::glib;
use gtk4::Switch;
use libadwaita as adw;

use crate::config::ColorScheme;

pub fn to_adw(scheme: ColorScheme) -> adw::ColorScheme {
    match scheme {
        ColorScheme::Default => adw::ColorScheme::Default,
        ColorScheme::Light => adw::ColorScheme::ForceLight,
        ColorScheme::Dark => adw::ColorScheme::ForceDark,
    }
}

pub fn for_switch_state(active: bool) -> ColorScheme {
    if active {
        ColorScheme::Dark
    } else {
        ColorScheme::Light
    }
}

pub fn apply(scheme: ColorScheme) {
    log::info!("color scheme set to {:?}", scheme);
    adw::StyleManager::default().set_color_scheme(to_adw(scheme));
}

/// Initial switch position; `Default` follows the desktop preference.
pub fn initial_switch_state(scheme: ColorScheme, system_dark: bool) -> bool {
    match scheme {
        ColorScheme::Default => system_dark,
        ColorScheme::Light => false,
        ColorScheme::Dark => true,
    }
}

pub fn setup_switch(switch: &Switch, initial: ColorScheme) {
    let system_dark = adw::StyleManager::default().is_dark();
    switch.set_active(initial_switch_state(initial, system_dark));
    switch.connect_state_set(|_, active| {
        apply(for_switch_state(active));
        glib::Propagation::Proceed
    });
}
