use gtk4::prelude::*;
use gtk4::{gio, glib};
use libadwaita as adw;

use crate::config::{self, AppConfig};
use crate::logging;
use crate::ui::{self, style, UiSource};

pub const RESOURCE_APP_ID: &str = "com.obision.example.Resource";
pub const RESOURCE_UI_PATH: &str = "/com/obision/example/Resource/window.ui";
pub const INLINE_APP_ID: &str = "com.obision.example.Rust";

#[derive(Debug, Clone)]
pub struct Example {
    pub app_id: &'static str,
    pub ui: UiSource,
}

impl Example {
    pub fn resource() -> Self {
        Self {
            app_id: RESOURCE_APP_ID,
            ui: UiSource::Resource(RESOURCE_UI_PATH.into()),
        }
    }

    pub fn inline() -> Self {
        Self {
            app_id: INLINE_APP_ID,
            ui: UiSource::Inline(ui::source::WINDOW_UI),
        }
    }
}

pub fn register_resources() -> Result<(), glib::Error> {
    gio::resources_register_include!("obision-example.gresource")
}

pub fn launch(example: Example) -> glib::ExitCode {
    let loaded = config::load_config();
    let cfg = loaded.as_ref().cloned().unwrap_or_default();
    logging::init(&cfg.logging.filter);
    if let Err(e) = loaded {
        log::warn!("using default configuration: {:#}", e);
    }

    run(example, cfg)
}

pub fn build_application(example: Example, config: AppConfig) -> adw::Application {
    let app = adw::Application::builder()
        .application_id(example.app_id)
        .build();

    let source = UiSource::resolve(&example.ui, &config.ui);
    log::info!("{} loads its window from {}", example.app_id, source);

    let scheme = config.appearance.color_scheme;
    app.connect_startup(move |_| style::apply(scheme));
    app.connect_activate(move |app| ui::build(app, &source, &config));

    app
}

pub fn run(example: Example, config: AppConfig) -> glib::ExitCode {
    if let Err(e) = register_resources() {
        log::error!("failed to register resources: {}", e);
    }

    build_application(example, config).run()
}
