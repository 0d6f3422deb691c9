use gtk4::glib;
use thiserror::Error;

/// Failures while turning a UI definition into widgets.
#[derive(Debug, Error)]
pub enum UiError {
    #[error("failed to load UI from {source_name}: {error}")]
    Load {
        source_name: String,
        #[source]
        error: glib::Error,
    },

    #[error("UI definition has no object `{id}` of the expected type")]
    MissingObject { id: &'static str },
}
