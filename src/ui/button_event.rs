use gtk4::prelude::*;
use gtk4::Button;

pub fn setup(button: &Button, clicked_label: &str) {
    let label = clicked_label.to_owned();
    button.connect_clicked(move |button| {
        log::debug!("primary button clicked");
        button.set_label(&label);
    });
}
