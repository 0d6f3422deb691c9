use gtk4::glib;

use obision_example::Example;

fn main() -> glib::ExitCode {
    obision_example::app::launch(Example::resource())
}
