pub mod ascii_controller;
pub mod ui_controller;

pub use ascii_controller::AsciiController;
pub use ui_controller::UiController;
