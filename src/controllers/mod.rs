mod button;
mod endpoint;

pub use button::{ButtonCallback, ButtonController, init_button_controller};
pub use endpoint::{handle_boot_button_click, init_endpoint_controller};
