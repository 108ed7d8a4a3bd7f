mod led_ws2812;
mod random;

pub use led_ws2812::{EspIndicatorDriver, EspStripDriver, init_leds};
pub use random::get_seed;
