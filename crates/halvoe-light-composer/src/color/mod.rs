mod temperature;
mod utils;

use smart_leds::RGB8;

pub use temperature::{
    TEMPERATURE_COLD_KELVIN, TEMPERATURE_WARM_KELVIN, TemperatureRange, kelvin_to_mireds,
    mireds_to_kelvin,
};
pub use utils::{BLACK, WHITE, rgb_from_u32, scale_rgb};

pub type Rgb = RGB8;
