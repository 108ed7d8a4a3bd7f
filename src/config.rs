#![allow(clippy::unreadable_literal)]

use embassy_time::Duration;
use halvoe_light_arbiter::domain::entity::capabilities;
use halvoe_light_composer::{FireConfig, OutputConfig, TemperatureRange};

pub struct DeviceConfig {
    pub manufacturer: &'static str,
    pub model: &'static str,
    pub version: &'static str,
}

pub struct EndpointConfig {
    pub light: u8,
    pub light_capabilities: u16,
    pub fire: u8,
    pub fire_description: &'static str,
}

pub struct StripConfig {
    pub led_count: usize,
    /// Global brightness cap applied at flush
    pub brightness: u8,
    pub color_correction: u32,
}

impl StripConfig {
    pub const fn output(&self) -> OutputConfig {
        OutputConfig::new(self.brightness, self.color_correction)
    }
}

pub struct TimingConfig {
    /// Minimum time between two strip writes
    pub show_interval: Duration,
    /// Pacing loop poll period
    pub poll_interval: Duration,
}

pub const DEVICE: DeviceConfig = DeviceConfig {
    manufacturer: "Halvoe",
    model: "ColorEffectLight",
    version: env!("BUILD_VERSION"),
};

pub const ENDPOINTS: EndpointConfig = EndpointConfig {
    light: 10,
    light_capabilities: capabilities::XY | capabilities::COLOR_TEMP,
    fire: 1,
    fire_description: "Feuer",
};

#[cfg(not(feature = "strip-short"))]
pub const STRIP: StripConfig = StripConfig {
    led_count: 79,
    brightness: 64,
    color_correction: 0xFFB0F0,
};
#[cfg(feature = "strip-short")]
pub const STRIP: StripConfig = StripConfig {
    led_count: 8,
    brightness: 64,
    color_correction: 0xFFB0F0,
};

pub const LED_COUNT: usize = STRIP.led_count;

pub const FIRE: FireConfig = FireConfig::new(75, 50);

pub const TEMPERATURE: TemperatureRange = TemperatureRange::new(2000, 6500);

pub const TIMING: TimingConfig = TimingConfig {
    show_interval: Duration::from_millis(66),
    poll_interval: Duration::from_millis(10),
};

pub const EVENT_QUEUE_SIZE: usize = 8;
pub const REPORT_QUEUE_SIZE: usize = 4;

#[macro_export]
macro_rules! led_gpio {
    ($p:expr) => {
        $p.GPIO0
    };
}

#[macro_export]
macro_rules! indicator_gpio {
    ($p:expr) => {
        $p.GPIO8
    };
}

#[macro_export]
macro_rules! button_gpio {
    ($p:expr) => {
        $p.GPIO9
    };
}
