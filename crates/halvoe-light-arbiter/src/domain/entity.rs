use halvoe_light_composer::{Rgb, TemperatureRange, color::scale_rgb};

/// What the shared strip currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Solid color pushed by the light endpoint
    #[default]
    Light,
    /// Fire simulation rendered by the pacing loop
    Fire,
}

impl Mode {
    pub(crate) const fn as_u8(self) -> u8 {
        match self {
            Mode::Light => 0,
            Mode::Fire => 1,
        }
    }

    pub(crate) const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Mode::Light),
            1 => Some(Mode::Fire),
            _ => None,
        }
    }
}

/// Color mode of the light endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Rgb,
    Temperature,
}

impl ColorMode {
    pub(crate) const fn as_u8(self) -> u8 {
        match self {
            ColorMode::Rgb => 0,
            ColorMode::Temperature => 1,
        }
    }

    pub(crate) const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(ColorMode::Rgb),
            1 => Some(ColorMode::Temperature),
            _ => None,
        }
    }
}

/// Color control capability bits advertised by the light endpoint
pub mod capabilities {
    pub const XY: u16 = 1 << 3;
    pub const COLOR_TEMP: u16 = 1 << 4;
}

/// Attributes of the color dimmable light endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightCommandState {
    pub on: bool,
    pub color: (u8, u8, u8),
    pub level: u8,
    pub mireds: u16,
    pub color_mode: ColorMode,
}

impl LightCommandState {
    pub const fn new() -> Self {
        Self {
            on: false,
            color: (255, 255, 255),
            level: 255,
            mireds: 0,
            color_mode: ColorMode::Rgb,
        }
    }

    /// Color the strip shows for these attributes, `None` when dark
    pub fn displayed_color(&self, temperature: &TemperatureRange) -> Option<Rgb> {
        if !self.on {
            return None;
        }
        match self.color_mode {
            ColorMode::Rgb => {
                let (r, g, b) = self.color;
                Some(scale_rgb(Rgb::new(r, g, b), self.level))
            }
            ColorMode::Temperature => temperature.color(self.mireds, self.level),
        }
    }
}

impl Default for LightCommandState {
    fn default() -> Self {
        Self::new()
    }
}

/// Attributes of the fire switch endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FireCommandState {
    pub on: bool,
}
