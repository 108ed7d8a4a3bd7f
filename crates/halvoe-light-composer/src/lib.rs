#![no_std]

//! Strip composer for the effect light
//!
//! Architecture layers:
//! - `driver` - Hardware abstraction ([`LedDriver`] and [`IndicatorDriver`] traits)
//! - `effect` - Effect implementations (the fire simulation)
//! - `processor` - Output processing applied at flush time (brightness, color correction)
//! - `renderer` - The [`StripRenderer`] that owns the pixel buffer and paces flushes
//! - `color` - Color types, RGB scaling and the color temperature model
//! - `math8` - 8-bit fixed point helpers
//!
//! Everything is generic over the driver, so the crate builds and tests on
//! the host as well as on the device.

pub mod color;
pub mod driver;
pub mod effect;
pub mod math8;
pub mod processor;
pub mod renderer;

pub use color::{Rgb, TemperatureRange};
pub use driver::{IndicatorDriver, LedDriver};
pub use effect::{EffectImpl, FireConfig, FireEffect};
pub use processor::{ColorCorrection, OutputConfig, OutputProcessor};
pub use renderer::{FrameSource, StripRenderer};
