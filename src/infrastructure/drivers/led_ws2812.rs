use static_cell::make_static;

use esp_hal::{gpio::interconnect::PeripheralOutput, peripherals::RMT, rmt::Rmt, time::Rate};
use esp_hal_smartled::{SmartLedsAdapter, buffer_size, smart_led_buffer};
use smart_leds::SmartLedsWrite;

use halvoe_light_composer::{IndicatorDriver, LedDriver, Rgb};

use crate::config::LED_COUNT;

/// ESP-specific strip driver using the RMT peripheral
///
/// The RMT (Remote Control) peripheral generates the bit timing required by
/// WS2812/SK6812 LEDs.
pub struct EspStripDriver<'a> {
    adapter: SmartLedsAdapter<'a, { buffer_size(LED_COUNT) }>,
}

/// Onboard RGB LED, driven by the second RMT channel
pub struct EspIndicatorDriver<'a> {
    adapter: SmartLedsAdapter<'a, { buffer_size(1) }>,
}

/// Bring up the RMT peripheral and bind the strip and indicator pins
///
/// # Arguments
/// * `rmt` - RMT peripheral
/// * `strip_pin` - GPIO pin connected to the strip data line
/// * `indicator_pin` - GPIO pin connected to the onboard LED
pub fn init_leds<S, I>(
    rmt: RMT<'static>,
    strip_pin: S,
    indicator_pin: I,
) -> (EspStripDriver<'static>, EspIndicatorDriver<'static>)
where
    S: PeripheralOutput<'static>,
    I: PeripheralOutput<'static>,
{
    let rmt = Rmt::new(rmt, Rate::from_mhz(32)).expect("Failed to initialize RMT");

    // The buffers live for the entire program
    let strip_buffer = make_static!(smart_led_buffer!(LED_COUNT));
    let indicator_buffer = make_static!(smart_led_buffer!(1));

    let strip = EspStripDriver {
        adapter: SmartLedsAdapter::new(rmt.channel0, strip_pin, strip_buffer),
    };
    let indicator = EspIndicatorDriver {
        adapter: SmartLedsAdapter::new(rmt.channel1, indicator_pin, indicator_buffer),
    };
    (strip, indicator)
}

impl LedDriver<LED_COUNT> for EspStripDriver<'static> {
    fn write(&mut self, colors: &[Rgb; LED_COUNT]) {
        critical_section::with(|_| {
            let _ = self.adapter.write(colors.iter().copied());
        });
    }
}

impl IndicatorDriver for EspIndicatorDriver<'static> {
    fn write(&mut self, color: Rgb) {
        // the onboard LED has red and green swapped relative to the strip
        let swapped = Rgb {
            r: color.g,
            g: color.r,
            b: color.b,
        };
        critical_section::with(|_| {
            let _ = self.adapter.write(core::iter::once(swapped));
        });
    }
}
