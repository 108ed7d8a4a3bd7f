//! Tests for the light adapter: color derivation, off path and identify.

mod common;

use common::{Device, LEDS, at, controller, pacing, solid};
use halvoe_light_arbiter::{
    ColorMode, EndpointEvent, Mode,
    domain::ports::{FireUsecasesPort, LightEndpoint, LightUsecasesPort},
};
use halvoe_light_composer::{Rgb, TemperatureRange};
use pretty_assertions::assert_eq;

// -----------------------------------------------------------------------------
// RGB commands
// -----------------------------------------------------------------------------

#[test]
fn rgb_command_scales_by_level() {
    let device = Device::new();
    let light = device.light();

    light.on_rgb_command(true, 255, 0, 0, 128);

    assert_eq!(device.pixels(), solid(128, 0, 0));
    assert_eq!(device.indicator_color(), Some(Rgb::new(128, 0, 0)));
}

#[test]
fn rgb_command_at_full_level_keeps_the_color() {
    let device = Device::new();
    let light = device.light();

    light.on_rgb_command(true, 10, 200, 255, 255);

    assert_eq!(device.pixels(), solid(10, 200, 255));
    assert_eq!(device.indicator_color(), Some(Rgb::new(10, 200, 255)));
}

#[test]
fn rgb_command_claims_the_strip() {
    let device = Device::new();
    device.mode.set(Mode::Fire);
    let light = device.light();

    light.on_rgb_command(true, 0, 255, 0, 255);

    assert_eq!(device.mode.get(), Mode::Light);
}

#[test]
fn last_command_before_flush_wins() {
    let device = Device::new();
    let (light, fire) = (device.light(), device.fire());
    let pacing = pacing(&device, &light, &fire);
    pacing.tick(at(0));

    for level in 1..=20u8 {
        light.on_rgb_command(true, 255, 255, 255, level * 10);
        pacing.tick(at(u64::from(level)));
    }
    light.on_rgb_command(true, 0, 0, 255, 255);
    pacing.tick(at(66));

    let frames = device.frames();
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[1], solid(0, 0, 255));
}

// -----------------------------------------------------------------------------
// Temperature commands
// -----------------------------------------------------------------------------

#[test]
fn warmest_temperature_drives_red_and_green() {
    let device = Device::new();
    let light = device.light();

    light.on_temperature_command(true, 255, 500);

    assert_eq!(device.pixels(), solid(255, 255, 0));
    assert_eq!(device.indicator_color(), Some(Rgb::new(255, 255, 0)));
    assert_eq!(device.mode.get(), Mode::Light);
}

#[test]
fn coldest_temperature_drives_blue() {
    let device = Device::new();
    let light = device.light();

    light.on_temperature_command(true, 255, 153);

    assert_eq!(device.pixels(), solid(0, 0, 255));
}

#[test]
fn temperature_command_scales_by_level() {
    let device = Device::new();
    let light = device.light();

    light.on_temperature_command(true, 128, 153);

    assert_eq!(device.pixels(), solid(0, 0, 128));
}

#[test]
fn temperature_follows_the_endpoint_range() {
    let device = Device::with_temperature_range(TemperatureRange::new(2700, 5000));
    let light = device.light();

    // 250 mireds is 4000 K, 1300 K into a 2300 K wide range
    light.on_temperature_command(true, 255, 250);
    assert_eq!(device.pixels(), solid(111, 111, 144));

    // 5000 K is the cold end here, not part way to 6500 K
    light.on_temperature_command(true, 255, 200);
    assert_eq!(device.pixels(), solid(0, 0, 255));
}

#[test]
fn zero_mireds_takes_the_off_path() {
    let device = Device::new();
    let light = device.light();
    light.on_rgb_command(true, 255, 255, 255, 255);
    device.mode.set(Mode::Fire);

    light.on_temperature_command(true, 255, 0);

    assert_eq!(device.mode.get(), Mode::Fire);
    assert_eq!(device.indicator_color(), Some(Rgb::default()));
    assert_eq!(device.pixels(), solid(255, 255, 255));
}

// -----------------------------------------------------------------------------
// Off path
// -----------------------------------------------------------------------------

#[test]
fn off_in_light_mode_blackens_strip_and_indicator() {
    let device = Device::new();
    let light = device.light();
    light.on_rgb_command(true, 255, 255, 255, 255);

    light.on_rgb_command(false, 255, 255, 255, 255);

    assert_eq!(device.pixels(), [Rgb::default(); LEDS]);
    assert_eq!(device.indicator_color(), Some(Rgb::default()));
    assert_eq!(device.mode.get(), Mode::Light);
}

#[test]
fn off_in_fire_mode_leaves_the_strip_to_the_fire() {
    let device = Device::new();
    let (light, fire) = (device.light(), device.fire());
    light.on_rgb_command(true, 255, 0, 0, 255);
    fire.on_fire_switch(true);
    let before = device.pixels();

    light.on_rgb_command(false, 0, 0, 0, 0);
    light.on_temperature_command(false, 0, 300);

    assert_eq!(device.mode.get(), Mode::Fire);
    assert_eq!(device.pixels(), before);
    assert_eq!(device.indicator_color(), Some(Rgb::default()));
}

// -----------------------------------------------------------------------------
// Identify
// -----------------------------------------------------------------------------

#[test]
fn identify_alternates_starting_with_white() {
    let device = Device::new();
    let light = device.light();

    light.on_identify(5);
    assert_eq!(device.pixels(), solid(255, 255, 255));
    light.on_identify(4);
    assert_eq!(device.pixels(), solid(0, 0, 0));
    light.on_identify(3);
    assert_eq!(device.pixels(), solid(255, 255, 255));
    assert_eq!(device.indicator_color(), Some(Rgb::new(255, 255, 255)));
}

#[test]
fn identify_restores_the_light_for_any_number_of_blinks() {
    for blinks in 0..5u16 {
        let device = Device::new();
        let (light, fire) = (device.light(), device.fire());
        let controller = controller(&device, &light, &fire);
        controller.handle(EndpointEvent::LightRgb {
            on: true,
            red: 255,
            green: 0,
            blue: 0,
            level: 128,
        });

        for step in 0..blinks {
            controller.handle(EndpointEvent::Identify { time: 10 - step });
        }
        controller.handle(EndpointEvent::Identify { time: 0 });

        assert_eq!(device.pixels(), solid(128, 0, 0), "after {blinks} blinks");
        assert_eq!(device.indicator_color(), Some(Rgb::new(128, 0, 0)));
    }
}

#[test]
fn identify_restores_black_when_the_light_is_off() {
    for blinks in 1..4u16 {
        let device = Device::new();
        let light = device.light();

        for _ in 0..blinks {
            light.on_identify(3);
        }
        light.on_identify(0);

        assert_eq!(device.pixels(), solid(0, 0, 0), "after {blinks} blinks");
    }
}

#[test]
fn identify_restores_a_temperature_color() {
    let device = Device::new();
    let (light, fire) = (device.light(), device.fire());
    let controller = controller(&device, &light, &fire);
    controller.handle(EndpointEvent::LightTemperature {
        on: true,
        level: 255,
        mireds: 500,
    });

    controller.handle(EndpointEvent::Identify { time: 2 });
    controller.handle(EndpointEvent::Identify { time: 0 });

    assert_eq!(device.pixels(), solid(255, 255, 0));
}

#[test]
fn identify_never_changes_the_mode() {
    let device = Device::new();
    let light = device.light();
    device.mode.set(Mode::Fire);

    light.on_identify(1);
    light.on_identify(0);

    assert_eq!(device.mode.get(), Mode::Fire);
}

#[test]
fn next_identify_after_restore_starts_with_white() {
    let device = Device::new();
    let light = device.light();
    light.on_identify(1);
    light.on_identify(0);

    light.on_identify(1);

    assert_eq!(device.pixels(), solid(255, 255, 255));
}

// -----------------------------------------------------------------------------
// Endpoint attributes
// -----------------------------------------------------------------------------

#[test]
fn commands_are_recorded_on_the_endpoint() {
    let device = Device::new();
    let (light, fire) = (device.light(), device.fire());
    let controller = controller(&device, &light, &fire);

    controller.handle(EndpointEvent::LightRgb {
        on: true,
        red: 1,
        green: 2,
        blue: 3,
        level: 4,
    });
    let state = device.light_state.light_state();
    assert_eq!((state.on, state.color, state.level), (true, (1, 2, 3), 4));
    assert_eq!(state.color_mode, ColorMode::Rgb);

    controller.handle(EndpointEvent::LightTemperature {
        on: false,
        level: 9,
        mireds: 250,
    });
    let state = device.light_state.light_state();
    assert_eq!((state.on, state.level, state.mireds), (false, 9, 250));
    assert_eq!(state.color_mode, ColorMode::Temperature);
}

#[test]
fn endpoint_advertises_temperature_range_in_mireds() {
    let device = Device::new();

    assert_eq!(device.light_state.mireds_range(), (153, 500));
    assert_eq!(device.light_state.capabilities(), 0b1_1000);
}
