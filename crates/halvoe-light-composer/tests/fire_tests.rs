//! Tests for the fire simulation.

use embassy_time::Duration;
use halvoe_light_composer::effect::heat_color;
use halvoe_light_composer::{EffectImpl, FireConfig, FireEffect, Rgb};
use rand::SeedableRng;
use rand::rngs::SmallRng;

const LEDS: usize = 79;

fn fire(config: FireConfig, seed: u64) -> FireEffect<SmallRng, LEDS> {
    FireEffect::new(config, SmallRng::seed_from_u64(seed))
}

// -----------------------------------------------------------------------------
// Heat to color ramp
// -----------------------------------------------------------------------------

#[test]
fn no_heat_is_black() {
    assert_eq!(heat_color(0), Rgb::new(0, 0, 0));
}

#[test]
fn full_heat_is_near_white() {
    let color = heat_color(255);

    assert_eq!((color.r, color.g), (255, 255));
    assert!(color.b > 200);
}

#[test]
fn ramp_goes_red_then_yellow() {
    let low = heat_color(60);
    let mid = heat_color(120);

    assert!(low.r > 0 && low.g == 0 && low.b == 0, "{low:?}");
    assert!(mid.r == 255 && mid.g > 0 && mid.b == 0, "{mid:?}");
}

// -----------------------------------------------------------------------------
// Simulation
// -----------------------------------------------------------------------------

#[test]
fn always_sparking_fire_heats_up() {
    let mut effect = fire(FireConfig::new(75, 255), 7);

    let mut lit = false;
    for frame in 0..20u64 {
        let leds = effect.render(Duration::from_millis(frame * 66));
        lit |= leds.iter().any(|led| *led != Rgb::default());
    }

    assert!(lit);
    assert!(effect.total_heat() > 0);
}

#[test]
fn never_sparking_fire_stays_dark() {
    let mut effect = fire(FireConfig::new(75, 0), 7);

    for frame in 0..20u64 {
        let leds = effect.render(Duration::from_millis(frame * 66));
        assert!(leds.iter().all(|led| *led == Rgb::default()));
    }
    assert_eq!(effect.total_heat(), 0);
}

#[test]
fn flame_starts_at_the_bottom() {
    let mut effect = fire(FireConfig::new(75, 255), 3);

    let leds = effect.render(Duration::from_millis(0));

    // the first frame can only hold a single spark inside the spark zone
    assert!(leds[7..].iter().all(|led| *led == Rgb::default()));
}

#[test]
fn reversed_flame_starts_at_the_top() {
    let mut effect = fire(FireConfig::new(75, 255).with_reverse(true), 3);

    let leds = effect.render(Duration::from_millis(0));

    assert!(leds[..LEDS - 7].iter().all(|led| *led == Rgb::default()));
}

#[test]
fn same_seed_renders_same_frames() {
    let mut a = fire(FireConfig::new(75, 50), 42);
    let mut b = fire(FireConfig::new(75, 50), 42);

    for frame in 0..10u64 {
        let time = Duration::from_millis(frame * 66);
        assert_eq!(a.render(time), b.render(time));
    }
}

#[test]
fn reset_cools_the_strip() {
    let mut effect = fire(FireConfig::new(75, 255), 1);
    for frame in 0..10u64 {
        effect.render(Duration::from_millis(frame * 66));
    }

    effect.reset();

    assert_eq!(effect.total_heat(), 0);
}

#[test]
fn tiny_strips_render() {
    let mut effect: FireEffect<SmallRng, 2> =
        FireEffect::new(FireConfig::new(75, 255), SmallRng::seed_from_u64(9));

    for frame in 0..10u64 {
        effect.render(Duration::from_millis(frame * 66));
    }

    let mut empty: FireEffect<SmallRng, 0> =
        FireEffect::new(FireConfig::default(), SmallRng::seed_from_u64(9));
    assert!(empty.render(Duration::from_millis(0)).is_empty());
}
