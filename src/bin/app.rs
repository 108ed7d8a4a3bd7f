#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

use esp_backtrace as _;
use esp_hal::{
    clock::CpuClock, interrupt::software::SoftwareInterruptControl, timer::timg::TimerGroup,
};
use rand::{SeedableRng, rngs::SmallRng};

use halvoe_effect_light::config::{FIRE, STRIP, TIMING};
use halvoe_effect_light::controllers::{
    handle_boot_button_click, init_button_controller, init_endpoint_controller,
};
use halvoe_effect_light::infrastructure::drivers::{get_seed, init_leds};
use halvoe_effect_light::infrastructure::services::{
    FIRE_ENDPOINT, LIGHT_ENDPOINT, MODE, REPORTS, event_receiver, report_receiver,
};
use halvoe_effect_light::infrastructure::tasks::{endpoint_task, pacing_task, report_task};
use halvoe_effect_light::infrastructure::types::{
    FireUsecasesImpl, Indicator, LightUsecasesImpl, Strip,
};
use halvoe_effect_light::{button_gpio, indicator_gpio, led_gpio, mk_static};
use halvoe_light_arbiter::{FireUsecases, LightUsecases, PacingLoop, SharedIndicator, SharedStrip};
use halvoe_light_composer::{FireEffect, OutputProcessor, StripRenderer};

esp_bootloader_esp_idf::esp_app_desc!();

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    esp_println::logger::init_logger_from_env();

    // Initialize hardware
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Start rtos
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_int = SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_int.software_interrupt0);

    // Strip and onboard indicator share the RMT peripheral
    let (strip_driver, indicator_driver) = init_leds(
        peripherals.RMT,
        led_gpio!(peripherals),
        indicator_gpio!(peripherals),
    );
    let fire = FireEffect::new(FIRE, SmallRng::seed_from_u64(get_seed()));
    let renderer = StripRenderer::new(
        strip_driver,
        fire,
        OutputProcessor::new(STRIP.output()),
        TIMING.show_interval,
    );
    let strip: &'static Strip = mk_static!(Strip, SharedStrip::new(renderer));
    let indicator: &'static Indicator =
        mk_static!(Indicator, SharedIndicator::new(indicator_driver));

    // Initialize usecases and controllers
    let light: &'static LightUsecasesImpl = mk_static!(
        LightUsecasesImpl,
        LightUsecases::new(&MODE, &LIGHT_ENDPOINT, strip, indicator, &REPORTS)
    );
    let fire: &'static FireUsecasesImpl = mk_static!(
        FireUsecasesImpl,
        FireUsecases::new(&MODE, &FIRE_ENDPOINT, strip, &REPORTS)
    );
    let controller = init_endpoint_controller(light, fire);
    let _button = init_button_controller(
        peripherals.IO_MUX,
        button_gpio!(peripherals),
        handle_boot_button_click,
    );

    // Spawn tasks
    spawner.spawn(pacing_task(PacingLoop::new(&MODE, strip, light, fire))).ok();
    spawner.spawn(endpoint_task(controller, event_receiver())).ok();
    spawner.spawn(report_task(report_receiver())).ok();

    loop {
        Timer::after(Duration::from_secs(5)).await;
    }
}
