use halvoe_light_arbiter::{EndpointController, EndpointEvent};

use crate::{
    config::{DEVICE, ENDPOINTS},
    infrastructure::{
        services::{FIRE_ENDPOINT, LIGHT_ENDPOINT, event_sender},
        types::{EndpointControllerImpl, FireUsecasesImpl, LightUsecasesImpl},
    },
};

/// Wire the endpoint controller to the global endpoint attributes
pub fn init_endpoint_controller(
    light: &'static LightUsecasesImpl,
    fire: &'static FireUsecasesImpl,
) -> EndpointControllerImpl {
    let (min_mireds, max_mireds) = LIGHT_ENDPOINT.mireds_range();
    log::info!(
        "endpoint: {} {} ({})",
        DEVICE.manufacturer,
        DEVICE.model,
        DEVICE.version
    );
    log::info!(
        "endpoint: light on {}, capabilities {:#06x}, {}-{} mireds",
        ENDPOINTS.light,
        LIGHT_ENDPOINT.capabilities(),
        min_mireds,
        max_mireds
    );
    log::info!(
        "endpoint: fire switch on {}, \"{}\"",
        ENDPOINTS.fire,
        FIRE_ENDPOINT.description()
    );

    EndpointController::new(light, fire, &LIGHT_ENDPOINT, &FIRE_ENDPOINT)
}

/// Boot button flips the fire switch
pub fn handle_boot_button_click() {
    if event_sender().try_send(EndpointEvent::FireToggle).is_err() {
        log::warn!("button: event queue full, press dropped");
    }
}
