use crate::domain::{
    dto::EndpointEvent,
    ports::{FireEndpoint, FireUsecasesPort, LightEndpoint, LightUsecasesPort},
};

/// Dispatches endpoint events to the usecases.
///
/// Attributes are recorded on the endpoint first, then the matching handler
/// runs, the same order the network stack uses for its own callbacks.
pub struct EndpointController<'a, L, F, LE, FE> {
    light: &'a L,
    fire: &'a F,
    light_endpoint: &'a LE,
    fire_endpoint: &'a FE,
}

impl<'a, L, F, LE, FE> EndpointController<'a, L, F, LE, FE>
where
    L: LightUsecasesPort,
    F: FireUsecasesPort,
    LE: LightEndpoint,
    FE: FireEndpoint,
{
    pub fn new(light: &'a L, fire: &'a F, light_endpoint: &'a LE, fire_endpoint: &'a FE) -> Self {
        Self {
            light,
            fire,
            light_endpoint,
            fire_endpoint,
        }
    }

    pub fn handle(&self, event: EndpointEvent) {
        log::debug!("endpoint: {:?}", event);
        match event {
            EndpointEvent::LightRgb {
                on,
                red,
                green,
                blue,
                level,
            } => {
                self.light_endpoint.record_rgb(on, red, green, blue, level);
                self.light.on_rgb_command(on, red, green, blue, level);
            }
            EndpointEvent::LightTemperature { on, level, mireds } => {
                self.light_endpoint.record_temperature(on, level, mireds);
                self.light.on_temperature_command(on, level, mireds);
            }
            EndpointEvent::Identify { time } => self.light.on_identify(time),
            EndpointEvent::FireSwitch(on) => {
                self.fire_endpoint.set_fire_on(on);
                self.fire.on_fire_switch(on);
            }
            EndpointEvent::FireToggle => self.fire.toggle(),
        }
    }
}
