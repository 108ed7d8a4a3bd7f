/// Per-tick correction of an endpoint's reported on/off state
pub trait Reconcile {
    fn reconcile(&self);
}

/// Port interface for the light usecases
pub trait LightUsecasesPort: Reconcile {
    /// Light changed in RGB color mode
    fn on_rgb_command(&self, on: bool, red: u8, green: u8, blue: u8, level: u8);

    /// Light changed in color temperature mode
    fn on_temperature_command(&self, on: bool, level: u8, mireds: u16);

    /// Identify blink step, `time == 0` restores the light
    fn on_identify(&self, time: u16);
}

/// Port interface for the fire usecases
pub trait FireUsecasesPort: Reconcile {
    /// Fire switch output changed
    fn on_fire_switch(&self, on: bool);

    /// Flip the fire switch locally and report the new state
    fn toggle(&self);
}
