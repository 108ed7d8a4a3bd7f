/// Command delivered by the network stack (or a local control).
///
/// Each variant carries the full attribute payload of the callback it stands
/// for, so a handler never has to read the endpoint back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointEvent {
    /// Light endpoint changed in RGB color mode
    LightRgb {
        on: bool,
        red: u8,
        green: u8,
        blue: u8,
        level: u8,
    },
    /// Light endpoint changed in color temperature mode
    LightTemperature { on: bool, level: u8, mireds: u16 },
    /// Identify request, a `time` of 0 ends the blink
    Identify { time: u16 },
    /// Fire switch output written remotely
    FireSwitch(bool),
    /// Fire switch flipped by the local button
    FireToggle,
}

/// State change made by the device that has to be reported outward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointReport {
    LightOnOff(bool),
    FireOnOff(bool),
}
