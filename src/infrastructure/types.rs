use embassy_sync::{
    blocking_mutex::raw::CriticalSectionRawMutex,
    channel::{Channel, Receiver, Sender},
};
use halvoe_light_arbiter::{
    AtomicFireState, AtomicLightState, EndpointController, EndpointEvent, EndpointReport,
    FireUsecases, LightUsecases, PacingLoop, SharedIndicator, SharedStrip,
};
use rand::rngs::SmallRng;

use crate::{
    config::{EVENT_QUEUE_SIZE, LED_COUNT, REPORT_QUEUE_SIZE},
    infrastructure::drivers::{EspIndicatorDriver, EspStripDriver},
};

pub type EventChannel = Channel<CriticalSectionRawMutex, EndpointEvent, EVENT_QUEUE_SIZE>;
pub type EventSender = Sender<'static, CriticalSectionRawMutex, EndpointEvent, EVENT_QUEUE_SIZE>;
pub type EventReceiver =
    Receiver<'static, CriticalSectionRawMutex, EndpointEvent, EVENT_QUEUE_SIZE>;

pub type ReportChannel = Channel<CriticalSectionRawMutex, EndpointReport, REPORT_QUEUE_SIZE>;
pub type ReportReceiver =
    Receiver<'static, CriticalSectionRawMutex, EndpointReport, REPORT_QUEUE_SIZE>;

pub type Strip =
    SharedStrip<CriticalSectionRawMutex, EspStripDriver<'static>, SmallRng, LED_COUNT>;
pub type Indicator = SharedIndicator<CriticalSectionRawMutex, EspIndicatorDriver<'static>>;

pub type LightUsecasesImpl =
    LightUsecases<'static, AtomicLightState, Strip, Indicator, ReportChannel>;
pub type FireUsecasesImpl = FireUsecases<'static, AtomicFireState, Strip, ReportChannel>;

pub type EndpointControllerImpl = EndpointController<
    'static,
    LightUsecasesImpl,
    FireUsecasesImpl,
    AtomicLightState,
    AtomicFireState,
>;
pub type PacingLoopImpl = PacingLoop<'static, Strip, LightUsecasesImpl, FireUsecasesImpl>;
