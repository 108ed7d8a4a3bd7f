use core::{
    cell::RefCell,
    sync::atomic::{AtomicU32, Ordering},
};

use embassy_sync::blocking_mutex::{Mutex, raw::CriticalSectionRawMutex};
use embassy_time::Instant;
use esp_hal::{
    gpio::{Event, Input, InputConfig, InputPin, Io, Pull},
    handler,
    peripherals::IO_MUX,
    ram,
};

/// Presses closer together than this are contact bounce
const DEBOUNCE_MS: u32 = 200;

pub struct ButtonController;

/// Callback type for button click handler
pub type ButtonCallback = fn();

static BUTTON: Mutex<CriticalSectionRawMutex, RefCell<Option<Input>>> =
    Mutex::new(RefCell::new(None));

static CALLBACK: Mutex<CriticalSectionRawMutex, RefCell<Option<ButtonCallback>>> =
    Mutex::new(RefCell::new(None));

/// Uptime of the last accepted press, in wrapping milliseconds
static LAST_PRESS_MS: AtomicU32 = AtomicU32::new(0);

/// Listen for falling edges on `pin` and call `on_click` from the interrupt
pub fn init_button_controller(
    mux: IO_MUX<'static>,
    pin: impl InputPin + 'static,
    on_click: ButtonCallback,
) -> ButtonController {
    let mut io = Io::new(mux);
    io.set_interrupt_handler(handle_button_click);
    let mut button = Input::new(pin, InputConfig::default().with_pull(Pull::Up));
    button.listen(Event::FallingEdge);

    BUTTON.lock(|cell| {
        cell.borrow_mut().replace(button);
    });

    CALLBACK.lock(|cell| {
        cell.borrow_mut().replace(on_click);
    });

    ButtonController
}

#[allow(clippy::cast_possible_truncation)]
fn debounced() -> bool {
    let now = Instant::now().as_millis() as u32;
    let last = LAST_PRESS_MS.load(Ordering::Relaxed);
    if last != 0 && now.wrapping_sub(last) < DEBOUNCE_MS {
        return false;
    }
    LAST_PRESS_MS.store(now.max(1), Ordering::Relaxed);
    true
}

#[handler]
#[ram]
fn handle_button_click() {
    let is_button_interrupt = BUTTON.lock(|cell| {
        let mut cell = cell.borrow_mut();
        if let Some(button) = cell.as_mut() {
            let is_set = button.is_interrupt_set();
            button.clear_interrupt();
            is_set
        } else {
            false
        }
    });

    if is_button_interrupt && debounced() {
        CALLBACK.lock(|cell| {
            if let Some(callback) = cell.borrow().as_ref() {
                callback();
            }
        });
    }
}
