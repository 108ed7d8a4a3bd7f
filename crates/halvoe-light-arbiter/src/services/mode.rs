use core::sync::atomic::{AtomicU8, Ordering};

use crate::domain::entity::Mode;

/// Single source of truth for what the strip shows.
///
/// One atomic byte, so command callbacks and the pacing loop can read and
/// write it from different contexts without a lock.
#[derive(Debug)]
pub struct ModeAuthority {
    mode: AtomicU8,
}

impl ModeAuthority {
    pub const fn new(initial: Mode) -> Self {
        Self {
            mode: AtomicU8::new(initial.as_u8()),
        }
    }

    pub fn get(&self) -> Mode {
        // only valid discriminants are ever stored
        Mode::from_u8(self.mode.load(Ordering::Acquire)).unwrap_or_default()
    }

    /// Overwrite the active mode
    pub fn set(&self, mode: Mode) {
        let previous = self.mode.swap(mode.as_u8(), Ordering::AcqRel);
        if previous != mode.as_u8() {
            log::info!("mode: switched to {:?}", mode);
        }
    }
}

impl Default for ModeAuthority {
    fn default() -> Self {
        Self::new(Mode::Light)
    }
}
