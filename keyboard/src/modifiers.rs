use core::sync::atomic::{AtomicU8, Ordering};

use super::scancodes::{Key, KeyStatus};

/// Caps-lock level shared between whoever toggles it and the queue that
/// stamps it onto events at read time.
///
/// Nothing inside this crate toggles it. The usual wiring is a handler that
/// forwards every event to [`CapsLock::update`].
#[derive(Debug)]
pub struct CapsLock {
    level: AtomicU8,
}

impl CapsLock {
    /// Starts released
    pub const fn new() -> Self {
        Self {
            level: AtomicU8::new(KeyStatus::Up.as_u8()),
        }
    }

    pub fn get(&self) -> KeyStatus {
        KeyStatus::from_u8(self.level.load(Ordering::Acquire))
    }

    pub fn set(&self, status: KeyStatus) {
        self.level.store(status.as_u8(), Ordering::Release);
    }

    /// Flip the level, returning the new one. `Unknown` flips to `Down`.
    pub fn toggle(&self) -> KeyStatus {
        let previous = self
            .level
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |raw| {
                Some(Self::flipped(KeyStatus::from_u8(raw)).as_u8())
            })
            .unwrap_or_else(|raw| raw);
        Self::flipped(KeyStatus::from_u8(previous))
    }

    /// Update the level from a key transition.
    /// Returns true if this was a caps-lock press.
    pub fn update(&self, key: Key, status: KeyStatus) -> bool {
        match (key, status) {
            (Key::CapsLock, KeyStatus::Down) => {
                let level = self.toggle();
                log::debug!("Caps lock now {:?}", level);
                true
            }
            _ => false,
        }
    }

    fn flipped(status: KeyStatus) -> KeyStatus {
        match status {
            KeyStatus::Down => KeyStatus::Up,
            KeyStatus::Up | KeyStatus::Unknown => KeyStatus::Down,
        }
    }
}

impl Default for CapsLock {
    fn default() -> Self {
        Self::new()
    }
}
