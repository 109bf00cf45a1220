use super::scancodes::{Key, KeyStatus};

/// A decoded key transition as seen by the consumer.
///
/// `caps_lock` is the tracker level when the event was read out of the
/// queue, not when the scan code arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub status: KeyStatus,
    pub caps_lock: KeyStatus,
}

impl KeyEvent {
    /// Returned by reads on an empty queue
    pub const NONE: KeyEvent = KeyEvent {
        key: Key::None,
        status: KeyStatus::Unknown,
        caps_lock: KeyStatus::Unknown,
    };

    pub const fn new(key: Key, status: KeyStatus, caps_lock: KeyStatus) -> Self {
        Self {
            key,
            status,
            caps_lock,
        }
    }

    /// True for the empty-queue sentinel and for undecodable scan codes
    pub fn is_none(&self) -> bool {
        self.key.is_none()
    }

    pub fn is_caps_lock_on(&self) -> bool {
        self.caps_lock.is_down()
    }

    /// Letter keys are upper case when caps lock was on at read time
    pub fn is_upper_case(&self) -> bool {
        self.key.is_alphabetic() && self.is_caps_lock_on()
    }
}

/// What the queue stores per scan code. The caps-lock level is filled in
/// when the entry is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Decoded {
    pub key: Key,
    pub status: KeyStatus,
}

impl Decoded {
    pub fn with_caps_lock(self, caps_lock: KeyStatus) -> KeyEvent {
        KeyEvent::new(self.key, self.status, caps_lock)
    }
}

impl From<(Key, KeyStatus)> for Decoded {
    fn from((key, status): (Key, KeyStatus)) -> Self {
        Decoded { key, status }
    }
}
