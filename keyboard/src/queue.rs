//! Bounded queue of decoded scan codes
//!
//! The producer side (`enqueue`) never waits on the consumer for more than
//! one O(1) push/pop critical section. A full queue drops the new entry.

use core::sync::atomic::{AtomicUsize, Ordering};
use spin::Mutex;

use super::event::{Decoded, KeyEvent};
use super::ring::RingBuffer;
use super::scancodes::{self, KeyStatus};

/// Default queue depth
pub const QUEUE_CAPACITY: usize = 4096;

pub struct EventQueue {
    ring: Mutex<RingBuffer<Decoded>>,
    /// Scan codes discarded because the queue was full
    dropped: AtomicUsize,
}

impl EventQueue {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ring: Mutex::new(RingBuffer::with_capacity(capacity)),
            dropped: AtomicUsize::new(0),
        }
    }

    /// Decode `scancode` and append it.
    /// Returns false if the queue was full and the entry was dropped.
    pub fn enqueue(&self, scancode: u8) -> bool {
        let decoded = Decoded::from(scancodes::translate(scancode));
        let pushed = self.ring.lock().push(decoded).is_ok();

        if !pushed {
            self.dropped.fetch_add(1, Ordering::Relaxed);
            log::warn!("Keyboard event queue full; dropping scancode 0x{:02x}", scancode);
        }
        pushed
    }

    /// Remove the oldest entry, stamping it with `caps_lock`
    pub fn dequeue(&self, caps_lock: KeyStatus) -> Option<KeyEvent> {
        self.ring
            .lock()
            .pop()
            .map(|decoded| decoded.with_caps_lock(caps_lock))
    }

    /// Peek the oldest entry
    pub fn front(&self, caps_lock: KeyStatus) -> Option<KeyEvent> {
        self.ring
            .lock()
            .front()
            .map(|decoded| decoded.with_caps_lock(caps_lock))
    }

    /// Peek the most recently accepted entry
    pub fn end(&self, caps_lock: KeyStatus) -> Option<KeyEvent> {
        self.ring
            .lock()
            .back()
            .map(|decoded| decoded.with_caps_lock(caps_lock))
    }

    pub fn len(&self) -> usize {
        self.ring.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ring.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.ring.lock().capacity()
    }

    pub fn dropped(&self) -> usize {
        self.dropped.load(Ordering::Relaxed)
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::with_capacity(QUEUE_CAPACITY)
    }
}
