//! Keyboard context: event queue, caps-lock level and the registered handler

use alloc::sync::Arc;
use futures_util::task::AtomicWaker;
use spin::Mutex;

use super::event::KeyEvent;
use super::modifiers::CapsLock;
use super::queue::{EventQueue, QUEUE_CAPACITY};
use super::stream::KeyEventStream;

/// Callback invoked once per served event
pub type KeyEventHandler = Arc<dyn Fn(KeyEvent) + Send + Sync>;

/// One keyboard's worth of state.
///
/// `enqueue` is the producer side and may be called from another thread (or
/// an interrupt handler) while the consumer runs `serve` or polls `stream`.
pub struct Keyboard {
    queue: EventQueue,
    caps_lock: CapsLock,
    handler: Mutex<Option<KeyEventHandler>>,
    pub(crate) waker: AtomicWaker,
}

impl Keyboard {
    pub fn new() -> Self {
        Self::with_capacity(QUEUE_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            queue: EventQueue::with_capacity(capacity),
            caps_lock: CapsLock::new(),
            handler: Mutex::new(None),
            waker: AtomicWaker::new(),
        }
    }

    /// Producer entry point, one raw byte at a time.
    ///
    /// Must not block. When the queue is full the code is dropped; the
    /// return value says whether it was accepted and may be ignored.
    pub fn enqueue(&self, scancode: u8) -> bool {
        let accepted = self.queue.enqueue(scancode);
        if accepted {
            self.waker.wake();
        }
        accepted
    }

    /// Remove the oldest event, or `KeyEvent::NONE` if there is none
    pub fn dequeue(&self) -> KeyEvent {
        self.try_dequeue().unwrap_or(KeyEvent::NONE)
    }

    pub fn try_dequeue(&self) -> Option<KeyEvent> {
        self.queue.dequeue(self.caps_lock.get())
    }

    /// Peek the oldest event, or `KeyEvent::NONE`
    pub fn front(&self) -> KeyEvent {
        self.queue
            .front(self.caps_lock.get())
            .unwrap_or(KeyEvent::NONE)
    }

    /// Peek the most recently queued event, or `KeyEvent::NONE`
    pub fn end(&self) -> KeyEvent {
        self.queue
            .end(self.caps_lock.get())
            .unwrap_or(KeyEvent::NONE)
    }

    pub fn count(&self) -> usize {
        self.queue.len()
    }

    pub fn empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.empty()
    }

    pub fn capacity(&self) -> usize {
        self.queue.capacity()
    }

    /// Number of scan codes dropped on a full queue so far
    pub fn dropped(&self) -> usize {
        self.queue.dropped()
    }

    pub fn caps_lock(&self) -> &CapsLock {
        &self.caps_lock
    }

    /// Replace the handler. Any previous handler is discarded.
    pub fn set_handler<F>(&self, handler: F)
    where
        F: Fn(KeyEvent) + Send + Sync + 'static,
    {
        *self.handler.lock() = Some(Arc::new(handler));
        log::debug!("Keyboard handler installed");
    }

    pub fn clear_handler(&self) {
        if self.handler.lock().take().is_some() {
            log::debug!("Keyboard handler cleared");
        }
    }

    pub fn has_handler(&self) -> bool {
        self.handler.lock().is_some()
    }

    /// Drain the queue into the handler.
    ///
    /// Emptiness is re-checked after each event, so anything the handler
    /// enqueues is delivered by this same call. Without a handler events are
    /// discarded. Returns the number of events popped.
    pub fn serve(&self) -> usize {
        let mut served = 0;

        while let Some(event) = self.try_dequeue() {
            served += 1;

            // Clone out of the lock so the handler can replace itself
            let handler = self.handler.lock().clone();
            match handler {
                Some(handler) => {
                    log::trace!("Dispatching {:?}", event);
                    handler(event);
                }
                None => log::trace!("No keyboard handler; discarding {:?}", event),
            }
        }

        served
    }

    /// Async view of the same queue
    pub fn stream(&self) -> KeyEventStream<'_> {
        KeyEventStream::new(self)
    }
}

impl Default for Keyboard {
    fn default() -> Self {
        Self::new()
    }
}
