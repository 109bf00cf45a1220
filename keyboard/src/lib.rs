//! Keyboard input queue
//!
//! Raw scan codes arrive one byte at a time from an interrupt-level
//! producer, are decoded through a static scan code set 1 table and parked
//! in a bounded queue. A consumer drains the queue either through a single
//! registered handler (`serve`) or as an async stream. Every event is
//! stamped with the caps-lock level at the moment it is read.
//!
//! [`Keyboard`] is a self-contained context. The free functions in this
//! module wrap one process-wide instance for code that has nowhere to keep
//! a handle, such as an interrupt handler.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod dispatch;
pub mod error;
pub mod event;
pub mod modifiers;
pub mod queue;
pub mod ring;
pub mod scancodes;
pub mod stream;

use conquer_once::spin::OnceCell;

pub use dispatch::{KeyEventHandler, Keyboard};
pub use error::KeyboardError;
pub use event::KeyEvent;
pub use modifiers::CapsLock;
pub use queue::QUEUE_CAPACITY;
pub use scancodes::{translate, Key, KeyStatus};
pub use stream::KeyEventStream;

static KEYBOARD: OnceCell<Keyboard> = OnceCell::uninit();

/// Create the process-wide keyboard.
///
/// Call once, before the keyboard interrupt is unmasked.
pub fn init() -> Result<(), KeyboardError> {
    KEYBOARD
        .try_init_once(Keyboard::new)
        .map_err(|_| KeyboardError::AlreadyInitialized)?;
    log::info!("Keyboard queue initialized ({} events)", QUEUE_CAPACITY);
    Ok(())
}

pub fn keyboard() -> Result<&'static Keyboard, KeyboardError> {
    KEYBOARD.try_get().map_err(|_| KeyboardError::Uninitialized)
}

/// Called by the keyboard interrupt handler
///
/// Must not block. Codes arriving before `init` are discarded.
pub fn add_scancode(scancode: u8) {
    match keyboard() {
        Ok(keyboard) => {
            keyboard.enqueue(scancode);
        }
        Err(_) => log::warn!("Keyboard queue uninitialized; dropping scancode 0x{:02x}", scancode),
    }
}

/// Drain the process-wide queue into its handler
pub fn serve() -> Result<usize, KeyboardError> {
    Ok(keyboard()?.serve())
}

/// Replace the handler of the process-wide keyboard
pub fn set_handler<F>(handler: F) -> Result<(), KeyboardError>
where
    F: Fn(KeyEvent) + Send + Sync + 'static,
{
    keyboard()?.set_handler(handler);
    Ok(())
}
