use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use keyboard::{Key, KeyboardError};

/// The process-wide keyboard is shared by every test in a binary, so the
/// whole lifecycle is checked in one test.
#[test]
fn test_global_keyboard_lifecycle() {
    assert_eq!(keyboard::keyboard().err(), Some(KeyboardError::Uninitialized));
    assert_eq!(keyboard::serve(), Err(KeyboardError::Uninitialized));
    assert_eq!(keyboard::set_handler(|_| {}), Err(KeyboardError::Uninitialized));

    // Dropped with a warning, not queued for later
    keyboard::add_scancode(0x1E);

    assert_eq!(keyboard::init(), Ok(()));
    assert_eq!(keyboard::init(), Err(KeyboardError::AlreadyInitialized));
    assert_eq!(keyboard::keyboard().unwrap().count(), 0);

    let letters = Arc::new(AtomicUsize::new(0));
    let counter = letters.clone();
    keyboard::set_handler(move |event| {
        if event.key == Key::A {
            counter.fetch_add(1, Ordering::SeqCst);
        }
    })
    .unwrap();

    keyboard::add_scancode(0x1E);
    keyboard::add_scancode(0x1E);
    assert_eq!(keyboard::serve(), Ok(2));
    assert_eq!(letters.load(Ordering::SeqCst), 2);
    assert_eq!(keyboard::serve(), Ok(0));
}

#[test]
fn test_error_display() {
    assert_eq!(
        KeyboardError::AlreadyInitialized.to_string(),
        "keyboard already initialized"
    );
    assert_eq!(KeyboardError::Uninitialized.to_string(), "keyboard not initialized");
}
