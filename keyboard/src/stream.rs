use core::{
    pin::Pin,
    task::{Context, Poll},
};
use futures_util::stream::Stream;

use super::dispatch::Keyboard;
use super::event::KeyEvent;

/// Endless stream of key events from one keyboard.
///
/// Competes with `Keyboard::serve` for the same queue; each event goes to
/// whichever side pops it first.
pub struct KeyEventStream<'a> {
    keyboard: &'a Keyboard,
}

impl<'a> KeyEventStream<'a> {
    pub(crate) fn new(keyboard: &'a Keyboard) -> Self {
        KeyEventStream { keyboard }
    }
}

impl Stream for KeyEventStream<'_> {
    type Item = KeyEvent;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context) -> Poll<Option<KeyEvent>> {
        let keyboard = self.keyboard;

        // fast path
        if let Some(event) = keyboard.try_dequeue() {
            return Poll::Ready(Some(event));
        }

        keyboard.waker.register(cx.waker());
        match keyboard.try_dequeue() {
            Some(event) => {
                keyboard.waker.take();
                Poll::Ready(Some(event))
            }
            None => Poll::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scancodes::{Key, KeyStatus};
    use futures_util::{FutureExt, StreamExt};

    #[test]
    fn test_pending_when_empty() {
        let keyboard = Keyboard::with_capacity(4);
        let mut stream = keyboard.stream();
        assert_eq!(stream.next().now_or_never(), None);
    }

    #[test]
    fn test_yields_queued_events() {
        let keyboard = Keyboard::with_capacity(4);
        keyboard.enqueue(0x2E);
        keyboard.caps_lock().set(KeyStatus::Down);

        let mut stream = keyboard.stream();
        let event = stream.next().now_or_never().flatten().unwrap();
        assert_eq!(event, KeyEvent::new(Key::C, KeyStatus::Down, KeyStatus::Down));
        assert!(keyboard.empty());
    }
}
