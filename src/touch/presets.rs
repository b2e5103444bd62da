//! Fixed interpreter shapes used by the mobile widgets.

use super::{GestureCallbacks, GestureConfig, GestureInterpreter};

pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

/// Swipe recognition only; tap and long-press handlers are discarded.
pub fn swipe_only(threshold: f32, callbacks: GestureCallbacks) -> GestureInterpreter {
    GestureInterpreter::new(
        GestureConfig::default().with_swipe(threshold),
        callbacks.swipe_handlers_only(),
    )
}

/// Long-press (plus optional tap) recognition with swipe disabled.
pub fn long_press_only(delay_ms: u64, callbacks: GestureCallbacks) -> GestureInterpreter {
    GestureInterpreter::new(
        GestureConfig::default()
            .without_swipe()
            .with_long_press_delay(delay_ms),
        callbacks.press_handlers_only(),
    )
}

/// Pressed-state tracking without any gesture recognition.
pub fn feedback_only(enabled: bool) -> GestureInterpreter {
    GestureInterpreter::new(
        GestureConfig::default().without_swipe().with_feedback(enabled),
        GestureCallbacks::new(),
    )
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;
    use crate::touch::{ContactPoint, SwipeDirection};

    fn counter() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
        let count = Rc::new(Cell::new(0));
        let handle = count.clone();
        (count, move || handle.set(handle.get() + 1))
    }

    #[test]
    fn swipe_only_ignores_press_handlers() {
        let (left, on_left) = counter();
        let (long, on_long) = counter();
        let mut interpreter = swipe_only(
            DEFAULT_SWIPE_THRESHOLD,
            GestureCallbacks::new()
                .on_swipe_left(on_left)
                .on_long_press(on_long),
        );

        let _ = interpreter.on_contact_start(ContactPoint::new(100.0, 0.0, 0));
        assert_eq!(interpreter.next_deadline(), None);
        let _ = interpreter.on_contact_end(ContactPoint::new(20.0, 0.0, 900));

        assert_eq!(left.get(), 1);
        assert_eq!(long.get(), 0);
        assert_eq!(interpreter.state().swipe_direction, SwipeDirection::Left);
    }

    #[test]
    fn long_press_only_never_swipes() {
        let (long, on_long) = counter();
        let (right, on_right) = counter();
        let mut interpreter = long_press_only(
            400,
            GestureCallbacks::new()
                .on_long_press(on_long)
                .on_swipe_right(on_right),
        );

        let _ = interpreter.on_contact_start(ContactPoint::new(0.0, 0.0, 0));
        assert_eq!(interpreter.next_deadline(), Some(400));
        let _ = interpreter.poll(400);
        let _ = interpreter.on_contact_end(ContactPoint::new(0.0, 0.0, 450));

        let _ = interpreter.on_contact_start(ContactPoint::new(0.0, 0.0, 1_000));
        let _ = interpreter.on_contact_end(ContactPoint::new(200.0, 0.0, 1_100));

        assert_eq!(long.get(), 1);
        assert_eq!(right.get(), 0);
    }

    #[test]
    fn feedback_only_tracks_pressed_state() {
        let mut interpreter = feedback_only(true);
        let _ = interpreter.on_contact_start(ContactPoint::new(0.0, 0.0, 0));
        assert_eq!(interpreter.touch_class(), "touch-active");
        let _ = interpreter.on_contact_end(ContactPoint::new(0.0, 0.0, 40));
        assert_eq!(interpreter.touch_class(), "");
    }

    #[test]
    fn disabled_feedback_only_is_inert() {
        let mut interpreter = feedback_only(false);
        let output = interpreter.on_contact_start(ContactPoint::new(0.0, 0.0, 0));

        assert!(output.is_empty());
        assert!(!interpreter.state().touched);
        assert_eq!(interpreter.start(), None);
    }
}
