use core::fmt;

use super::types::{GestureEventKind, SwipeDirection};

type Callback = Box<dyn FnMut()>;

/// Optional handlers invoked when a contact resolves into a gesture.
#[derive(Default)]
pub struct GestureCallbacks {
    swipe_left: Option<Callback>,
    swipe_right: Option<Callback>,
    swipe_up: Option<Callback>,
    swipe_down: Option<Callback>,
    tap: Option<Callback>,
    long_press: Option<Callback>,
}

impl GestureCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_swipe_left(mut self, callback: impl FnMut() + 'static) -> Self {
        self.swipe_left = Some(Box::new(callback));
        self
    }

    pub fn on_swipe_right(mut self, callback: impl FnMut() + 'static) -> Self {
        self.swipe_right = Some(Box::new(callback));
        self
    }

    pub fn on_swipe_up(mut self, callback: impl FnMut() + 'static) -> Self {
        self.swipe_up = Some(Box::new(callback));
        self
    }

    pub fn on_swipe_down(mut self, callback: impl FnMut() + 'static) -> Self {
        self.swipe_down = Some(Box::new(callback));
        self
    }

    pub fn on_tap(mut self, callback: impl FnMut() + 'static) -> Self {
        self.tap = Some(Box::new(callback));
        self
    }

    /// Without this handler the long-press timer is never armed.
    pub fn on_long_press(mut self, callback: impl FnMut() + 'static) -> Self {
        self.long_press = Some(Box::new(callback));
        self
    }

    /// Keeps only the four swipe handlers.
    pub fn swipe_handlers_only(mut self) -> Self {
        self.tap = None;
        self.long_press = None;
        self
    }

    /// Keeps only the tap and long-press handlers.
    pub fn press_handlers_only(mut self) -> Self {
        self.swipe_left = None;
        self.swipe_right = None;
        self.swipe_up = None;
        self.swipe_down = None;
        self
    }

    pub fn has_tap(&self) -> bool {
        self.tap.is_some()
    }

    pub fn has_long_press(&self) -> bool {
        self.long_press.is_some()
    }

    /// Invokes the handler registered for `kind`; returns whether one ran.
    pub(crate) fn dispatch(&mut self, kind: GestureEventKind) -> bool {
        let slot = match kind {
            GestureEventKind::Tap => &mut self.tap,
            GestureEventKind::LongPress => &mut self.long_press,
            GestureEventKind::Swipe(SwipeDirection::Left) => &mut self.swipe_left,
            GestureEventKind::Swipe(SwipeDirection::Right) => &mut self.swipe_right,
            GestureEventKind::Swipe(SwipeDirection::Up) => &mut self.swipe_up,
            GestureEventKind::Swipe(SwipeDirection::Down) => &mut self.swipe_down,
            _ => return false,
        };
        match slot {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for GestureCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureCallbacks")
            .field("swipe_left", &self.swipe_left.is_some())
            .field("swipe_right", &self.swipe_right.is_some())
            .field("swipe_up", &self.swipe_up.is_some())
            .field("swipe_down", &self.swipe_down.is_some())
            .field("tap", &self.tap.is_some())
            .field("long_press", &self.long_press.is_some())
            .finish()
    }
}
