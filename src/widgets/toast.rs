use crate::touch::{
    presets, timer::DelayTimer, ContactPoint, GestureCallbacks, GestureEventKind,
    GestureInterpreter, SwipeDirection,
};

use super::EXIT_ANIMATION_MS;

pub const DEFAULT_TOAST_DURATION_MS: u64 = 5_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    Error,
    #[default]
    Info,
    Success,
    Warning,
}

impl ToastVariant {
    pub const fn accent_color(self) -> &'static str {
        match self {
            Self::Error => "#da1e28",
            Self::Info => "#0043ce",
            Self::Success => "#24a148",
            Self::Warning => "#f1c21b",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastEvent {
    Closed,
}

/// Transient notification dismissed by timeout or a horizontal swipe.
///
/// Every `show` yields exactly one [`ToastEvent::Closed`], either directly
/// from the closing call (reduced motion) or from the `poll` that ends the
/// exit animation.
pub struct MobileToast {
    variant: ToastVariant,
    duration_ms: u64,
    reduced_motion: bool,
    visible: bool,
    exiting: bool,
    dismiss_timer: DelayTimer,
    exit_timer: DelayTimer,
    interpreter: GestureInterpreter,
}

impl Default for MobileToast {
    fn default() -> Self {
        Self::new(ToastVariant::default())
    }
}

impl MobileToast {
    pub fn new(variant: ToastVariant) -> Self {
        Self {
            variant,
            duration_ms: DEFAULT_TOAST_DURATION_MS,
            reduced_motion: false,
            visible: false,
            exiting: false,
            dismiss_timer: DelayTimer::new(),
            exit_timer: DelayTimer::new(),
            interpreter: presets::swipe_only(
                presets::DEFAULT_SWIPE_THRESHOLD,
                GestureCallbacks::new(),
            ),
        }
    }

    /// `0` disables auto-dismiss.
    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_reduced_motion(mut self, reduced_motion: bool) -> Self {
        self.reduced_motion = reduced_motion;
        self
    }

    pub fn variant(&self) -> ToastVariant {
        self.variant
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_exiting(&self) -> bool {
        self.exiting
    }

    pub fn is_rendered(&self) -> bool {
        self.visible || self.exiting
    }

    pub fn show(&mut self, now_ms: u64) {
        self.exit_timer.cancel();
        self.exiting = false;
        self.visible = true;
        self.dismiss_timer.cancel();
        if self.duration_ms > 0 {
            self.dismiss_timer.arm(now_ms, self.duration_ms, 0);
        }
    }

    /// Starts closing; yields `Closed` at once when motion is reduced.
    pub fn close(&mut self, now_ms: u64) -> Option<ToastEvent> {
        if !self.visible || self.exiting {
            return None;
        }
        self.dismiss_timer.cancel();
        self.interpreter.detach();
        self.visible = false;

        if self.reduced_motion {
            log::debug!("toast {:?} closed at t={}", self.variant, now_ms);
            return Some(ToastEvent::Closed);
        }
        self.exiting = true;
        self.exit_timer.arm(now_ms, EXIT_ANIMATION_MS, 0);
        None
    }

    pub fn on_contact_start(&mut self, point: ContactPoint) {
        if self.visible {
            let _ = self.interpreter.on_contact_start(point);
        }
    }

    pub fn on_contact_move(&mut self, point: ContactPoint) {
        if self.visible {
            let _ = self.interpreter.on_contact_move(point);
        }
    }

    pub fn on_contact_end(&mut self, point: ContactPoint) -> Option<ToastEvent> {
        if !self.visible {
            return None;
        }
        let output = self.interpreter.on_contact_end(point);
        let dismissed = output.gestures().any(|kind| {
            matches!(
                kind,
                GestureEventKind::Swipe(SwipeDirection::Left | SwipeDirection::Right)
            )
        });
        if dismissed {
            self.close(point.t_ms)
        } else {
            None
        }
    }

    pub fn on_contact_cancel(&mut self, now_ms: u64) {
        let _ = self.interpreter.on_contact_cancel(now_ms);
    }

    pub fn next_deadline(&self) -> Option<u64> {
        match (self.dismiss_timer.deadline_ms(), self.exit_timer.deadline_ms()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn poll(&mut self, now_ms: u64) -> Option<ToastEvent> {
        if self.exit_timer.poll(now_ms).is_some() {
            self.exiting = false;
            log::debug!("toast {:?} closed at t={}", self.variant, now_ms);
            return Some(ToastEvent::Closed);
        }
        if self.dismiss_timer.poll(now_ms).is_some() {
            log::debug!("toast {:?} timed out at t={}", self.variant, now_ms);
            return self.close(now_ms);
        }
        None
    }
}
