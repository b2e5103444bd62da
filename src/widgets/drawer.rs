use crate::touch::{
    presets, timer::DelayTimer, ContactPoint, GestureCallbacks, GestureEventKind,
    GestureInterpreter, SwipeDirection,
};

use super::EXIT_ANIMATION_MS;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DrawerPosition {
    #[default]
    Bottom,
    Left,
    Right,
}

impl DrawerPosition {
    /// The swipe that pushes the drawer back towards its edge.
    pub const fn closing_swipe(self) -> SwipeDirection {
        match self {
            Self::Bottom => SwipeDirection::Down,
            Self::Left => SwipeDirection::Right,
            Self::Right => SwipeDirection::Left,
        }
    }
}

/// Edge drawer dismissed by swiping towards its edge.
///
/// After closing, the drawer stays rendered until the exit animation
/// deadline passes; the host drives that deadline through [`MobileDrawer::poll`].
pub struct MobileDrawer {
    position: DrawerPosition,
    open: bool,
    exit_timer: DelayTimer,
    interpreter: GestureInterpreter,
}

impl MobileDrawer {
    pub fn new(position: DrawerPosition) -> Self {
        Self {
            position,
            open: false,
            exit_timer: DelayTimer::new(),
            interpreter: presets::swipe_only(
                presets::DEFAULT_SWIPE_THRESHOLD,
                GestureCallbacks::new(),
            ),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the host should still draw the drawer (open or animating out).
    pub fn is_rendered(&self) -> bool {
        self.open || self.exit_timer.is_armed()
    }

    pub fn open(&mut self) {
        self.exit_timer.cancel();
        self.open = true;
    }

    /// Returns whether the drawer was open.
    pub fn close(&mut self, now_ms: u64) -> bool {
        if !self.open {
            return false;
        }
        self.open = false;
        self.interpreter.detach();
        self.exit_timer.arm(now_ms, EXIT_ANIMATION_MS, 0);
        log::debug!("drawer {:?} closing at t={}", self.position, now_ms);
        true
    }

    pub fn on_contact_start(&mut self, point: ContactPoint) {
        if self.open {
            let _ = self.interpreter.on_contact_start(point);
        }
    }

    pub fn on_contact_move(&mut self, point: ContactPoint) {
        if self.open {
            let _ = self.interpreter.on_contact_move(point);
        }
    }

    /// Returns `true` when this contact closed the drawer.
    pub fn on_contact_end(&mut self, point: ContactPoint) -> bool {
        if !self.open {
            return false;
        }
        let closing = GestureEventKind::Swipe(self.position.closing_swipe());
        let output = self.interpreter.on_contact_end(point);
        if output.gestures().any(|kind| kind == closing) {
            self.close(point.t_ms)
        } else {
            false
        }
    }

    pub fn on_contact_cancel(&mut self, now_ms: u64) {
        let _ = self.interpreter.on_contact_cancel(now_ms);
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.exit_timer.deadline_ms()
    }

    /// Ends the exit animation once its deadline passed.
    pub fn poll(&mut self, now_ms: u64) {
        if self.exit_timer.poll(now_ms).is_some() {
            log::debug!("drawer {:?} hidden at t={}", self.position, now_ms);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag(drawer: &mut MobileDrawer, from: (f32, f32), to: (f32, f32), t_ms: u64) -> bool {
        drawer.on_contact_start(ContactPoint::new(from.0, from.1, t_ms));
        drawer.on_contact_end(ContactPoint::new(to.0, to.1, t_ms + 120))
    }

    #[test]
    fn closing_swipe_points_at_the_edge() {
        assert_eq!(DrawerPosition::Bottom.closing_swipe(), SwipeDirection::Down);
        assert_eq!(DrawerPosition::Left.closing_swipe(), SwipeDirection::Right);
        assert_eq!(DrawerPosition::Right.closing_swipe(), SwipeDirection::Left);
        assert_eq!(DrawerPosition::default(), DrawerPosition::Bottom);
    }

    #[test]
    fn bottom_drawer_closes_on_swipe_down_and_animates_out() {
        let mut drawer = MobileDrawer::new(DrawerPosition::Bottom);
        drawer.open();

        assert!(!drag(&mut drawer, (100.0, 100.0), (100.0, 20.0), 0));
        assert!(drawer.is_open());

        assert!(drag(&mut drawer, (100.0, 100.0), (100.0, 200.0), 1_000));
        assert!(!drawer.is_open());
        assert!(drawer.is_rendered());
        assert_eq!(drawer.next_deadline(), Some(1_420));

        drawer.poll(1_419);
        assert!(drawer.is_rendered());
        drawer.poll(1_420);
        assert!(!drawer.is_rendered());
        assert_eq!(drawer.next_deadline(), None);
    }

    #[test]
    fn side_drawers_ignore_the_opposite_swipe() {
        let mut right = MobileDrawer::new(DrawerPosition::Right);
        right.open();
        assert!(!drag(&mut right, (100.0, 0.0), (200.0, 0.0), 0));
        assert!(drag(&mut right, (200.0, 0.0), (100.0, 0.0), 500));

        let mut left = MobileDrawer::new(DrawerPosition::Left);
        left.open();
        assert!(!drag(&mut left, (200.0, 0.0), (100.0, 0.0), 0));
        assert!(drag(&mut left, (100.0, 0.0), (200.0, 0.0), 500));
    }

    #[test]
    fn closed_drawer_ignores_contacts() {
        let mut drawer = MobileDrawer::new(DrawerPosition::Bottom);
        assert!(!drawer.is_rendered());
        assert!(!drag(&mut drawer, (0.0, 0.0), (0.0, 200.0), 0));
        assert!(!drawer.close(10));
        assert_eq!(drawer.next_deadline(), None);
    }

    #[test]
    fn reopening_during_exit_keeps_drawer_visible() {
        let mut drawer = MobileDrawer::new(DrawerPosition::Left);
        drawer.open();
        assert!(drawer.close(0));
        drawer.open();

        drawer.poll(1_000);
        assert!(drawer.is_open());
        assert!(drawer.is_rendered());
        assert_eq!(drawer.next_deadline(), None);
    }
}
