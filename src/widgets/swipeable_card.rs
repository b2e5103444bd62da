use crate::touch::{
    presets, ContactPoint, GestureCallbacks, GestureEventKind, GestureInterpreter, GestureOutput,
    SwipeDirection,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardAction {
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionStyle {
    pub label: String,
    pub color: String,
}

impl ActionStyle {
    pub fn new(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
        }
    }
}

/// Presentation derived from the last recognized swipe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardFeedback {
    pub rotation_deg: f32,
    pub left_opacity: f32,
    pub right_opacity: f32,
    /// Transitions are suspended while the card is held.
    pub animate: bool,
}

/// Card that reports left/right swipes as actions.
pub struct SwipeableCard {
    interpreter: GestureInterpreter,
    left: ActionStyle,
    right: ActionStyle,
}

impl Default for SwipeableCard {
    fn default() -> Self {
        Self::new()
    }
}

impl SwipeableCard {
    pub fn new() -> Self {
        Self {
            interpreter: presets::swipe_only(
                presets::DEFAULT_SWIPE_THRESHOLD,
                GestureCallbacks::new(),
            ),
            left: ActionStyle::new("Dismiss", "#da1e28"),
            right: ActionStyle::new("Accept", "#24a148"),
        }
    }

    pub fn with_left_action(mut self, style: ActionStyle) -> Self {
        self.left = style;
        self
    }

    pub fn with_right_action(mut self, style: ActionStyle) -> Self {
        self.right = style;
        self
    }

    pub fn action_style(&self, action: CardAction) -> &ActionStyle {
        match action {
            CardAction::Left => &self.left,
            CardAction::Right => &self.right,
        }
    }

    pub fn on_contact_start(&mut self, point: ContactPoint) {
        let _ = self.interpreter.on_contact_start(point);
    }

    pub fn on_contact_move(&mut self, point: ContactPoint) {
        let _ = self.interpreter.on_contact_move(point);
    }

    pub fn on_contact_end(&mut self, point: ContactPoint) -> Option<CardAction> {
        let output = self.interpreter.on_contact_end(point);
        action_of(&output)
    }

    pub fn on_contact_cancel(&mut self, now_ms: u64) {
        let _ = self.interpreter.on_contact_cancel(now_ms);
    }

    pub fn feedback(&self) -> CardFeedback {
        let state = self.interpreter.state();
        let (rotation_deg, left_opacity, right_opacity) = match state.swipe_direction {
            SwipeDirection::Left => (-5.0, 1.0, 0.0),
            SwipeDirection::Right => (5.0, 0.0, 1.0),
            _ => (0.0, 0.0, 0.0),
        };
        CardFeedback {
            rotation_deg,
            left_opacity,
            right_opacity,
            animate: !state.touched,
        }
    }
}

fn action_of(output: &GestureOutput) -> Option<CardAction> {
    output.gestures().find_map(|kind| match kind {
        GestureEventKind::Swipe(SwipeDirection::Left) => Some(CardAction::Left),
        GestureEventKind::Swipe(SwipeDirection::Right) => Some(CardAction::Right),
        _ => None,
    })
}
