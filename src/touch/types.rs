/// One recorded position of the active contact.
///
/// Coordinates are logical pixels; `t_ms` is a monotonic timestamp supplied by
/// the host when it adapts its platform event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContactPoint {
    pub x: f32,
    pub y: f32,
    pub t_ms: u64,
}

impl ContactPoint {
    pub const fn new(x: f32, y: f32, t_ms: u64) -> Self {
        Self { x, y, t_ms }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    #[default]
    None,
    Left,
    Right,
    Up,
    Down,
}

impl SwipeDirection {
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureEventKind {
    Start,
    Move,
    End,
    Tap,
    LongPress,
    Swipe(SwipeDirection),
    Cancel,
}

impl GestureEventKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Move => "move",
            Self::End => "end",
            Self::Tap => "tap",
            Self::LongPress => "long_press",
            Self::Swipe(SwipeDirection::Left) => "swipe_left",
            Self::Swipe(SwipeDirection::Right) => "swipe_right",
            Self::Swipe(SwipeDirection::Up) => "swipe_up",
            Self::Swipe(SwipeDirection::Down) => "swipe_down",
            Self::Swipe(SwipeDirection::None) => "swipe_none",
            Self::Cancel => "cancel",
        }
    }

    /// Whether this kind resolves a contact into a user-facing gesture.
    pub const fn is_gesture(self) -> bool {
        matches!(self, Self::Tap | Self::LongPress | Self::Swipe(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureEvent {
    pub kind: GestureEventKind,
    pub t_ms: u64,
    pub x: f32,
    pub y: f32,
    pub start_x: f32,
    pub start_y: f32,
    pub duration_ms: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    #[default]
    Idle,
    Pressed,
    Dragging,
    LongPressed,
}

/// Render-facing snapshot of a gesture session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TouchState {
    pub touched: bool,
    pub long_pressed: bool,
    pub swipe_direction: SwipeDirection,
    pub touch_duration_ms: u64,
}
