use super::types::{ContactPoint, GestureEventKind, SwipeDirection};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClassifierParams {
    pub swipe_enabled: bool,
    pub swipe_threshold: f32,
    pub tap_max_duration_ms: u64,
    pub tap_max_movement: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Classification {
    pub swipe_direction: SwipeDirection,
    pub is_tap: bool,
    pub dx: f32,
    pub dy: f32,
    pub duration_ms: u64,
}

impl Classification {
    /// The single gesture this contact resolves to. A swipe wins over a tap.
    pub fn gesture(&self) -> Option<GestureEventKind> {
        if !self.swipe_direction.is_none() {
            Some(GestureEventKind::Swipe(self.swipe_direction))
        } else if self.is_tap {
            Some(GestureEventKind::Tap)
        } else {
            None
        }
    }
}

/// Classifies a finished contact. `None` when either point is missing.
pub fn classify(
    start: Option<ContactPoint>,
    end: Option<ContactPoint>,
    params: &ClassifierParams,
) -> Option<Classification> {
    let (start, end) = (start?, end?);

    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let duration_ms = end.t_ms.saturating_sub(start.t_ms);

    let swipe_direction = if params.swipe_enabled {
        swipe_direction(dx, dy, params.swipe_threshold)
    } else {
        SwipeDirection::None
    };

    let is_tap = duration_ms < params.tap_max_duration_ms
        && dx.abs() < params.tap_max_movement
        && dy.abs() < params.tap_max_movement;

    Some(Classification {
        swipe_direction,
        is_tap,
        dx,
        dy,
        duration_ms,
    })
}

/// Dominant-axis swipe direction for a displacement. Ties go horizontal.
pub fn swipe_direction(dx: f32, dy: f32, threshold: f32) -> SwipeDirection {
    if dx.abs() >= dy.abs() {
        if dx > threshold {
            SwipeDirection::Right
        } else if dx < -threshold {
            SwipeDirection::Left
        } else {
            SwipeDirection::None
        }
    } else if dy > threshold {
        SwipeDirection::Down
    } else if dy < -threshold {
        SwipeDirection::Up
    } else {
        SwipeDirection::None
    }
}

/// Whether `point` left the per-axis slop box around `origin`.
pub fn exceeds_slop(origin: ContactPoint, point: ContactPoint, slop: f32) -> bool {
    (point.x - origin.x).abs() > slop || (point.y - origin.y).abs() > slop
}

#[cfg(test)]
mod tests;
