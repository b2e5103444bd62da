use super::*;

const PARAMS: ClassifierParams = ClassifierParams {
    swipe_enabled: true,
    swipe_threshold: 50.0,
    tap_max_duration_ms: 300,
    tap_max_movement: 10.0,
};

fn at(x: f32, y: f32, t_ms: u64) -> Option<ContactPoint> {
    Some(ContactPoint::new(x, y, t_ms))
}

#[test]
fn missing_points_skip_classification() {
    assert_eq!(classify(None, at(0.0, 0.0, 10), &PARAMS), None);
    assert_eq!(classify(at(0.0, 0.0, 0), None, &PARAMS), None);
    assert_eq!(classify(None, None, &PARAMS), None);
}

#[test]
fn horizontal_swipes_past_threshold() {
    let right = classify(at(100.0, 0.0, 0), at(170.0, 20.0, 120), &PARAMS).unwrap();
    assert_eq!(right.swipe_direction, SwipeDirection::Right);
    assert_eq!(
        right.gesture(),
        Some(GestureEventKind::Swipe(SwipeDirection::Right))
    );

    let left = classify(at(100.0, 0.0, 0), at(40.0, 0.0, 100), &PARAMS).unwrap();
    assert_eq!(left.swipe_direction, SwipeDirection::Left);
    assert_eq!(left.dx, -60.0);
    assert_eq!(left.duration_ms, 100);
    assert!(!left.is_tap);
}

#[test]
fn vertical_swipes_past_threshold() {
    let down = classify(at(0.0, 0.0, 0), at(5.0, 51.0, 80), &PARAMS).unwrap();
    assert_eq!(down.swipe_direction, SwipeDirection::Down);

    let up = classify(at(0.0, 200.0, 0), at(-30.0, 100.0, 80), &PARAMS).unwrap();
    assert_eq!(up.swipe_direction, SwipeDirection::Up);
}

#[test]
fn displacement_at_threshold_is_not_a_swipe() {
    for (dx, dy) in [(50.0, 0.0), (-50.0, 0.0), (0.0, 50.0), (0.0, -50.0), (49.0, 49.0)] {
        let result = classify(at(0.0, 0.0, 0), at(dx, dy, 500), &PARAMS).unwrap();
        assert_eq!(result.swipe_direction, SwipeDirection::None, "dx={dx} dy={dy}");
        assert_eq!(result.gesture(), None);
    }
}

#[test]
fn diagonal_tie_resolves_horizontally() {
    assert_eq!(swipe_direction(60.0, 60.0, 50.0), SwipeDirection::Right);
    assert_eq!(swipe_direction(-60.0, 60.0, 50.0), SwipeDirection::Left);
    assert_eq!(swipe_direction(-75.0, -75.0, 50.0), SwipeDirection::Left);
}

#[test]
fn vertical_dominance_ignores_large_horizontal_component() {
    // Horizontal travel is past the threshold, but vertical dominates and is short.
    assert_eq!(swipe_direction(55.0, 56.0, 60.0), SwipeDirection::None);
}

#[test]
fn short_still_contact_is_a_tap() {
    let tap = classify(at(100.0, 0.0, 0), at(105.0, 0.0, 120), &PARAMS).unwrap();
    assert!(tap.is_tap);
    assert_eq!(tap.swipe_direction, SwipeDirection::None);
    assert_eq!(tap.gesture(), Some(GestureEventKind::Tap));
}

#[test]
fn tap_bounds_are_exclusive() {
    let slow = classify(at(0.0, 0.0, 0), at(0.0, 0.0, 300), &PARAMS).unwrap();
    assert!(!slow.is_tap);

    let moved = classify(at(0.0, 0.0, 0), at(0.0, 10.0, 50), &PARAMS).unwrap();
    assert!(!moved.is_tap);
    assert_eq!(moved.gesture(), None);
}

#[test]
fn disabled_swipe_still_reports_taps() {
    let params = ClassifierParams {
        swipe_enabled: false,
        ..PARAMS
    };
    let far = classify(at(0.0, 0.0, 0), at(200.0, 0.0, 100), &params).unwrap();
    assert_eq!(far.swipe_direction, SwipeDirection::None);
    assert_eq!(far.gesture(), None);

    let tap = classify(at(0.0, 0.0, 0), at(1.0, 1.0, 100), &params).unwrap();
    assert_eq!(tap.gesture(), Some(GestureEventKind::Tap));
}

#[test]
fn swipe_wins_when_tap_movement_exceeds_threshold() {
    let params = ClassifierParams {
        swipe_threshold: 5.0,
        tap_max_movement: 20.0,
        ..PARAMS
    };
    let result = classify(at(0.0, 0.0, 0), at(8.0, 0.0, 50), &params).unwrap();
    assert!(result.is_tap);
    assert_eq!(
        result.gesture(),
        Some(GestureEventKind::Swipe(SwipeDirection::Right))
    );
}

#[test]
fn end_before_start_counts_as_zero_duration() {
    let result = classify(at(0.0, 0.0, 500), at(0.0, 0.0, 400), &PARAMS).unwrap();
    assert_eq!(result.duration_ms, 0);
    assert!(result.is_tap);
}

#[test]
fn slop_is_checked_per_axis() {
    let origin = ContactPoint::new(0.0, 0.0, 0);
    assert!(!exceeds_slop(origin, ContactPoint::new(10.0, -10.0, 5), 10.0));
    assert!(exceeds_slop(origin, ContactPoint::new(10.5, 0.0, 5), 10.0));
    assert!(exceeds_slop(origin, ContactPoint::new(0.0, -15.0, 5), 10.0));
}
