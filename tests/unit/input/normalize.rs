use super::*;

fn normalizer() -> InputNormalizer {
    InputNormalizer::new(InputThresholds {
        wheel: 100.0,
        min_swipe: 50.0,
    })
}

fn swipe(n: &mut InputNormalizer, from: (f64, f64), to: (f64, f64)) -> Option<Command> {
    n.touch_start(Point::new(from.0, from.1));
    n.touch_move(Point::new(to.0, to.1));
    n.touch_end(false)
}

#[test]
fn wheel_below_threshold_emits_nothing() {
    let mut n = normalizer();
    for _ in 0..99 {
        assert_eq!(n.wheel(1.0, false), None);
    }
    assert_eq!(n.accumulated(), 99.0);
}

#[test]
fn wheel_reaching_threshold_emits_once_and_resets() {
    let mut n = normalizer();
    assert_eq!(n.wheel(99.0, false), None);
    assert_eq!(n.wheel(1.0, false), Some(Command::Advance));
    assert_eq!(n.accumulated(), 0.0);
    assert_eq!(n.wheel(1.0, false), None);
}

#[test]
fn negative_wheel_retreats() {
    let mut n = normalizer();
    assert_eq!(n.wheel(-150.0, false), Some(Command::Retreat));
}

#[test]
fn locked_wheel_discards_and_resets() {
    let mut n = normalizer();
    n.wheel(90.0, false);
    assert_eq!(n.wheel(500.0, true), None);
    assert_eq!(n.accumulated(), 0.0);
    assert_eq!(n.wheel(20.0, false), None);
}

#[test]
fn opposing_deltas_cancel() {
    let mut n = normalizer();
    n.wheel(80.0, false);
    n.wheel(-80.0, false);
    assert_eq!(n.wheel(90.0, false), None);
}

#[test]
fn vertical_swipes_map_to_direction() {
    let mut n = normalizer();
    assert_eq!(swipe(&mut n, (100.0, 400.0), (100.0, 200.0)), Some(Command::Advance));
    assert_eq!(swipe(&mut n, (100.0, 200.0), (100.0, 400.0)), Some(Command::Retreat));
}

#[test]
fn horizontal_dominant_swipe_never_steps() {
    let mut n = normalizer();
    assert_eq!(swipe(&mut n, (0.0, 500.0), (600.0, 0.0)), None);
    assert_eq!(swipe(&mut n, (600.0, 0.0), (0.0, 500.0)), None);
}

#[test]
fn short_swipe_is_ignored() {
    let mut n = normalizer();
    assert_eq!(swipe(&mut n, (0.0, 100.0), (0.0, 60.0)), None);
}

#[test]
fn tap_without_move_is_ignored() {
    let mut n = normalizer();
    n.touch_start(Point::new(10.0, 10.0));
    assert_eq!(n.touch_end(false), None);
    assert_eq!(n.touch_end(false), None);
}

#[test]
fn locked_swipe_is_dropped_and_gesture_cleared() {
    let mut n = normalizer();
    n.touch_start(Point::new(0.0, 400.0));
    n.touch_move(Point::new(0.0, 100.0));
    assert_eq!(n.touch_end(true), None);
    assert_eq!(n.touch_end(false), None);
}

#[test]
fn jump_bypasses_thresholds() {
    let n = normalizer();
    assert_eq!(n.jump("amenities"), Command::Jump(Category::new("amenities")));
}
