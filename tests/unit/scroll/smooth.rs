use super::*;

fn driver(limit: f64) -> SmoothScroll {
    SmoothScroll::new(SmoothScrollOptions::default(), limit).unwrap()
}

#[test]
fn wheel_moves_target_and_eases_toward_it() {
    let mut s = driver(5000.0);
    assert!(s.raf(0.0).is_none());
    assert!(s.on_wheel(Vec2::new(0.0, 1000.0)));
    assert_eq!(s.target(), 1000.0);
    assert_eq!(s.scroll(), 0.0);

    let f = s.raf(100.0).unwrap();
    // 100ms of 1.2s through an out-expo curve
    let expected = 1000.0 * Ease::OutExpo.apply(0.1 / 1.2);
    assert!((f.scroll - expected).abs() < 1e-9);
    assert!(f.velocity > 0.0);
    assert!(s.is_scrolling());

    let last = s.raf(1300.0).unwrap();
    assert_eq!(last.scroll, 1000.0);
    assert!(!s.is_scrolling());
    assert!(s.raf(1316.0).is_none());
}

#[test]
fn target_is_clamped_to_limit() {
    let mut s = driver(300.0);
    s.on_wheel(Vec2::new(0.0, 1000.0));
    assert_eq!(s.target(), 300.0);
    s.on_wheel(Vec2::new(0.0, -5000.0));
    assert_eq!(s.target(), 0.0);
}

#[test]
fn horizontal_wheel_is_ignored_when_vertical() {
    let mut s = driver(1000.0);
    assert!(!s.on_wheel(Vec2::new(120.0, 0.0)));
    assert_eq!(s.target(), 0.0);
}

#[test]
fn touch_is_native_when_unsmoothed() {
    let mut s = driver(1000.0);
    s.raf(0.0);
    assert!(s.on_touch(Vec2::new(0.0, 40.0)));
    // no multiplier, no easing
    assert_eq!(s.scroll(), 40.0);
    let f = s.raf(16.0).unwrap();
    assert_eq!(f.scroll, 40.0);
    assert_eq!(f.delta, 40.0);
}

#[test]
fn smoothed_touch_uses_touch_multiplier() {
    let opts = SmoothScrollOptions {
        smooth_touch: true,
        ..SmoothScrollOptions::default()
    };
    let mut s = SmoothScroll::new(opts, 1000.0).unwrap();
    s.on_touch(Vec2::new(0.0, 40.0));
    assert_eq!(s.target(), 80.0);
    assert_eq!(s.scroll(), 0.0);
}

#[test]
fn retargeting_mid_flight_starts_from_current_offset() {
    let mut s = driver(5000.0);
    s.raf(0.0);
    s.on_wheel(Vec2::new(0.0, 1000.0));
    let mid = s.raf(200.0).unwrap().scroll;
    s.on_wheel(Vec2::new(0.0, 500.0));
    assert_eq!(s.target(), 1500.0);
    let next = s.raf(216.0).unwrap().scroll;
    assert!(next > mid && next < 1500.0);
}

#[test]
fn destroy_stops_everything() {
    let mut s = driver(5000.0);
    s.raf(0.0);
    s.on_wheel(Vec2::new(0.0, 1000.0));
    s.destroy();
    assert!(s.is_destroyed());
    assert!(!s.is_scrolling());
    assert!(s.raf(100.0).is_none());
    assert!(!s.on_wheel(Vec2::new(0.0, 10.0)));
    assert!(!s.on_touch(Vec2::new(0.0, 10.0)));
}

#[test]
fn shrinking_limit_pulls_target_back() {
    let mut s = driver(1000.0);
    s.scroll_to(900.0, true);
    s.set_limit(500.0);
    assert_eq!(s.target(), 500.0);
    assert_eq!(s.limit(), 500.0);
}

#[test]
fn rejects_bad_options() {
    let opts = SmoothScrollOptions {
        duration: -1.0,
        ..SmoothScrollOptions::default()
    };
    assert!(SmoothScroll::new(opts, 10.0).is_err());
}

#[test]
fn infinite_wraps_reported_offset() {
    let opts = SmoothScrollOptions {
        infinite: true,
        smooth_wheel: false,
        ..SmoothScrollOptions::default()
    };
    let mut s = SmoothScroll::new(opts, 1000.0).unwrap();
    s.raf(0.0);
    assert!(s.on_wheel(Vec2::new(0.0, 1250.0)));
    assert_eq!(s.target(), 1250.0);
    assert_eq!(s.scroll(), 250.0);
    assert_eq!(s.raf(16.0).unwrap().scroll, 250.0);

    s.on_wheel(Vec2::new(0.0, -1500.0));
    assert_eq!(s.scroll(), 750.0);
}
