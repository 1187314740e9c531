use super::*;
use std::cell::RefCell;
use std::rc::Rc;

fn pin() -> ScrollPin {
    ScrollPin::new(1000.0, 2000.0, PinOptions::default()).unwrap()
}

#[test]
fn progress_is_clamped_and_monotonic() {
    let mut p = pin();
    let mut last = -1.0;
    for scroll in (0..=40).map(|i| f64::from(i) * 100.0) {
        p.update(scroll, 100.0);
        let progress = p.progress();
        assert!((0.0..=1.0).contains(&progress));
        assert!(progress >= last);
        last = progress;
    }
    assert_eq!(p.progress(), 1.0);
}

#[test]
fn window_boundaries() {
    let mut p = pin();
    assert_eq!(p.update(0.0, 0.0).unwrap().state, PinState::Before);
    let mid = p.update(2000.0, 10.0).unwrap();
    assert_eq!(mid.progress, 0.5);
    assert_eq!(mid.state, PinState::Pinned { offset: 1000.0 });
    let end = p.update(3000.0, 10.0).unwrap();
    assert_eq!(end.progress, 1.0);
    assert_eq!(end.state, PinState::After);
}

#[test]
fn anticipates_pin_one_delta_early() {
    let mut p = pin();
    let early = p.update(960.0, 40.0).unwrap();
    assert_eq!(early.state, PinState::Pinned { offset: 0.0 });
    assert_eq!(early.progress, 0.0);

    let mut q = pin();
    assert_eq!(q.update(950.0, 40.0).unwrap().state, PinState::Before);
    // scrolling up never anticipates
    let mut r = pin();
    assert_eq!(r.update(990.0, -40.0).unwrap().state, PinState::Before);
}

#[test]
fn callbacks_fire_only_on_change() {
    let mut p = pin();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    p.on_update(move |u| sink.borrow_mut().push(u.progress));

    p.update(2000.0, 5.0);
    assert!(p.update(2000.0, 5.0).is_none());
    p.update(4000.0, 5.0);
    p.update(5000.0, 5.0);
    assert_eq!(*seen.borrow(), vec![0.5, 1.0]);
}

#[test]
fn off_update_removes_callback() {
    let mut p = pin();
    let hits = Rc::new(RefCell::new(0));
    let h = Rc::clone(&hits);
    let id = p.on_update(move |_| *h.borrow_mut() += 1);
    p.update(1500.0, 1.0);
    assert!(p.off_update(id));
    assert!(!p.off_update(id));
    p.update(1600.0, 1.0);
    assert_eq!(*hits.borrow(), 1);
}

#[test]
fn kill_releases_registration() {
    let mut p = pin();
    let hits = Rc::new(RefCell::new(0));
    let h = Rc::clone(&hits);
    p.on_update(move |_| *h.borrow_mut() += 1);
    p.update(1500.0, 1.0);
    p.kill();
    assert!(!p.is_active());
    assert!(p.update(2500.0, 1.0).is_none());
    let h2 = Rc::clone(&hits);
    p.on_update(move |_| *h2.borrow_mut() += 100);
    assert!(p.update(2600.0, 1.0).is_none());
    assert_eq!(*hits.borrow(), 1);
    // the killed pin dropped its closures
    assert_eq!(Rc::strong_count(&hits), 1);
}

#[test]
fn spacing_follows_option() {
    assert_eq!(pin().spacing(), 2000.0);
    let no_spacing = ScrollPin::new(
        0.0,
        10.0,
        PinOptions {
            pin_spacing: false,
            ..PinOptions::default()
        },
    )
    .unwrap();
    assert_eq!(no_spacing.spacing(), 0.0);
}

#[test]
fn rejects_empty_window() {
    assert!(ScrollPin::new(0.0, 0.0, PinOptions::default()).is_err());
    assert!(ScrollPin::new(-1.0, 10.0, PinOptions::default()).is_err());
}
