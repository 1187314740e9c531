use super::*;

#[test]
fn stopped_loop_admits_nothing() {
    let mut raf = RafLoop::new();
    assert!(raf.tick(0.0).is_none());
    assert_eq!(raf.ticks(), 0);
}

#[test]
fn deltas_are_measured_between_ticks() {
    let mut raf = RafLoop::new();
    raf.start();
    let a = raf.tick(1000.0).unwrap();
    assert_eq!(a.delta_ms, 0.0);
    assert_eq!(a.index, 0);
    let b = raf.tick(1016.0).unwrap();
    assert_eq!(b.delta_ms, 16.0);
    assert_eq!(b.index, 1);
    // clocks going backwards never produce negative deltas
    assert_eq!(raf.tick(1010.0).unwrap().delta_ms, 0.0);
}

#[test]
fn stop_halts_tick_count() {
    let mut raf = RafLoop::new();
    raf.start();
    raf.tick(0.0);
    raf.tick(16.0);
    raf.stop();
    assert!(!raf.is_running());
    assert!(raf.tick(32.0).is_none());
    assert!(raf.tick(48.0).is_none());
    assert_eq!(raf.ticks(), 2);
}
