use super::*;

#[test]
fn frame_span_rejects_inverted_bounds() {
    assert!(FrameSpan::new(10.0, 5.0).is_err());
    assert!(FrameSpan::new(0.0, f64::NAN).is_err());
    let span = FrameSpan::new(0.0, 0.0).unwrap();
    assert_eq!(span.len_frames(), 0.0);
}

#[test]
fn frame_span_contains_both_bounds() {
    let span = FrameSpan::new(0.0, 335.0).unwrap();
    assert!(span.contains(FramePos(0.0)));
    assert!(span.contains(FramePos(335.0)));
    assert!(!span.contains(FramePos(335.5)));
    assert!(!span.contains(FramePos(-0.1)));
}

#[test]
fn frame_span_clamps_positions() {
    let span = FrameSpan::new(10.0, 20.0).unwrap();
    assert_eq!(span.clamp(FramePos(5.0)), FramePos(10.0));
    assert_eq!(span.clamp(FramePos(15.5)), FramePos(15.5));
    assert_eq!(span.clamp(FramePos(99.0)), FramePos(20.0));
}

#[test]
fn cursor_defaults_to_arrow() {
    assert_eq!(Cursor::default(), Cursor::Default);
    assert_eq!(serde_json::to_string(&Cursor::Pointer).unwrap(), "\"pointer\"");
}
