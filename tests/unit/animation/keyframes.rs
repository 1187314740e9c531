use super::*;

#[test]
fn scroll_mapping_is_exact() {
    let kf = KeyFrameSpec::new("54", 0.0, 130.0, 200.0, 249.0).unwrap();
    assert_eq!(kf.scroll_frame(0.0), FramePos(0.0));
    assert_eq!(kf.scroll_frame(0.5), FramePos(65.0));
    assert_eq!(kf.scroll_frame(1.0), FramePos(130.0));
    for i in 0..=100 {
        let p = f64::from(i) / 100.0;
        assert_eq!(kf.scroll_frame(p).get(), 0.0 + p * (130.0 - 0.0));
    }
}

#[test]
fn hover_mapping_and_rest_frame() {
    let kf = KeyFrameSpec::new("13", 0.0, 130.0, 131.0, 166.0).unwrap();
    assert_eq!(kf.hover_frame(0.0), FramePos(131.0));
    assert_eq!(kf.hover_frame(1.0), FramePos(166.0));
    assert_eq!(kf.hover_frame(0.5), FramePos(148.5));
    assert_eq!(kf.rest_frame(), FramePos(130.0));
}

#[test]
fn rejects_inverted_and_overlapping_ranges() {
    assert!(KeyFrameSpec::new("a", 130.0, 0.0, 200.0, 249.0).is_err());
    assert!(KeyFrameSpec::new("a", 0.0, 130.0, 249.0, 200.0).is_err());
    assert!(KeyFrameSpec::new("a", 0.0, 130.0, 100.0, 160.0).is_err());
    assert!(KeyFrameSpec::new("a", 0.0, 130.0, 130.0, 160.0).is_err());
    assert!(KeyFrameSpec::new("", 0.0, 130.0, 131.0, 160.0).is_err());
}

#[test]
fn deserializes_page_field_names() {
    let kf: KeyFrameSpec = serde_json::from_str(
        r#"{ "clipPath": "482", "start": 0, "scrollEnd": 130, "hoverStart": 290, "hoverEnd": 334 }"#,
    )
    .unwrap();
    assert_eq!(kf.region(), "482");
    assert_eq!(kf.hover_span().end, 334.0);

    let bad = serde_json::from_str::<KeyFrameSpec>(
        r#"{ "clipPath": "482", "start": 0, "scrollEnd": 130, "hoverStart": 10, "hoverEnd": 20 }"#,
    );
    assert!(bad.is_err());
}

#[test]
fn default_keyframes_cover_three_regions() {
    let kfs = default_keyframes();
    let ids: Vec<&str> = kfs.iter().map(|k| k.region()).collect();
    assert_eq!(ids, ["54", "13", "482"]);
    assert!(kfs.iter().all(|k| k.scroll_span().end == 130.0));
}
