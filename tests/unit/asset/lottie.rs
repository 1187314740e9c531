use super::*;

#[test]
fn parses_header_and_ignores_shape_data() {
    let doc = LottieDoc::from_json_str(include_str!("../../data/techstack.json")).unwrap();
    assert_eq!(doc.fr, 30.0);
    assert_eq!(doc.layers.len(), 3);
    assert_eq!(doc.layers[0].ln.as_deref(), Some("54"));
    assert_eq!(doc.layers[1].cl.as_deref(), Some("logo"));

    let meta = doc.meta().unwrap();
    assert_eq!(meta.frames, FrameSpan::new(0.0, 335.0).unwrap());
    assert_eq!(meta.size.width, 1920);
    assert_eq!(meta.name.as_deref(), Some("techstack"));
}

#[test]
fn validate_rejects_bad_headers() {
    let inverted = LottieDoc::from_json_str(r#"{"fr":30,"ip":10,"op":5,"w":10,"h":10}"#).unwrap();
    assert!(inverted.validate().is_err());
    let no_rate = LottieDoc::from_json_str(r#"{"fr":0,"ip":0,"op":5,"w":10,"h":10}"#).unwrap();
    assert!(no_rate.meta().is_err());
    let empty = LottieDoc::from_json_str(r#"{"fr":30,"ip":0,"op":5,"w":0,"h":10}"#).unwrap();
    assert!(matches!(empty.validate(), Err(ScrubError::Asset(_))));
}

#[test]
fn malformed_json_is_an_asset_error() {
    let err = LottieDoc::from_json_str("{ not json").unwrap_err();
    assert!(err.to_string().contains("asset error:"));
    let missing = LottieDoc::from_path("does/not/exist.json").unwrap_err();
    assert!(missing.to_string().contains("open animation JSON"));
}
