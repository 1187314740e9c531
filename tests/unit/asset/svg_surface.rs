use super::*;

const SNAPSHOT: &str = include_str!("../../data/techstack.svg");

#[test]
fn indexes_only_lottie_clip_groups() {
    let surface = SvgSurface::from_svg_str(SNAPSHOT).unwrap();
    assert!(surface.find_element("54").is_some());
    assert!(surface.find_element("482").is_some());
    assert!(surface.find_element("13").is_none());
    assert!(surface.find_element("decor").is_none());
}

#[test]
fn hit_test_prefers_innermost_group() {
    let surface = SvgSurface::from_svg_str(SNAPSHOT).unwrap();
    assert_eq!(surface.hit_test(Point::new(200.0, 200.0)).as_deref(), Some("54"));
    assert_eq!(surface.hit_test(Point::new(1300.0, 700.0)).as_deref(), Some("482"));
    assert_ne!(surface.hit_test(Point::new(800.0, 900.0)).as_deref(), Some("54"));
}

#[test]
fn element_bounds_come_from_geometry() {
    let surface = SvgSurface::from_svg_str(SNAPSHOT).unwrap();
    let b = surface.find_element("54").unwrap().bounds.unwrap();
    assert!(b.contains(Point::new(300.0, 250.0)));
    assert!(!b.contains(Point::new(1300.0, 700.0)));
}

#[test]
fn invalid_markup_is_an_asset_error() {
    assert!(matches!(
        SvgSurface::from_svg_str("<svg"),
        Err(ScrubError::Asset(_))
    ));
}
