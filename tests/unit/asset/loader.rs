use super::*;
use crate::animation::instance::AnimationMeta;
use crate::foundation::core::{Canvas, FrameSpan};

const LOTTIE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/techstack.json");
const SVG: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/techstack.svg");

fn instance() -> AnimationInstance {
    let meta = AnimationMeta {
        frames: FrameSpan::new(0.0, 10.0).unwrap(),
        fps: 30.0,
        size: Canvas {
            width: 8,
            height: 8,
        },
        name: None,
    };
    AnimationInstance::new(meta, Box::new(LayerSurface::from_ids(["x"])))
}

#[test]
fn file_loader_yields_once() {
    let mut loader = FileLoader::new(LOTTIE);
    let inst = loader.poll().unwrap().unwrap();
    assert_eq!(inst.meta().frames.end, 335.0);
    assert!(inst.surface().find_element("54").is_some());
    assert!(loader.poll().is_none());
}

#[test]
fn file_loader_uses_svg_snapshot_when_given() {
    let mut loader = FileLoader::new(LOTTIE).with_svg_snapshot(SVG);
    let inst = loader.poll().unwrap().unwrap();
    assert!(inst.surface().find_element("54").unwrap().bounds.is_some());
}

#[test]
fn file_loader_reports_missing_asset() {
    let mut loader = FileLoader::new("missing/techstack.json");
    assert!(loader.poll().unwrap().is_err());
    assert!(loader.poll().is_none());
}

#[test]
fn ready_loader_honours_delay() {
    let mut loader = ReadyLoader::delayed(instance(), 2);
    assert!(loader.poll().is_none());
    assert!(loader.poll().is_none());
    assert!(loader.poll().unwrap().is_ok());
    assert!(loader.poll().is_none());
}
