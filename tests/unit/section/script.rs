use super::*;

#[test]
fn events_use_externally_tagged_json() {
    let script: Script = serde_json::from_str(
        r#"[ {"wheel": 400}, {"wait": 250}, {"enter": "54"}, {"move": [10, 20]}, {"touch": -30}, {"leave": "54"} ]"#,
    )
    .unwrap();
    assert_eq!(script.events.len(), 6);
    assert_eq!(script.events[0], ScriptEvent::Wheel(400.0));
    assert_eq!(script.events[3], ScriptEvent::Move([10.0, 20.0]));
}

#[test]
fn walkthrough_overshoots_pin_end_then_hovers_each_region() {
    let regions = vec!["54".to_owned(), "482".to_owned()];
    let script = Script::walkthrough(3000.0, &regions);
    let wheel: f64 = script
        .events
        .iter()
        .filter_map(|e| match e {
            ScriptEvent::Wheel(d) => Some(*d),
            _ => None,
        })
        .sum();
    assert!(wheel > 3000.0);
    let enters = script
        .events
        .iter()
        .filter(|e| matches!(e, ScriptEvent::Enter(_)))
        .count();
    assert_eq!(enters, 2);
}

#[test]
fn unknown_event_is_a_serde_error() {
    let err = serde_json::from_str::<Script>(r#"[ {"teleport": 1} ]"#);
    assert!(err.is_err());
}
