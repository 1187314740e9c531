use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::core::Point;
use crate::foundation::error::{ScrubError, ScrubResult};
use crate::section::view::{FrameReport, ScrollSection};

/// One scripted host input.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptEvent {
    /// Wheel delta in pixels.
    Wheel(f64),
    /// Touch-drag delta in pixels.
    Touch(f64),
    /// Let refresh ticks run for this many milliseconds.
    Wait(f64),
    /// Pointer entered a region.
    Enter(String),
    /// Pointer left a region.
    Leave(String),
    /// Pointer moved to `[x, y]` in surface coordinates.
    Move([f64; 2]),
}

/// Ordered list of host inputs replayed against a [`ScrollSection`].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Script {
    /// Events in replay order.
    pub events: Vec<ScriptEvent>,
}

impl Script {
    /// Read a JSON array of events.
    pub fn from_path(path: impl AsRef<Path>) -> ScrubResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ScrubError::validation(format!("open script '{}': {e}", path.display()))
        })?;
        serde_json::from_reader(BufReader::new(f))
            .map_err(|e| ScrubError::serde(format!("parse script: {e}")))
    }

    /// Scroll through the whole pin window, then hover and leave each region in turn.
    pub fn walkthrough(pin_end: f64, regions: &[String]) -> Self {
        let mut events = vec![ScriptEvent::Wait(100.0)];
        let steps = 10;
        for _ in 0..steps {
            events.push(ScriptEvent::Wheel(pin_end / f64::from(steps)));
            events.push(ScriptEvent::Wait(250.0));
        }
        events.push(ScriptEvent::Wheel(pin_end * 0.25));
        events.push(ScriptEvent::Wait(1500.0));
        for id in regions {
            events.push(ScriptEvent::Enter(id.clone()));
            events.push(ScriptEvent::Wait(600.0));
            events.push(ScriptEvent::Leave(id.clone()));
            events.push(ScriptEvent::Wait(600.0));
        }
        Self { events }
    }

    /// Replay against `section` at `hz` refresh ticks per second, starting at time 0.
    ///
    /// Input events apply at the current time; `Wait` runs ticks. Returns one report per tick.
    pub fn replay(&self, section: &mut ScrollSection, hz: f64) -> ScrubResult<Vec<FrameReport>> {
        if !(hz.is_finite() && hz > 0.0) {
            return Err(ScrubError::validation("replay rate must be > 0"));
        }
        let step_ms = 1000.0 / hz;
        let mut now_ms = 0.0;
        let mut reports = vec![section.frame(now_ms)?];
        for event in &self.events {
            match event {
                ScriptEvent::Wheel(dy) => {
                    section.wheel(*dy);
                }
                ScriptEvent::Touch(dy) => {
                    section.touch(*dy);
                }
                ScriptEvent::Enter(id) => {
                    section.pointer_enter(id);
                }
                ScriptEvent::Leave(id) => {
                    section.pointer_leave(id);
                }
                ScriptEvent::Move([x, y]) => section.pointer_move(Point::new(*x, *y)),
                ScriptEvent::Wait(ms) => {
                    let ticks = (ms.max(0.0) / step_ms).ceil() as u64;
                    for _ in 0..ticks {
                        now_ms += step_ms;
                        reports.push(section.frame(now_ms)?);
                    }
                }
            }
        }
        Ok(reports)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/section/script.rs"]
mod tests;
