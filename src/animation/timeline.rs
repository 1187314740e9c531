use crate::foundation::error::{ScrubError, ScrubResult};

/// Settings shared by all hover timelines of a section.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TimelineOptions {
    /// Time to run from progress 0 to 1, in seconds.
    pub duration_secs: f64,
}

impl Default for TimelineOptions {
    fn default() -> Self {
        Self { duration_secs: 0.5 }
    }
}

impl TimelineOptions {
    /// Reject non-positive or non-finite durations.
    pub fn validate(&self) -> ScrubResult<()> {
        if !(self.duration_secs.is_finite() && self.duration_secs > 0.0) {
            return Err(ScrubError::validation(
                "timeline duration_secs must be finite and > 0",
            ));
        }
        Ok(())
    }
}

/// Playback direction of a [`HoverTimeline`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Progress grows toward 1.
    Forward,
    /// Progress shrinks toward 0.
    Reverse,
}

/// Event emitted while a timeline advances.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TimelineEvent {
    /// Progress moved to the contained value.
    Update(f64),
    /// Forward playback reached 1.
    Complete,
    /// Reverse playback reached 0.
    ReverseComplete,
}

/// Pausable, reversible linear progress timeline.
///
/// Starts paused at 0. `play` and `reverse` only change direction and resume; progress is
/// moved by [`HoverTimeline::tick`].
#[derive(Clone, Debug)]
pub struct HoverTimeline {
    duration_secs: f64,
    progress: f64,
    direction: Direction,
    paused: bool,
}

impl HoverTimeline {
    /// Create a paused timeline at progress 0.
    pub fn new(opts: TimelineOptions) -> Self {
        Self {
            duration_secs: opts.duration_secs,
            progress: 0.0,
            direction: Direction::Forward,
            paused: true,
        }
    }

    /// Resume toward progress 1 from wherever the timeline is.
    pub fn play(&mut self) {
        self.direction = Direction::Forward;
        self.paused = self.progress >= 1.0;
    }

    /// Resume toward progress 0 from wherever the timeline is.
    pub fn reverse(&mut self) {
        self.direction = Direction::Reverse;
        self.paused = self.progress <= 0.0;
    }

    /// Stop advancing without changing progress or direction.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Current progress in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Current playback direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Return `true` while the timeline is advancing.
    pub fn is_active(&self) -> bool {
        !self.paused
    }

    /// Advance by `dt_secs` and append the resulting events to `out`.
    pub fn tick(&mut self, dt_secs: f64, out: &mut Vec<TimelineEvent>) {
        if self.paused || dt_secs <= 0.0 {
            return;
        }
        let step = dt_secs / self.duration_secs;
        match self.direction {
            Direction::Forward => {
                self.progress = (self.progress + step).min(1.0);
                out.push(TimelineEvent::Update(self.progress));
                if self.progress >= 1.0 {
                    self.paused = true;
                    out.push(TimelineEvent::Complete);
                }
            }
            Direction::Reverse => {
                self.progress = (self.progress - step).max(0.0);
                out.push(TimelineEvent::Update(self.progress));
                if self.progress <= 0.0 {
                    self.paused = true;
                    out.push(TimelineEvent::ReverseComplete);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
