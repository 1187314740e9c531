use crate::foundation::error::{ScrubError, ScrubResult};

pub use kurbo::{Point, Rect, Vec2};

/// Fractional playback position inside an animation timeline.
///
/// Scrubbing interpolates between key frames, so positions are not restricted to integers.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub struct FramePos(pub f64);

impl FramePos {
    /// Raw frame number.
    pub fn get(self) -> f64 {
        self.0
    }
}

/// Inclusive frame span `[start, end]` as declared by an animation asset (`ip`..`op`).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameSpan {
    /// First frame.
    pub start: f64,
    /// Last frame.
    pub end: f64,
}

impl FrameSpan {
    /// Create a validated span with finite bounds and `start <= end`.
    pub fn new(start: f64, end: f64) -> ScrubResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(ScrubError::validation("FrameSpan bounds must be finite"));
        }
        if start > end {
            return Err(ScrubError::validation("FrameSpan start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Distance between the bounds, in frames.
    pub fn len_frames(self) -> f64 {
        self.end - self.start
    }

    /// Return `true` when `f` lies inside the span (bounds included).
    pub fn contains(self, f: FramePos) -> bool {
        self.start <= f.0 && f.0 <= self.end
    }

    /// Clamp a frame position into this span.
    pub fn clamp(self, f: FramePos) -> FramePos {
        FramePos(f.0.clamp(self.start, self.end))
    }
}

/// Pixel size of the animation's output surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Pointer affordance shown over an element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cursor {
    /// Platform default arrow.
    #[default]
    Default,
    /// Clickable/hoverable hand.
    Pointer,
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
