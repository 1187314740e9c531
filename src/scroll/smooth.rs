use crate::animation::ease::Ease;
use crate::foundation::core::Vec2;
use crate::foundation::error::{ScrubError, ScrubResult};
use crate::foundation::math::clamp01;

/// Axis whose deltas move the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Vertical page scrolling.
    #[default]
    Vertical,
    /// Horizontal page scrolling.
    Horizontal,
}

/// Smooth-scroll tuning.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SmoothScrollOptions {
    /// Time for an eased scroll to settle on its target, in seconds.
    pub duration: f64,
    /// Easing applied over `duration`.
    pub easing: Ease,
    /// Scroll axis.
    pub orientation: Orientation,
    /// Smooth mouse-wheel input.
    pub smooth_wheel: bool,
    /// Smooth touch input. When off, touch scrolls natively.
    pub smooth_touch: bool,
    /// Wheel delta multiplier.
    pub wheel_multiplier: f64,
    /// Touch delta multiplier, only used when `smooth_touch` is on.
    pub touch_multiplier: f64,
    /// Leave the target unclamped and wrap the reported offset into `[0, limit)`.
    pub infinite: bool,
}

impl Default for SmoothScrollOptions {
    fn default() -> Self {
        Self {
            duration: 1.2,
            easing: Ease::OutExpo,
            orientation: Orientation::Vertical,
            smooth_wheel: true,
            smooth_touch: false,
            wheel_multiplier: 1.0,
            touch_multiplier: 2.0,
            infinite: false,
        }
    }
}

impl SmoothScrollOptions {
    /// Reject negative or non-finite tuning values.
    pub fn validate(&self) -> ScrubResult<()> {
        if !(self.duration.is_finite() && self.duration >= 0.0) {
            return Err(ScrubError::validation(
                "smooth scroll duration must be finite and >= 0",
            ));
        }
        if !self.wheel_multiplier.is_finite() || !self.touch_multiplier.is_finite() {
            return Err(ScrubError::validation(
                "smooth scroll multipliers must be finite",
            ));
        }
        Ok(())
    }
}

/// Scroll position change reported by [`SmoothScroll::raf`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollFrame {
    /// Animated scroll offset after this tick.
    pub scroll: f64,
    /// Change since the last reported frame.
    pub delta: f64,
    /// Change per second over this tick (0 for instant jumps on the first tick).
    pub velocity: f64,
}

#[derive(Clone, Copy, Debug)]
struct Tween {
    from: f64,
    to: f64,
    elapsed: f64,
}

/// Eased replacement for native page scrolling.
///
/// Input only moves the target; the animated offset catches up on each [`SmoothScroll::raf`].
#[derive(Clone, Debug)]
pub struct SmoothScroll {
    opts: SmoothScrollOptions,
    limit: f64,
    animated: f64,
    target: f64,
    reported: f64,
    tween: Option<Tween>,
    last_ms: Option<f64>,
    destroyed: bool,
}

impl SmoothScroll {
    /// Take over scrolling of a page that can scroll up to `limit`.
    pub fn new(opts: SmoothScrollOptions, limit: f64) -> ScrubResult<Self> {
        opts.validate()?;
        Ok(Self {
            opts,
            limit: limit.max(0.0),
            animated: 0.0,
            target: 0.0,
            reported: 0.0,
            tween: None,
            last_ms: None,
            destroyed: false,
        })
    }

    /// Active tuning.
    pub fn options(&self) -> &SmoothScrollOptions {
        &self.opts
    }

    /// Animated scroll offset.
    pub fn scroll(&self) -> f64 {
        self.wrap(self.animated)
    }

    /// Offset the animation is heading to.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Largest reachable offset.
    pub fn limit(&self) -> f64 {
        self.limit
    }

    /// Update the reachable range, clamping the current target into it.
    pub fn set_limit(&mut self, limit: f64) {
        self.limit = limit.max(0.0);
        if !self.opts.infinite && self.target > self.limit {
            self.scroll_to(self.limit, false);
        }
    }

    /// Return `true` while an eased scroll is in flight.
    pub fn is_scrolling(&self) -> bool {
        self.tween.is_some()
    }

    /// Return `true` after [`SmoothScroll::destroy`].
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    fn wrap(&self, v: f64) -> f64 {
        if self.opts.infinite && self.limit > 0.0 {
            v.rem_euclid(self.limit)
        } else {
            v
        }
    }

    fn axis(&self, delta: Vec2) -> f64 {
        match self.opts.orientation {
            Orientation::Vertical => delta.y,
            Orientation::Horizontal => delta.x,
        }
    }

    /// Feed a wheel delta. Returns `false` when the input was ignored.
    pub fn on_wheel(&mut self, delta: Vec2) -> bool {
        let d = self.axis(delta) * self.opts.wheel_multiplier;
        if self.destroyed || d == 0.0 {
            return false;
        }
        self.scroll_to(self.target + d, !self.opts.smooth_wheel)
    }

    /// Feed a touch-drag delta. Unsmoothed touch moves the page 1:1 right away.
    pub fn on_touch(&mut self, delta: Vec2) -> bool {
        if self.destroyed {
            return false;
        }
        if self.opts.smooth_touch {
            let d = self.axis(delta) * self.opts.touch_multiplier;
            return d != 0.0 && self.scroll_to(self.target + d, false);
        }
        let d = self.axis(delta);
        d != 0.0 && self.scroll_to(self.animated + d, true)
    }

    /// Scroll to `target`, either eased over the configured duration or at once.
    pub fn scroll_to(&mut self, target: f64, immediate: bool) -> bool {
        if self.destroyed || !target.is_finite() {
            return false;
        }
        let target = if self.opts.infinite {
            target
        } else {
            target.clamp(0.0, self.limit)
        };
        self.target = target;
        if immediate || self.opts.duration == 0.0 {
            self.animated = target;
            self.tween = None;
        } else {
            self.tween = Some(Tween {
                from: self.animated,
                to: target,
                elapsed: 0.0,
            });
        }
        true
    }

    /// Advance the eased scroll to host time `now_ms`.
    ///
    /// Returns the new offset when it differs from the last reported one.
    pub fn raf(&mut self, now_ms: f64) -> Option<ScrollFrame> {
        if self.destroyed {
            return None;
        }
        let dt = self
            .last_ms
            .map_or(0.0, |last| (now_ms - last).max(0.0) / 1000.0);
        self.last_ms = Some(now_ms);

        if let Some(mut tween) = self.tween.take() {
            tween.elapsed += dt;
            let linear = if self.opts.duration > 0.0 {
                clamp01(tween.elapsed / self.opts.duration)
            } else {
                1.0
            };
            if linear >= 1.0 {
                self.animated = tween.to;
            } else {
                let eased = self.opts.easing.apply(linear);
                self.animated = tween.from + (tween.to - tween.from) * eased;
                self.tween = Some(tween);
            }
        }

        let scroll = self.wrap(self.animated);
        if scroll == self.reported {
            return None;
        }
        let delta = scroll - self.reported;
        self.reported = scroll;
        Some(ScrollFrame {
            scroll,
            delta,
            velocity: if dt > 0.0 { delta / dt } else { 0.0 },
        })
    }

    /// Stop the eased animation and hand scrolling back to the host. Later input is ignored.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        self.tween = None;
        tracing::debug!(scroll = self.animated, "smooth scroll destroyed");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/smooth.rs"]
mod tests;
