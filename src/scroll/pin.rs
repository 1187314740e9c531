use crate::foundation::error::{ScrubError, ScrubResult};
use crate::foundation::math::inverse_lerp_clamped;

/// Pin behaviour knobs.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PinOptions {
    /// Engage the pin this many scroll deltas before the trigger point.
    pub anticipate_pin: f64,
    /// Grow the document by the pinned distance so content after the section is not covered.
    pub pin_spacing: bool,
}

impl Default for PinOptions {
    fn default() -> Self {
        Self {
            anticipate_pin: 1.0,
            pin_spacing: true,
        }
    }
}

/// Where the pinned container currently sits.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PinState {
    /// Above the pin window; the container scrolls with the page.
    Before,
    /// Fixed in the viewport; `offset` is how far the page scrolled under it.
    Pinned {
        /// Scroll distance consumed inside the window.
        offset: f64,
    },
    /// Past the window; the container scrolls on, displaced by the full distance.
    After,
}

/// Progress notification delivered to registered callbacks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinUpdate {
    /// Progress through the pinned distance, in `[0, 1]`.
    pub progress: f64,
    /// Pin state after this update.
    pub state: PinState,
    /// Scroll offset that produced this update.
    pub scroll: f64,
}

/// Handle for removing a registered callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type PinCallback = Box<dyn FnMut(&PinUpdate)>;

/// Pins a container for a bounded scroll distance and reports progress through it.
///
/// The window starts when the trigger's top meets the viewport top and lasts `distance`
/// scroll units. Callbacks fire only when progress or pin state actually change.
pub struct ScrollPin {
    start: f64,
    end: f64,
    opts: PinOptions,
    last: Option<PinUpdate>,
    callbacks: Vec<(ListenerId, PinCallback)>,
    next_id: u64,
    killed: bool,
}

impl std::fmt::Debug for ScrollPin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollPin")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("opts", &self.opts)
            .field("last", &self.last)
            .field("callbacks", &self.callbacks.len())
            .field("killed", &self.killed)
            .finish()
    }
}

impl ScrollPin {
    /// Pin window starting at document offset `trigger_top` and lasting `distance`.
    pub fn new(trigger_top: f64, distance: f64, opts: PinOptions) -> ScrubResult<Self> {
        if !trigger_top.is_finite() || trigger_top < 0.0 {
            return Err(ScrubError::validation("pin trigger_top must be finite and >= 0"));
        }
        if !(distance.is_finite() && distance > 0.0) {
            return Err(ScrubError::validation("pin distance must be finite and > 0"));
        }
        if !(opts.anticipate_pin.is_finite() && opts.anticipate_pin >= 0.0) {
            return Err(ScrubError::validation("anticipate_pin must be finite and >= 0"));
        }
        Ok(Self {
            start: trigger_top,
            end: trigger_top + distance,
            opts,
            last: None,
            callbacks: Vec::new(),
            next_id: 0,
            killed: false,
        })
    }

    /// Scroll offset where the window opens.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Scroll offset where the window closes.
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Extra document height added by pin spacing.
    pub fn spacing(&self) -> f64 {
        if self.opts.pin_spacing {
            self.end - self.start
        } else {
            0.0
        }
    }

    /// Progress reported by the last update (0 before any update).
    pub fn progress(&self) -> f64 {
        self.last.map_or(0.0, |u| u.progress)
    }

    /// Pin state reported by the last update.
    pub fn state(&self) -> PinState {
        self.last.map_or(PinState::Before, |u| u.state)
    }

    /// Return `false` once [`ScrollPin::kill`] released the registration.
    pub fn is_active(&self) -> bool {
        !self.killed
    }

    /// Register a progress callback. Ignored (but still assigned an id) after kill.
    pub fn on_update(&mut self, callback: impl FnMut(&PinUpdate) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        if !self.killed {
            self.callbacks.push((id, Box::new(callback)));
        }
        id
    }

    /// Remove a callback. Returns `true` when it was registered.
    pub fn off_update(&mut self, id: ListenerId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(cid, _)| *cid != id);
        self.callbacks.len() != before
    }

    fn state_for(&self, scroll: f64, delta: f64) -> PinState {
        if scroll >= self.end {
            return PinState::After;
        }
        if scroll >= self.start {
            return PinState::Pinned {
                offset: scroll - self.start,
            };
        }
        let anticipated = delta > 0.0 && scroll + delta * self.opts.anticipate_pin >= self.start;
        if anticipated {
            PinState::Pinned { offset: 0.0 }
        } else {
            PinState::Before
        }
    }

    /// Recompute progress for a scroll offset reached by moving `delta`.
    ///
    /// Fires the callbacks and returns the update when something changed.
    pub fn update(&mut self, scroll: f64, delta: f64) -> Option<PinUpdate> {
        if self.killed {
            return None;
        }
        let update = PinUpdate {
            progress: inverse_lerp_clamped(self.start, self.end, scroll),
            state: self.state_for(scroll, delta),
            scroll,
        };
        let changed = self
            .last
            .is_none_or(|last| last.progress != update.progress || last.state != update.state);
        if !changed {
            return None;
        }
        self.last = Some(update);
        for (_, cb) in &mut self.callbacks {
            cb(&update);
        }
        Some(update)
    }

    /// Release the registration: drop every callback and ignore further updates.
    pub fn kill(&mut self) {
        if self.killed {
            return;
        }
        self.killed = true;
        self.callbacks.clear();
        tracing::debug!(start = self.start, end = self.end, "scroll pin released");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/pin.rs"]
mod tests;
