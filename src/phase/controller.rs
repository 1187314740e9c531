use crate::animation::instance::{AnimationInstance, WriteSource};
use crate::animation::keyframes::KeyFrameSpec;
use crate::animation::timeline::{HoverTimeline, TimelineEvent, TimelineOptions};
use crate::foundation::core::FramePos;
use crate::foundation::error::{ScrubError, ScrubResult};
use crate::phase::region::InteractiveRegion;

/// Which input currently drives the animation frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Asset requested, nothing scrubbable yet.
    Loading,
    /// Scroll progress scrubs the first region's scroll range.
    Scroll,
    /// Scroll finished once; resolved regions react to hover. Terminal.
    Hover,
}

/// Owns the animation instance and switches it from scroll scrubbing to hover playback.
///
/// Scroll and hover writes are not mutually exclusive: both seek the same instance and the
/// last write wins.
#[derive(Debug)]
pub struct PhaseController {
    regions: Vec<InteractiveRegion>,
    timeline_opts: TimelineOptions,
    instance: Option<AnimationInstance>,
    phase: Phase,
    scroll_complete: bool,
    disposed: bool,
    events: Vec<TimelineEvent>,
}

impl PhaseController {
    /// Controller in [`Phase::Loading`] for the given regions (at least one).
    pub fn new(keyframes: Vec<KeyFrameSpec>, timeline_opts: TimelineOptions) -> ScrubResult<Self> {
        if keyframes.is_empty() {
            return Err(ScrubError::validation("at least one key frame spec is required"));
        }
        timeline_opts.validate()?;
        Ok(Self {
            regions: keyframes.into_iter().map(InteractiveRegion::new).collect(),
            timeline_opts,
            instance: None,
            phase: Phase::Loading,
            scroll_complete: false,
            disposed: false,
            events: Vec::new(),
        })
    }

    /// Load-complete continuation: seed the frame, resolve regions, enter [`Phase::Scroll`].
    #[tracing::instrument(skip_all, fields(regions = self.regions.len()))]
    pub fn on_loaded(&mut self, mut instance: AnimationInstance) -> ScrubResult<()> {
        if self.disposed {
            return Err(ScrubError::lifecycle("animation loaded after dispose"));
        }
        if self.phase != Phase::Loading {
            return Err(ScrubError::lifecycle("animation already loaded"));
        }

        let span = instance.meta().frames;
        for region in &self.regions {
            let spec = region.spec();
            let inside = [spec.scroll_span(), spec.hover_span()]
                .iter()
                .all(|s| span.contains(FramePos(s.start)) && span.contains(FramePos(s.end)));
            if !inside {
                tracing::warn!(
                    region = region.id(),
                    ip = span.start,
                    op = span.end,
                    "key frames exceed the animation's frame span; seeks will clamp"
                );
            }
        }

        let seed = FramePos(self.regions[0].spec().scroll_span().start);
        instance.seek(seed, WriteSource::Seed)?;

        let mut resolved = 0usize;
        for region in &mut self.regions {
            if region.resolve(instance.surface(), self.timeline_opts) {
                resolved += 1;
            } else {
                tracing::info!(region = region.id(), "interactive element not found");
            }
        }

        self.instance = Some(instance);
        self.phase = Phase::Scroll;
        tracing::info!(resolved, seed = seed.get(), "scroll phase entered");
        Ok(())
    }

    /// Scrub to scroll progress `p`; exactly `1.0` completes the scroll sequence once.
    ///
    /// Returns the applied frame, or `None` while loading or after dispose.
    pub fn on_scroll_progress(&mut self, p: f64) -> Option<FramePos> {
        if self.disposed || self.phase == Phase::Loading {
            return None;
        }
        let frame = self.regions[0].spec().scroll_frame(p);
        let applied = seek(self.instance.as_mut(), frame, WriteSource::Scroll);

        // Exact comparison: the pin clamps to 1.0 at the end of its window.
        if p == 1.0 && !self.scroll_complete {
            self.enter_hover_phase();
        }
        applied
    }

    fn enter_hover_phase(&mut self) {
        self.scroll_complete = true;
        self.phase = Phase::Hover;
        for region in &mut self.regions {
            region.enable_hover();
        }
        tracing::info!(
            enabled = self.hover_enabled_regions().len(),
            "hover phase entered"
        );
    }

    /// Pointer entered the region `id`: play its timeline forward.
    ///
    /// Returns `false` when the region is unknown, unresolved or not listening yet.
    pub fn pointer_enter(&mut self, id: &str) -> bool {
        self.with_listening_timeline(id, |tl| tl.play())
    }

    /// Pointer left the region `id`: reverse its timeline.
    pub fn pointer_leave(&mut self, id: &str) -> bool {
        self.with_listening_timeline(id, |tl| tl.reverse())
    }

    fn with_listening_timeline(
        &mut self,
        id: &str,
        f: impl FnOnce(&mut HoverTimeline),
    ) -> bool {
        if self.disposed {
            return false;
        }
        let Some(region) = self.regions.iter_mut().find(|r| r.id() == id) else {
            return false;
        };
        if !region.listeners_attached() {
            return false;
        }
        match region.timeline_mut() {
            Some(tl) => {
                f(tl);
                true
            }
            None => false,
        }
    }

    /// Advance every hover timeline by `dt_secs`, seeking the instance for each update.
    ///
    /// Regions are processed in configuration order, so a later region's write wins within
    /// the same tick.
    pub fn tick(&mut self, dt_secs: f64) {
        if self.disposed {
            return;
        }
        let Self {
            regions,
            instance,
            events,
            ..
        } = self;
        for (idx, region) in regions.iter_mut().enumerate() {
            let Some(tl) = region.timeline_mut() else {
                continue;
            };
            events.clear();
            tl.tick(dt_secs, events);
            for ev in events.iter() {
                match *ev {
                    TimelineEvent::Update(q) => {
                        seek(
                            instance.as_mut(),
                            region.spec().hover_frame(q),
                            WriteSource::Hover(idx),
                        );
                    }
                    TimelineEvent::ReverseComplete => {
                        seek(
                            instance.as_mut(),
                            region.spec().rest_frame(),
                            WriteSource::Rest(idx),
                        );
                    }
                    TimelineEvent::Complete => {}
                }
            }
        }
    }

    /// Destroy the instance and drop all timelines. Idempotent.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        if let Some(instance) = self.instance.as_mut() {
            instance.destroy();
        }
        for region in &mut self.regions {
            region.release();
        }
        tracing::debug!("phase controller disposed");
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Gate flag set once scroll progress reached exactly 1.
    pub fn scroll_complete(&self) -> bool {
        self.scroll_complete
    }

    /// Return `true` after [`PhaseController::dispose`].
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Loaded animation instance.
    pub fn instance(&self) -> Option<&AnimationInstance> {
        self.instance.as_ref()
    }

    /// Current animation frame, once loaded.
    pub fn current_frame(&self) -> Option<FramePos> {
        self.instance.as_ref().map(AnimationInstance::current_frame)
    }

    /// Source of the last frame write.
    pub fn last_writer(&self) -> Option<WriteSource> {
        self.instance.as_ref().and_then(AnimationInstance::last_writer)
    }

    /// All regions in configuration order.
    pub fn regions(&self) -> &[InteractiveRegion] {
        &self.regions
    }

    /// Region by identifier.
    pub fn region(&self, id: &str) -> Option<&InteractiveRegion> {
        self.regions.iter().find(|r| r.id() == id)
    }

    /// Identifiers of regions currently listening for hover.
    pub fn hover_enabled_regions(&self) -> Vec<&str> {
        self.regions
            .iter()
            .filter(|r| r.listeners_attached())
            .map(InteractiveRegion::id)
            .collect()
    }
}

fn seek(
    instance: Option<&mut AnimationInstance>,
    frame: FramePos,
    source: WriteSource,
) -> Option<FramePos> {
    let instance = instance?;
    match instance.seek(frame, source) {
        Ok(applied) => Some(applied),
        Err(e) => {
            tracing::debug!(error = %e, ?source, "frame write dropped");
            None
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/phase/controller.rs"]
mod tests;
