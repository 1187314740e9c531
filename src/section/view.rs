use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crate::animation::instance::WriteSource;
use crate::asset::loader::AssetLoader;
use crate::foundation::core::{Cursor, FramePos, Point, Vec2};
use crate::foundation::error::{ScrubError, ScrubResult};
use crate::phase::controller::{Phase, PhaseController};
use crate::scroll::pin::{PinState, ScrollPin};
use crate::scroll::smooth::SmoothScroll;
use crate::scroll::ticker::RafLoop;
use crate::section::config::SectionConfig;

/// State of the section after one display-refresh tick.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameReport {
    /// Host timestamp of the tick.
    pub t_ms: f64,
    /// Animated scroll offset.
    pub scroll: f64,
    /// Pin progress.
    pub progress: f64,
    /// Controller phase.
    pub phase: Phase,
    /// Animation frame, once loaded.
    pub frame: Option<f64>,
}

/// One mounted scroll-scrubbed section: smooth scroll, pin and phase controller.
///
/// [`ScrollSection::mount`] is the activation hook and [`ScrollSection::dispose`] the
/// disposal hook. Dropping a mounted section disposes it.
pub struct ScrollSection {
    raf: RafLoop,
    smooth: SmoothScroll,
    pin: ScrollPin,
    controller: Rc<RefCell<PhaseController>>,
    loader: Option<Box<dyn AssetLoader>>,
    hovered: Option<String>,
    mounted: bool,
}

impl std::fmt::Debug for ScrollSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollSection")
            .field("raf", &self.raf)
            .field("smooth", &self.smooth)
            .field("pin", &self.pin)
            .field("controller", &self.controller)
            .field("loading", &self.loader.is_some())
            .field("hovered", &self.hovered)
            .field("mounted", &self.mounted)
            .finish()
    }
}

impl ScrollSection {
    /// Activate the section: take over scrolling, start the refresh loop and request the asset.
    #[tracing::instrument(skip_all)]
    pub fn mount(config: SectionConfig, loader: Box<dyn AssetLoader>) -> ScrubResult<Self> {
        config.validate()?;
        let pin = ScrollPin::new(config.trigger_top(), config.pin_distance(), config.pin)?;
        let limit = config.scroll_limit(pin.spacing());
        let smooth = SmoothScroll::new(config.smooth_scroll, limit)?;
        let controller = PhaseController::new(config.keyframes, config.hover)?;

        let mut raf = RafLoop::new();
        raf.start();
        tracing::info!(
            pin_start = pin.start(),
            pin_end = pin.end(),
            limit,
            "section mounted"
        );
        Ok(Self {
            raf,
            smooth,
            pin,
            controller: Rc::new(RefCell::new(controller)),
            loader: Some(loader),
            hovered: None,
            mounted: true,
        })
    }

    /// Run one display-refresh tick at host time `now_ms`.
    ///
    /// Order within a tick: asset poll, smooth scroll, pin progress (scroll frame write),
    /// hover timelines (hover frame writes).
    pub fn frame(&mut self, now_ms: f64) -> ScrubResult<FrameReport> {
        if !self.mounted {
            return Err(ScrubError::lifecycle("frame on disposed section"));
        }
        let Some(tick) = self.raf.tick(now_ms) else {
            return Err(ScrubError::lifecycle("refresh loop is stopped"));
        };

        self.poll_loader()?;

        let scrolled = self.smooth.raf(now_ms);
        if self.phase() != Phase::Loading
            && let Some(sf) = scrolled
        {
            self.pin.update(sf.scroll, sf.delta);
        }

        self.controller.borrow_mut().tick(tick.delta_ms / 1000.0);
        Ok(self.report(now_ms))
    }

    fn poll_loader(&mut self) -> ScrubResult<()> {
        let Some(result) = self.loader.as_mut().and_then(|l| l.poll()) else {
            return Ok(());
        };
        self.loader = None;
        let instance = result.inspect_err(|e| {
            tracing::error!(error = %e, "animation failed to load");
        })?;
        self.controller.borrow_mut().on_loaded(instance)?;
        self.register_scroll_handler();
        Ok(())
    }

    fn register_scroll_handler(&mut self) {
        let controller = Rc::downgrade(&self.controller);
        self.pin.on_update(move |update| {
            if let Some(controller) = controller.upgrade() {
                controller.borrow_mut().on_scroll_progress(update.progress);
            }
        });
        // initial refresh so a page loaded mid-scroll starts on the right frame
        self.pin.update(self.smooth.scroll(), 0.0);
    }

    fn report(&self, t_ms: f64) -> FrameReport {
        let controller = self.controller.borrow();
        FrameReport {
            t_ms,
            scroll: self.smooth.scroll(),
            progress: self.pin.progress(),
            phase: controller.phase(),
            frame: controller.current_frame().map(FramePos::get),
        }
    }

    /// Mouse-wheel input (vertical delta in pixels).
    pub fn wheel(&mut self, delta_y: f64) -> bool {
        self.mounted && self.smooth.on_wheel(Vec2::new(0.0, delta_y))
    }

    /// Touch-drag input (vertical delta in pixels).
    pub fn touch(&mut self, delta_y: f64) -> bool {
        self.mounted && self.smooth.on_touch(Vec2::new(0.0, delta_y))
    }

    /// Pointer entered region `id`.
    pub fn pointer_enter(&mut self, id: &str) -> bool {
        self.mounted && self.controller.borrow_mut().pointer_enter(id)
    }

    /// Pointer left region `id`.
    pub fn pointer_leave(&mut self, id: &str) -> bool {
        self.mounted && self.controller.borrow_mut().pointer_leave(id)
    }

    /// Pointer moved to `point` in surface coordinates.
    ///
    /// Hit-tests the animation surface and turns element changes into leave/enter events.
    pub fn pointer_move(&mut self, point: Point) {
        if !self.mounted {
            return;
        }
        let hit = self
            .controller
            .borrow()
            .instance()
            .and_then(|inst| inst.surface().hit_test(point));
        if hit == self.hovered {
            return;
        }
        if let Some(prev) = self.hovered.take() {
            self.pointer_leave(&prev);
        }
        if let Some(next) = &hit {
            self.pointer_enter(next);
        }
        self.hovered = hit;
    }

    /// Disposal hook: stop the refresh loop, restore native scrolling, release the pin and
    /// destroy the animation. Idempotent.
    #[tracing::instrument(skip_all)]
    pub fn dispose(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.raf.stop();
        self.smooth.destroy();
        self.pin.kill();
        self.controller.borrow_mut().dispose();
        self.loader = None;
        self.hovered = None;
        tracing::info!(ticks = self.raf.ticks(), "section disposed");
    }

    /// Return `true` between mount and dispose.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Controller phase.
    pub fn phase(&self) -> Phase {
        self.controller.borrow().phase()
    }

    /// Current animation frame, once loaded.
    pub fn current_frame(&self) -> Option<FramePos> {
        self.controller.borrow().current_frame()
    }

    /// Source of the last frame write.
    pub fn last_writer(&self) -> Option<WriteSource> {
        self.controller.borrow().last_writer()
    }

    /// Animated scroll offset.
    pub fn scroll(&self) -> f64 {
        self.smooth.scroll()
    }

    /// Largest reachable scroll offset.
    pub fn scroll_limit(&self) -> f64 {
        self.smooth.limit()
    }

    /// Pin progress.
    pub fn progress(&self) -> f64 {
        self.pin.progress()
    }

    /// Pin state.
    pub fn pin_state(&self) -> PinState {
        self.pin.state()
    }

    /// Pin window as `(start, end)` scroll offsets.
    pub fn pin_window(&self) -> (f64, f64) {
        (self.pin.start(), self.pin.end())
    }

    /// Number of refresh ticks admitted so far.
    pub fn ticks(&self) -> u64 {
        self.raf.ticks()
    }

    /// Cursor over region `id`, if the region exists.
    pub fn cursor(&self, id: &str) -> Option<Cursor> {
        self.controller.borrow().region(id).map(|r| r.cursor())
    }

    /// Return `true` when region `id` has hover handlers attached.
    pub fn listeners_attached(&self, id: &str) -> bool {
        self.controller
            .borrow()
            .region(id)
            .is_some_and(|r| r.listeners_attached())
    }

    /// Identifiers of regions listening for hover.
    pub fn hover_enabled_regions(&self) -> Vec<String> {
        self.controller
            .borrow()
            .hover_enabled_regions()
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    /// Borrow the phase controller.
    pub fn controller(&self) -> Ref<'_, PhaseController> {
        self.controller.borrow()
    }
}

impl Drop for ScrollSection {
    fn drop(&mut self) {
        if self.mounted {
            tracing::warn!("section dropped while mounted; disposing");
            self.dispose();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/section/view.rs"]
mod tests;
