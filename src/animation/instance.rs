use crate::asset::surface::RenderSurface;
use crate::foundation::core::{Canvas, FramePos, FrameSpan};
use crate::foundation::error::{ScrubError, ScrubResult};

/// Declared playback properties of a loaded animation.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct AnimationMeta {
    /// Declared frame span (`ip`..`op`).
    pub frames: FrameSpan,
    /// Frames per second.
    pub fps: f64,
    /// Output surface size.
    pub size: Canvas,
    /// Optional animation name.
    pub name: Option<String>,
}

/// Which input wrote the current frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteSource {
    /// Initial seek performed on load.
    Seed,
    /// Scroll-progress mapping.
    Scroll,
    /// Hover timeline of the region at this index.
    Hover(usize),
    /// Resting frame restored after the region's hover timeline reversed.
    Rest(usize),
}

/// Single-writer register holding the animation's current frame.
///
/// Writers are not coordinated: the last write wins and is recorded as `last_writer`.
#[derive(Clone, Debug, Default)]
pub struct FrameRegister {
    frame: FramePos,
    last_writer: Option<WriteSource>,
    writes: u64,
}

impl FrameRegister {
    /// Overwrite the current frame.
    pub fn write(&mut self, frame: FramePos, source: WriteSource) {
        self.frame = frame;
        self.last_writer = Some(source);
        self.writes += 1;
    }

    /// Current frame.
    pub fn frame(&self) -> FramePos {
        self.frame
    }

    /// Source of the most recent write, if any.
    pub fn last_writer(&self) -> Option<WriteSource> {
        self.last_writer
    }

    /// Number of writes so far; each one is a redraw.
    pub fn writes(&self) -> u64 {
        self.writes
    }
}

/// A loaded animation: frame register plus the surface it renders into.
pub struct AnimationInstance {
    meta: AnimationMeta,
    register: FrameRegister,
    surface: Box<dyn RenderSurface>,
    destroyed: bool,
}

impl std::fmt::Debug for AnimationInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationInstance")
            .field("meta", &self.meta)
            .field("register", &self.register)
            .field("destroyed", &self.destroyed)
            .finish_non_exhaustive()
    }
}

impl AnimationInstance {
    /// Wrap loaded metadata and a render surface. The frame starts at the span start.
    pub fn new(meta: AnimationMeta, surface: Box<dyn RenderSurface>) -> Self {
        let mut register = FrameRegister::default();
        register.frame = FramePos(meta.frames.start);
        Self {
            meta,
            register,
            surface,
            destroyed: false,
        }
    }

    /// Declared playback properties.
    pub fn meta(&self) -> &AnimationMeta {
        &self.meta
    }

    /// Surface the animation renders into.
    pub fn surface(&self) -> &dyn RenderSurface {
        self.surface.as_ref()
    }

    /// Current frame.
    pub fn current_frame(&self) -> FramePos {
        self.register.frame()
    }

    /// Source of the most recent seek.
    pub fn last_writer(&self) -> Option<WriteSource> {
        self.register.last_writer()
    }

    /// Number of seeks applied (one redraw each).
    pub fn redraws(&self) -> u64 {
        self.register.writes()
    }

    /// Seek to `frame` and stop there, clamped to the declared span.
    ///
    /// Fails once the instance has been destroyed.
    pub fn seek(&mut self, frame: FramePos, source: WriteSource) -> ScrubResult<FramePos> {
        if self.destroyed {
            return Err(ScrubError::lifecycle("seek on destroyed animation instance"));
        }
        let clamped = self.meta.frames.clamp(frame);
        if clamped != frame {
            tracing::debug!(
                requested = frame.get(),
                applied = clamped.get(),
                "seek clamped to animation frame span"
            );
        }
        self.register.write(clamped, source);
        Ok(clamped)
    }

    /// Release the instance. Further seeks fail.
    pub fn destroy(&mut self) {
        self.destroyed = true;
    }

    /// Return `true` after [`AnimationInstance::destroy`].
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/instance.rs"]
mod tests;
