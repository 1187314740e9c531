use std::path::PathBuf;

use crate::animation::instance::AnimationInstance;
use crate::asset::lottie::LottieDoc;
use crate::asset::surface::{LayerSurface, RenderSurface};
use crate::asset::svg_surface::SvgSurface;
use crate::foundation::error::ScrubResult;

/// Asynchronous source of an [`AnimationInstance`].
///
/// Polled once per display tick; yields `Some` exactly once when the asset is ready (or
/// failed) and `None` otherwise.
pub trait AssetLoader {
    /// Poll for the load-complete signal.
    fn poll(&mut self) -> Option<ScrubResult<AnimationInstance>>;
}

/// Loads a Lottie JSON file, plus an optional SVG snapshot of its rendered surface.
///
/// Without a snapshot, elements are addressed through the document's layers.
#[derive(Clone, Debug)]
pub struct FileLoader {
    lottie: PathBuf,
    svg: Option<PathBuf>,
    done: bool,
}

impl FileLoader {
    /// Loader for the animation at `lottie`.
    pub fn new(lottie: impl Into<PathBuf>) -> Self {
        Self {
            lottie: lottie.into(),
            svg: None,
            done: false,
        }
    }

    /// Resolve elements against an SVG snapshot instead of the document layers.
    pub fn with_svg_snapshot(mut self, svg: impl Into<PathBuf>) -> Self {
        self.svg = Some(svg.into());
        self
    }

    #[tracing::instrument(skip(self), fields(path = %self.lottie.display()))]
    fn load(&self) -> ScrubResult<AnimationInstance> {
        let doc = LottieDoc::from_path(&self.lottie)?;
        let meta = doc.meta()?;
        let surface: Box<dyn RenderSurface> = match &self.svg {
            Some(svg) => Box::new(SvgSurface::from_path(svg)?),
            None => Box::new(LayerSurface::from_doc(&doc)),
        };
        tracing::info!(
            ip = meta.frames.start,
            op = meta.frames.end,
            fps = meta.fps,
            "animation loaded"
        );
        Ok(AnimationInstance::new(meta, surface))
    }
}

impl AssetLoader for FileLoader {
    fn poll(&mut self) -> Option<ScrubResult<AnimationInstance>> {
        if self.done {
            return None;
        }
        self.done = true;
        Some(self.load())
    }
}

/// Hands over an already built instance after a number of empty polls.
#[derive(Debug)]
pub struct ReadyLoader {
    pending: Option<AnimationInstance>,
    delay_polls: u32,
}

impl ReadyLoader {
    /// Yield `instance` on the first poll.
    pub fn new(instance: AnimationInstance) -> Self {
        Self::delayed(instance, 0)
    }

    /// Yield `instance` after `delay_polls` polls returned `None`.
    pub fn delayed(instance: AnimationInstance, delay_polls: u32) -> Self {
        Self {
            pending: Some(instance),
            delay_polls,
        }
    }
}

impl AssetLoader for ReadyLoader {
    fn poll(&mut self) -> Option<ScrubResult<AnimationInstance>> {
        if self.delay_polls > 0 {
            self.delay_polls -= 1;
            return None;
        }
        self.pending.take().map(Ok)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/asset/loader.rs"]
mod tests;
