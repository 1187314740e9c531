//! scrollscrub binds page scrolling to the playback position of a Lottie animation.
//!
//! While a section is pinned, scroll progress scrubs the animation frame by frame. Once the
//! scroll sequence completes, shapes inside the animation turn into hover targets that play
//! short sub-animations of their own.
//!
//! The crate is headless and host-driven: a host feeds display-refresh ticks, wheel/touch
//! deltas and pointer events into a [`ScrollSection`] and reads back the frame to render.
//!
//! # Pipeline overview
//!
//! 1. **Smooth scroll**: [`SmoothScroll`] eases wheel input toward its target on every tick of
//!    a [`RafLoop`].
//! 2. **Pin**: [`ScrollPin`] turns the scroll offset into progress through the pinned window.
//! 3. **Phase**: [`PhaseController`] maps progress to a frame, and after progress hits exactly
//!    1 hands the same [`AnimationInstance`] to per-region [`HoverTimeline`]s.
//!
//! All state lives on one thread. Scroll and hover writes to the frame are not mutually
//! exclusive; within a tick the scroll write happens first and the last write wins.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod asset;
mod foundation;
mod phase;
mod scroll;
mod section;

pub use animation::ease::Ease;
pub use animation::instance::{AnimationInstance, AnimationMeta, FrameRegister, WriteSource};
pub use animation::keyframes::{KeyFrameSpec, default_keyframes};
pub use animation::timeline::{Direction, HoverTimeline, TimelineEvent, TimelineOptions};
pub use asset::loader::{AssetLoader, FileLoader, ReadyLoader};
pub use asset::lottie::{LottieDoc, LottieLayer};
pub use asset::surface::{LayerSurface, RenderSurface, SurfaceElement};
pub use asset::svg_surface::{LOTTIE_CLIP_PREFIX, SvgSurface};
pub use foundation::core::{Canvas, Cursor, FramePos, FrameSpan, Point, Rect, Vec2};
pub use foundation::error::{ScrubError, ScrubResult};
pub use foundation::math::{clamp01, inverse_lerp_clamped, lerp};
pub use phase::controller::{Phase, PhaseController};
pub use phase::region::InteractiveRegion;
pub use scroll::pin::{ListenerId, PinOptions, PinState, PinUpdate, ScrollPin};
pub use scroll::smooth::{Orientation, ScrollFrame, SmoothScroll, SmoothScrollOptions};
pub use scroll::ticker::{RafLoop, Tick};
pub use section::config::SectionConfig;
pub use section::script::{Script, ScriptEvent};
pub use section::view::{FrameReport, ScrollSection};
