use crate::animation::keyframes::KeyFrameSpec;
use crate::animation::timeline::{HoverTimeline, TimelineOptions};
use crate::asset::surface::{RenderSurface, SurfaceElement};
use crate::foundation::core::Cursor;

/// A [`KeyFrameSpec`] bound (or not) to an element of the rendered animation.
///
/// The element slot is filled at most once, after the asset loaded. Unresolved regions never
/// get a timeline and never listen for hover.
#[derive(Clone, Debug)]
pub struct InteractiveRegion {
    spec: KeyFrameSpec,
    element: Option<SurfaceElement>,
    timeline: Option<HoverTimeline>,
    cursor: Cursor,
    listening: bool,
}

impl InteractiveRegion {
    pub(crate) fn new(spec: KeyFrameSpec) -> Self {
        Self {
            spec,
            element: None,
            timeline: None,
            cursor: Cursor::Default,
            listening: false,
        }
    }

    /// Look the element up on `surface`; on success build a paused timeline with hover off.
    pub(crate) fn resolve(&mut self, surface: &dyn RenderSurface, opts: TimelineOptions) -> bool {
        self.element = surface.find_element(self.spec.region());
        if self.element.is_some() {
            self.timeline = Some(HoverTimeline::new(opts));
            self.disable_hover();
        }
        self.element.is_some()
    }

    pub(crate) fn enable_hover(&mut self) {
        if self.element.is_some() {
            self.cursor = Cursor::Pointer;
            self.listening = true;
        }
    }

    pub(crate) fn disable_hover(&mut self) {
        self.cursor = Cursor::Default;
        self.listening = false;
    }

    pub(crate) fn release(&mut self) {
        self.disable_hover();
        self.timeline = None;
    }

    pub(crate) fn timeline_mut(&mut self) -> Option<&mut HoverTimeline> {
        self.timeline.as_mut()
    }

    /// Static frame configuration.
    pub fn spec(&self) -> &KeyFrameSpec {
        &self.spec
    }

    /// Region identifier.
    pub fn id(&self) -> &str {
        self.spec.region()
    }

    /// Resolved element, if the surface had one.
    pub fn element(&self) -> Option<&SurfaceElement> {
        self.element.as_ref()
    }

    /// Return `true` when an element was found for this region.
    pub fn is_resolved(&self) -> bool {
        self.element.is_some()
    }

    /// Cursor shown over the element.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Return `true` while pointer enter/leave handlers are attached.
    pub fn listeners_attached(&self) -> bool {
        self.listening
    }

    /// Hover timeline, present only for resolved regions.
    pub fn timeline(&self) -> Option<&HoverTimeline> {
        self.timeline.as_ref()
    }
}
