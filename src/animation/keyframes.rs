use crate::foundation::core::{FramePos, FrameSpan};
use crate::foundation::error::{ScrubError, ScrubResult};
use crate::foundation::math::lerp;

/// Static frame ranges for one interactive region.
///
/// The scroll range is scrubbed while the section is pinned; the hover range is a disjoint
/// sub-animation played only after the scroll sequence completed.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "KeyFrameSpecDef", into = "KeyFrameSpecDef")]
pub struct KeyFrameSpec {
    region: String,
    scroll: FrameSpan,
    hover: FrameSpan,
}

impl KeyFrameSpec {
    /// Create a validated spec.
    pub fn new(
        region: impl Into<String>,
        scroll_start: f64,
        scroll_end: f64,
        hover_start: f64,
        hover_end: f64,
    ) -> ScrubResult<Self> {
        let region = region.into();
        if region.is_empty() {
            return Err(ScrubError::validation("key frame region id must be non-empty"));
        }
        let scroll = FrameSpan::new(scroll_start, scroll_end).map_err(|e| {
            ScrubError::validation(format!("region '{region}' scroll range: {e}"))
        })?;
        let hover = FrameSpan::new(hover_start, hover_end)
            .map_err(|e| ScrubError::validation(format!("region '{region}' hover range: {e}")))?;
        let disjoint = hover.end < scroll.start || hover.start > scroll.end;
        if !disjoint {
            return Err(ScrubError::validation(format!(
                "region '{region}' hover range [{}, {}] overlaps scroll range [{}, {}]",
                hover.start, hover.end, scroll.start, scroll.end
            )));
        }
        Ok(Self {
            region,
            scroll,
            hover,
        })
    }

    /// Identifier used to locate the region's element on the render surface.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Frames scrubbed by scroll progress.
    pub fn scroll_span(&self) -> FrameSpan {
        self.scroll
    }

    /// Frames played by the hover timeline.
    pub fn hover_span(&self) -> FrameSpan {
        self.hover
    }

    /// Frame for scroll progress `p`.
    pub fn scroll_frame(&self, p: f64) -> FramePos {
        FramePos(lerp(self.scroll.start, self.scroll.end, p))
    }

    /// Frame for hover timeline progress `q`.
    pub fn hover_frame(&self, q: f64) -> FramePos {
        FramePos(lerp(self.hover.start, self.hover.end, q))
    }

    /// Resting frame restored once a hover animation fully reverses.
    pub fn rest_frame(&self) -> FramePos {
        FramePos(self.scroll.end)
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct KeyFrameSpecDef {
    #[serde(rename = "clipPath", alias = "region")]
    region: String,
    #[serde(rename = "start")]
    scroll_start: f64,
    #[serde(rename = "scrollEnd")]
    scroll_end: f64,
    #[serde(rename = "hoverStart")]
    hover_start: f64,
    #[serde(rename = "hoverEnd")]
    hover_end: f64,
}

impl TryFrom<KeyFrameSpecDef> for KeyFrameSpec {
    type Error = ScrubError;

    fn try_from(def: KeyFrameSpecDef) -> Result<Self, Self::Error> {
        Self::new(
            def.region,
            def.scroll_start,
            def.scroll_end,
            def.hover_start,
            def.hover_end,
        )
    }
}

impl From<KeyFrameSpec> for KeyFrameSpecDef {
    fn from(spec: KeyFrameSpec) -> Self {
        Self {
            region: spec.region,
            scroll_start: spec.scroll.start,
            scroll_end: spec.scroll.end,
            hover_start: spec.hover.start,
            hover_end: spec.hover.end,
        }
    }
}

/// The three tech-stack regions of the marketing page animation.
pub fn default_keyframes() -> Vec<KeyFrameSpec> {
    [
        ("54", 200.0, 249.0),
        ("13", 131.0, 166.0),
        ("482", 290.0, 334.0),
    ]
    .into_iter()
    .filter_map(|(id, hs, he)| KeyFrameSpec::new(id, 0.0, 130.0, hs, he).ok())
    .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/keyframes.rs"]
mod tests;
