use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::animation::keyframes::{KeyFrameSpec, default_keyframes};
use crate::animation::timeline::TimelineOptions;
use crate::foundation::error::{ScrubError, ScrubResult};
use crate::scroll::pin::PinOptions;
use crate::scroll::smooth::SmoothScrollOptions;

/// Page geometry and tuning for one scroll-scrubbed section.
///
/// Vertical distances are given in viewport heights (`vh`) and converted with
/// `viewport_height`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SectionConfig {
    /// Viewport height in pixels.
    pub viewport_height: f64,
    /// Document offset of the section's top edge.
    pub trigger_top_vh: f64,
    /// Scroll distance the section stays pinned for.
    pub pin_distance_vh: f64,
    /// Document height before pin spacing is added.
    pub document_height_vh: f64,
    /// Smooth-scroll driver tuning.
    pub smooth_scroll: SmoothScrollOptions,
    /// Pin behaviour.
    pub pin: PinOptions,
    /// Hover timeline settings.
    pub hover: TimelineOptions,
    /// Interactive regions; the first one's scroll range is scrubbed.
    pub keyframes: Vec<KeyFrameSpec>,
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self {
            viewport_height: 1000.0,
            trigger_top_vh: 1.0,
            pin_distance_vh: 2.0,
            document_height_vh: 5.0,
            smooth_scroll: SmoothScrollOptions::default(),
            pin: PinOptions::default(),
            hover: TimelineOptions::default(),
            keyframes: default_keyframes(),
        }
    }
}

impl SectionConfig {
    /// Read and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> ScrubResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ScrubError::validation(format!("open section config '{}': {e}", path.display()))
        })?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| ScrubError::serde(format!("parse section config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate a JSON config string.
    pub fn from_json_str(s: &str) -> ScrubResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| ScrubError::serde(format!("parse section config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check geometry, tuning and key frames.
    pub fn validate(&self) -> ScrubResult<()> {
        if !(self.viewport_height.is_finite() && self.viewport_height > 0.0) {
            return Err(ScrubError::validation("viewport_height must be > 0"));
        }
        if !(self.trigger_top_vh.is_finite() && self.trigger_top_vh >= 0.0) {
            return Err(ScrubError::validation("trigger_top_vh must be >= 0"));
        }
        if !(self.pin_distance_vh.is_finite() && self.pin_distance_vh > 0.0) {
            return Err(ScrubError::validation("pin_distance_vh must be > 0"));
        }
        if !(self.document_height_vh.is_finite() && self.document_height_vh >= 1.0) {
            return Err(ScrubError::validation(
                "document_height_vh must be at least one viewport",
            ));
        }
        if self.keyframes.is_empty() {
            return Err(ScrubError::validation("keyframes must not be empty"));
        }
        self.smooth_scroll.validate()?;
        self.hover.validate()?;
        Ok(())
    }

    /// Section top in pixels.
    pub fn trigger_top(&self) -> f64 {
        self.trigger_top_vh * self.viewport_height
    }

    /// Pinned distance in pixels.
    pub fn pin_distance(&self) -> f64 {
        self.pin_distance_vh * self.viewport_height
    }

    /// Largest scroll offset once `spacing` pixels of pin spacing are added.
    pub fn scroll_limit(&self, spacing: f64) -> f64 {
        (self.document_height_vh * self.viewport_height + spacing - self.viewport_height).max(0.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/section/config.rs"]
mod tests;
