use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::animation::instance::AnimationMeta;
use crate::foundation::core::{Canvas, FrameSpan};
use crate::foundation::error::{ScrubError, ScrubResult};

/// Header of a Lottie (bodymovin) JSON document.
///
/// Only the fields needed to seek frames and address layers are modeled; shapes, assets and
/// everything else are ignored.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct LottieDoc {
    /// Bodymovin version string.
    #[serde(default)]
    pub v: Option<String>,
    /// Frame rate.
    pub fr: f64,
    /// In point (first frame).
    pub ip: f64,
    /// Out point (last frame).
    pub op: f64,
    /// Width in pixels.
    pub w: u32,
    /// Height in pixels.
    pub h: u32,
    /// Animation name.
    #[serde(default)]
    pub nm: Option<String>,
    /// Top-level layers.
    #[serde(default)]
    pub layers: Vec<LottieLayer>,
}

/// Addressing data of one Lottie layer.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct LottieLayer {
    /// Layer index.
    #[serde(default)]
    pub ind: Option<i64>,
    /// Display name.
    #[serde(default)]
    pub nm: Option<String>,
    /// Element id given to the layer when rendered.
    #[serde(default)]
    pub ln: Option<String>,
    /// Element class given to the layer when rendered.
    #[serde(default)]
    pub cl: Option<String>,
    /// Layer type.
    #[serde(default)]
    pub ty: Option<u8>,
    /// Layer in point.
    #[serde(default)]
    pub ip: Option<f64>,
    /// Layer out point.
    #[serde(default)]
    pub op: Option<f64>,
}

impl LottieDoc {
    /// Read and parse a document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> ScrubResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ScrubError::asset(format!("open animation JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Parse a document from any reader.
    pub fn from_reader(r: impl Read) -> ScrubResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ScrubError::asset(format!("parse animation JSON: {e}")))
    }

    /// Parse a document from a string.
    pub fn from_json_str(s: &str) -> ScrubResult<Self> {
        serde_json::from_str(s).map_err(|e| ScrubError::asset(format!("parse animation JSON: {e}")))
    }

    /// Check the header describes a playable animation.
    pub fn validate(&self) -> ScrubResult<()> {
        if !(self.fr.is_finite() && self.fr > 0.0) {
            return Err(ScrubError::asset("animation fr must be > 0"));
        }
        if self.w == 0 || self.h == 0 {
            return Err(ScrubError::asset("animation w/h must be > 0"));
        }
        FrameSpan::new(self.ip, self.op)
            .map_err(|e| ScrubError::asset(format!("animation ip/op: {e}")))?;
        Ok(())
    }

    /// Playback metadata.
    pub fn meta(&self) -> ScrubResult<AnimationMeta> {
        self.validate()?;
        Ok(AnimationMeta {
            frames: FrameSpan::new(self.ip, self.op)?,
            fps: self.fr,
            size: Canvas {
                width: self.w,
                height: self.h,
            },
            name: self.nm.clone(),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/asset/lottie.rs"]
mod tests;
