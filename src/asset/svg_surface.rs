use std::path::Path;

use crate::asset::surface::{RenderSurface, SurfaceElement};
use crate::foundation::core::{Point, Rect};
use crate::foundation::error::{ScrubError, ScrubResult};

/// Prefix of the clip-path ids emitted by Lottie's SVG renderer.
pub const LOTTIE_CLIP_PREFIX: &str = "__lottie_element_";

#[derive(Clone, Debug)]
struct ClipGroup {
    id: String,
    bounds: Rect,
}

/// Surface backed by an SVG snapshot of the rendered animation.
///
/// Element `"54"` is the group clipped by `url(#__lottie_element_54)`.
#[derive(Clone, Debug, Default)]
pub struct SvgSurface {
    // paint order
    groups: Vec<ClipGroup>,
}

impl SvgSurface {
    /// Parse SVG markup.
    pub fn from_svg_str(svg: &str) -> ScrubResult<Self> {
        let opt = usvg::Options::default();
        let tree = usvg::Tree::from_str(svg, &opt)
            .map_err(|e| ScrubError::asset(format!("parse SVG snapshot: {e}")))?;
        let mut groups = Vec::new();
        collect_clip_groups(tree.root(), &mut groups);
        tracing::debug!(groups = groups.len(), "indexed lottie clip groups");
        Ok(Self { groups })
    }

    /// Read and parse an SVG snapshot from disk.
    pub fn from_path(path: impl AsRef<Path>) -> ScrubResult<Self> {
        let path = path.as_ref();
        let svg = std::fs::read_to_string(path).map_err(|e| {
            ScrubError::asset(format!("read SVG snapshot '{}': {e}", path.display()))
        })?;
        Self::from_svg_str(&svg)
    }

    /// Number of addressable clip groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Return `true` when no clip group was found.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

fn collect_clip_groups(group: &usvg::Group, out: &mut Vec<ClipGroup>) {
    if let Some(id) = group
        .clip_path()
        .and_then(|clip| clip.id().strip_prefix(LOTTIE_CLIP_PREFIX))
    {
        let b = group.abs_bounding_box();
        out.push(ClipGroup {
            id: id.to_owned(),
            bounds: Rect::new(
                f64::from(b.left()),
                f64::from(b.top()),
                f64::from(b.right()),
                f64::from(b.bottom()),
            ),
        });
    }
    for node in group.children() {
        if let usvg::Node::Group(child) = node {
            collect_clip_groups(child, out);
        }
    }
}

impl RenderSurface for SvgSurface {
    fn find_element(&self, id: &str) -> Option<SurfaceElement> {
        self.groups.iter().find(|g| g.id == id).map(|g| SurfaceElement {
            id: g.id.clone(),
            bounds: Some(g.bounds),
        })
    }

    fn hit_test(&self, point: Point) -> Option<String> {
        self.groups
            .iter()
            .rev()
            .find(|g| g.bounds.contains(point))
            .map(|g| g.id.clone())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/asset/svg_surface.rs"]
mod tests;
