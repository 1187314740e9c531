use crate::asset::lottie::LottieDoc;
use crate::foundation::core::{Point, Rect};

/// An addressable element found on a render surface.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceElement {
    /// Identifier the element was resolved by.
    pub id: String,
    /// Absolute bounds in surface coordinates, when the surface knows them.
    pub bounds: Option<Rect>,
}

/// Output surface of a rendered animation, queried after load to locate sub-elements.
pub trait RenderSurface {
    /// Locate an element by its stable per-shape identifier.
    fn find_element(&self, id: &str) -> Option<SurfaceElement>;

    /// Identifier of the top-most element under `point`, if the surface tracks geometry.
    fn hit_test(&self, point: Point) -> Option<String> {
        let _ = point;
        None
    }
}

/// Surface addressing the layers of a Lottie document.
///
/// A layer is reachable by its `ln` (the id renderers put on the layer's group) or, failing
/// that, by its `ind` index. Layer geometry is unknown, so hit testing always misses.
#[derive(Clone, Debug, Default)]
pub struct LayerSurface {
    ids: Vec<String>,
}

impl LayerSurface {
    /// Index every layer of `doc`.
    pub fn from_doc(doc: &LottieDoc) -> Self {
        let mut ids = Vec::new();
        for layer in &doc.layers {
            if let Some(ln) = layer.ln.as_deref().filter(|s| !s.is_empty()) {
                ids.push(ln.to_owned());
            }
            if let Some(ind) = layer.ind {
                ids.push(ind.to_string());
            }
        }
        Self { ids }
    }

    /// Surface exposing exactly the given identifiers.
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }
}

impl RenderSurface for LayerSurface {
    fn find_element(&self, id: &str) -> Option<SurfaceElement> {
        self.ids.iter().find(|x| x.as_str() == id).map(|x| SurfaceElement {
            id: x.clone(),
            bounds: None,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/asset/surface.rs"]
mod tests;
