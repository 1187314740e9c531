pub(crate) mod loader;
pub(crate) mod lottie;
pub(crate) mod surface;
pub(crate) mod svg_surface;
