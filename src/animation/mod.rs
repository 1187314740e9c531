pub(crate) mod ease;
pub(crate) mod instance;
pub(crate) mod keyframes;
pub(crate) mod timeline;
