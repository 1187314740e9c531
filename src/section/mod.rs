pub(crate) mod config;
pub(crate) mod script;
pub(crate) mod view;
