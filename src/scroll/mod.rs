pub(crate) mod pin;
pub(crate) mod smooth;
pub(crate) mod ticker;
