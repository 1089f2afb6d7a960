pub(crate) mod lerp;
pub(crate) mod timeline;
