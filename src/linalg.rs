pub(crate) mod ops;
pub(crate) mod parse;
pub(crate) mod types;
