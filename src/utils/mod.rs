pub(crate) mod file;
pub mod format;
