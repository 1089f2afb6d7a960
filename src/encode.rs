use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::VetorResult;

pub(crate) mod ffmpeg;
pub(crate) mod pipeline;
pub(crate) mod png;

/// Creates the directory `path` will be written into, if it has one.
pub(crate) fn create_parent_dir(path: &Path) -> VetorResult<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => std::fs::create_dir_all(dir)
            .with_context(|| format!("create output directory '{}'", dir.display()))
            .map_err(Into::into),
        _ => Ok(()),
    }
}
