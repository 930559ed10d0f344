use crate::error::{EngineError, Result};
use crate::path::FilePath;
use ignore::WalkBuilder;
use std::path::Path;
use tracing::debug;

/// Recursive, depth-first listing of every regular file under `root`.
///
/// Hidden files and anything a `.gitignore` would exclude are listed too;
/// symlinks are not followed. The order is whatever the walk produced.
///
/// # Errors
/// Returns [`EngineError::InvalidRoot`] if `root` is not an existing directory,
/// and [`EngineError::Walk`] for the first entry the walk could not read.
pub fn enumerate(root: &Path) -> Result<Vec<FilePath>> {
    if !root.is_dir() {
        return Err(EngineError::InvalidRoot {
            path: root.to_path_buf(),
        });
    }

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_some_and(|ft| ft.is_file()) {
            files.push(FilePath::from(entry.into_path()));
        }
    }

    debug!(root = %root.display(), count = files.len(), "enumerated files");
    Ok(files)
}
