use crate::constants::{COMPRESSED_DIR_NAME, ELIGIBLE_EXTENSIONS};
use crate::error::{CompressError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Check if a path has a recognized image extension (case-insensitive).
pub fn is_eligible_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| ELIGIBLE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Collect every eligible image file under `root`, recursing into
/// subdirectories but never into a `Compressed` folder. The exclusion is what
/// makes repeated runs idempotent: outputs of an earlier pass are not fed back
/// in as inputs.
///
/// Fails with `InvalidInput` if `root` does not exist or is not a directory.
/// Read-only; traversal order is implementation-defined.
pub fn collect_image_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(CompressError::InvalidInput(root.to_path_buf()));
    }

    let mut image_files = Vec::new();

    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| !(e.file_type().is_dir() && e.file_name() == COMPRESSED_DIR_NAME));

    for entry in walker {
        let entry = entry?;
        let path = entry.path();

        if entry.file_type().is_file() && is_eligible_file(path) {
            image_files.push(path.to_path_buf());
        }
    }

    Ok(image_files)
}
