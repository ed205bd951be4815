//! Recursive discovery of daily log files.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Every regular file under `root` whose name ends in `.<extension>`,
/// excluding files named `reserved_name` (generated output such as the
/// archive page). Results are sorted by path.
///
/// Entries that cannot be visited (permission errors, symlink loops) are
/// logged and skipped.
pub fn discover(root: &Path, extension: &str, reserved_name: &str) -> Vec<PathBuf> {
    let suffix = format!(".{extension}");

    WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable directory entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            let name = entry.file_name().to_string_lossy();
            name.ends_with(&suffix) && name != reserved_name
        })
        .map(walkdir::DirEntry::into_path)
        .collect()
}
