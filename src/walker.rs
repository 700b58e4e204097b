//! Recursive directory enumeration with ignore pruning.

use std::path::{Path, PathBuf};

use crate::error::ToolError;
use crate::glob::GlobSet;

/// Walk `start`, returning entry paths relative to it, sorted
/// lexicographically so the output never depends on filesystem enumeration
/// order.
///
/// Entries matching `ignore` are pruned: a matching directory is skipped
/// without being entered, so nothing beneath it can appear in the result.
/// In non-recursive mode subdirectories are recorded with a trailing `/`
/// and not descended into. The caller is responsible for checking that
/// `start` exists and is a directory.
pub async fn walk_dir(
    start: &Path,
    recursive: bool,
    ignore: &GlobSet,
) -> Result<Vec<String>, ToolError> {
    let mut results = Vec::new();
    let mut pending: Vec<PathBuf> = vec![start.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let mut reader = tokio::fs::read_dir(&dir).await?;
        while let Some(entry) = reader.next_entry().await? {
            let path = entry.path();
            let relative = relative_display(&path, start);
            let basename = entry.file_name().to_string_lossy().to_string();

            if ignore.matches(&relative, &basename) {
                continue;
            }

            // Symlinks are recorded as plain entries, never followed.
            let file_type = entry.file_type().await?;
            if file_type.is_dir() {
                if recursive {
                    pending.push(path);
                } else {
                    results.push(format!("{relative}/"));
                }
            } else {
                results.push(relative);
            }
        }
    }

    results.sort();
    Ok(results)
}

fn relative_display(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}
