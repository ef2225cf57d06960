//! Path handling utilities for file discovery and display.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

/// Normalizes a path for display by stripping leading `./` components.
#[must_use]
pub fn normalize_display_path(path: &Path) -> String {
    let display = path.display().to_string();
    match display
        .strip_prefix("./")
        .or_else(|| display.strip_prefix(".\\"))
    {
        Some(stripped) => stripped.to_owned(),
        None => display,
    }
}

/// Checks whether any component of `path` matches one of the excluded
/// folder names.
#[must_use]
pub fn is_excluded(path: &Path, exclude_folders: &[String]) -> bool {
    path.components().any(|component| {
        let name = component.as_os_str().to_string_lossy();
        exclude_folders.iter().any(|excluded| name == *excluded)
    })
}

/// Recursively collects Python files under `root`, skipping excluded
/// folders without descending into them.
///
/// Gitignore handling is deliberately disabled so the formatter sees the
/// same set of files regardless of repository state. Results are sorted
/// for deterministic output order.
#[must_use]
pub fn collect_python_files(root: &Path, exclude_folders: &[String]) -> Vec<PathBuf> {
    let exclude = exclude_folders.to_vec();
    let walker = WalkBuilder::new(root)
        .hidden(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .filter_entry(move |entry| {
            if entry.file_type().is_some_and(|ft| ft.is_dir()) {
                !is_excluded(entry.path(), &exclude)
            } else {
                true
            }
        })
        .build();

    let mut files: Vec<PathBuf> = walker
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
        .map(ignore::DirEntry::into_path)
        .filter(|path| path.extension().is_some_and(|ext| ext == "py"))
        .collect();
    files.sort();
    files
}
