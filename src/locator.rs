//! Project root discovery — walks upward from a package directory to the
//! nearest ancestor that looks like a project.
//!
//! A directory qualifies as the project root when it contains a
//! [`PROJECT_MANIFEST`] file and its basename is not the dependency
//! container name (`node_modules`). Container directories are skipped
//! outright, even when they happen to contain a manifest of their own.

use std::path::{Path, PathBuf};

use tracing::debug;

/// Directory name that segregates installed third-party packages.
pub const CONTAINER_DIR_NAME: &str = "node_modules";

/// File whose presence marks a candidate directory as the project root.
pub const PROJECT_MANIFEST: &str = "package.json";

/// Find the nearest ancestor of `start_dir` (excluding `start_dir` itself)
/// that contains a project manifest.
///
/// Returns `None` when the ascent reaches the filesystem root without
/// finding one.
pub fn find_project_dir(start_dir: &Path) -> Option<PathBuf> {
    let mut candidate = start_dir.to_path_buf();

    loop {
        candidate = candidate.parent()?.to_path_buf();

        // The container check comes before the manifest check so a
        // node_modules directory is never treated as a project root.
        if candidate
            .file_name()
            .is_some_and(|name| name == CONTAINER_DIR_NAME)
        {
            continue;
        }

        if candidate.join(PROJECT_MANIFEST).is_file() {
            debug!(project_dir = %candidate.display(), "found project root");
            return Some(candidate);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
